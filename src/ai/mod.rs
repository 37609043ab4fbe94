//! Computer opponent.
//!
//! Policies are trait-based so a shell or test can plug in its own:
//! - `RandomPolicy` backs Easy
//! - `GreedyPolicy` backs Hard (one-ply, no search)

pub mod policy;

pub use policy::{choose_computer_move, policy_for, GreedyPolicy, MovePolicy, RandomPolicy};

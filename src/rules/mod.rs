//! Othello rules and turn flow.
//!
//! `GameEngine` owns the game state and is the only place the board is
//! mutated. It exposes the operations a shell needs:
//! - start / reset
//! - legal move queries
//! - move application and turn advance (with the turn-skip rule)
//! - the computer's move choice
//! - score and terminal detection

pub mod engine;

pub use engine::{GameEngine, GameResult, MoveRecord, TurnOutcome};

//! Headless presentation-shell orchestration.
//!
//! A GUI or terminal front end only draws `SessionView` snapshots and
//! forwards two kinds of input:
//! - cell clicks, via `GameSession::click`
//! - timer callbacks for the computer's deferred reply, via
//!   `GameSession::fire` (or `poll` from a frame loop)

pub mod controller;
pub mod view;

pub use controller::{GameSession, ReplyOutcome, ReplyTicket};
pub use view::SessionView;

//! # rust-othello
//!
//! An Othello (Reversi) engine for a human-vs-computer game on the standard
//! 8×8 board. The human plays Black and moves first; the computer plays
//! White at one of two difficulties.
//!
//! ## Design Principles
//!
//! 1. **Headless**: No rendering, no event loop. A presentation shell draws
//!    `SessionView` snapshots and forwards clicks and timer callbacks.
//!
//! 2. **Single Mutation Point**: Only `GameEngine::apply_move` changes the
//!    board. Everything else is a query.
//!
//! 3. **Deterministic When Asked**: Hard is fully deterministic; Easy draws
//!    through a `RandomSource` that can be seeded or scripted.
//!
//! ## Modules
//!
//! - `core`: Board, players, state, configuration, RNG, errors
//! - `rules`: `GameEngine` and the turn flow (including the turn-skip rule)
//! - `ai`: Move policies for the computer opponent
//! - `session`: Deferred computer replies with cancellation on reset

pub mod core;
pub mod rules;
pub mod ai;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Direction, Position, BOARD_SIZE,
    Player, Score,
    Difficulty, EngineConfig,
    GameError,
    GamePhase, GameState,
    GameRng, GameRngState, RandomSource, ScriptedRng,
};

pub use crate::rules::{GameEngine, GameResult, MoveRecord, TurnOutcome};

pub use crate::ai::{choose_computer_move, GreedyPolicy, MovePolicy, RandomPolicy};

pub use crate::session::{GameSession, ReplyOutcome, ReplyTicket, SessionView};

// Python bindings (optional)
#[cfg(feature = "python")]
pub mod python;

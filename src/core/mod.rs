//! Core game types: players, board, state, configuration, RNG, errors.
//!
//! Everything here is plain data plus pure board queries. The turn flow
//! lives in `rules`, move choice in `ai`.

pub mod board;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use board::{Board, Cell, Direction, FlipList, ParseBoardError, Position, BOARD_SIZE, CELL_COUNT};
pub use config::{Difficulty, EngineConfig, ParseDifficultyError};
pub use error::GameError;
pub use player::{Player, Score};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRng};
pub use state::{GamePhase, GameState};

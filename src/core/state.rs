//! Game state: board, mover, and lifecycle phase.
//!
//! ## Lifecycle
//!
//! ```text
//! NotStarted --start--> InProgress --(no moves for either side)--> Ended
//!      ^                     |                                       |
//!      +-------reset---------+------------------reset----------------+
//! ```
//!
//! The state is plain data. `GameEngine` owns it and is the only writer.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::config::Difficulty;
use super::player::{Player, Score};

/// Lifecycle phase of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Board shows the opening layout; waiting for a start.
    #[default]
    NotStarted,
    /// Moves are being played.
    InProgress,
    /// Neither side can move. The board is frozen until reset.
    Ended,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current position.
    pub board: Board,

    /// Player to move. Meaningful while `phase` is `InProgress`.
    pub to_move: Player,

    /// Lifecycle phase.
    pub phase: GamePhase,

    /// Opponent strength for this game.
    pub difficulty: Difficulty,

    /// Set between an applied move and the matching turn advance.
    /// Holds the player who made that move.
    pub pending_advance: Option<Player>,

    /// Moves applied since the game started.
    pub moves_played: u32,
}

impl GameState {
    /// Fresh, not-yet-started state with the opening layout.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            to_move: Player::Black,
            phase: GamePhase::NotStarted,
            difficulty,
            pending_advance: None,
            moves_played: 0,
        }
    }

    /// Whether moves may currently be played.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.phase == GamePhase::InProgress
    }

    /// Whether the game has finished.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    /// Disc counts on the current board.
    #[must_use]
    pub fn score(&self) -> Score {
        self.board.score()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

use super::board::Position;
use super::player::Player;

/// Errors returned by engine and session operations.
///
/// Two groups: rejected moves (see [`GameError::is_invalid_move`]), which a
/// shell ignores silently, and caller contract violations, which indicate a
/// bug in the orchestration and must be surfaced.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("coordinates ({row}, {col}) are off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell {0} is already occupied")]
    Occupied(Position),

    #[error("move at {0} flips nothing")]
    IllegalMove(Position),

    #[error("it is {expected}'s turn, not {got}'s")]
    NotYourTurn { expected: Player, got: Player },

    #[error("no game in progress")]
    GameNotInProgress,

    #[error("previous move has not been followed by a turn advance")]
    MovePending,

    #[error("computer reply is pending")]
    ReplyPending,

    #[error("game already started; reset first")]
    AlreadyStarted,

    #[error("no applied move is waiting for a turn advance")]
    NoPendingMove,

    #[error("computer asked to move on the human's turn")]
    NotComputerTurn,

    #[error("{0} has no legal moves")]
    NoLegalMoves(Player),
}

impl GameError {
    /// True for rejected move attempts, as opposed to contract violations.
    #[must_use]
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            GameError::OutOfBounds { .. }
                | GameError::Occupied(_)
                | GameError::IllegalMove(_)
                | GameError::NotYourTurn { .. }
                | GameError::GameNotInProgress
                | GameError::MovePending
                | GameError::ReplyPending
        )
    }
}

//! Player identification and per-player disc counts.
//!
//! ## Player
//!
//! Two-valued side marker. Black is the human and always opens; White is the
//! computer. `opponent()` is a plain toggle.
//!
//! ## Score
//!
//! Disc counts for both sides, indexable by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::board::Cell;

/// One side of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The human side. Moves first.
    Black,
    /// The computer side.
    White,
}

impl Player {
    /// Both players, Black first.
    pub const ALL: [Player; 2] = [Player::Black, Player::White];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Orientation marker: +1 for Black, -1 for White.
    ///
    /// Negating the marker yields the opponent's marker.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Player::Black => 1,
            Player::White => -1,
        }
    }

    /// The cell state owned by this player.
    #[must_use]
    pub const fn to_cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }

    /// The human plays Black.
    #[must_use]
    pub const fn is_human(self) -> bool {
        matches!(self, Player::Black)
    }

    /// The computer plays White.
    #[must_use]
    pub const fn is_computer(self) -> bool {
        matches!(self, Player::White)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// Disc counts for both players.
///
/// The sum never exceeds 64.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

impl Score {
    /// Create a score from raw counts.
    #[must_use]
    pub const fn new(black: u8, white: u8) -> Self {
        Self { black, white }
    }

    /// Total discs on the board.
    #[must_use]
    pub const fn total(self) -> u8 {
        self.black + self.white
    }

    /// The player with more discs, or `None` on equal counts.
    #[must_use]
    pub fn leader(self) -> Option<Player> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Counts as a `(black, white)` tuple.
    #[must_use]
    pub const fn as_tuple(self) -> (u8, u8) {
        (self.black, self.white)
    }
}

impl Index<Player> for Score {
    type Output = u8;

    fn index(&self, player: Player) -> &Self::Output {
        match player {
            Player::Black => &self.black,
            Player::White => &self.white,
        }
    }
}

impl IndexMut<Player> for Score {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        match player {
            Player::Black => &mut self.black,
            Player::White => &mut self.white,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Black {} - White {}", self.black, self.white)
    }
}

//! The 8×8 board: cells, coordinates, directions, and the flip rule.
//!
//! ## Legality
//!
//! A direction *qualifies* for a placement at `pos` by `player` when the
//! outward scan sees one or more opponent discs immediately followed by a
//! `player` disc, without meeting an empty cell or leaving the board first.
//! A cell is a legal move iff it is empty and at least one direction
//! qualifies.
//!
//! ## Ordering
//!
//! Everything that enumerates is deterministic: positions run row-major and
//! directions run in `Direction::ALL` order. Move choice tie-breaks rely on it.
//!
//! ## Text format
//!
//! `Board` implements `Display` and `FromStr` with eight lines of eight
//! characters: `B` Black, `W` White, `.` empty. Whitespace inside a line is
//! ignored, so boards can be written with spacing in tests.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::player::{Player, Score};

/// Board edge length.
pub const BOARD_SIZE: usize = 8;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Flipped positions for a single move.
///
/// Most moves flip fewer than 8 discs, so this avoids heap allocation.
pub type FlipList = SmallVec<[Position; 8]>;

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// The player owning this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    /// Signed encoding: +1 Black, -1 White, 0 empty.
    #[must_use]
    pub const fn to_i8(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => -1,
        }
    }

    const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }
}

/// A board coordinate. Both components are in `0..8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Create a position from in-range coordinates.
    ///
    /// Panics if either coordinate is outside `0..8`; use [`Position::try_new`]
    /// for untrusted input.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(
            (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE,
            "Position out of range"
        );
        Self { row, col }
    }

    /// Create a position, returning `None` when out of range.
    #[must_use]
    pub fn try_new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Row-major index in `0..64`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Inverse of [`Position::index`].
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::try_new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    /// The neighbouring position in `dir`, or `None` off the board.
    #[must_use]
    pub fn step(self, dir: Direction) -> Option<Self> {
        let row = self.row as i16 + dir.dr as i16;
        let col = self.col as i16 + dir.dc as i16;
        if row < 0 || col < 0 {
            return None;
        }
        Self::try_new(row as usize, col as usize)
    }

    /// All 64 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(|i| Position {
            row: (i / BOARD_SIZE) as u8,
            col: (i % BOARD_SIZE) as u8,
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the eight scan directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dr: i8,
    pub dc: i8,
}

impl Direction {
    pub const NORTH_WEST: Direction = Direction { dr: -1, dc: -1 };
    pub const NORTH: Direction = Direction { dr: -1, dc: 0 };
    pub const NORTH_EAST: Direction = Direction { dr: -1, dc: 1 };
    pub const WEST: Direction = Direction { dr: 0, dc: -1 };
    pub const EAST: Direction = Direction { dr: 0, dc: 1 };
    pub const SOUTH_WEST: Direction = Direction { dr: 1, dc: -1 };
    pub const SOUTH: Direction = Direction { dr: 1, dc: 0 };
    pub const SOUTH_EAST: Direction = Direction { dr: 1, dc: 1 };

    /// Canonical scan order.
    pub const ALL: [Direction; 8] = [
        Self::NORTH_WEST,
        Self::NORTH,
        Self::NORTH_EAST,
        Self::WEST,
        Self::EAST,
        Self::SOUTH_WEST,
        Self::SOUTH,
        Self::SOUTH_EAST,
    ];
}

/// Error from parsing the text board format.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),

    #[error("row {row}: expected 8 cells, found {found}")]
    RowLength { row: usize, found: usize },

    #[error("row {row}: unexpected character {ch:?}")]
    BadChar { row: usize, ch: char },
}

/// 8×8 grid of cells.
///
/// Cell mutation is crate-private: outside code changes a board only by
/// playing legal moves through the engine.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// The standard opening layout: White on (3,3) and (4,4), Black on
    /// (3,4) and (4,3).
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.cells[3][3] = Cell::White;
        board.cells[3][4] = Cell::Black;
        board.cells[4][3] = Cell::Black;
        board.cells[4][4] = Cell::White;
        board
    }

    /// A board with no discs.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Cell at `pos`.
    #[must_use]
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row as usize][pos.col as usize] = cell;
    }

    /// Copy of the raw grid, indexed `[row][col]`.
    #[must_use]
    pub fn rows(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        self.cells
    }

    /// Iterate `(position, cell)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::all().map(move |pos| (pos, self.get(pos)))
    }

    /// Number of opponent discs `player` would capture in `dir` from `pos`.
    ///
    /// Returns `None` when the direction does not qualify: the run is empty,
    /// interrupted by an empty cell, or runs off the board before an own disc.
    /// Does not check that `pos` itself is empty.
    #[must_use]
    pub fn run_length(&self, pos: Position, player: Player, dir: Direction) -> Option<usize> {
        let own = player.to_cell();
        let theirs = player.opponent().to_cell();

        let mut run = 0;
        let mut cursor = pos.step(dir);

        while let Some(p) = cursor {
            match self.get(p) {
                c if c == theirs => run += 1,
                c if c == own => return (run > 0).then_some(run),
                _ => return None,
            }
            cursor = p.step(dir);
        }

        None
    }

    /// Check whether `player` may place a disc at `pos`.
    #[must_use]
    pub fn is_legal(&self, pos: Position, player: Player) -> bool {
        self.get(pos) == Cell::Empty
            && Direction::ALL
                .iter()
                .any(|&dir| self.run_length(pos, player, dir).is_some())
    }

    /// All legal moves for `player` in row-major order.
    #[must_use]
    pub fn legal_moves(&self, player: Player) -> Vec<Position> {
        Position::all()
            .filter(|&pos| self.is_legal(pos, player))
            .collect()
    }

    /// Whether `player` has at least one legal move.
    #[must_use]
    pub fn has_legal_move(&self, player: Player) -> bool {
        Position::all().any(|pos| self.is_legal(pos, player))
    }

    /// Discs a placement at `pos` would flip, in direction order.
    ///
    /// Empty when `pos` is occupied or the move is illegal. Does not mutate.
    #[must_use]
    pub fn flips(&self, pos: Position, player: Player) -> FlipList {
        let mut out = FlipList::new();
        if self.get(pos) != Cell::Empty {
            return out;
        }

        for dir in Direction::ALL {
            if let Some(run) = self.run_length(pos, player, dir) {
                let mut cursor = pos;
                for _ in 0..run {
                    // run_length walked these cells already
                    cursor = match cursor.step(dir) {
                        Some(next) => next,
                        None => break,
                    };
                    out.push(cursor);
                }
            }
        }

        out
    }

    /// Number of discs a placement at `pos` would flip. Zero when illegal.
    #[must_use]
    pub fn flip_count(&self, pos: Position, player: Player) -> usize {
        if self.get(pos) != Cell::Empty {
            return 0;
        }
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.run_length(pos, player, dir))
            .sum()
    }

    /// Place `player`'s disc at `pos` and flip every qualifying run.
    ///
    /// Callers must have checked legality. Flips set cells to the owner, so a
    /// cell reachable from two directions is flipped once.
    pub(crate) fn place(&mut self, pos: Position, player: Player) -> FlipList {
        let flipped = self.flips(pos, player);
        let own = player.to_cell();

        self.set(pos, own);
        for &p in &flipped {
            self.set(p, own);
        }

        flipped
    }

    /// Number of cells in the given state.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == cell)
            .count()
    }

    /// Disc counts for both players.
    #[must_use]
    pub fn score(&self) -> Score {
        Score::new(self.count(Cell::Black) as u8, self.count(Cell::White) as u8)
    }

    /// True iff neither player can move.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !self.has_legal_move(Player::Black) && !self.has_legal_move(Player::White)
    }

    /// Signed grid: +1 Black, -1 White, 0 empty.
    #[must_use]
    pub fn to_signed(&self) -> [[i8; BOARD_SIZE]; BOARD_SIZE] {
        self.cells.map(|row| row.map(Cell::to_i8))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board {{")?;
        writeln!(f, "{}", self)?;
        write!(f, "}}")
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.len() != BOARD_SIZE {
            return Err(ParseBoardError::RowCount(lines.len()));
        }

        let mut board = Board::empty();
        for (row, line) in lines.iter().enumerate() {
            let chars: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if chars.len() != BOARD_SIZE {
                return Err(ParseBoardError::RowLength {
                    row,
                    found: chars.len(),
                });
            }
            for (col, ch) in chars.into_iter().enumerate() {
                board.cells[row][col] = match ch {
                    '.' => Cell::Empty,
                    'B' | 'X' => Cell::Black,
                    'W' | 'O' => Cell::White,
                    _ => return Err(ParseBoardError::BadChar { row, ch }),
                };
            }
        }

        Ok(board)
    }
}

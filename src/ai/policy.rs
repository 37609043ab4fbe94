//! Move-choice policies for the computer opponent.
//!
//! - `RandomPolicy`: uniform pick (Easy)
//! - `GreedyPolicy`: most discs flipped right now, one ply (Hard)
//!
//! Policies receive the candidate list already enumerated by the caller, in
//! row-major order. Handing a policy an empty list is a caller bug and
//! panics.

use log::trace;

use crate::core::{Board, Difficulty, Player, Position, RandomSource};

// =============================================================================
// Policy trait
// =============================================================================

/// Strategy for picking one move among the legal candidates.
pub trait MovePolicy: Send + Sync {
    /// Choose a move for `player` from `candidates`.
    ///
    /// `candidates` must be non-empty and legal for `player` on `board`.
    fn choose(
        &self,
        board: &Board,
        player: Player,
        candidates: &[Position],
        rng: &mut dyn RandomSource,
    ) -> Position;

    /// Display name.
    fn name(&self) -> &'static str;
}

/// Uniform random policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose(
        &self,
        _board: &Board,
        _player: Player,
        candidates: &[Position],
        rng: &mut dyn RandomSource,
    ) -> Position {
        assert!(!candidates.is_empty(), "No legal moves to choose from");
        candidates[rng.next_index(candidates.len())]
    }

    fn name(&self) -> &'static str {
        "Random"
    }
}

/// One-ply greedy policy.
///
/// Scores each candidate by the discs it would flip and keeps the first
/// strict maximum, so ties go to the earliest candidate. Never draws from
/// the RNG and never looks at the opponent's reply.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    /// Best candidate and its flip count.
    #[must_use]
    pub fn evaluate(board: &Board, player: Player, candidates: &[Position]) -> (Position, usize) {
        assert!(!candidates.is_empty(), "No legal moves to choose from");

        let mut best = candidates[0];
        let mut best_flips = 0;

        for &pos in candidates {
            let flips = board.flip_count(pos, player);
            trace!("greedy candidate {} flips {}", pos, flips);
            if flips > best_flips {
                best = pos;
                best_flips = flips;
            }
        }

        (best, best_flips)
    }
}

impl MovePolicy for GreedyPolicy {
    fn choose(
        &self,
        board: &Board,
        player: Player,
        candidates: &[Position],
        _rng: &mut dyn RandomSource,
    ) -> Position {
        Self::evaluate(board, player, candidates).0
    }

    fn name(&self) -> &'static str {
        "Greedy"
    }
}

// =============================================================================
// Difficulty dispatch
// =============================================================================

/// The policy implementing a difficulty level.
#[must_use]
pub fn policy_for(difficulty: Difficulty) -> &'static dyn MovePolicy {
    match difficulty {
        Difficulty::Easy => &RandomPolicy,
        Difficulty::Hard => &GreedyPolicy,
    }
}

/// Pick the computer's move at the given difficulty.
///
/// Panics if `candidates` is empty: callers must check for a legal move
/// before asking for one.
pub fn choose_computer_move(
    board: &Board,
    player: Player,
    candidates: &[Position],
    difficulty: Difficulty,
    rng: &mut dyn RandomSource,
) -> Position {
    policy_for(difficulty).choose(board, player, candidates, rng)
}

//! Session bindings for Python.

use std::time::Instant;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Difficulty, EngineConfig, GamePhase, Player};
use crate::rules::GameResult;
use crate::session::{GameSession, ReplyOutcome};

use super::py_core::{player_name, to_py_err, PyMoveRecord};

fn parse_difficulty(name: &str) -> PyResult<Difficulty> {
    name.parse::<Difficulty>()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Python wrapper for a human-vs-computer session.
///
/// Invalid clicks return `None` rather than raising, matching how a board
/// widget ignores clicks on illegal cells. Contract violations raise
/// `ValueError`. All state accessors are methods: `session.phase()`,
/// `session.to_move()`, `session.score()`.
#[pyclass(name = "OthelloSession")]
pub struct PyOthelloSession {
    session: GameSession,
}

#[pymethods]
impl PyOthelloSession {
    /// Create a new session.
    ///
    /// # Arguments
    /// - difficulty: "easy" or "hard"
    /// - seed: RNG seed for reproducible easy games (None for entropy)
    /// - reply_delay_ms: delay before the computer replies
    #[new]
    #[pyo3(signature = (difficulty = "easy", seed = None, reply_delay_ms = 300))]
    fn new(difficulty: &str, seed: Option<u64>, reply_delay_ms: u64) -> PyResult<Self> {
        let difficulty = parse_difficulty(difficulty)?;
        let config = EngineConfig {
            difficulty,
            seed,
            reply_delay_ms,
        };
        Ok(Self {
            session: GameSession::new(config),
        })
    }

    /// Start a game. Uses the constructor's difficulty when none is given.
    #[pyo3(signature = (difficulty = None))]
    fn start(&mut self, difficulty: Option<&str>) -> PyResult<()> {
        let difficulty = match difficulty {
            Some(name) => parse_difficulty(name)?,
            None => self.session.engine().config().difficulty,
        };
        self.session.start(difficulty).map_err(to_py_err)
    }

    /// Reset to the start screen, cancelling any pending computer reply.
    fn reset(&mut self) {
        self.session.reset();
    }

    /// Human move. Returns the move record, or None if the click was inert.
    fn click(&mut self, row: usize, col: usize) -> PyResult<Option<PyMoveRecord>> {
        match self.session.click_at(row, col, Instant::now()) {
            Ok((record, _)) => Ok(Some(PyMoveRecord(record))),
            Err(err) if err.is_invalid_move() => Ok(None),
            Err(err) => Err(to_py_err(err)),
        }
    }

    /// Play the computer's reply if it is due. Returns its move record.
    fn poll(&mut self) -> PyResult<Option<PyMoveRecord>> {
        match self.session.poll(Instant::now()).map_err(to_py_err)? {
            Some(ReplyOutcome::Played { record, .. }) => Ok(Some(PyMoveRecord(record))),
            _ => Ok(None),
        }
    }

    /// Milliseconds until the pending computer reply, or None.
    fn reply_due_in_ms(&self) -> Option<u64> {
        self.session
            .pending_reply()
            .map(|ticket| ticket.remaining(Instant::now()).as_millis() as u64)
    }

    /// Legal moves for the human, empty unless it is their turn.
    fn legal_moves(&self) -> Vec<(usize, usize)> {
        self.session
            .view()
            .hints
            .into_iter()
            .map(|p| (p.row as usize, p.col as usize))
            .collect()
    }

    /// Board rows: 1 Black, -1 White, 0 empty.
    fn board(&self) -> Vec<Vec<i8>> {
        self.session
            .engine()
            .board()
            .to_signed()
            .iter()
            .map(|row| row.to_vec())
            .collect()
    }

    /// (black, white) disc counts.
    fn score(&self) -> (u8, u8) {
        self.session.engine().score().as_tuple()
    }

    /// "black" or "white" while a game runs, else None.
    fn to_move(&self) -> Option<&'static str> {
        self.session.view().to_move.map(player_name)
    }

    /// "not_started", "in_progress" or "ended".
    fn phase(&self) -> &'static str {
        match self.session.phase() {
            GamePhase::NotStarted => "not_started",
            GamePhase::InProgress => "in_progress",
            GamePhase::Ended => "ended",
        }
    }

    /// "black", "white" or "draw" once the game is over.
    fn result(&self) -> Option<&'static str> {
        self.session.engine().outcome().map(|result| match result {
            GameResult::Winner(Player::Black) => "black",
            GameResult::Winner(Player::White) => "white",
            GameResult::Draw => "draw",
        })
    }

    /// Turn indicator / game-over message.
    fn status(&self) -> &'static str {
        self.session.view().status_text()
    }

    fn __repr__(&self) -> String {
        let score = self.session.engine().score();
        format!(
            "OthelloSession(phase={}, difficulty={}, score={})",
            self.phase(),
            self.session.engine().difficulty(),
            score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    #[test]
    fn test_state_accessors_track_a_game() {
        let mut session = PyOthelloSession::new("hard", Some(3), 0).unwrap();
        assert_eq!(session.phase(), "not_started");
        assert_eq!(session.to_move(), None);
        assert_eq!(session.result(), None);

        session.start(None).unwrap();
        assert_eq!(session.phase(), "in_progress");
        assert_eq!(session.to_move(), Some("black"));
        assert_eq!(session.score(), (2, 2));
        assert_eq!(session.legal_moves(), vec![(2, 3), (3, 2), (4, 5), (5, 4)]);

        assert!(session.click(0, 0).unwrap().is_none());
        let record = session.click(2, 3).unwrap().unwrap();
        assert_eq!(record.0.flipped.as_slice(), &[Position::new(3, 3)]);
        assert_eq!(session.to_move(), Some("white"));
        assert_eq!(session.board()[3][3], 1);

        assert!(session.poll().unwrap().is_some());
        assert_eq!(session.to_move(), Some("black"));
        assert_eq!(session.status(), "Your turn");
    }
}

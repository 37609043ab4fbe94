//! Render snapshot for a presentation shell.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Difficulty, GamePhase, Player, Position, RandomSource, Score, BOARD_SIZE};
use crate::rules::{GameEngine, GameResult};

/// Everything a shell needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    /// Board cells, `[row][col]`.
    pub cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    /// Cells to highlight as legal for the human. Empty unless the human
    /// can click right now.
    pub hints: Vec<Position>,
    pub score: Score,
    /// Whose turn it is, while a game is running.
    pub to_move: Option<Player>,
    pub phase: GamePhase,
    pub difficulty: Difficulty,
    /// Final result once the game has ended.
    pub result: Option<GameResult>,
    /// A computer reply is scheduled but has not fired yet.
    pub reply_pending: bool,
}

impl SessionView {
    pub(crate) fn capture<R: RandomSource>(engine: &GameEngine<R>, reply_pending: bool) -> Self {
        let state = engine.state();
        let running = state.is_in_progress();
        let human_can_click = running
            && state.to_move.is_human()
            && state.pending_advance.is_none()
            && !reply_pending;

        Self {
            cells: state.board.rows(),
            hints: if human_can_click {
                engine.legal_moves(Player::Black)
            } else {
                Vec::new()
            },
            score: engine.score(),
            to_move: running.then_some(state.to_move),
            phase: state.phase,
            difficulty: state.difficulty,
            result: engine.outcome(),
            reply_pending,
        }
    }

    /// Whether `pos` should be drawn as a clickable hint.
    #[must_use]
    pub fn is_hint(&self, pos: Position) -> bool {
        self.hints.contains(&pos)
    }

    /// One-line status for the turn indicator or the game-over screen.
    #[must_use]
    pub fn status_text(&self) -> &'static str {
        match (self.phase, self.result, self.to_move) {
            (GamePhase::NotStarted, _, _) => "Choose a difficulty to start",
            (GamePhase::Ended, Some(GameResult::Winner(Player::Black)), _) => "You win!",
            (GamePhase::Ended, Some(GameResult::Winner(Player::White)), _) => "Computer wins!",
            (GamePhase::Ended, _, _) => "Draw!",
            (GamePhase::InProgress, _, Some(Player::Black)) => "Your turn",
            (GamePhase::InProgress, _, _) => "Computer's turn",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, EngineConfig, ScriptedRng};

    fn engine() -> GameEngine<ScriptedRng> {
        GameEngine::with_rng(EngineConfig::default(), ScriptedRng::new(vec![0]))
    }

    #[test]
    fn test_not_started_view() {
        let view = SessionView::capture(&engine(), false);

        assert_eq!(view.phase, GamePhase::NotStarted);
        assert!(view.hints.is_empty());
        assert_eq!(view.to_move, None);
        assert_eq!(view.score, Score::new(2, 2));
        assert_eq!(view.cells, Board::new().rows());
        assert_eq!(view.status_text(), "Choose a difficulty to start");
    }

    #[test]
    fn test_hints_on_human_turn() {
        let mut e = engine();
        e.start_game(Difficulty::Easy).unwrap();

        let view = SessionView::capture(&e, false);
        assert_eq!(view.hints.len(), 4);
        assert!(view.is_hint(Position::new(2, 3)));
        assert!(!view.is_hint(Position::new(0, 0)));
        assert_eq!(view.status_text(), "Your turn");

        // hints vanish while a reply is pending
        let pending = SessionView::capture(&e, true);
        assert!(pending.hints.is_empty());
    }

    #[test]
    fn test_computer_turn_view() {
        let mut e = engine();
        e.start_game(Difficulty::Hard).unwrap();
        e.play(Position::new(2, 3)).unwrap();

        let view = SessionView::capture(&e, true);
        assert_eq!(view.to_move, Some(Player::White));
        assert!(view.hints.is_empty());
        assert!(view.reply_pending);
        assert_eq!(view.status_text(), "Computer's turn");
    }

    #[test]
    fn test_view_serialization() {
        let view = SessionView::capture(&engine(), false);
        let json = serde_json::to_string(&view).unwrap();
        let deserialized: SessionView = serde_json::from_str(&json).unwrap();
        assert_eq!(view, deserialized);
    }
}

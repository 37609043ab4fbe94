//! Turn orchestration between a human, the computer, and a UI timer.
//!
//! The computer's reply is deferred by a fixed delay so the human sees their
//! own move land first. Deferral is cooperative: the session hands out a
//! [`ReplyTicket`] and the shell arms whatever timer it has, then calls
//! [`GameSession::fire`] with the ticket when it goes off. Nothing here
//! blocks or sleeps.
//!
//! Every reset or restart bumps a generation counter. A ticket from an older
//! generation is discarded on arrival, so a timer that fires after the board
//! was reinitialised never plays onto it.

use std::time::{Duration, Instant};

use log::debug;

use super::view::SessionView;
use crate::core::{
    Difficulty, EngineConfig, GameError, GamePhase, GameRng, Player, Position, RandomSource,
};
use crate::rules::{GameEngine, MoveRecord, TurnOutcome};

/// Handle for a scheduled computer reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplyTicket {
    /// Session generation the reply belongs to.
    pub generation: u64,
    /// Per-session sequence number of the scheduled reply.
    pub seq: u64,
    /// Earliest instant the reply may be played.
    pub due: Instant,
}

impl ReplyTicket {
    /// Time left until the reply is due, zero if already due.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.due.saturating_duration_since(now)
    }
}

/// Result of firing a reply ticket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// Ticket is stale (reset, restart, or already fired). Nothing happened.
    Discarded,
    /// Ticket is current but its due instant has not been reached.
    NotDue(Duration),
    /// The computer moved.
    Played {
        record: MoveRecord,
        turn: TurnOutcome,
    },
}

/// Human-vs-computer game session.
///
/// Black is the human and moves through [`click`](Self::click); White is
/// the computer and moves when its ticket fires.
#[derive(Debug)]
pub struct GameSession<R = GameRng> {
    engine: GameEngine<R>,
    reply_delay: Duration,
    generation: u64,
    next_seq: u64,
    pending: Option<ReplyTicket>,
}

impl GameSession<GameRng> {
    /// Create a session from configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_engine(GameEngine::new(config))
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Wrap an existing engine. The reply delay comes from its config.
    #[must_use]
    pub fn with_engine(engine: GameEngine<R>) -> Self {
        let reply_delay = engine.config().reply_delay();
        Self {
            engine,
            reply_delay,
            generation: 0,
            next_seq: 0,
            pending: None,
        }
    }

    /// The underlying engine.
    #[must_use]
    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    /// Current generation. Changes on every reset.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Lifecycle phase of the current game.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.engine.phase()
    }

    /// Delay applied before each computer reply.
    #[must_use]
    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    /// The reply the shell should arm a timer for, if any.
    #[must_use]
    pub fn pending_reply(&self) -> Option<ReplyTicket> {
        self.pending
    }

    /// Start a game from the start screen.
    pub fn start(&mut self, difficulty: Difficulty) -> Result<(), GameError> {
        self.engine.start_game(difficulty)
    }

    /// Discard the current game, cancelling any scheduled reply.
    pub fn reset(&mut self) {
        self.generation += 1;
        if let Some(ticket) = self.pending.take() {
            debug!("cancelled computer reply #{}", ticket.seq);
        }
        self.engine.reset_game();
    }

    /// Reset and immediately start a new game ("play again").
    pub fn restart(&mut self, difficulty: Difficulty) -> Result<(), GameError> {
        self.reset();
        self.start(difficulty)
    }

    /// Human clicks a cell.
    ///
    /// Rejected without side effects when no game is running, while the
    /// computer is to move or has a reply pending, or when the cell is not a
    /// legal move. A shell treats these errors as an inert click.
    pub fn click(
        &mut self,
        pos: Position,
        now: Instant,
    ) -> Result<(MoveRecord, TurnOutcome), GameError> {
        if !self.engine.state().is_in_progress() {
            return Err(GameError::GameNotInProgress);
        }
        if self.pending.is_some() {
            return Err(GameError::ReplyPending);
        }
        let mover = self.engine.to_move();
        if !mover.is_human() {
            return Err(GameError::NotYourTurn {
                expected: mover,
                got: Player::Black,
            });
        }

        let (record, turn) = self.engine.play(pos)?;
        self.schedule_reply(now);
        Ok((record, turn))
    }

    /// Human clicks a cell given raw coordinates.
    pub fn click_at(
        &mut self,
        row: usize,
        col: usize,
        now: Instant,
    ) -> Result<(MoveRecord, TurnOutcome), GameError> {
        let pos = Position::try_new(row, col).ok_or(GameError::OutOfBounds { row, col })?;
        self.click(pos, now)
    }

    /// Timer callback for a scheduled reply.
    pub fn fire(&mut self, ticket: ReplyTicket, now: Instant) -> Result<ReplyOutcome, GameError> {
        if ticket.generation != self.generation || self.pending != Some(ticket) {
            debug!(
                "discarded stale computer reply #{} (generation {}, current {})",
                ticket.seq, ticket.generation, self.generation
            );
            return Ok(ReplyOutcome::Discarded);
        }
        if now < ticket.due {
            return Ok(ReplyOutcome::NotDue(ticket.remaining(now)));
        }

        self.pending = None;
        let (record, turn) = self.engine.play_computer_turn()?;
        debug!("computer reply #{} played {}", ticket.seq, record.position);
        self.schedule_reply(now);
        Ok(ReplyOutcome::Played { record, turn })
    }

    /// Fire the pending reply if it is due. For loop-driven shells.
    ///
    /// Also schedules a reply when the computer is to move and none is
    /// pending, as with an engine wrapped mid-game.
    pub fn poll(&mut self, now: Instant) -> Result<Option<ReplyOutcome>, GameError> {
        match self.pending {
            Some(ticket) if now >= ticket.due => self.fire(ticket, now).map(Some),
            Some(_) => Ok(None),
            None => {
                self.schedule_reply(now);
                Ok(None)
            }
        }
    }

    /// Render snapshot.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView::capture(&self.engine, self.pending.is_some())
    }

    fn schedule_reply(&mut self, now: Instant) {
        let state = self.engine.state();
        if !state.is_in_progress()
            || !state.to_move.is_computer()
            || state.pending_advance.is_some()
            || self.pending.is_some()
        {
            return;
        }

        let ticket = ReplyTicket {
            generation: self.generation,
            seq: self.next_seq,
            due: now + self.reply_delay,
        };
        self.next_seq += 1;
        self.pending = Some(ticket);
        debug!(
            "scheduled computer reply #{} in {:?}",
            ticket.seq, self.reply_delay
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, ScriptedRng};

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    fn session() -> GameSession<ScriptedRng> {
        let engine = GameEngine::with_rng(EngineConfig::default(), ScriptedRng::new(vec![0]));
        GameSession::with_engine(engine)
    }

    #[test]
    fn test_click_schedules_reply() {
        let mut s = session();
        s.start(Difficulty::Hard).unwrap();
        let t0 = Instant::now();

        let (_, turn) = s.click(pos(2, 3), t0).unwrap();
        assert_eq!(turn, TurnOutcome::SwitchedPlayer(Player::White));

        let ticket = s.pending_reply().unwrap();
        assert_eq!(ticket.due, t0 + Duration::from_millis(300));
        assert_eq!(ticket.generation, 0);
    }

    #[test]
    fn test_click_before_start_is_inert() {
        let mut s = session();
        assert_eq!(
            s.click(pos(2, 3), Instant::now()),
            Err(GameError::GameNotInProgress)
        );
        assert_eq!(s.engine().board(), &Board::new());
    }

    #[test]
    fn test_fire_not_due() {
        let mut s = session();
        s.start(Difficulty::Hard).unwrap();
        let t0 = Instant::now();
        s.click(pos(2, 3), t0).unwrap();

        let ticket = s.pending_reply().unwrap();
        let early = t0 + Duration::from_millis(100);
        assert_eq!(
            s.fire(ticket, early).unwrap(),
            ReplyOutcome::NotDue(Duration::from_millis(200))
        );
        assert_eq!(s.pending_reply(), Some(ticket));
    }

    #[test]
    fn test_fire_plays_computer_move() {
        let mut s = session();
        s.start(Difficulty::Hard).unwrap();
        let t0 = Instant::now();
        s.click(pos(2, 3), t0).unwrap();

        let ticket = s.pending_reply().unwrap();
        let outcome = s.fire(ticket, ticket.due).unwrap();

        match outcome {
            ReplyOutcome::Played { record, turn } => {
                assert_eq!(record.player, Player::White);
                assert_eq!(record.position, pos(2, 2));
                assert_eq!(turn, TurnOutcome::SwitchedPlayer(Player::Black));
            }
            other => panic!("expected a played reply, got {:?}", other),
        }
        assert_eq!(s.pending_reply(), None);

        // the same ticket cannot fire twice
        assert_eq!(s.fire(ticket, ticket.due).unwrap(), ReplyOutcome::Discarded);
    }

    #[test]
    fn test_reset_discards_pending_reply() {
        let mut s = session();
        s.start(Difficulty::Hard).unwrap();
        let t0 = Instant::now();
        s.click(pos(2, 3), t0).unwrap();
        let ticket = s.pending_reply().unwrap();

        s.restart(Difficulty::Hard).unwrap();
        assert_eq!(s.generation(), 1);
        assert_eq!(s.pending_reply(), None);

        let late = t0 + Duration::from_secs(5);
        assert_eq!(s.fire(ticket, late).unwrap(), ReplyOutcome::Discarded);
        assert_eq!(s.engine().board(), &Board::new());
        assert_eq!(s.engine().to_move(), Player::Black);
    }

    #[test]
    fn test_poll_schedules_reply_for_wrapped_engine() {
        let engine = GameEngine::from_position(
            Board::new(),
            Player::White,
            Difficulty::Hard,
            ScriptedRng::new(vec![0]),
        );
        let mut s = GameSession::with_engine(engine);
        assert_eq!(s.pending_reply(), None);

        let t0 = Instant::now();
        assert_eq!(s.poll(t0).unwrap(), None);
        let ticket = s.pending_reply().unwrap();
        assert_eq!(ticket.due, t0 + Duration::from_millis(300));

        let played = s.poll(ticket.due).unwrap();
        assert!(matches!(played, Some(ReplyOutcome::Played { .. })));
        assert_eq!(s.engine().to_move(), Player::Black);
        let hint = s.view().hints[0];
        assert!(s.click(hint, ticket.due).is_ok());
    }

    #[test]
    fn test_poll_waits_for_due() {
        let mut s = session();
        s.start(Difficulty::Easy).unwrap();
        let t0 = Instant::now();
        s.click(pos(5, 4), t0).unwrap();

        assert_eq!(s.poll(t0).unwrap(), None);
        let played = s.poll(t0 + Duration::from_millis(300)).unwrap();
        assert!(matches!(played, Some(ReplyOutcome::Played { .. })));
        assert_eq!(s.poll(t0 + Duration::from_secs(1)).unwrap(), None);
    }
}

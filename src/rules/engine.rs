//! The game engine: owns the state and enforces the turn flow.
//!
//! A turn is two calls:
//! 1. `apply_move` places a disc and flips (the only board mutation)
//! 2. `advance_turn` passes the turn, applies the turn-skip rule, or ends
//!    the game
//!
//! `play` and `play_computer_turn` bundle both steps for callers that do not
//! need to render between them.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::ai;
use crate::core::{
    Board, Cell, Difficulty, EngineConfig, FlipList, GameError, GamePhase, GameRng, GameState,
    Player, Position, RandomSource, Score,
};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// More discs than the opponent.
    Winner(Player),
    /// Equal disc counts.
    Draw,
}

impl GameResult {
    /// Decide the result from final disc counts.
    #[must_use]
    pub fn from_score(score: Score) -> Self {
        score.leader().map_or(GameResult::Draw, GameResult::Winner)
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{} wins", p),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}

/// What `advance_turn` decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Opponent cannot move; the same player moves again.
    ContinueSamePlayer(Player),
    /// Turn passed to the opponent.
    SwitchedPlayer(Player),
    /// Neither side can move.
    GameEnded(GameResult),
}

impl TurnOutcome {
    /// The player to move next, if the game continues.
    #[must_use]
    pub fn next_player(&self) -> Option<Player> {
        match *self {
            TurnOutcome::ContinueSamePlayer(p) | TurnOutcome::SwitchedPlayer(p) => Some(p),
            TurnOutcome::GameEnded(_) => None,
        }
    }
}

/// A move that was applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who moved.
    pub player: Player,
    /// Where the disc was placed.
    pub position: Position,
    /// Discs turned over, in direction order.
    pub flipped: FlipList,
}

/// Othello game engine.
///
/// Generic over the random source so tests can script the Easy opponent.
/// One engine runs one game at a time; `reset_game` replaces the state.
#[derive(Clone, Debug)]
pub struct GameEngine<R = GameRng> {
    config: EngineConfig,
    state: GameState,
    rng: R,
}

impl GameEngine<GameRng> {
    /// Create an engine seeded from `config.seed` (entropy if unset).
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let rng = GameRng::from_seed_opt(config.seed);
        Self::with_rng(config, rng)
    }
}

impl Default for GameEngine<GameRng> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Create an engine with an explicit random source.
    #[must_use]
    pub fn with_rng(config: EngineConfig, rng: R) -> Self {
        let state = GameState::new(config.difficulty);
        Self { config, state, rng }
    }

    /// Create an in-progress engine from an arbitrary position.
    ///
    /// For analysis and tests. The turn-skip rule is applied up front: if
    /// `to_move` cannot move but the opponent can, the opponent moves; if
    /// neither can, the game starts out `Ended`.
    #[must_use]
    pub fn from_position(board: Board, to_move: Player, difficulty: Difficulty, rng: R) -> Self {
        let config = EngineConfig::default().with_difficulty(difficulty);
        let mut engine = Self::with_rng(config, rng);
        engine.state.board = board;
        engine.state.to_move = to_move;
        engine.state.phase = GamePhase::InProgress;

        if !board.has_legal_move(to_move) {
            if board.has_legal_move(to_move.opponent()) {
                engine.state.to_move = to_move.opponent();
            } else {
                engine.state.phase = GamePhase::Ended;
            }
        }

        engine
    }

    // === Accessors ===

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Full game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Player to move.
    #[must_use]
    pub fn to_move(&self) -> Player {
        self.state.to_move
    }

    /// Difficulty of the current (or next) game.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.state.difficulty
    }

    /// Whether a move awaits `advance_turn`.
    #[must_use]
    pub fn has_pending_advance(&self) -> bool {
        self.state.pending_advance.is_some()
    }

    /// The random source.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    // === Lifecycle ===

    /// Start a game: opening layout, Black to move.
    pub fn start_game(&mut self, difficulty: Difficulty) -> Result<(), GameError> {
        if self.state.phase != GamePhase::NotStarted {
            return Err(GameError::AlreadyStarted);
        }

        self.state = GameState::new(difficulty);
        self.state.phase = GamePhase::InProgress;
        info!("game started at {} difficulty", difficulty);
        Ok(())
    }

    /// Discard the current game and return to `NotStarted`.
    ///
    /// Keeps the difficulty of the discarded game as the menu default.
    pub fn reset_game(&mut self) {
        let difficulty = self.state.difficulty;
        info!(
            "game reset after {} moves ({})",
            self.state.moves_played,
            self.state.score()
        );
        self.state = GameState::new(difficulty);
    }

    // === Queries ===

    /// Legal moves for `player`, row-major.
    #[must_use]
    pub fn legal_moves(&self, player: Player) -> Vec<Position> {
        self.state.board.legal_moves(player)
    }

    /// Disc counts.
    #[must_use]
    pub fn score(&self) -> Score {
        self.state.board.score()
    }

    /// True iff neither player has a legal move.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state.board.is_terminal()
    }

    /// Final result, once the game has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        self.state
            .is_ended()
            .then(|| GameResult::from_score(self.score()))
    }

    // === Moves ===

    /// Apply a move for the player to move.
    pub fn apply_move(&mut self, pos: Position) -> Result<MoveRecord, GameError> {
        self.apply_move_as(self.state.to_move, pos)
    }

    /// Apply a move given raw coordinates, rejecting off-board input.
    pub fn apply_move_at(&mut self, row: usize, col: usize) -> Result<MoveRecord, GameError> {
        let pos = Position::try_new(row, col).ok_or(GameError::OutOfBounds { row, col })?;
        self.apply_move(pos)
    }

    /// Apply a move on behalf of `player`.
    ///
    /// Leaves everything untouched on error.
    pub fn apply_move_as(&mut self, player: Player, pos: Position) -> Result<MoveRecord, GameError> {
        self.validate_move(player, pos)?;

        let flipped = self.state.board.place(pos, player);
        self.state.pending_advance = Some(player);
        self.state.moves_played += 1;

        debug!("{} plays {} flipping {}", player, pos, flipped.len());
        Ok(MoveRecord {
            player,
            position: pos,
            flipped,
        })
    }

    fn validate_move(&self, player: Player, pos: Position) -> Result<(), GameError> {
        if !self.state.is_in_progress() {
            return Err(GameError::GameNotInProgress);
        }
        if self.state.pending_advance.is_some() {
            return Err(GameError::MovePending);
        }
        if player != self.state.to_move {
            return Err(GameError::NotYourTurn {
                expected: self.state.to_move,
                got: player,
            });
        }
        if self.state.board.get(pos) != Cell::Empty {
            return Err(GameError::Occupied(pos));
        }
        if !self.state.board.is_legal(pos, player) {
            return Err(GameError::IllegalMove(pos));
        }
        Ok(())
    }

    /// Hand the turn on after an applied move.
    ///
    /// The opponent moves next if they can; otherwise the mover goes again
    /// if they can; otherwise the game ends.
    pub fn advance_turn(&mut self) -> Result<TurnOutcome, GameError> {
        let mover = self
            .state
            .pending_advance
            .take()
            .ok_or(GameError::NoPendingMove)?;
        let opponent = mover.opponent();
        let board = &self.state.board;

        let outcome = if board.has_legal_move(opponent) {
            self.state.to_move = opponent;
            TurnOutcome::SwitchedPlayer(opponent)
        } else if board.has_legal_move(mover) {
            self.state.to_move = mover;
            TurnOutcome::ContinueSamePlayer(mover)
        } else {
            self.state.phase = GamePhase::Ended;
            let result = GameResult::from_score(self.score());
            info!("game over: {} ({})", result, self.score());
            TurnOutcome::GameEnded(result)
        };

        debug!("turn outcome: {:?}", outcome);
        Ok(outcome)
    }

    /// Apply a move and advance the turn.
    pub fn play(&mut self, pos: Position) -> Result<(MoveRecord, TurnOutcome), GameError> {
        let record = self.apply_move(pos)?;
        let outcome = self.advance_turn()?;
        Ok((record, outcome))
    }

    // === Computer opponent ===

    /// Pick the computer's move at the game's difficulty.
    ///
    /// Only valid on the computer's turn with no move pending.
    pub fn choose_computer_move(&mut self) -> Result<Position, GameError> {
        if !self.state.is_in_progress() {
            return Err(GameError::GameNotInProgress);
        }
        if self.state.pending_advance.is_some() {
            return Err(GameError::MovePending);
        }

        let player = self.state.to_move;
        if !player.is_computer() {
            return Err(GameError::NotComputerTurn);
        }

        let candidates = self.legal_moves(player);
        if candidates.is_empty() {
            return Err(GameError::NoLegalMoves(player));
        }

        Ok(ai::choose_computer_move(
            &self.state.board,
            player,
            &candidates,
            self.state.difficulty,
            &mut self.rng,
        ))
    }

    /// Choose, apply, and advance the computer's move.
    pub fn play_computer_turn(&mut self) -> Result<(MoveRecord, TurnOutcome), GameError> {
        let pos = self.choose_computer_move()?;
        self.play(pos)
    }
}

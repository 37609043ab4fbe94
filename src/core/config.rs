//! Game configuration types.
//!
//! - `Difficulty`: strength of the computer opponent, fixed per game
//! - `EngineConfig`: difficulty, RNG seed, and the computer reply delay
//!
//! Both serialize with serde so a shell can persist its settings screen.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

/// Computer opponent strength.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniform random choice among legal moves.
    #[default]
    Easy,
    /// One-ply greedy: the move that flips the most discs.
    Hard,
}

impl Difficulty {
    /// Both levels, in menu order.
    pub const ALL: [Difficulty; 2] = [Difficulty::Easy, Difficulty::Hard];

    /// Lowercase name, as shown in the difficulty menu.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognised difficulty name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty {0:?} (expected \"easy\" or \"hard\")")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// Engine and session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Difficulty used when a game is started without an explicit choice.
    pub difficulty: Difficulty,

    /// Seed for the computer's random source.
    /// `None` seeds from OS entropy; a fixed seed makes Easy games replayable.
    pub seed: Option<u64>,

    /// Delay before the computer replies, in milliseconds.
    /// Purely cosmetic: gives the human time to see their move land.
    pub reply_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            seed: None,
            reply_delay_ms: 300,
        }
    }
}

impl EngineConfig {
    /// Create a new config with a custom difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Create a new config with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with a custom reply delay.
    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay_ms = delay.as_millis() as u64;
        self
    }

    /// The reply delay as a `Duration`.
    #[must_use]
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

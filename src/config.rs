use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::Side;
use crate::error::{Error, Result};
use crate::search::noise::RandomMovePolicy;

/// Probability per root move that the medium tier abandons search for a random move.
pub const MEDIUM_RANDOM_RATE: f64 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Total plies searched, counting the root move. `None` means no search.
    pub fn depth(self) -> Option<u32> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(2),
            Difficulty::Hard => Some(3),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        })
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(Error::Config(format!("unknown difficulty '{other}': use easy, medium or hard"))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub difficulty: Difficulty,
    /// Side the human plays; the engine takes the other one.
    pub player_side: Side,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub medium_random_rate: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { difficulty: Difficulty::Easy, player_side: Side::White, seed: None, medium_random_rate: MEDIUM_RANDOM_RATE }
    }
}

impl EngineConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: EngineConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        RandomMovePolicy::new(self.medium_random_rate).map(|_| ())
    }
}

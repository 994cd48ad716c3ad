use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ruleset whose ranking and best plays are inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Osu,
    Taiko,
    Fruits,
    Mania,
}

impl GameMode {
    /// Path segment / query value used by the API for this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Osu => "osu",
            GameMode::Taiko => "taiko",
            GameMode::Fruits => "fruits",
            GameMode::Mania => "mania",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A player taken from the performance ranking.
///
/// `rank` is the 1-based position in fetch order, unique within one run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RankedUser {
    pub id: u64,
    pub username: String,
    pub rank: u32,
}

impl RankedUser {
    pub fn new(id: u64, username: impl Into<String>, rank: u32) -> Self {
        Self {
            id,
            username: username.into(),
            rank,
        }
    }
}

impl fmt::Display for RankedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Rank {})", self.username, self.rank)
    }
}

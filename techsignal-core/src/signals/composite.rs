//! Composite signal: the overall call with its point tally.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall market direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Bullish,
    Bearish,
    Neutral,
}

impl Direction {
    /// Check if the call leans one way or the other
    pub fn is_directional(&self) -> bool {
        matches!(self, Direction::Bullish | Direction::Bearish)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Direction::Bullish => "BULLISH",
            Direction::Bearish => "BEARISH",
            Direction::Neutral => "NEUTRAL",
        };
        f.write_str(label)
    }
}

/// Result of signal synthesis.
///
/// `strength` is `|bull - bear| / (bull + bear)` as a percentage rounded to
/// one decimal, so it lies in `[0, 100]` and is zero exactly when the two
/// tallies are equal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeSignal {
    pub direction: Direction,
    pub strength: f64,
    pub bullish_points: u32,
    pub bearish_points: u32,
}

impl CompositeSignal {
    pub fn neutral() -> Self {
        Self {
            direction: Direction::Neutral,
            strength: 0.0,
            bullish_points: 0,
            bearish_points: 0,
        }
    }

    pub fn total_points(&self) -> u32 {
        self.bullish_points + self.bearish_points
    }
}

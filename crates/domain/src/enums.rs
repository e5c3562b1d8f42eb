use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of the simulated position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Profits when price rises.
    Long,
    /// Profits when price falls; the chronologically-earlier price is the one sold.
    Short,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Long => write!(f, "long"),
            Direction::Short => write!(f, "short"),
        }
    }
}

/// Outcome the resolver is asked to construct.
///
/// Legacy callers carry this as an "unlucky" boolean; modelling it as an
/// explicit enum keeps the result sign tied to a named variant instead of
/// flag interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Profit,
    Loss,
}

impl Mode {
    /// Converts the legacy "unlucky" flag: unlucky means a loss scenario.
    #[must_use]
    pub fn from_unlucky(unlucky: bool) -> Self {
        if unlucky { Mode::Loss } else { Mode::Profit }
    }

    /// True for `Mode::Loss`.
    #[must_use]
    pub fn is_loss(&self) -> bool {
        matches!(self, Mode::Loss)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Profit => write!(f, "profit"),
            Mode::Loss => write!(f, "loss"),
        }
    }
}

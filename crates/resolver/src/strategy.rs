//! Direction and mode selection for the pair search.
//!
//! The four direction×mode variants share one control flow but differ in
//! which price pairs are admissible and which way the movement formula runs.
//! A [`PairRule`] is selected once per resolution call and carries exactly
//! that variation: the pair predicate, the movement formula, and the result
//! sign. The entry price is always the chronologically earlier observation;
//! for a short it is the price sold, bought back at the exit.

use rust_decimal::Decimal;
use scenario_domain::{Direction, Mode};

/// Admissibility and arithmetic for one `(direction, mode)` combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairRule {
    direction: Direction,
    mode: Mode,
}

impl PairRule {
    /// Selects the rule for a request.
    #[must_use]
    pub fn for_request(direction: Direction, mode: Mode) -> Self {
        Self { direction, mode }
    }

    /// Whether an (entry, exit) pair of observed prices is admissible.
    #[must_use]
    pub fn accepts(&self, entry: Decimal, exit: Decimal) -> bool {
        match (self.direction, self.mode) {
            // Price rose after a buy.
            (Direction::Long, Mode::Profit) => exit > entry,
            // Price fell after a buy.
            (Direction::Long, Mode::Loss) => exit < entry,
            // Price fell after a sell.
            (Direction::Short, Mode::Profit) => entry > exit,
            // Price rose after a sell; bought back higher.
            (Direction::Short, Mode::Loss) => exit > entry,
        }
    }

    /// Unleveraged percentage movement for an admissible pair.
    ///
    /// Each branch keeps its own formula; only the surrounding control flow
    /// is shared. Callers must only pass pairs that [`accepts`](Self::accepts)
    /// admitted, which guarantees a non-negative result.
    #[must_use]
    pub fn natural_movement(&self, entry: Decimal, exit: Decimal) -> Decimal {
        match (self.direction, self.mode) {
            (Direction::Long, Mode::Profit) => (exit - entry) / entry * Decimal::ONE_HUNDRED,
            (Direction::Long, Mode::Loss) => (entry - exit) / entry * Decimal::ONE_HUNDRED,
            (Direction::Short, Mode::Profit) => (entry - exit) / entry * Decimal::ONE_HUNDRED,
            (Direction::Short, Mode::Loss) => (exit - entry) / entry * Decimal::ONE_HUNDRED,
        }
    }

    /// Applies the mode's sign to a result magnitude.
    #[must_use]
    pub fn signed(&self, magnitude: Decimal) -> Decimal {
        match self.mode {
            Mode::Profit => magnitude,
            Mode::Loss => -magnitude,
        }
    }
}

use crate::enums::{Direction, Mode};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The scenario record returned to the caller.
///
/// Immutable and returned by value; the resolver holds nothing back. The sign
/// of `result_percent` is the single source of truth for profit-vs-loss
/// downstream — fallback search can overshoot the target magnitude, so
/// callers must not reconstruct the outcome from `mode` and `target` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub direction: Direction,
    pub mode: Mode,
    /// Observed price at the chosen entry point. Always a real observation
    /// from the input series, never interpolated.
    pub entry_price: Decimal,
    /// Observed price at the chosen exit point.
    pub exit_price: Decimal,
    /// Integer multiplier in `[1, 100]` applied to the natural movement.
    pub leverage: u32,
    /// Unleveraged percentage movement between entry and exit, always >= 0.
    pub natural_movement_percent: Decimal,
    /// Leveraged, signed result; negative iff the scenario is a loss.
    pub result_percent: Decimal,
    /// `principal * result_percent / 100`.
    pub profit_amount: Decimal,
    /// `principal + profit_amount`.
    pub final_balance: Decimal,
    /// Timestamp of the first point of the series the scenario was drawn from.
    pub window_start: DateTime<Utc>,
    /// Timestamp of the last point.
    pub window_end: DateTime<Utc>,
    /// Length of the series considered.
    pub points_considered: usize,
}

//! Search configuration.
//!
//! The tolerance window, leverage ceiling, and movement floor are observed
//! behavior of the system being reproduced; they are kept as named,
//! overridable settings, and their defaults must not change without the
//! system owner confirming intent.

use rust_decimal::Decimal;

/// Tunable knobs of the scenario search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Half-width of the acceptance window around the target, in percentage
    /// points. A `(pair, leverage)` combination is a candidate when its
    /// leveraged magnitude lands within `target ± tolerance`.
    pub tolerance: Decimal,
    /// Largest leverage multiplier the sweep (and the fallback) may use.
    pub max_leverage: u32,
    /// Pairs whose unleveraged movement is below this percentage are never
    /// selected, not even by the fallback.
    pub min_movement_percent: Decimal,
    /// Series longer than this are rejected as invalid input rather than
    /// letting the pair enumeration degrade silently.
    pub max_series_len: usize,
}

impl SearchConfig {
    /// Sets the acceptance tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Decimal) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the leverage ceiling.
    #[must_use]
    pub fn with_max_leverage(mut self, max_leverage: u32) -> Self {
        self.max_leverage = max_leverage;
        self
    }

    /// Sets the minimum-movement floor.
    #[must_use]
    pub fn with_min_movement_percent(mut self, min_movement_percent: Decimal) -> Self {
        self.min_movement_percent = min_movement_percent;
        self
    }

    /// Sets the series length cap.
    #[must_use]
    pub fn with_max_series_len(mut self, max_series_len: usize) -> Self {
        self.max_series_len = max_series_len;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            tolerance: Decimal::new(5, 1),            // 0.5 percentage points
            max_leverage: 100,
            min_movement_percent: Decimal::new(1, 2), // 0.01%
            max_series_len: 10_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_match_observed_behavior() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.tolerance, dec!(0.5));
        assert_eq!(cfg.max_leverage, 100);
        assert_eq!(cfg.min_movement_percent, dec!(0.01));
        assert_eq!(cfg.max_series_len, 10_000);
    }

    #[test]
    fn test_builder_overrides() {
        let cfg = SearchConfig::default()
            .with_tolerance(dec!(1.0))
            .with_max_leverage(20);
        assert_eq!(cfg.tolerance, dec!(1.0));
        assert_eq!(cfg.max_leverage, 20);
        assert_eq!(cfg.min_movement_percent, dec!(0.01));
    }
}

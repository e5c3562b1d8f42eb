use crate::enums::{Direction, Mode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parameters of one resolution call.
///
/// Constructed once per call and never mutated. No validation happens here;
/// the resolver validates the whole request (and the series) in one place so
/// every violated precondition surfaces as the same error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioRequest {
    pub direction: Direction,
    pub mode: Mode,
    /// Target result magnitude in percentage points. Preview-bounded UIs
    /// restrict this to a narrow range, but the search accepts any positive
    /// target.
    pub target_percent: Decimal,
    pub principal: Decimal,
}

impl ScenarioRequest {
    #[must_use]
    pub fn new(
        direction: Direction,
        mode: Mode,
        target_percent: Decimal,
        principal: Decimal,
    ) -> Self {
        Self {
            direction,
            mode,
            target_percent,
            principal,
        }
    }

    /// Sets the target percentage.
    #[must_use]
    pub fn with_target_percent(mut self, target_percent: Decimal) -> Self {
        self.target_percent = target_percent;
        self
    }

    /// Sets the principal.
    #[must_use]
    pub fn with_principal(mut self, principal: Decimal) -> Self {
        self.principal = principal;
        self
    }
}

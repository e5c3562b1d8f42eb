//! Settlement arithmetic.
//!
//! Kept separate from the search so that a non-committing preview and an
//! actual balance commit run through the same arithmetic; a preview is
//! therefore always a true prediction of the commit.

use rust_decimal::Decimal;
use scenario_domain::Settlement;

/// Applies a signed result percentage to a principal.
///
/// `profit_amount = principal * result_percent / 100` and
/// `final_balance = principal + profit_amount`; no rounding, no branching.
#[must_use]
pub fn settle(principal: Decimal, result_percent: Decimal) -> Settlement {
    let profit_amount = principal * result_percent / Decimal::ONE_HUNDRED;
    Settlement {
        profit_amount,
        final_balance: principal + profit_amount,
    }
}

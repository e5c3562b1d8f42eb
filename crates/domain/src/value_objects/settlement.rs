use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monetary outcome of applying a signed result percentage to a principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Signed amount gained or lost: `principal * result_percent / 100`.
    pub profit_amount: Decimal,
    /// `principal + profit_amount`.
    pub final_balance: Decimal,
}

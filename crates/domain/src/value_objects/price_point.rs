use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One observed price at one instant.
///
/// Supplied to the resolver as an ascending-by-timestamp slice; the resolver
/// borrows the slice read-only for the duration of a single call and never
/// synthesizes points of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: Decimal,
}

impl PricePoint {
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, price: Decimal) -> Self {
        Self { timestamp, price }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_json_shape() {
        let point = PricePoint::new(
            Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
            dec!(101.5),
        );
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["price"], serde_json::json!("101.5"));
        assert!(json["timestamp"].as_str().unwrap().starts_with("2026-03-01T12:00:00"));
    }
}

//! Trade-scenario search and settlement.
//!
//! Given an ordered series of observed prices and a request (direction,
//! mode, target percentage, principal), the search retroactively constructs
//! an (entry price, exit price, leverage) triple whose leveraged return
//! approximates the target, then settlement turns the chosen scenario into a
//! profit amount and final balance.
//!
//! The whole crate is a pure, synchronous computation: no I/O, no state
//! between calls, safe to invoke concurrently with no coordination.
//!
//! # Example
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use scenario_domain::{Direction, Mode, PricePoint, ScenarioRequest};
//! use scenario_resolver::resolve;
//!
//! # fn series() -> Vec<PricePoint> {
//! #     use chrono::{Duration, TimeZone, Utc};
//! #     let t0 = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
//! #     [100, 101, 99, 103]
//! #         .iter()
//! #         .enumerate()
//! #         .map(|(i, p)| PricePoint::new(t0 + Duration::minutes(i as i64), Decimal::from(*p)))
//! #         .collect()
//! # }
//! let request = ScenarioRequest::new(
//!     Direction::Long,
//!     Mode::Profit,
//!     Decimal::TWO,
//!     Decimal::from(1000),
//! );
//! let scenario = resolve(&series(), &request).unwrap();
//! assert_eq!(scenario.leverage, 2);
//! ```

pub mod config;
pub mod prelude;
pub mod search;
pub mod settlement;
pub mod strategy;

pub use config::SearchConfig;
pub use search::{resolve, resolve_with};
pub use settlement::settle;
pub use strategy::PairRule;

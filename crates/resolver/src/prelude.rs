//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use scenario_resolver::prelude::*;
//! ```

pub use crate::config::SearchConfig;
pub use crate::search::{resolve, resolve_with};
pub use crate::settlement::settle;
pub use crate::strategy::PairRule;

pub use scenario_domain::{
    Direction, InvalidInput, Mode, PricePoint, ResolveError, ScenarioRequest, ScenarioResult,
    Settlement,
};

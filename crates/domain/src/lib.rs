//! Shared domain types for the trade-scenario resolver.
//!
//! Everything in this crate is a plain value: enums for the request axes,
//! value objects for prices and scenario records, and the error types the
//! resolver reports. Nothing here performs I/O or holds state between calls.

pub mod enums;
pub mod error;
pub mod value_objects;

pub use enums::{Direction, Mode};
pub use error::{InvalidInput, ResolveError};
pub use value_objects::{PricePoint, ScenarioRequest, ScenarioResult, Settlement};

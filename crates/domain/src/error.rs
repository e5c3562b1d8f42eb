//! Error types reported by the resolver.
//!
//! Only two failure kinds exist: a caller contract violation
//! ([`InvalidInput`]) and a series that contains no pair consistent with the
//! requested direction and mode ([`ResolveError::NotResolvable`]). Neither is
//! retried, and neither carries a partial result.

use crate::enums::{Direction, Mode};
use thiserror::Error;

/// A violated precondition of `resolve`.
///
/// These are caller errors: the request should be fixed, not retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// Fewer than two observations; no entry/exit pair can exist.
    #[error("price series has {len} point(s), at least 2 are required")]
    SeriesTooShort { len: usize },

    /// Series exceeds the configured enumeration cap.
    #[error("price series has {len} points, exceeding the cap of {max}")]
    SeriesTooLong { len: usize, max: usize },

    /// Timestamps are not strictly ascending at the given index.
    #[error("price series is not sorted ascending by timestamp at index {index}")]
    UnorderedSeries { index: usize },

    /// A zero or negative price at the given index.
    #[error("price at index {index} is not positive")]
    NonPositivePrice { index: usize },

    #[error("principal must be positive")]
    NonPositivePrincipal,

    #[error("target percent must be positive")]
    NonPositiveTarget,
}

/// Failure outcome of a resolution call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// No pair of observations satisfies the direction/mode price constraint
    /// anywhere in the series, e.g. a flat series. A user-facing condition,
    /// not a bug.
    #[error("market moved too little or in the wrong direction to construct a {direction} {mode} scenario")]
    NotResolvable { direction: Direction, mode: Mode },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_condition() {
        let err = ResolveError::from(InvalidInput::SeriesTooShort { len: 1 });
        assert!(err.to_string().contains("at least 2"));

        let err = ResolveError::NotResolvable {
            direction: Direction::Short,
            mode: Mode::Profit,
        };
        assert!(err.to_string().contains("short profit"));
    }
}

//! Error types for triangle subdivision.

use thiserror::Error;

/// Errors raised by [`SubdivisionGenerator`](crate::subdivision::SubdivisionGenerator).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SubdivisionError {
    /// Invalid argument: the recursion depth was negative.
    #[error("invalid argument: recursion depth must be non-negative, got {0}")]
    InvalidDepth(i32),
}

/// Result alias for subdivision operations.
pub type Result<T> = std::result::Result<T, SubdivisionError>;

//! Error types for value operations.

use thiserror::Error;

/// Errors signaled by operations on a [`Value`](crate::Value).
///
/// Missing reads are not errors: they produce `Undefined`. Everything here is a
/// genuine kind violation or a conversion failure.
#[derive(Error, Debug)]
pub enum ValueError {
    /// An operator was applied to a kind (or pair of kinds) it does not support.
    #[error("TypeError: {0}")]
    Type(String),

    /// The action is not supported for the receiver's kind (indexing a number,
    /// calling an array, iterating a string, ...).
    #[error("InvalidOperation: {0}")]
    InvalidOperation(String),

    /// A string could not be converted to an integer.
    #[error("ParseError: cannot convert {input:?} to an integer")]
    Parse { input: String },

    /// Creating a missing slot did not make it reachable. Indicates a bug.
    #[error("invariant violated: {0}")]
    Invariant(String),

    /// JSON input was malformed or a value could not be converted.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ValueError {
    pub(crate) fn wrong_type() -> Self {
        ValueError::Type("wrong type".to_string())
    }

    pub(crate) fn invalid(message: &str) -> Self {
        ValueError::InvalidOperation(message.to_string())
    }
}

/// Convenience alias used throughout jsany-core.
pub type Result<T> = std::result::Result<T, ValueError>;

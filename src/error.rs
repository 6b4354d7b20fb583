//! Error types for the pubdate crate.
//!
//! The guessing core is total: "no usable signal" is a value
//! ([`Guess::none()`](crate::Guess::none)), never an error. Errors only
//! arise at the outer surfaces that touch the world — reading input and
//! encoding output.

use thiserror::Error;

/// Result type alias for pubdate operations
pub type Result<T> = std::result::Result<T, PubdateError>;

/// Errors from the fallible outer surfaces of the crate
#[derive(Error, Debug)]
pub enum PubdateError {
    /// Invalid command-line usage
    #[error("{0}")]
    Usage(String),

    /// Failed to read HTML input
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode a guess as JSON
    #[error("failed to encode guess: {0}")]
    Json(#[from] serde_json::Error),
}

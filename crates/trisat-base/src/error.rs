//! Unified error types for trisat.

use thiserror::Error;

/// The main error type for trisat operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An input parameter lies outside its accepted range.
    #[error("Invalid parameter {name}: got {value}, expected {expected}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        expected: &'static str,
    },

    /// A formula violates a structural invariant.
    #[error("Malformed formula: {0}")]
    MalformedFormula(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

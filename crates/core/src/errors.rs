//! Core error types for balance arithmetic.
//!
//! Every fallible operation in this crate returns [`Result`]. Operand
//! coercion failures are reported as [`Error::InvalidOperand`] and are
//! meant to be treated by callers as programmer/data errors, not as
//! retryable conditions.

use std::convert::Infallible;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for balance and balance sheet operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid operand: {0}")]
    InvalidOperand(#[from] OperandError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Arithmetic failed: {0}")]
    Arithmetic(String),
}

/// Reasons a right-hand operand of a balance addition or subtraction
/// was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperandError {
    /// The operand is neither a balance nor an `{amount, usd_value}` mapping.
    #[error("Unsupported operand type: {0}")]
    UnsupportedType(String),

    /// The mapping does not have exactly the `amount` and `usd_value` keys.
    #[error("Expected exactly the keys 'amount' and 'usd_value', found {found:?}")]
    InvalidKeys { found: Vec<String> },

    /// The value under `key` cannot be coerced to a decimal.
    #[error("Value under '{key}' is not a valid decimal: {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Infallible> for Error {
    fn from(err: Infallible) -> Self {
        match err {}
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

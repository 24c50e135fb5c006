//! Errors raised while constructing or decoding primitive values.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypesError {
    #[error("timestamp must be non-negative, got {0}")]
    NegativeTimestamp(Decimal),

    #[error("invalid hex integer: {0}")]
    InvalidHex(String),

    #[error("value does not fit in a decimal: {0}")]
    OutOfRange(String),

    #[error("unknown lock duration: {0}")]
    UnknownLockDuration(String),
}

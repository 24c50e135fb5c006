//! Lock-model errors.

use bomm_types::{Decimal, TypesError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LockError {
    #[error("invalid input: {name} must be non-negative, got {value}")]
    InvalidInput { name: &'static str, value: Decimal },

    #[error("arithmetic overflow in lock computation")]
    Overflow,

    #[error(transparent)]
    Types(#[from] TypesError),
}

/// Reject negative values for a named input.
pub(crate) fn ensure_non_negative(name: &'static str, value: Decimal) -> Result<(), LockError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(LockError::InvalidInput { name, value });
    }
    Ok(())
}

//! Valuation errors.

use bomm_lock::LockError;
use bomm_types::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PowerError {
    #[error("invalid input: {name} must be non-negative, got {value}")]
    InvalidInput { name: &'static str, value: Decimal },

    #[error("arithmetic overflow in voting-power computation")]
    Overflow,

    #[error(transparent)]
    Lock(#[from] LockError),
}

pub(crate) fn ensure_non_negative(name: &'static str, value: Decimal) -> Result<(), PowerError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(PowerError::InvalidInput { name, value });
    }
    Ok(())
}

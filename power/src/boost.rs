//! bOMM: locked OMM weighted by how long it stays locked.

use crate::error::{ensure_non_negative, PowerError};
use bomm_lock::compute_new_unlock_time;
use bomm_types::time::FOUR_YEARS_IN_MILLISECONDS;
use bomm_types::{Decimal, Timestamp};
use tracing::debug;

/// Decay rate of a lock's bOMM per millisecond.
///
/// A lock of `locked_amount` held for the full four years starts at
/// `locked_amount` bOMM. Not rounded.
pub fn slope(locked_amount: Decimal) -> Result<Decimal, PowerError> {
    ensure_non_negative("locked_amount", locked_amount)?;
    locked_amount
        .checked_div(Decimal::from(FOUR_YEARS_IN_MILLISECONDS))
        .ok_or(PowerError::Overflow)
}

/// bOMM balance at `now`: `slope × (unlock_time − now)`.
///
/// Reaches zero at `unlock_time`. A lock that expired without being
/// withdrawn is worth zero rather than a negative amount. Not rounded.
pub fn boosted_balance(
    slope: Decimal,
    unlock_time: Timestamp,
    now: Timestamp,
) -> Result<Decimal, PowerError> {
    ensure_non_negative("slope", slope)?;
    let remaining = unlock_time.millis_until(now);
    if remaining.is_sign_negative() {
        debug!(%unlock_time, %now, "lock expired, bOMM clamped to zero");
        return Ok(Decimal::ZERO);
    }
    slope.checked_mul(remaining).ok_or(PowerError::Overflow)
}

/// bOMM the user would hold right after locking `new_locked_amount` for
/// `selected_duration` ms on top of a lock ending at `current_unlock_time`.
pub fn new_boosted_balance(
    new_locked_amount: Decimal,
    selected_duration: Decimal,
    current_unlock_time: Timestamp,
    now: Timestamp,
) -> Result<Decimal, PowerError> {
    let unlock_time =
        compute_new_unlock_time(new_locked_amount, selected_duration, current_unlock_time, now)?;
    let slope = slope(new_locked_amount)?;
    boosted_balance(slope, unlock_time, now)
}

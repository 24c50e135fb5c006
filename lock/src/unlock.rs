//! Unlock-time computation.

use crate::error::{ensure_non_negative, LockError};
use bomm_types::time::WEEK_IN_MILLISECONDS;
use bomm_types::{Decimal, Timestamp};
use tracing::debug;

/// Round an unlock time down to the start of its week.
///
/// `floor(t / WEEK) × WEEK`, so the result is a multiple of one week and
/// never later than `t`.
pub fn recalculate_lock_period_end(lock_period_end: Timestamp) -> Timestamp {
    let millis = lock_period_end.as_millis();
    let partial_week = millis % Decimal::from(WEEK_IN_MILLISECONDS);
    Timestamp::from_millis(millis - partial_week).unwrap_or(Timestamp::EPOCH)
}

/// Compute the unlock time produced by locking for `selected_duration` ms.
///
/// With no existing lock (`current_unlock_time` is zero) the candidate is
/// `now + selected_duration`. With an existing lock the duration extends it:
/// the difference between the requested end and the current end is added to
/// the current end. Either way the candidate is quantized to a week boundary,
/// which may land at or before `now` for very short durations.
///
/// `new_locked_amount` does not affect the result; it is validated so callers
/// previewing a lock fail early on a negative amount.
pub fn compute_new_unlock_time(
    new_locked_amount: Decimal,
    selected_duration: Decimal,
    current_unlock_time: Timestamp,
    now: Timestamp,
) -> Result<Timestamp, LockError> {
    ensure_non_negative("new_locked_amount", new_locked_amount)?;
    ensure_non_negative("selected_duration", selected_duration)?;

    let requested_end = now
        .as_millis()
        .checked_add(selected_duration)
        .ok_or(LockError::Overflow)?;

    let candidate = if current_unlock_time.is_zero() {
        requested_end
    } else {
        let current = current_unlock_time.as_millis();
        let difference = requested_end
            .checked_sub(current)
            .ok_or(LockError::Overflow)?;
        current.checked_add(difference).ok_or(LockError::Overflow)?
    };

    let unlock = recalculate_lock_period_end(Timestamp::from_millis(candidate)?);
    debug!(%now, %current_unlock_time, %selected_duration, %unlock, "computed new unlock time");
    Ok(unlock)
}

//! A user's lock record as read from chain state.

use crate::error::{ensure_non_negative, LockError};
use crate::unlock::compute_new_unlock_time;
use bomm_types::{Decimal, Timestamp};
use serde::{Deserialize, Serialize};

/// Locked amount and unlock time for one user.
///
/// An unlock time of zero means there is no active lock. The record is owned
/// by the contract; here it is only read and previewed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LockRecord")]
pub struct LockState {
    pub locked_amount: Decimal,
    pub unlock_time: Timestamp,
}

/// Unvalidated wire shape of [`LockState`].
#[derive(Deserialize)]
struct LockRecord {
    locked_amount: Decimal,
    unlock_time: Timestamp,
}

impl TryFrom<LockRecord> for LockState {
    type Error = LockError;

    fn try_from(record: LockRecord) -> Result<Self, Self::Error> {
        Self::new(record.locked_amount, record.unlock_time)
    }
}

impl LockState {
    /// No lock.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(locked_amount: Decimal, unlock_time: Timestamp) -> Result<Self, LockError> {
        ensure_non_negative("locked_amount", locked_amount)?;
        Ok(Self {
            locked_amount,
            unlock_time,
        })
    }

    pub fn has_active_lock(&self) -> bool {
        !self.unlock_time.is_zero()
    }

    /// Milliseconds left until unlock, zero once expired or when unlocked.
    pub fn remaining(&self, now: Timestamp) -> Decimal {
        if !self.has_active_lock() {
            return Decimal::ZERO;
        }
        self.unlock_time.millis_until(now).max(Decimal::ZERO)
    }

    /// Whether the lock has run out but has not been withdrawn.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.has_active_lock() && now >= self.unlock_time
    }

    /// The record after a withdrawal: both fields reset to zero.
    pub fn withdrawn(&self) -> Self {
        Self::none()
    }

    /// The record that would result from locking `additional_amount` more and
    /// extending by `duration` milliseconds.
    pub fn preview_lock(
        &self,
        additional_amount: Decimal,
        duration: Decimal,
        now: Timestamp,
    ) -> Result<Self, LockError> {
        ensure_non_negative("additional_amount", additional_amount)?;
        let locked_amount = self
            .locked_amount
            .checked_add(additional_amount)
            .ok_or(LockError::Overflow)?;
        let unlock_time = compute_new_unlock_time(locked_amount, duration, self.unlock_time, now)?;
        Ok(Self {
            locked_amount,
            unlock_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bomm_types::time::WEEK_IN_MILLISECONDS;
    use bomm_types::LockDuration;

    const WEEK: u64 = WEEK_IN_MILLISECONDS;

    #[test]
    fn default_is_no_lock() {
        let state = LockState::none();
        assert!(!state.has_active_lock());
        assert_eq!(state.remaining(Timestamp::new(42)), Decimal::ZERO);
        assert!(!state.is_expired(Timestamp::new(42)));
    }

    #[test]
    fn negative_amount_is_rejected() {
        assert!(matches!(
            LockState::new(Decimal::NEGATIVE_ONE, Timestamp::new(WEEK)),
            Err(LockError::InvalidInput { name: "locked_amount", .. })
        ));
    }

    #[test]
    fn deserializing_rejects_negative_fields() {
        let negative_amount = r#"{"locked_amount":"-100","unlock_time":"604800000"}"#;
        assert!(serde_json::from_str::<LockState>(negative_amount).is_err());
        let negative_unlock = r#"{"locked_amount":"100","unlock_time":"-7"}"#;
        assert!(serde_json::from_str::<LockState>(negative_unlock).is_err());

        let state: LockState =
            serde_json::from_str(r#"{"locked_amount":"100","unlock_time":"604800000"}"#).unwrap();
        assert_eq!(state, LockState::new(Decimal::from(100), Timestamp::new(WEEK)).unwrap());
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(serde_json::from_str::<LockState>(&json).unwrap(), state);
    }

    #[test]
    fn remaining_and_expiry() {
        let state = LockState::new(Decimal::from(10), Timestamp::new(10 * WEEK)).unwrap();
        assert_eq!(state.remaining(Timestamp::new(9 * WEEK)), Decimal::from(WEEK));
        assert!(!state.is_expired(Timestamp::new(9 * WEEK)));
        assert_eq!(state.remaining(Timestamp::new(11 * WEEK)), Decimal::ZERO);
        assert!(state.is_expired(Timestamp::new(10 * WEEK)));
    }

    #[test]
    fn preview_adds_amount_and_extends() {
        let now = Timestamp::new(100 * WEEK + 5);
        let state = LockState::new(Decimal::from(10), Timestamp::new(104 * WEEK)).unwrap();
        let next = state
            .preview_lock(Decimal::from(5), LockDuration::OneYear.as_millis(), now)
            .unwrap();
        assert_eq!(next.locked_amount, Decimal::from(15));
        assert_eq!(next.unlock_time, Timestamp::new(152 * WEEK));
        // the chain-owned record is untouched
        assert_eq!(state.locked_amount, Decimal::from(10));
    }

    #[test]
    fn withdraw_resets_everything() {
        let state = LockState::new(Decimal::from(10), Timestamp::new(WEEK)).unwrap();
        assert_eq!(state.withdrawn(), LockState::none());
    }
}

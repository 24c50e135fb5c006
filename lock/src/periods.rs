//! Which lock durations can still be selected.

use bomm_types::{Decimal, LockDuration, Timestamp, LOCK_DURATIONS};
use serde::{Deserialize, Serialize};

/// Result of enumerating selectable lock durations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailablePeriods {
    /// Durations longer than the remaining lock, shortest first. Never empty.
    Options(Vec<LockDuration>),
    /// The remaining lock already meets or exceeds every duration.
    NoOptions,
}

impl AvailablePeriods {
    pub fn options(&self) -> Option<&[LockDuration]> {
        match self {
            Self::Options(options) => Some(options),
            Self::NoOptions => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::NoOptions)
    }

    pub fn contains(&self, duration: LockDuration) -> bool {
        self.options().is_some_and(|o| o.contains(&duration))
    }
}

/// Offer only durations strictly longer than the time left on the lock, so a
/// user can never pick a lock that would end sooner than the current one.
pub fn available_lock_periods(current_unlock_time: Timestamp, now: Timestamp) -> AvailablePeriods {
    let remaining = current_unlock_time.millis_until(now);
    let options: Vec<LockDuration> = LOCK_DURATIONS
        .iter()
        .filter(|(_, millis)| Decimal::from(*millis) > remaining)
        .map(|(duration, _)| *duration)
        .collect();

    if options.is_empty() {
        AvailablePeriods::NoOptions
    } else {
        AvailablePeriods::Options(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bomm_types::time::{DAY_IN_MILLISECONDS, FOUR_YEARS_IN_MILLISECONDS};

    const NOW: u64 = 1_700_000_000_000;

    #[test]
    fn no_lock_offers_everything_in_order() {
        let periods = available_lock_periods(Timestamp::EPOCH, Timestamp::new(NOW));
        let all: Vec<_> = LOCK_DURATIONS.iter().map(|(d, _)| *d).collect();
        assert_eq!(periods, AvailablePeriods::Options(all));
    }

    #[test]
    fn shorter_durations_are_hidden() {
        let unlock = Timestamp::new(NOW + 100 * DAY_IN_MILLISECONDS);
        let periods = available_lock_periods(unlock, Timestamp::new(NOW));
        assert!(!periods.contains(LockDuration::OneWeek));
        assert!(!periods.contains(LockDuration::OneMonth));
        assert!(!periods.contains(LockDuration::ThreeMonths));
        assert!(periods.contains(LockDuration::SixMonths));
        assert_eq!(periods.options().map(|o| o[0]), Some(LockDuration::SixMonths));
    }

    #[test]
    fn equal_remaining_excludes_the_duration() {
        let remaining = LockDuration::OneYear.as_millis_u64();
        let periods = available_lock_periods(Timestamp::new(NOW + remaining), Timestamp::new(NOW));
        assert!(!periods.contains(LockDuration::OneYear));
        assert!(periods.contains(LockDuration::TwoYears));
    }

    #[test]
    fn maximum_lock_leaves_no_options() {
        let unlock = Timestamp::new(NOW + FOUR_YEARS_IN_MILLISECONDS);
        let periods = available_lock_periods(unlock, Timestamp::new(NOW));
        assert!(periods.is_exhausted());
        assert_eq!(periods.options(), None);
    }

    #[test]
    fn sentinel_is_distinct_from_an_empty_list() {
        let json = serde_json::to_string(&AvailablePeriods::NoOptions).unwrap();
        assert_eq!(json, "\"no_options\"");
        let options = serde_json::to_string(&AvailablePeriods::Options(vec![LockDuration::OneWeek])).unwrap();
        assert_eq!(options, r#"{"options":["one-week"]}"#);
    }

    #[test]
    fn expired_lock_offers_everything() {
        let periods = available_lock_periods(Timestamp::new(NOW - 1), Timestamp::new(NOW));
        assert_eq!(periods.options().map(|o| o.len()), Some(LOCK_DURATIONS.len()));
    }
}

//! Named lock durations a user can select when locking or extending a lock.

use crate::error::TypesError;
use crate::time::{
    FOUR_YEARS_IN_MILLISECONDS, MONTH_IN_MILLISECONDS, WEEK_IN_MILLISECONDS, YEAR_IN_MILLISECONDS,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LockDuration {
    OneWeek,
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    TwoYears,
    FourYears,
}

/// Every selectable duration with its length in milliseconds, shortest first.
///
/// Option enumeration iterates this table, so its order is the order the
/// options are offered in.
pub const LOCK_DURATIONS: [(LockDuration, u64); 7] = [
    (LockDuration::OneWeek, LockDuration::OneWeek.as_millis_u64()),
    (LockDuration::OneMonth, LockDuration::OneMonth.as_millis_u64()),
    (LockDuration::ThreeMonths, LockDuration::ThreeMonths.as_millis_u64()),
    (LockDuration::SixMonths, LockDuration::SixMonths.as_millis_u64()),
    (LockDuration::OneYear, LockDuration::OneYear.as_millis_u64()),
    (LockDuration::TwoYears, LockDuration::TwoYears.as_millis_u64()),
    (LockDuration::FourYears, LockDuration::FourYears.as_millis_u64()),
];

impl LockDuration {
    /// The longest selectable lock.
    pub const MAX: Self = Self::FourYears;

    pub const fn as_millis_u64(&self) -> u64 {
        match self {
            Self::OneWeek => WEEK_IN_MILLISECONDS,
            Self::OneMonth => MONTH_IN_MILLISECONDS,
            Self::ThreeMonths => 3 * MONTH_IN_MILLISECONDS,
            Self::SixMonths => 6 * MONTH_IN_MILLISECONDS,
            Self::OneYear => YEAR_IN_MILLISECONDS,
            Self::TwoYears => 2 * YEAR_IN_MILLISECONDS,
            Self::FourYears => FOUR_YEARS_IN_MILLISECONDS,
        }
    }

    pub fn as_millis(&self) -> Decimal {
        Decimal::from(self.as_millis_u64())
    }

    /// Human-readable label, as shown in the lock selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::OneWeek => "1 week",
            Self::OneMonth => "1 month",
            Self::ThreeMonths => "3 months",
            Self::SixMonths => "6 months",
            Self::OneYear => "1 year",
            Self::TwoYears => "2 years",
            Self::FourYears => "4 years",
        }
    }

    /// Short code accepted on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            Self::OneWeek => "1w",
            Self::OneMonth => "1m",
            Self::ThreeMonths => "3m",
            Self::SixMonths => "6m",
            Self::OneYear => "1y",
            Self::TwoYears => "2y",
            Self::FourYears => "4y",
        }
    }
}

impl fmt::Display for LockDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LockDuration {
    type Err = TypesError;

    /// Accepts the short code (`3m`) or the label (`3 months`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        LOCK_DURATIONS
            .iter()
            .map(|(d, _)| *d)
            .find(|d| d.code() == needle || d.label() == needle)
            .ok_or_else(|| TypesError::UnknownLockDuration(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_strictly_increasing() {
        for pair in LOCK_DURATIONS.windows(2) {
            assert!(pair[0].1 < pair[1].1, "{} !< {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn table_matches_per_variant_lengths() {
        for (duration, millis) in LOCK_DURATIONS {
            assert_eq!(duration.as_millis_u64(), millis, "{duration}");
        }
    }

    #[test]
    fn max_is_four_years() {
        assert_eq!(LockDuration::MAX.as_millis_u64(), FOUR_YEARS_IN_MILLISECONDS);
        assert_eq!(LOCK_DURATIONS.last().map(|(d, _)| *d), Some(LockDuration::MAX));
    }

    #[test]
    fn parses_codes_and_labels() {
        assert_eq!("1w".parse::<LockDuration>().unwrap(), LockDuration::OneWeek);
        assert_eq!("6 Months".parse::<LockDuration>().unwrap(), LockDuration::SixMonths);
        assert_eq!(
            "5y".parse::<LockDuration>().unwrap_err(),
            TypesError::UnknownLockDuration("5y".into())
        );
    }

    #[test]
    fn serializes_as_kebab_case() {
        let json = serde_json::to_string(&LockDuration::ThreeMonths).unwrap();
        assert_eq!(json, "\"three-months\"");
    }
}

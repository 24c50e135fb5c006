//! Timestamps and the fixed time constants used by the lock math.
//!
//! Lock math runs on millisecond timestamps. Chain timestamps arrive in
//! microseconds and are converted with [`Timestamp::from_micros`].

use crate::error::TypesError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

pub const MINUTE_IN_SECONDS: u64 = 60;
pub const HOUR_IN_SECONDS: u64 = 60 * MINUTE_IN_SECONDS;
pub const DAY_IN_SECONDS: u64 = 24 * HOUR_IN_SECONDS;

pub const DAY_IN_MILLISECONDS: u64 = DAY_IN_SECONDS * 1000;
pub const WEEK_IN_MILLISECONDS: u64 = 7 * DAY_IN_MILLISECONDS;
pub const MONTH_IN_MILLISECONDS: u64 = 30 * DAY_IN_MILLISECONDS;
pub const YEAR_IN_MILLISECONDS: u64 = 365 * DAY_IN_MILLISECONDS;
/// Maximum lock length; a full-length lock decays over exactly this span.
pub const FOUR_YEARS_IN_MILLISECONDS: u64 = 4 * YEAR_IN_MILLISECONDS;

pub const MICROS_PER_MILLI: u64 = 1000;
pub const MICROS_PER_SECOND: u64 = 1_000_000;

/// A point in time, in milliseconds since the Unix epoch.
///
/// Always non-negative. Zero doubles as "no active lock" when used as an
/// unlock time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Timestamp(Decimal);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(Decimal::ZERO);

    pub fn new(millis: u64) -> Self {
        Self(Decimal::from(millis))
    }

    /// Build a timestamp from a decimal millisecond value.
    pub fn from_millis(millis: Decimal) -> Result<Self, TypesError> {
        if millis.is_sign_negative() && !millis.is_zero() {
            return Err(TypesError::NegativeTimestamp(millis));
        }
        Ok(Self(millis))
    }

    /// Build a timestamp from a chain timestamp in microseconds.
    pub fn from_micros(micros: Decimal) -> Result<Self, TypesError> {
        Self::from_millis(micros / Decimal::from(MICROS_PER_MILLI))
    }

    /// Get the current system time as a `Timestamp`.
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        Self(Decimal::from(millis))
    }

    pub fn as_millis(&self) -> Decimal {
        self.0
    }

    pub fn as_micros(&self) -> Decimal {
        self.0 * Decimal::from(MICROS_PER_MILLI)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Signed milliseconds from `now` until this timestamp.
    ///
    /// Negative once `now` has passed this timestamp.
    pub fn millis_until(&self, now: Timestamp) -> Decimal {
        self.0 - now.0
    }
}

impl TryFrom<Decimal> for Timestamp {
    type Error = TypesError;

    fn try_from(millis: Decimal) -> Result<Self, Self::Error> {
        Self::from_millis(millis)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Source of the current time.
///
/// Callers sample it once per logical operation and thread the resulting
/// `Timestamp` through every dependent computation.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// The wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

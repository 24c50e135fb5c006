//! Time formatting helpers.

use bomm_types::time::{DAY_IN_SECONDS, HOUR_IN_SECONDS, MICROS_PER_SECOND, MINUTE_IN_SECONDS};
use bomm_types::Decimal;
use rust_decimal::RoundingStrategy;

/// Format a vote duration given in microseconds as whole days, hours or
/// minutes, whichever is the largest non-zero unit.
///
/// Minutes are the smallest unit shown, so anything under a minute is
/// `"0 minutes"`. A missing duration formats as an empty string and negative
/// durations are treated as zero.
pub fn format_vote_duration(duration_micro: Option<Decimal>) -> String {
    let Some(micros) = duration_micro else {
        return String::new();
    };

    let seconds = (micros / Decimal::from(MICROS_PER_SECOND))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .max(Decimal::ZERO);

    let days = whole_units(seconds, DAY_IN_SECONDS);
    if !days.is_zero() {
        return pluralize(days, "day");
    }
    let hours = whole_units(seconds, HOUR_IN_SECONDS);
    if !hours.is_zero() {
        return pluralize(hours, "hour");
    }
    pluralize(whole_units(seconds, MINUTE_IN_SECONDS), "minute")
}

fn whole_units(seconds: Decimal, unit_secs: u64) -> Decimal {
    (seconds / Decimal::from(unit_secs)).floor()
}

fn pluralize(count: Decimal, unit: &str) -> String {
    if count == Decimal::ONE {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

//! Display rounding.

use bomm_types::Decimal;
use rust_decimal::RoundingStrategy;

/// Round to exactly two decimal places, halves away from zero.
pub fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

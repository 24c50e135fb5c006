//! Average time an unstake request waits before it can be claimed.

use crate::error::{ensure_non_negative, PowerError};
use bomm_types::Decimal;

/// ICON block interval in seconds.
pub const ICON_BLOCK_INTERVAL_SECS: u64 = 2;

/// Mean wait in seconds over `(request_block, claimable_block)` samples.
///
/// Block heights are decimals so values decoded with
/// [`bomm_types::hex_to_decimal`] pass straight through. No samples means no
/// observed wait: zero.
pub fn average_unstaking_time(
    samples: &[(Decimal, Decimal)],
    block_interval_secs: Decimal,
) -> Result<Decimal, PowerError> {
    ensure_non_negative("block_interval_secs", block_interval_secs)?;
    if samples.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let mut total_blocks = Decimal::ZERO;
    for &(request_block, claimable_block) in samples {
        ensure_non_negative("request_block", request_block)?;
        let wait = claimable_block
            .checked_sub(request_block)
            .ok_or(PowerError::Overflow)?;
        ensure_non_negative("unstaking_wait_blocks", wait)?;
        total_blocks = total_blocks.checked_add(wait).ok_or(PowerError::Overflow)?;
    }

    total_blocks
        .checked_div(Decimal::from(samples.len() as u64))
        .and_then(|avg| avg.checked_mul(block_interval_secs))
        .ok_or(PowerError::Overflow)
}

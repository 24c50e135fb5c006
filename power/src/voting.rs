//! Distribution of the protocol's voting power over working balances.
//!
//! Two preview flavours exist and they treat a lower new balance differently:
//! [`user_voting_power`] never lets a preview shrink the supply, while
//! [`voting_power`] applies the signed difference.

use crate::error::{ensure_non_negative, PowerError};
use crate::rounding::round2;
use bomm_types::Decimal;
use tracing::{debug, warn};

/// A user's share of `omm_voting_power`:
/// `omm_voting_power / total_working_supply × user_working_balance`.
///
/// `previewed_working_balance` reflects a pending action. When it exceeds the
/// recorded balance, the increase is added to the supply and the previewed
/// balance is used; otherwise the recorded values are used unchanged. With an
/// empty supply there is nothing to distribute and the result is zero.
pub fn user_voting_power(
    omm_voting_power: Decimal,
    total_working_supply: Decimal,
    recorded_working_balance: Decimal,
    previewed_working_balance: Decimal,
) -> Result<Decimal, PowerError> {
    ensure_non_negative("omm_voting_power", omm_voting_power)?;
    ensure_non_negative("total_working_supply", total_working_supply)?;
    ensure_non_negative("recorded_working_balance", recorded_working_balance)?;
    ensure_non_negative("previewed_working_balance", previewed_working_balance)?;

    let user_balance = previewed_working_balance.max(recorded_working_balance);
    let balance_delta = if previewed_working_balance > recorded_working_balance {
        previewed_working_balance - recorded_working_balance
    } else {
        Decimal::ZERO
    };
    let total = total_working_supply
        .checked_add(balance_delta)
        .ok_or(PowerError::Overflow)?;

    if total.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let power = omm_voting_power
        .checked_div(total)
        .and_then(|per_unit| per_unit.checked_mul(user_balance))
        .map(round2)
        .ok_or(PowerError::Overflow)?;
    debug!(%omm_voting_power, %total, %user_balance, %power, "user voting power");
    Ok(power)
}

/// Voting power per unit of working balance: `omm_voting_power / supply`.
///
/// With `new_working_balance` set (and non-zero), the supply is adjusted by
/// `new − recorded`, which is negative when the new balance is lower. Zero
/// voting power or a zero adjusted supply yields zero.
pub fn voting_power(
    omm_voting_power: Decimal,
    recorded_working_balance: Decimal,
    total_working_supply: Decimal,
    new_working_balance: Option<Decimal>,
) -> Result<Decimal, PowerError> {
    let new_working_balance = new_working_balance.unwrap_or(Decimal::ZERO);
    ensure_non_negative("omm_voting_power", omm_voting_power)?;
    ensure_non_negative("recorded_working_balance", recorded_working_balance)?;
    ensure_non_negative("total_working_supply", total_working_supply)?;
    ensure_non_negative("new_working_balance", new_working_balance)?;

    let balance_delta = if new_working_balance.is_zero() {
        Decimal::ZERO
    } else {
        new_working_balance
            .checked_sub(recorded_working_balance)
            .ok_or(PowerError::Overflow)?
    };
    let total = total_working_supply
        .checked_add(balance_delta)
        .ok_or(PowerError::Overflow)?;

    if omm_voting_power.is_zero() || total.is_zero() {
        return Ok(Decimal::ZERO);
    }
    if total.is_sign_negative() {
        warn!(%total_working_supply, %recorded_working_balance, %new_working_balance, "adjusted working supply is negative");
    }

    omm_voting_power
        .checked_div(total)
        .map(round2)
        .ok_or(PowerError::Overflow)
}

/// The protocol's voting power: sICX liquidity valued in ICX.
pub fn omm_voting_power(
    total_liquidity_sicx: Decimal,
    sicx_icx_ratio: Decimal,
) -> Result<Decimal, PowerError> {
    ensure_non_negative("total_liquidity_sicx", total_liquidity_sicx)?;
    ensure_non_negative("sicx_icx_ratio", sicx_icx_ratio)?;
    total_liquidity_sicx
        .checked_mul(sicx_icx_ratio)
        .map(round2)
        .ok_or(PowerError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn preview_increase_grows_supply_and_user() {
        // delta 30, supply 1030, user 80
        let power = user_voting_power(d("500"), d("1000"), d("50"), d("80")).unwrap();
        assert_eq!(power, d("38.83"));
    }

    #[test]
    fn preview_decrease_keeps_recorded_values() {
        let power = user_voting_power(d("500"), d("1000"), d("80"), d("50")).unwrap();
        assert_eq!(power, d("40.00"));
    }

    #[test]
    fn empty_supply_distributes_nothing() {
        assert_eq!(
            user_voting_power(d("500"), Decimal::ZERO, Decimal::ZERO, Decimal::ZERO).unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn preview_alone_can_fill_empty_supply() {
        let power = user_voting_power(d("500"), Decimal::ZERO, Decimal::ZERO, d("10")).unwrap();
        assert_eq!(power, d("500"));
    }

    #[test]
    fn user_voting_power_rejects_negative_inputs() {
        assert_eq!(
            user_voting_power(d("500"), d("-1"), d("0"), d("0")),
            Err(PowerError::InvalidInput {
                name: "total_working_supply",
                value: d("-1")
            })
        );
    }

    #[test]
    fn voting_power_without_preview() {
        assert_eq!(voting_power(d("500"), d("50"), d("1000"), None).unwrap(), d("0.50"));
        assert_eq!(voting_power(d("1000"), d("0"), d("3"), None).unwrap(), d("333.33"));
    }

    #[test]
    fn voting_power_applies_signed_delta() {
        // 1000 + (80 - 50)
        assert_eq!(voting_power(d("515"), d("50"), d("1000"), Some(d("80"))).unwrap(), d("0.50"));
        // 1000 + (20 - 50)
        assert_eq!(voting_power(d("970"), d("50"), d("1000"), Some(d("20"))).unwrap(), d("1.00"));
    }

    #[test]
    fn voting_power_zero_guards() {
        assert_eq!(voting_power(Decimal::ZERO, d("50"), d("1000"), None).unwrap(), Decimal::ZERO);
        assert_eq!(voting_power(d("500"), d("50"), Decimal::ZERO, None).unwrap(), Decimal::ZERO);
        assert_eq!(
            voting_power(d("500"), d("50"), Decimal::ZERO, Some(Decimal::ZERO)).unwrap(),
            Decimal::ZERO
        );
        // adjusted supply cancels out exactly
        assert_eq!(voting_power(d("500"), d("60"), d("50"), Some(d("10"))).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn omm_voting_power_is_rounded_product() {
        assert_eq!(omm_voting_power(d("1000"), d("2.5")).unwrap(), d("2500.00"));
        assert_eq!(omm_voting_power(d("1234.5678"), d("1.0123")).unwrap(), d("1249.75"));
    }
}

//! Decoding of `0x`-prefixed hex integers as returned by chain RPC reads.

use crate::error::TypesError;
use rust_decimal::Decimal;

/// Decode a hex integer (`"0x1bc16d674ec80000"`, optionally `-`-signed).
pub fn hex_to_decimal(hex: &str) -> Result<Decimal, TypesError> {
    decode_scaled(hex, 0)
}

/// Decode a raw token amount and scale it down by `decimals`.
///
/// `hex_to_normalised("0xde0b6b3a7640000", 18)` is exactly `1`.
pub fn hex_to_normalised(hex: &str, decimals: u32) -> Result<Decimal, TypesError> {
    decode_scaled(hex, decimals)
}

fn decode_scaled(hex: &str, scale: u32) -> Result<Decimal, TypesError> {
    let trimmed = hex.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let digits = body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))
        .ok_or_else(|| TypesError::InvalidHex(hex.to_string()))?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(TypesError::InvalidHex(hex.to_string()));
    }
    let raw = u128::from_str_radix(digits, 16).map_err(|_| TypesError::InvalidHex(hex.to_string()))?;
    let signed = i128::try_from(raw).map_err(|_| TypesError::OutOfRange(hex.to_string()))?;
    let signed = if negative { -signed } else { signed };
    Decimal::try_from_i128_with_scale(signed, scale)
        .map(|d| d.normalize())
        .map_err(|_| TypesError::OutOfRange(hex.to_string()))
}

//! Token descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimals used by every IRC-2 token the dashboard deals with.
pub const DEFAULT_TOKEN_DECIMALS: u32 = 18;

/// Identifies a token for display and unit conversion.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenDescriptor {
    pub symbol: String,
    pub decimals: u32,
}

impl TokenDescriptor {
    pub fn new(symbol: impl Into<String>, decimals: u32) -> Self {
        Self {
            symbol: symbol.into(),
            decimals,
        }
    }

    pub fn omm() -> Self {
        Self::new("OMM", DEFAULT_TOKEN_DECIMALS)
    }

    pub fn bomm() -> Self {
        Self::new("bOMM", DEFAULT_TOKEN_DECIMALS)
    }

    pub fn sicx() -> Self {
        Self::new("sICX", DEFAULT_TOKEN_DECIMALS)
    }

    pub fn icx() -> Self {
        Self::new("ICX", DEFAULT_TOKEN_DECIMALS)
    }
}

impl fmt::Display for TokenDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

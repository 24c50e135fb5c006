//! Number formats for amounts, prices and percentages.
//!
//! Formats are plain values built on demand; token formats take the token
//! they label as a parameter.

use bomm_types::{Decimal, TokenDescriptor};
use rust_decimal::RoundingStrategy;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimals: u32,
    pub thousand: Option<char>,
    pub prefix: String,
    pub suffix: String,
}

impl NumberFormat {
    pub fn new(decimals: u32) -> Self {
        Self {
            decimals,
            thousand: None,
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    pub fn with_thousand(mut self, separator: char) -> Self {
        self.thousand = Some(separator);
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// `1,234`
    pub fn normal() -> Self {
        Self::new(0).with_thousand(',')
    }

    /// `1,234.56`
    pub fn us_locale() -> Self {
        Self::new(2).with_thousand(',')
    }

    /// `12%` for a value already expressed in percent.
    pub fn percentage() -> Self {
        Self::new(0).with_suffix("%")
    }

    /// ` + 1,234.56`
    pub fn prefix_plus() -> Self {
        Self::us_locale().with_prefix(" + ")
    }

    /// `1,234.56 OMM`
    pub fn omm_prefix() -> Self {
        Self::us_locale().with_suffix(" OMM")
    }

    /// `1,234 ICD`
    pub fn icd() -> Self {
        Self::normal().with_suffix(" ICD")
    }

    /// `$1,234`
    pub fn usd() -> Self {
        Self::normal().with_prefix("$")
    }

    /// `$1,234.56`
    pub fn usd_two_decimal() -> Self {
        Self::us_locale().with_prefix("$")
    }

    /// `+ $1,234.56`
    pub fn usd_two_decimal_plus() -> Self {
        Self::us_locale().with_prefix("+ $")
    }

    /// `- $1,234.56`
    pub fn usd_two_decimal_minus() -> Self {
        Self::us_locale().with_prefix("- $")
    }

    /// `1,234.56 sICX`
    pub fn asset(token: &TokenDescriptor) -> Self {
        Self::us_locale().with_suffix(format!(" {}", token.symbol))
    }

    /// ` ~ 1,234.56 sICX`
    pub fn asset_prefix_approx(token: &TokenDescriptor) -> Self {
        Self::asset(token).with_prefix(" ~ ")
    }

    /// Render `value`, rounding halves away from zero to `decimals` places.
    pub fn format(&self, value: Decimal) -> String {
        let rounded = value.round_dp_with_strategy(self.decimals, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let digits = format!("{:.*}", self.decimals as usize, rounded.abs());

        let (integer, fraction) = match digits.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (digits.as_str(), None),
        };

        let mut out = String::with_capacity(digits.len() + self.prefix.len() + self.suffix.len() + 8);
        out.push_str(&self.prefix);
        if negative {
            out.push('-');
        }
        out.push_str(&self.group(integer));
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out.push_str(&self.suffix);
        out
    }

    fn group(&self, integer: &str) -> String {
        let Some(separator) = self.thousand else {
            return integer.to_string();
        };
        let len = integer.len();
        let mut grouped = String::with_capacity(len + len / 3);
        for (i, ch) in integer.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                grouped.push(separator);
            }
            grouped.push(ch);
        }
        grouped
    }
}

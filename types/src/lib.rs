//! Fundamental types for the bOMM calculation engine.
//!
//! This crate defines the values shared by every other crate in the workspace:
//! decimal timestamps, the fixed time constants, the named lock durations,
//! token descriptors, and decoding of chain hex integers.

pub mod duration;
pub mod error;
pub mod hex;
pub mod time;
pub mod token;

pub use duration::{LockDuration, LOCK_DURATIONS};
pub use error::TypesError;
pub use hex::{hex_to_decimal, hex_to_normalised};
pub use time::{Clock, SystemClock, Timestamp};
pub use token::TokenDescriptor;

/// Re-exported so downstream crates name a single decimal type.
pub use rust_decimal::Decimal;

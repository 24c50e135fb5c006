//! Nullable infrastructure for deterministic testing.
//!
//! The calculation core takes `now` as an argument; production callers read
//! it from [`bomm_types::SystemClock`]. Tests swap in [`NullClock`], which only
//! moves when told to.

pub mod clock;

pub use clock::NullClock;

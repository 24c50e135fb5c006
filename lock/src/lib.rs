//! Time-decay lock model.
//!
//! A lock holds an amount of OMM until an unlock time. Unlock times always
//! land on whole-week boundaries relative to the epoch:
//! `unlock = floor(candidate / WEEK) × WEEK`
//!
//! This crate handles:
//! - Computing the unlock time produced by a new lock or an extension
//! - Tracking a user's lock record across lock, extend and withdraw
//! - Enumerating which named lock durations are still selectable

pub mod error;
pub mod periods;
pub mod state;
pub mod unlock;

pub use error::LockError;
pub use periods::{available_lock_periods, AvailablePeriods};
pub use state::LockState;
pub use unlock::{compute_new_unlock_time, recalculate_lock_period_end};

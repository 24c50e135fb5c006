//! Shared utilities for the bOMM workspace.

pub mod format;
pub mod logging;
pub mod time;

pub use format::NumberFormat;
pub use logging::{init_logging, LogFormat};
pub use time::format_vote_duration;

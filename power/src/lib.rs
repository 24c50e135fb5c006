//! Voting-power valuation.
//!
//! Locked OMM becomes bOMM, a balance that decays linearly to zero at unlock:
//! `slope = locked / FOUR_YEARS`, `bOMM = slope × (unlock − now)`
//!
//! Working balances are then weighed against the protocol-wide working supply
//! to split the protocol's voting power. Results that are shown to users are
//! rounded once to two decimals; intermediate values keep full precision.

pub mod boost;
pub mod error;
pub mod rounding;
pub mod unstaking;
pub mod voting;

pub use boost::{boosted_balance, new_boosted_balance, slope};
pub use error::PowerError;
pub use rounding::round2;
pub use unstaking::average_unstaking_time;
pub use voting::{omm_voting_power, user_voting_power, voting_power};

//! Simulation Systems
//!
//! Affiliation at setup, then the voting rules and the session engine that
//! drive each session.

pub mod affiliation;
pub mod session;
pub mod voting;

pub use affiliation::{choose_party, AFFILIATION_THRESHOLD};
pub use session::{Bill, Legislature};
pub use voting::{cast_vote, jitter, VotingRules};

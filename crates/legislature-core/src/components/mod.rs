//! Entity Model
//!
//! Legislators, parties and the affiliation that links them.

pub mod legislator;
pub mod party;

pub use legislator::Legislator;
pub use party::{Affiliation, Party, PartyId, PartyRegistry, INDEPENDENT_NAME};

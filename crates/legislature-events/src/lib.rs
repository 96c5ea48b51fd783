//! Shared data types for the legislature simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! The core crate produces these; the session log and statistics export
//! serialize them.

pub mod point;
pub mod session;
pub mod vote;

pub use point::{distance, Point};
pub use session::{LegislatorRef, SessionRecord};
pub use vote::{Outcome, Vote, VoteTally};

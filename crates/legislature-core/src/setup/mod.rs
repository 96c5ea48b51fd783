//! Simulation Setup
//!
//! Name generation, word lists, and assembly of parties and legislators.

pub mod chamber;
pub mod names;
pub mod words;

pub use chamber::*;
pub use names::*;
pub use words::*;

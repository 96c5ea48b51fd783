//! Legislature Simulation Library
//!
//! Legislators and parties on a two-axis ideological compass. Legislators
//! join the nearest party within reach, then sessions propose bills near a
//! random advocate and tally votes by ideological distance.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

pub mod components;
pub mod config;
pub mod error;
pub mod events;
pub mod output;
pub mod setup;
pub mod systems;

pub use components::*;
pub use error::SetupError;
pub use systems::{Bill, Legislature, VotingRules};

// Re-export setup functions explicitly to avoid module name conflicts
pub use setup::{affiliation_summary, build_legislature, BillNamer, WordList};

/// Seeded random number generator shared by setup and every session
#[derive(Debug, Clone)]
pub struct SimRng(pub SmallRng);

impl SimRng {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl RngCore for SimRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}

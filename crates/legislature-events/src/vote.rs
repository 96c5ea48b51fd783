//! Vote Types
//!
//! Individual votes, the running tally for a bill, and the pass/fail rule.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single legislator's vote on a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vote {
    Aye,
    Nay,
    Abstain,
}

impl Vote {
    /// One-character marker used in the per-legislator vote strip.
    pub fn symbol(self) -> char {
        match self {
            Vote::Aye => '+',
            Vote::Nay => '-',
            Vote::Abstain => '.',
        }
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vote::Aye => write!(f, "aye"),
            Vote::Nay => write!(f, "nay"),
            Vote::Abstain => write!(f, "abstain"),
        }
    }
}

/// Vote counts for one bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VoteTally {
    pub aye: u32,
    pub nay: u32,
    pub abstain: u32,
}

impl VoteTally {
    /// A tally with the advocate's automatic aye already counted.
    pub fn with_advocate() -> Self {
        Self {
            aye: 1,
            nay: 0,
            abstain: 0,
        }
    }

    pub fn record(&mut self, vote: Vote) {
        match vote {
            Vote::Aye => self.aye += 1,
            Vote::Nay => self.nay += 1,
            Vote::Abstain => self.abstain += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.aye + self.nay + self.abstain
    }

    /// Passes only on a strict aye majority over nays. Abstentions are ignored.
    pub fn outcome(&self) -> Outcome {
        if self.aye > self.nay {
            Outcome::Passed
        } else {
            Outcome::Failed
        }
    }
}

impl FromIterator<Vote> for VoteTally {
    fn from_iter<I: IntoIterator<Item = Vote>>(iter: I) -> Self {
        let mut tally = VoteTally::default();
        for vote in iter {
            tally.record(vote);
        }
        tally
    }
}

/// Result of a session's vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Passed,
    Failed,
}

impl Outcome {
    pub fn is_passed(self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Passed => write!(f, "passed"),
            Outcome::Failed => write!(f, "failed"),
        }
    }
}

//! Session Records
//!
//! The serializable result of one proposal-and-vote cycle. One record is
//! written per line to the session log.

use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::vote::{Outcome, Vote, VoteTally};

/// Identifies a legislator by seat index and display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegislatorRef {
    pub seat: usize,
    pub name: String,
}

impl LegislatorRef {
    pub fn new(seat: usize, name: impl Into<String>) -> Self {
        Self {
            seat,
            name: name.into(),
        }
    }
}

/// Everything that happened during a single session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// 1-based session number
    pub session: u64,
    /// Legislator who proposed the bill
    pub advocate: LegislatorRef,
    /// Display name of the bill
    pub bill_name: String,
    /// Ideological position of the bill
    pub bill_position: Point,
    /// Votes in seat order
    pub votes: Vec<Vote>,
    /// Totals, including the advocate's automatic aye
    pub tally: VoteTally,
    pub outcome: Outcome,
}

impl SessionRecord {
    pub fn passed(&self) -> bool {
        self.outcome.is_passed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> SessionRecord {
        SessionRecord {
            session: 3,
            advocate: LegislatorRef::new(1, "Legislator Ubo Akem"),
            bill_name: "Quiet Harbor Bill".to_string(),
            bill_position: Point::new(-2.0, 4.5),
            votes: vec![Vote::Aye, Vote::Aye, Vote::Nay],
            tally: VoteTally { aye: 3, nay: 1, abstain: 0 },
            outcome: Outcome::Passed,
        }
    }

    #[test]
    fn test_record_json_roundtrip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""bill_name":"Quiet Harbor Bill""#));
        assert!(json.contains(r#""outcome":"passed""#));

        let parsed: SessionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
        assert!(parsed.passed());
    }
}

//! Statistics Output
//!
//! Running pass/fail counts plus per-party vote totals for the end-of-run
//! summary.

use legislature_events::{Outcome, SessionRecord, VoteTally};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::components::{PartyId, PartyRegistry, INDEPENDENT_NAME};
use crate::systems::Legislature;

/// Cumulative session counts.
///
/// `passed + failed == proposed` whenever no session is in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub proposed: u64,
    pub passed: u64,
    pub failed: u64,
}

impl SessionStats {
    /// Count a newly proposed bill and return its 1-based session number.
    pub fn open_session(&mut self) -> u64 {
        self.proposed += 1;
        self.proposed
    }

    /// Record the outcome of the session opened last.
    pub fn close_session(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Passed => self.passed += 1,
            Outcome::Failed => self.failed += 1,
        }
    }

    /// Open and close a session in one step.
    pub fn record(&mut self, outcome: Outcome) {
        self.open_session();
        self.close_session(outcome);
    }

    /// Share of proposed bills that passed, or `None` before any session.
    pub fn pass_percentage(&self) -> Option<f64> {
        if self.proposed == 0 {
            return None;
        }
        Some(self.passed as f64 / self.proposed as f64 * 100.0)
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pass_percentage() {
            Some(pct) => write!(
                f,
                "Pass rate {:.2}% | Proposed: {} | Failed: {}",
                pct, self.proposed, self.failed
            ),
            None => write!(f, "No data yet"),
        }
    }
}

/// Accumulates per-party vote totals across sessions.
///
/// Totals are keyed by party id, with `None` collecting every independent, so
/// two parties that happen to share a name stay apart.
#[derive(Debug, Clone, Default)]
pub struct StatsCollector {
    party_votes: BTreeMap<Option<PartyId>, VoteTally>,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add each seat's vote to its party's totals.
    pub fn record(&mut self, record: &SessionRecord, legislature: &Legislature) {
        for (legislator, vote) in legislature.legislators().iter().zip(&record.votes) {
            self.party_votes
                .entry(legislator.affiliation.party_id())
                .or_default()
                .record(*vote);
        }
    }

    pub fn party_votes(&self) -> &BTreeMap<Option<PartyId>, VoteTally> {
        &self.party_votes
    }

    /// Combine the collected totals with the legislature's counts.
    ///
    /// Parties come out in registry order, independents last.
    pub fn generate_summary(&self, stats: SessionStats, parties: &PartyRegistry) -> StatsSummary {
        let mut party_votes: Vec<PartyVotes> = self
            .party_votes
            .iter()
            .filter_map(|(party, tally)| {
                party.map(|id| PartyVotes {
                    party: Some(id),
                    name: parties
                        .get(id)
                        .map(|p| p.name.clone())
                        .unwrap_or_else(|| id.to_string()),
                    tally: *tally,
                })
            })
            .collect();

        if let Some(tally) = self.party_votes.get(&None) {
            party_votes.push(PartyVotes {
                party: None,
                name: INDEPENDENT_NAME.to_string(),
                tally: *tally,
            });
        }

        StatsSummary {
            proposed: stats.proposed,
            passed: stats.passed,
            failed: stats.failed,
            pass_percentage: stats.pass_percentage(),
            party_votes,
        }
    }
}

/// Vote totals for one party, or for all independents when `party` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyVotes {
    pub party: Option<PartyId>,
    pub name: String,
    pub tally: VoteTally,
}

/// End-of-run summary written by `--stats-out`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub proposed: u64,
    pub passed: u64,
    pub failed: u64,
    pub pass_percentage: Option<f64>,
    pub party_votes: Vec<PartyVotes>,
}

/// Write a summary as pretty JSON.
pub fn write_stats(path: impl AsRef<Path>, summary: &StatsSummary) -> std::io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(summary)?;
    fs::write(path, json)
}

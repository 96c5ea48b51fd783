//! Affiliation Resolver
//!
//! Picks the nearest party within reach of a legislator's position.

use legislature_events::{distance, Point};

use crate::components::party::{Affiliation, Party};

/// Parties at or beyond this distance are never joined.
pub const AFFILIATION_THRESHOLD: f64 = 5.0;

/// Resolve the affiliation for a position.
///
/// Candidates are scanned in order. A party replaces the current best only
/// when it is strictly closer and strictly inside [`AFFILIATION_THRESHOLD`],
/// so the first of several equidistant parties wins. With no qualifying
/// party the result is [`Affiliation::Independent`] at `position` itself.
pub fn choose_party(position: Point, candidates: &[Party]) -> Affiliation {
    let mut best = Affiliation::Independent(position);
    let mut best_distance = f64::INFINITY;

    for party in candidates {
        let party_distance = distance(position, party.position);
        if party_distance < best_distance && party_distance < AFFILIATION_THRESHOLD {
            best = Affiliation::Party(party.id);
            best_distance = party_distance;
        }
    }

    best
}

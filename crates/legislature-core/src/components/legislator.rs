//! Legislator Component

use legislature_events::Point;
use serde::{Deserialize, Serialize};

use super::party::{Affiliation, PartyRegistry};
use crate::systems::affiliation::choose_party;

/// A seat holder with a fixed ideological position.
///
/// Affiliation is resolved once, at construction, and never revisited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legislator {
    /// Display name (not required to be unique)
    pub name: String,
    pub position: Point,
    pub affiliation: Affiliation,
}

impl Legislator {
    /// Create a legislator and affiliate them with the nearest qualifying party.
    pub fn new(name: impl Into<String>, position: Point, parties: &PartyRegistry) -> Self {
        Self {
            name: name.into(),
            position,
            affiliation: choose_party(position, parties.all()),
        }
    }

    /// "Name (Party)" as printed in the roster.
    pub fn describe(&self, parties: &PartyRegistry) -> String {
        format!("{} ({})", self.name, self.affiliation.name(parties))
    }
}

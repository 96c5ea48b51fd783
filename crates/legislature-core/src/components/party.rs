//! Party Components
//!
//! Parties, the ordered registry that holds them, and a legislator's
//! affiliation (a registered party or the Independent variant).

use legislature_events::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display name shared by every independent legislator.
pub const INDEPENDENT_NAME: &str = "Independent";

/// Index of a party in its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartyId(pub usize);

impl fmt::Display for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "party_{:02}", self.0)
    }
}

/// A named party with a fixed ideological center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub id: PartyId,
    /// Display name
    pub name: String,
    /// Ideological center
    pub position: Point,
}

/// Parties in creation order.
///
/// The order is significant: the affiliation resolver scans it front to back
/// and keeps the first party on equal distance.
#[derive(Debug, Clone, Default)]
pub struct PartyRegistry {
    parties: Vec<Party>,
}

impl PartyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a party and return its id
    pub fn register(&mut self, name: impl Into<String>, position: Point) -> PartyId {
        let id = PartyId(self.parties.len());
        self.parties.push(Party {
            id,
            name: name.into(),
            position,
        });
        id
    }

    pub fn get(&self, id: PartyId) -> Option<&Party> {
        self.parties.get(id.0)
    }

    /// All parties in registration order
    pub fn all(&self) -> &[Party] {
        &self.parties
    }

    pub fn len(&self) -> usize {
        self.parties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parties.is_empty()
    }
}

/// The party a legislator belongs to.
///
/// An independent carries their own position so the affiliation can always
/// report a name and a center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Affiliation {
    Party(PartyId),
    Independent(Point),
}

impl Affiliation {
    pub fn is_independent(&self) -> bool {
        matches!(self, Affiliation::Independent(_))
    }

    pub fn party_id(&self) -> Option<PartyId> {
        match self {
            Affiliation::Party(id) => Some(*id),
            Affiliation::Independent(_) => None,
        }
    }

    /// Display name, resolved through the registry that minted the id.
    pub fn name<'a>(&self, parties: &'a PartyRegistry) -> &'a str {
        match self {
            Affiliation::Party(id) => parties
                .get(*id)
                .map(|party| party.name.as_str())
                .unwrap_or(INDEPENDENT_NAME),
            Affiliation::Independent(_) => INDEPENDENT_NAME,
        }
    }

    /// Ideological center of the affiliation.
    pub fn position(&self, parties: &PartyRegistry) -> Option<Point> {
        match self {
            Affiliation::Party(id) => parties.get(*id).map(|party| party.position),
            Affiliation::Independent(position) => Some(*position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_party_registry() -> PartyRegistry {
        let mut registry = PartyRegistry::new();
        registry.register("Obaru Party", Point::new(-3.0, 2.0));
        registry.register("Itek Party", Point::new(4.0, -1.0));
        registry
    }

    #[test]
    fn test_register_assigns_sequential_ids() {
        let registry = two_party_registry();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.all()[0].id, PartyId(0));
        assert_eq!(registry.all()[1].id, PartyId(1));
        assert_eq!(registry.get(PartyId(1)).unwrap().name, "Itek Party");
        assert!(registry.get(PartyId(2)).is_none());
    }

    #[test]
    fn test_party_affiliation_resolves_through_registry() {
        let registry = two_party_registry();
        let affiliation = Affiliation::Party(PartyId(0));

        assert!(!affiliation.is_independent());
        assert_eq!(affiliation.name(&registry), "Obaru Party");
        assert_eq!(affiliation.position(&registry), Some(Point::new(-3.0, 2.0)));
        assert_eq!(affiliation.party_id(), Some(PartyId(0)));
    }

    #[test]
    fn test_independent_carries_own_position() {
        let registry = two_party_registry();
        let affiliation = Affiliation::Independent(Point::new(7.5, 7.5));

        assert!(affiliation.is_independent());
        assert_eq!(affiliation.name(&registry), INDEPENDENT_NAME);
        assert_eq!(affiliation.position(&registry), Some(Point::new(7.5, 7.5)));
        assert_eq!(affiliation.party_id(), None);
    }
}

//! Chamber Setup
//!
//! Creates the parties, seats the legislators and assembles the legislature.

use legislature_events::point::{AXIS_MAX, AXIS_MIN};
use legislature_events::Point;
use rand::Rng;
use tracing::info;

use super::names::{legislator_name, party_name};
use crate::components::{Legislator, PartyRegistry};
use crate::config::SimulationConfig;
use crate::error::SetupError;
use crate::systems::{Legislature, VotingRules};

/// Uniformly random position on the compass.
pub fn random_position<R: Rng + ?Sized>(rng: &mut R) -> Point {
    Point::new(
        rng.gen_range(AXIS_MIN..AXIS_MAX),
        rng.gen_range(AXIS_MIN..AXIS_MAX),
    )
}

/// Create `count` parties, each drawing a name and then a position.
pub fn create_parties<R: Rng + ?Sized>(
    count: usize,
    name_max_length: usize,
    rng: &mut R,
) -> PartyRegistry {
    let mut registry = PartyRegistry::new();
    for _ in 0..count {
        let name = party_name(rng, name_max_length);
        let position = random_position(rng);
        registry.register(name, position);
    }
    registry
}

/// Create `count` legislators affiliated against `parties`.
pub fn create_legislators<R: Rng + ?Sized>(
    count: usize,
    name_max_length: usize,
    parties: &PartyRegistry,
    rng: &mut R,
) -> Vec<Legislator> {
    (0..count)
        .map(|_| {
            let name = legislator_name(rng, name_max_length);
            let position = random_position(rng);
            Legislator::new(name, position, parties)
        })
        .collect()
}

/// Build the whole legislature.
///
/// Seat and party counts and the voting rules are checked before any
/// randomness is consumed, so a failed setup never exposes a partial
/// legislature.
pub fn build_legislature<R: Rng + ?Sized>(
    config: &SimulationConfig,
    rules: VotingRules,
    rng: &mut R,
) -> Result<Legislature, SetupError> {
    if config.seats == 0 {
        return Err(SetupError::NoLegislators);
    }
    if config.parties == 0 {
        return Err(SetupError::NoParties);
    }
    rules.validate()?;

    let parties = create_parties(config.parties, config.name_max_length, rng);
    info!(count = parties.len(), "Created parties");

    let legislators = create_legislators(config.seats, config.name_max_length, &parties, rng);
    info!(count = legislators.len(), "Seated legislators");

    Legislature::new(parties, legislators, rules)
}

/// Seat counts per party, for the roster printout.
#[derive(Debug, Clone, PartialEq)]
pub struct AffiliationSummary {
    /// (party name, members) in registry order
    pub by_party: Vec<(String, usize)>,
    pub independents: usize,
}

/// Count members of each party and the independents.
pub fn affiliation_summary(legislature: &Legislature) -> AffiliationSummary {
    let parties = legislature.parties();
    let mut counts = vec![0usize; parties.len()];
    let mut independents = 0;

    for legislator in legislature.legislators() {
        match legislator.affiliation.party_id() {
            Some(id) if id.0 < counts.len() => counts[id.0] += 1,
            _ => independents += 1,
        }
    }

    AffiliationSummary {
        by_party: parties
            .all()
            .iter()
            .zip(counts)
            .map(|(party, count)| (party.name.clone(), count))
            .collect(),
        independents,
    }
}

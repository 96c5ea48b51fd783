//! Session Engine
//!
//! The legislature proposes one bill per session, takes a roll call and keeps
//! running pass/fail counts.
//!
//! Random draws happen in a fixed order within a session: advocate seat, bill
//! x offset, bill y offset, bill name, then one opposition threshold (and
//! possibly a nay/abstain coin) per seat in seat order.

use legislature_events::{distance, LegislatorRef, Point, SessionRecord, Vote, VoteTally};
use rand::Rng;
use tracing::debug;

use super::voting::{cast_vote, jitter, VotingRules};
use crate::components::{Legislator, PartyRegistry};
use crate::error::SetupError;
use crate::output::stats::SessionStats;
use crate::setup::words::BillNamer;

/// A bill under consideration. Lives for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub name: String,
    pub position: Point,
}

/// Fixed body of legislators plus cumulative session counts.
#[derive(Debug, Clone)]
pub struct Legislature {
    parties: PartyRegistry,
    legislators: Vec<Legislator>,
    rules: VotingRules,
    stats: SessionStats,
}

impl Legislature {
    /// Seat the given legislators. An empty chamber or invalid rules are rejected.
    pub fn new(
        parties: PartyRegistry,
        legislators: Vec<Legislator>,
        rules: VotingRules,
    ) -> Result<Self, SetupError> {
        if legislators.is_empty() {
            return Err(SetupError::NoLegislators);
        }
        rules.validate()?;

        Ok(Self {
            parties,
            legislators,
            rules,
            stats: SessionStats::default(),
        })
    }

    /// Legislators in seat order
    pub fn legislators(&self) -> &[Legislator] {
        &self.legislators
    }

    pub fn parties(&self) -> &PartyRegistry {
        &self.parties
    }

    pub fn rules(&self) -> &VotingRules {
        &self.rules
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn seat_count(&self) -> usize {
        self.legislators.len()
    }

    /// Run one complete session and return what happened.
    pub fn hold_session<R: Rng + ?Sized>(&mut self, rng: &mut R, namer: &BillNamer) -> SessionRecord {
        let session = self.stats.open_session();

        let advocate_seat = rng.gen_range(0..self.legislators.len());
        let bill = self.propose_bill(advocate_seat, rng, namer);
        let (votes, tally) = self.roll_call(advocate_seat, &bill, rng);
        let outcome = tally.outcome();

        self.stats.close_session(outcome);

        let advocate = &self.legislators[advocate_seat];
        debug!(
            session,
            advocate = %advocate.name,
            bill = %bill.name,
            aye = tally.aye,
            nay = tally.nay,
            abstain = tally.abstain,
            %outcome,
            "Session concluded"
        );

        SessionRecord {
            session,
            advocate: LegislatorRef::new(advocate_seat, advocate.name.clone()),
            bill_name: bill.name,
            bill_position: bill.position,
            votes,
            tally,
            outcome,
        }
    }

    /// Draft a bill near the advocate's position.
    pub fn propose_bill<R: Rng + ?Sized>(
        &self,
        advocate_seat: usize,
        rng: &mut R,
        namer: &BillNamer,
    ) -> Bill {
        let origin = self.legislators[advocate_seat].position;
        let dx = jitter(rng, self.rules.bill_jitter);
        let dy = jitter(rng, self.rules.bill_jitter);
        let position = origin.offset(dx, dy);

        Bill {
            name: namer.name(rng),
            position,
        }
    }

    /// Poll every seat. The tally starts with the advocate's aye.
    ///
    /// With `recount_advocate` set, the advocate is polled again like everyone
    /// else and may be counted twice. Otherwise their seat is recorded as the
    /// aye already counted.
    fn roll_call<R: Rng + ?Sized>(
        &self,
        advocate_seat: usize,
        bill: &Bill,
        rng: &mut R,
    ) -> (Vec<Vote>, VoteTally) {
        let mut tally = VoteTally::with_advocate();
        let mut votes = Vec::with_capacity(self.legislators.len());

        for (seat, legislator) in self.legislators.iter().enumerate() {
            if seat == advocate_seat && !self.rules.recount_advocate {
                votes.push(Vote::Aye);
                continue;
            }

            let vote = cast_vote(rng, distance(legislator.position, bill.position), &self.rules);
            tally.record(vote);
            votes.push(vote);
        }

        (votes, tally)
    }
}

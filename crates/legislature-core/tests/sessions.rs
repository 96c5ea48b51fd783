//! Session behavior across hand-built and generated chambers.

use legislature_core::components::{Affiliation, Legislator, PartyId, PartyRegistry};
use legislature_core::config::SimulationConfig;
use legislature_core::output::{render_session, BufferSink, StatsCollector};
use legislature_core::{build_legislature, BillNamer, Legislature, SimRng, VotingRules};
use legislature_events::{Point, Vote};

fn hand_built(rules: VotingRules) -> Legislature {
    let mut parties = PartyRegistry::new();
    parties.register("Left Party", Point::new(-6.0, 0.0));
    parties.register("Right Party", Point::new(6.0, 0.0));

    let legislators = vec![
        Legislator::new("Legislator A", Point::new(-7.0, 1.0), &parties),
        Legislator::new("Legislator B", Point::new(-5.0, -1.0), &parties),
        Legislator::new("Legislator C", Point::new(0.0, 0.0), &parties),
        Legislator::new("Legislator D", Point::new(5.5, 2.0), &parties),
        Legislator::new("Legislator E", Point::new(9.0, -9.0), &parties),
    ];

    Legislature::new(parties, legislators, rules).unwrap()
}

#[test]
fn test_hand_built_affiliations() {
    let legislature = hand_built(VotingRules::default());
    let affiliations: Vec<Affiliation> = legislature
        .legislators()
        .iter()
        .map(|l| l.affiliation)
        .collect();

    assert_eq!(affiliations[0], Affiliation::Party(PartyId(0)));
    assert_eq!(affiliations[1], Affiliation::Party(PartyId(0)));
    // Six units from both parties
    assert_eq!(affiliations[2], Affiliation::Independent(Point::new(0.0, 0.0)));
    assert_eq!(affiliations[3], Affiliation::Party(PartyId(1)));
    assert_eq!(affiliations[4], Affiliation::Independent(Point::new(9.0, -9.0)));
}

#[test]
fn test_invariants_hold_every_session() {
    let mut legislature = hand_built(VotingRules::default());
    let namer = BillNamer::builtin().unwrap();
    let mut rng = SimRng::seed_from_u64(31);

    for n in 1..=100u64 {
        let before = legislature.stats().proposed;
        let record = legislature.hold_session(&mut rng, &namer);
        let stats = legislature.stats();

        assert_eq!(stats.proposed, before + 1);
        assert_eq!(stats.proposed, n);
        assert_eq!(stats.passed + stats.failed, stats.proposed);
        assert_eq!(record.votes.len(), legislature.seat_count());
        // Automatic aye plus one vote per seat
        assert_eq!(record.tally.total() as usize, legislature.seat_count() + 1);
        assert_eq!(record.passed(), record.tally.aye > record.tally.nay);
    }
}

#[test]
fn test_tally_matches_recorded_votes() {
    let mut legislature = hand_built(VotingRules::default());
    let namer = BillNamer::builtin().unwrap();
    let mut rng = SimRng::seed_from_u64(8);

    for _ in 0..50 {
        let record = legislature.hold_session(&mut rng, &namer);
        let ayes = record.votes.iter().filter(|v| **v == Vote::Aye).count() as u32;
        let nays = record.votes.iter().filter(|v| **v == Vote::Nay).count() as u32;
        assert_eq!(record.tally.aye, ayes + 1);
        assert_eq!(record.tally.nay, nays);
    }
}

#[test]
fn test_collector_counts_every_vote() {
    let mut rng = SimRng::seed_from_u64(2);
    let namer = BillNamer::builtin().unwrap();
    let mut legislature =
        build_legislature(&SimulationConfig::default(), VotingRules::default(), &mut rng).unwrap();
    let mut collector = StatsCollector::new();

    for _ in 0..10 {
        let record = legislature.hold_session(&mut rng, &namer);
        collector.record(&record, &legislature);
    }

    let counted: u32 = collector.party_votes().values().map(|t| t.total()).sum();
    assert_eq!(counted as usize, 10 * legislature.seat_count());

    let summary = collector.generate_summary(legislature.stats(), legislature.parties());
    assert_eq!(summary.proposed, 10);
    assert!(summary.pass_percentage.is_some());
    let summarized: u32 = summary.party_votes.iter().map(|row| row.tally.total()).sum();
    assert_eq!(summarized, counted);
    assert!(summary.party_votes.len() <= legislature.parties().len() + 1);
}

#[test]
fn test_rendered_report_has_one_mark_per_seat() {
    let mut legislature = hand_built(VotingRules::default());
    let namer = BillNamer::builtin().unwrap();
    let mut rng = SimRng::seed_from_u64(4);

    let record = legislature.hold_session(&mut rng, &namer);
    let mut sink = BufferSink::new();
    render_session(&record, &legislature.stats(), &mut sink).unwrap();

    let lines = sink.lines();
    let strip = lines[2].trim();
    assert_eq!(strip.chars().count(), legislature.seat_count());
    assert!(strip.chars().all(|c| matches!(c, '+' | '-' | '.')));
    assert!(lines[5].contains("Proposed: 1"));
}

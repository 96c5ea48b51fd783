//! Console Rendering
//!
//! Turns session records into text plus an emphasis tag per fragment. The
//! sink decides what emphasis looks like; the console sink colors it.

use crossterm::style::{style, Color, Stylize};
use legislature_events::{Outcome, SessionRecord, Vote};
use std::io::{self, Write};

use super::stats::SessionStats;
use crate::setup::chamber::affiliation_summary;
use crate::systems::Legislature;

/// Display hint attached to a fragment of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Plain,
    Heading,
    Aye,
    Nay,
    Abstain,
    Passed,
    Failed,
}

impl From<Vote> for Emphasis {
    fn from(vote: Vote) -> Self {
        match vote {
            Vote::Aye => Emphasis::Aye,
            Vote::Nay => Emphasis::Nay,
            Vote::Abstain => Emphasis::Abstain,
        }
    }
}

impl From<Outcome> for Emphasis {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Passed => Emphasis::Passed,
            Outcome::Failed => Emphasis::Failed,
        }
    }
}

/// Line-oriented output that accepts emphasized fragments.
pub trait DisplaySink {
    fn emit(&mut self, text: &str, emphasis: Emphasis) -> io::Result<()>;

    fn end_line(&mut self) -> io::Result<()>;

    fn line(&mut self, text: &str) -> io::Result<()> {
        self.emit(text, Emphasis::Plain)?;
        self.end_line()
    }
}

/// Colored output to any writer, stdout by default.
pub struct ConsoleSink<W: Write = io::Stdout> {
    out: W,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> DisplaySink for ConsoleSink<W> {
    fn emit(&mut self, text: &str, emphasis: Emphasis) -> io::Result<()> {
        match emphasis {
            Emphasis::Plain => write!(self.out, "{}", text),
            Emphasis::Heading => write!(self.out, "{}", style(text).bold()),
            Emphasis::Aye => write!(self.out, "{}", style(text).with(Color::Green)),
            Emphasis::Nay => write!(self.out, "{}", style(text).with(Color::Red)),
            Emphasis::Abstain => write!(self.out, "{}", style(text).with(Color::Yellow)),
            Emphasis::Passed => write!(self.out, "{}", style(text).with(Color::Green).bold()),
            Emphasis::Failed => write!(self.out, "{}", style(text).with(Color::Red).bold()),
        }
    }

    fn end_line(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// Collects plain text and the emphasis of each fragment.
#[derive(Debug, Default)]
pub struct BufferSink {
    pub text: String,
    pub fragments: Vec<(String, Emphasis)>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<&str> {
        self.text.lines().collect()
    }
}

impl DisplaySink for BufferSink {
    fn emit(&mut self, text: &str, emphasis: Emphasis) -> io::Result<()> {
        self.text.push_str(text);
        self.fragments.push((text.to_string(), emphasis));
        Ok(())
    }

    fn end_line(&mut self) -> io::Result<()> {
        self.text.push('\n');
        Ok(())
    }
}

/// Print every legislator with their party, then seat counts per party.
pub fn render_roster(legislature: &Legislature, sink: &mut dyn DisplaySink) -> io::Result<()> {
    let parties = legislature.parties();

    sink.emit("Parties", Emphasis::Heading)?;
    sink.end_line()?;
    for party in parties.all() {
        sink.line(&format!("  {} {}", party.name, party.position))?;
    }

    sink.emit("Legislators", Emphasis::Heading)?;
    sink.end_line()?;
    for legislator in legislature.legislators() {
        sink.line(&format!("  {}", legislator.describe(parties)))?;
    }

    let summary = affiliation_summary(legislature);
    for (name, members) in &summary.by_party {
        sink.line(&format!("  {}: {} seats", name, members))?;
    }
    sink.line(&format!("  Independents: {} seats", summary.independents))
}

/// Print one session: bill, vote strip, totals, outcome, running stats.
pub fn render_session(
    record: &SessionRecord,
    stats: &SessionStats,
    sink: &mut dyn DisplaySink,
) -> io::Result<()> {
    sink.emit(
        &format!("Session {}: {}", record.session, record.bill_name),
        Emphasis::Heading,
    )?;
    sink.end_line()?;
    sink.line(&format!(
        "  Proposed by {} at {}",
        record.advocate.name, record.bill_position
    ))?;

    sink.emit("  ", Emphasis::Plain)?;
    for vote in &record.votes {
        sink.emit(&vote.symbol().to_string(), Emphasis::from(*vote))?;
    }
    sink.end_line()?;

    sink.emit("  Aye: ", Emphasis::Plain)?;
    sink.emit(&record.tally.aye.to_string(), Emphasis::Aye)?;
    sink.emit("  Nay: ", Emphasis::Plain)?;
    sink.emit(&record.tally.nay.to_string(), Emphasis::Nay)?;
    sink.emit("  Abstain: ", Emphasis::Plain)?;
    sink.emit(&record.tally.abstain.to_string(), Emphasis::Abstain)?;
    sink.end_line()?;

    sink.emit("  The motion ", Emphasis::Plain)?;
    sink.emit(&record.outcome.to_string(), Emphasis::from(record.outcome))?;
    sink.end_line()?;

    sink.line(&format!("  {}", stats))
}

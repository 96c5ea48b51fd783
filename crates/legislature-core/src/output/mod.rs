//! Output
//!
//! Session statistics and console rendering.

pub mod render;
pub mod stats;

pub use render::{render_roster, render_session, BufferSink, ConsoleSink, DisplaySink, Emphasis};
pub use stats::{write_stats, PartyVotes, SessionStats, StatsCollector, StatsSummary};

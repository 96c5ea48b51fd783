//! Setup Errors
//!
//! Everything that can stop a legislature from being built. All of these are
//! detected before the first session runs; none are retried.

use std::path::PathBuf;

/// Errors raised while assembling the simulation.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// The legislature would have no seats.
    #[error("a legislature needs at least one legislator")]
    NoLegislators,

    /// There are no parties for legislators to join.
    #[error("at least one party is required")]
    NoParties,

    /// A voting knob is negative or not a finite number.
    #[error("voting rule {field} must be a finite, non-negative number (got {value})")]
    InvalidVotingRules {
        /// Name of the offending field.
        field: &'static str,
        /// Value that was rejected.
        value: f64,
    },

    /// A word list used for bill names has no entries.
    #[error("the {list} word list is empty")]
    EmptyWordList {
        /// Which list (adjectives or nouns).
        list: &'static str,
    },

    /// A word list file could not be read.
    #[error("could not read {list} word list from {path}: {source}")]
    WordListIo {
        /// Which list (adjectives or nouns).
        list: &'static str,
        /// File that failed to load.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

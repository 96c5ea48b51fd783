//! Configuration System
//!
//! Loads tuning parameters from tuning.toml so chamber size and voting noise
//! can be adjusted without recompiling. Every field has a default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::setup::names::DEFAULT_NAME_MAX_LENGTH;
use crate::systems::VotingRules;

/// Default tuning file path
pub const DEFAULT_TUNING_PATH: &str = "tuning.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub voting: VotingRules,
    pub words: WordsConfig,
}

/// Chamber composition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of legislators
    pub seats: usize,
    /// Number of parties
    pub parties: usize,
    /// Exclusive upper bound on generated name length
    pub name_max_length: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seats: 20,
            parties: 3,
            name_max_length: DEFAULT_NAME_MAX_LENGTH,
        }
    }
}

/// Optional word list files for bill names
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordsConfig {
    pub adjectives: Option<PathBuf>,
    pub nouns: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from default path, or use defaults if not found
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Self::load_or_default_from(DEFAULT_TUNING_PATH)
    }

    /// Load `path` if it exists. Only a missing file falls back to defaults;
    /// unreadable or malformed files are errors.
    pub fn load_or_default_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                warn!("{} not found. Using defaults.", path.display());
                Ok(Self::default())
            }
            result => result,
        }
    }
}

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

//! Configuration loading for combatant stat tables

mod roster;

pub use roster::{OpponentConfig, Roster, RosterFileConfig, StatsConfig, DEFAULT_OPPONENT_NAME};

use std::path::PathBuf;
use thiserror::Error;

/// Error loading roster configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{}': {error}", path.display())]
    Io {
        error: std::io::Error,
        path: PathBuf,
    },
    #[error("Parse error in '{}': {error}", path.display())]
    Parse {
        error: toml::de::Error,
        path: PathBuf,
    },
    #[error("Validation error in '{}': {message}", path.display())]
    Validation { message: String, path: PathBuf },
}

use serde::{Deserialize, Serialize};

/// Where the database lives when nothing else is configured. `mode=rwc`
/// creates the file on first use.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:crier.db?mode=rwc";

/// Runtime configuration, collected from CLI flags and environment
/// (`DATABASE_URL`) by clap and shared with every command handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
}

impl Config {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

//! Connection settings for the solver service and the puzzle page.

use serde::Deserialize;
use std::time::Duration;

/// Base URL of the solver API; `display` and `solve` live below it.
pub const DEFAULT_SOLVER_URL: &str = "http://localhost:7878/api";
/// Entry page of the puzzle source.
pub const DEFAULT_SOURCE_URL: &str = "http://www.websudoku.com/";
/// Hardest ("evil") websudoku level.
pub const DEFAULT_LEVEL: u8 = 4;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for the shared HTTP client and the solver endpoints.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    #[serde(default = "default_solver_url")]
    pub solver_url: String,
    /// Per-request timeout in seconds. A timed out request is a transport failure.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_solver_url() -> String {
    DEFAULT_SOLVER_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            solver_url: default_solver_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Settings for the puzzle page scraper.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    #[serde(default = "default_source_url")]
    pub source_url: String,
    /// Difficulty, 1 (easy) to 4 (evil), sent as the `level` query parameter.
    #[serde(default = "default_level")]
    pub level: u8,
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_level() -> u8 {
    DEFAULT_LEVEL
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            level: default_level(),
        }
    }
}

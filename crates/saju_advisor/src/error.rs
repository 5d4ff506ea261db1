//! Advisor errors.

use std::path::PathBuf;
use std::time::Duration;

use saju_base::{FortuneError, PillarError};
use thiserror::Error;

/// Configuration error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file.
    #[error("failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML.
    #[error("failed to parse config file '{path}': {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A value parsed but is not usable.
    #[error("invalid config value for '{field}': {message}")]
    Invalid { field: &'static str, message: String },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse_toml(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::ParseToml {
            path: path.into(),
            source,
        }
    }
}

/// Failure of the seasonal-topic search collaborator.
///
/// Never surfaced by [`crate::Advisor::advise`]; every variant falls back to
/// the static seasonal table.
#[derive(Debug, Error)]
pub enum SearchError {
    /// No endpoint is configured.
    #[error("seasonal search is not configured")]
    Unavailable,

    /// The credential environment variable is unset or empty.
    #[error("missing search credentials in environment variable '{0}'")]
    MissingCredentials(String),

    /// The search did not answer in time.
    #[error("seasonal search timed out after {0:?}")]
    Timeout(Duration),

    #[error("seasonal search request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body had none of the expected shapes.
    #[error("unexpected seasonal search response: {0}")]
    Decode(String),
}

/// Error type for the personalization orchestrator.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The birth input could not be charted.
    #[error("chart error: {0}")]
    Chart(#[from] PillarError),

    /// The current date is outside the supported fortune range.
    #[error("fortune error: {0}")]
    Fortune(#[from] FortuneError),

    /// `today` precedes the birth date.
    #[error("current year {today_year} is before the birth year {birth_year}")]
    BeforeBirth { today_year: i32, birth_year: i32 },
}

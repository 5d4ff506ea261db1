//! Advisor configuration.
//!
//! Loaded from a TOML file; every field has a default so an empty file (or
//! no file at all) yields a working offline configuration.
//!
//! ```toml
//! locale = "en"
//!
//! [search]
//! endpoint = "https://search.example.com/v1/seasonal"
//! api_key_env = "SAJU_SEARCH_API_KEY"
//! timeout_ms = 3000
//! max_topics = 5
//!
//! [chart]
//! longitude_deg = 126.978
//! utc_offset_minutes = 540
//! ```

use std::path::Path;
use std::time::Duration;

use saju_base::{KST_OFFSET_MINUTES, Locale, SEOUL_LONGITUDE_DEG};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default environment variable holding the search API key.
pub const DEFAULT_API_KEY_ENV: &str = "SAJU_SEARCH_API_KEY";
/// Default search timeout.
pub const DEFAULT_SEARCH_TIMEOUT_MS: u64 = 3000;
/// Upper bound on seasonal topics taken from the collaborator.
pub const MAX_SEASONAL_TOPICS: usize = 5;

/// Seasonal-topic search settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// HTTP endpoint; `None` disables the live search.
    pub endpoint: Option<String>,
    /// Name of the environment variable holding the bearer key.
    pub api_key_env: String,
    pub timeout_ms: u64,
    pub max_topics: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_ms: DEFAULT_SEARCH_TIMEOUT_MS,
            max_topics: MAX_SEASONAL_TOPICS,
        }
    }
}

impl SearchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Defaults applied to birth inputs that omit a location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartDefaults {
    pub longitude_deg: f64,
    pub utc_offset_minutes: i32,
}

impl Default for ChartDefaults {
    fn default() -> Self {
        Self {
            longitude_deg: SEOUL_LONGITUDE_DEG,
            utc_offset_minutes: KST_OFFSET_MINUTES,
        }
    }
}

/// Top-level advisor configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    pub locale: Locale,
    pub search: SearchConfig,
    pub chart: ChartDefaults,
}

impl AdvisorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(text).map_err(|e| ConfigError::parse_toml(origin, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml_str(&text, path)
    }

    /// Load from `path` when given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "search.timeout_ms",
                message: "must be positive".to_string(),
            });
        }
        if self.search.max_topics == 0 || self.search.max_topics > MAX_SEASONAL_TOPICS {
            return Err(ConfigError::Invalid {
                field: "search.max_topics",
                message: format!("must be in 1..={MAX_SEASONAL_TOPICS}"),
            });
        }
        if !(-180.0..=180.0).contains(&self.chart.longitude_deg) {
            return Err(ConfigError::Invalid {
                field: "chart.longitude_deg",
                message: format!("{} is outside [-180, 180]", self.chart.longitude_deg),
            });
        }
        if !(-14 * 60..=14 * 60).contains(&self.chart.utc_offset_minutes) {
            return Err(ConfigError::Invalid {
                field: "chart.utc_offset_minutes",
                message: format!("{} is outside ±14h", self.chart.utc_offset_minutes),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let c = AdvisorConfig::from_toml_str("", Path::new("mem")).unwrap();
        assert_eq!(c, AdvisorConfig::default());
        assert_eq!(c.search.timeout(), Duration::from_millis(3000));
        assert!(c.search.endpoint.is_none());
    }

    #[test]
    fn partial_document() {
        let text = r#"
            locale = "en"
            [search]
            endpoint = "http://localhost:9000/seasonal"
            timeout_ms = 250
        "#;
        let c = AdvisorConfig::from_toml_str(text, Path::new("mem")).unwrap();
        assert_eq!(c.locale, Locale::En);
        assert_eq!(c.search.timeout_ms, 250);
        assert_eq!(c.search.max_topics, MAX_SEASONAL_TOPICS);
        assert_eq!(c.search.api_key_env, DEFAULT_API_KEY_ENV);
        assert_eq!(c.chart.utc_offset_minutes, 540);
    }

    #[test]
    fn rejects_bad_values() {
        let err = AdvisorConfig::from_toml_str("[search]\nmax_topics = 9", Path::new("mem"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "search.max_topics", .. }));
        let err = AdvisorConfig::from_toml_str("[chart]\nlongitude_deg = 200.0", Path::new("mem"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        let err = AdvisorConfig::from_toml_str("[search\n", Path::new("mem")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
    }

    #[test]
    fn missing_file() {
        let err = AdvisorConfig::load(Path::new("/nonexistent/saju.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
        assert_eq!(AdvisorConfig::load_or_default(None).unwrap(), AdvisorConfig::default());
    }
}

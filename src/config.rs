//! Engine configuration.
//!
//! Sources, highest priority first:
//! 1. Environment variables with the `UWBS_` prefix (`UWBS_SIMILAR_EVENT_COUNT=5`)
//! 2. A TOML file (`u-wbs.toml` in the working directory, or an explicit path)
//! 3. Built-in defaults
//!
//! # Usage
//!
//! ```no_run
//! use u_wbs::config::EngineConfig;
//!
//! let config = EngineConfig::load().expect("config");
//! println!("today is {}", config.today());
//! ```

use std::path::{Path, PathBuf};

use chrono::{FixedOffset, NaiveDate, Utc};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "u-wbs.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "UWBS_";

const SECONDS_PER_HOUR: i32 = 3600;

/// Tunables of the synthesis engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixed UTC offset of the planning calendar, in hours.
    pub utc_offset_hours: i32,
    /// Number of similar past events surfaced.
    pub similar_event_count: usize,
    /// Number of lessons learned surfaced.
    pub key_learning_limit: usize,
    /// JSON corpus file; the built-in corpus is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corpus_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: 7,
            similar_event_count: 3,
            key_learning_limit: 5,
            corpus_path: None,
        }
    }
}

impl EngineConfig {
    /// Loads defaults, `u-wbs.toml` if present, then the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment(None))
    }

    /// Like [`load`](Self::load) but reads the TOML file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::extract(Self::figment(Some(path)))
    }

    /// Builds the provider chain. A missing file layer is skipped.
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        let file = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf);
        if file.exists() {
            figment = figment.merge(Toml::file(file));
        }

        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the engine cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(-23..=23).contains(&self.utc_offset_hours) {
            return Err(ConfigError::InvalidValue {
                field: "utc_offset_hours".into(),
                reason: format!("{} is outside -23..=23", self.utc_offset_hours),
            });
        }
        Ok(())
    }

    /// The planning calendar's time zone.
    pub fn time_zone(&self) -> Result<FixedOffset, ConfigError> {
        FixedOffset::east_opt(self.utc_offset_hours * SECONDS_PER_HOUR).ok_or_else(|| {
            ConfigError::InvalidValue {
                field: "utc_offset_hours".into(),
                reason: format!("{} is not a valid offset", self.utc_offset_hours),
            }
        })
    }

    /// Current date in the planning calendar; UTC if the offset is invalid.
    pub fn today(&self) -> NaiveDate {
        let now = Utc::now();
        match self.time_zone() {
            Ok(tz) => now.with_timezone(&tz).date_naive(),
            Err(_) => now.date_naive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.utc_offset_hours, 7);
        assert_eq!(config.similar_event_count, 3);
        assert_eq!(config.key_learning_limit, 5);
        assert!(config.corpus_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_offset_rejected() {
        let config = EngineConfig {
            utc_offset_hours: 30,
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(config.time_zone().is_err());
    }

    #[test]
    fn test_time_zone() {
        let config = EngineConfig::default();
        assert_eq!(config.time_zone().unwrap().local_minus_utc(), 7 * 3600);
    }
}

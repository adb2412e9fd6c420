//! Optional TOML settings. A missing file means defaults; every key is
//! optional.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

use crate::paths;

/// Environment variable naming an explicit settings file.
pub const CONFIG_ENV: &str = "STUDENT_ROSTER_CONFIG";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid log level `{0}` (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Start with the five sample students instead of an empty roster.
    pub seed_records: bool,
    pub log_level: String,
    /// Overrides the platform cache location for the log.
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed_records: true,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Settings {
    /// Resolve the settings path: the environment override first, then the
    /// platform config directory.
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        paths::config_file()
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        let settings: Settings = toml::from_str(&raw)
            .with_context(|| format!("failed to parse settings file {}", path.display()))?;
        settings.level_filter()?;
        Ok(settings)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    pub fn log_path(&self) -> Result<PathBuf> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => paths::log_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.seed_records);
        assert_eq!(settings.level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "seed_records = false\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert!(!settings.seed_records);
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.log_file, None);
    }

    #[test]
    fn explicit_log_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "log_level = \"debug\"\nlog_file = \"/tmp/roster.log\"\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.level_filter().unwrap(), LevelFilter::Debug);
        assert_eq!(settings.log_path().unwrap(), PathBuf::from("/tmp/roster.log"));
    }

    #[test]
    fn bad_level_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "log_level = \"loud\"\n").unwrap();

        let err = Settings::load(&path).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::InvalidLogLevel("loud".to_string()))
        );
    }

    #[test]
    fn malformed_toml_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "seed_records = maybe\n").unwrap();

        let err = Settings::load(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse settings file"));
    }
}

//! Platform directories for the settings file and the log.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "student-roster";
const APPLICATION: &str = "student-roster";

/// Settings file name inside the config directory.
const CONFIG_FILE_NAME: &str = "config.toml";
/// Log file name inside the cache directory.
const LOG_FILE_NAME: &str = "student-roster.log";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| anyhow!("could not locate home directory"))
}

/// Default location of the settings file.
pub fn config_file() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE_NAME))
}

/// Default location of the log file.
pub fn log_file() -> Result<PathBuf> {
    Ok(project_dirs()?.cache_dir().join(LOG_FILE_NAME))
}

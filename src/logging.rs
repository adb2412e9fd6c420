use std::fs::{self, File};

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::config::Settings;

/// Install the file logger described by `settings`. The terminal belongs to
/// the TUI, so nothing is ever logged to stdout or stderr.
pub fn init(settings: &Settings) -> Result<()> {
    let level = settings.level_filter()?;
    if level == LevelFilter::Off {
        return Ok(());
    }

    let path = settings.log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create log directory")?;
    }
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .build();
    WriteLogger::init(level, config, file).context("failed to initialize logger")
}

//! File logging for the `tabview` binary.
//!
//! The terminal belongs to the viewer while it runs, so records go to
//! `tabview.log` in the data directory instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::app_dirs;

pub const LOG_FILE_NAME: &str = "tabview.log";
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Parse a level name such as `warn` or `DEBUG`.
#[must_use]
pub fn parse_level(value: &str) -> Option<LevelFilter> {
	LevelFilter::from_str(value.trim()).ok()
}

/// Path of the log file inside the data directory.
pub fn log_file_path() -> Result<PathBuf> {
	Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))
}

/// Install the global file logger. Returns the log file path, or `None` when
/// `level` is [`LevelFilter::Off`].
pub fn initialize(level: LevelFilter) -> Result<Option<PathBuf>> {
	if level == LevelFilter::Off {
		return Ok(None);
	}

	let path = log_file_path()?;
	if let Some(dir) = path.parent() {
		fs::create_dir_all(dir)
			.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	}
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	let config = ConfigBuilder::new().add_filter_allow_str("tabview").build();
	WriteLogger::init(level, config, file).context("logger already installed")?;
	log::info!("logging at {level} to {}", path.display());
	Ok(Some(path))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn level_names_parse_case_insensitively() {
		assert_eq!(parse_level("warn"), Some(LevelFilter::Warn));
		assert_eq!(parse_level(" DEBUG "), Some(LevelFilter::Debug));
		assert_eq!(parse_level("off"), Some(LevelFilter::Off));
		assert_eq!(parse_level("loud"), None);
	}

	#[test]
	fn off_installs_nothing() {
		assert_eq!(initialize(LevelFilter::Off).expect("off"), None);
	}
}

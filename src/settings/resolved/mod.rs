use std::path::PathBuf;

use log::LevelFilter;
use tabview::Theme;
use tabview_core::{ColumnRef, CsvOptions, ViewConfig};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub files: Vec<PathBuf>,
	pub view: ViewConfig,
	pub csv: CsvOptions,
	pub theme_name: String,
	pub theme: Theme,
	pub start_tab: Option<String>,
	pub title: Option<String>,
	/// Filters applied to every table after mounting, in command-line order.
	pub filters: Vec<(ColumnRef, String)>,
	pub start_page: Option<usize>,
	pub headless: bool,
	pub log_level: LevelFilter,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::format_summary(self));
	}
}

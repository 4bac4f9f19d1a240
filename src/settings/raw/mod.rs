use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod table;
mod ui;

use table::{CsvSection, ViewSection};
use ui::{LogSection, UiSection};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	view: ViewSection,
	csv: CsvSection,
	ui: UiSection,
	log: LogSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.view.apply_cli_overrides(cli);
		self.csv.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.log.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			page_size: detect_source(
				cli.page_size.is_some(),
				self.view.page_size.is_some(),
				"TABVIEW__VIEW__PAGE_SIZE",
				"--page-size",
				"view.page_size",
			),
			delimiter: detect_source(
				cli.delimiter.is_some(),
				self.csv.delimiter.is_some(),
				"TABVIEW__CSV__DELIMITER",
				"--delimiter",
				"csv.delimiter",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"TABVIEW__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.log.level.is_some(),
				"TABVIEW__LOG__LEVEL",
				"--log-level",
				"log.level",
			),
		};

		let view = self.view.resolve();
		let csv = self.csv.resolve(&sources)?;
		let ui = self.ui.finalize(&sources)?;
		let log_level = self.log.resolve(&sources)?;

		let config = ResolvedConfig {
			files: cli.files.clone(),
			view,
			csv,
			theme_name: ui.theme_name,
			theme: ui.theme,
			start_tab: ui.start_tab,
			title: ui.title,
			filters: cli
				.filters
				.iter()
				.map(|filter| (filter.column.clone(), filter.text.clone()))
				.collect(),
			start_page: cli.page,
			headless: cli.no_tui,
			log_level,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;

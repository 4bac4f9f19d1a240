use log::LevelFilter;
use serde::Deserialize;
use tabview::Theme;
use tabview::logging::{DEFAULT_LEVEL, parse_level};

use super::super::resolved::{ConfigError, ConfigSources};
use super::super::util::non_empty;
use crate::cli::CliArgs;

const DEFAULT_THEME: &str = "slate";

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) start_tab: Option<String>,
	pub(super) title: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) theme_name: String,
	pub(super) theme: Theme,
	pub(super) start_tab: Option<String>,
	pub(super) title: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(tab) = cli.tab.clone() {
			self.start_tab = Some(tab);
		}
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
	}

	pub(super) fn finalize(self, sources: &ConfigSources) -> Result<UiResolution, ConfigError> {
		let theme_name = non_empty(self.theme).unwrap_or_else(|| DEFAULT_THEME.to_string());
		let theme = tabview_tui::by_name(&theme_name).ok_or_else(|| {
			ConfigError::invalid(
				"ui.theme",
				theme_name.clone(),
				sources.theme(),
				format!("unknown theme (expected one of {})", tabview_tui::names().join(", ")),
			)
		})?;

		Ok(UiResolution {
			theme_name,
			theme,
			start_tab: non_empty(self.start_tab),
			title: non_empty(self.title),
		})
	}
}

/// Log file settings prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
	pub(super) level: Option<String>,
}

impl LogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<LevelFilter, ConfigError> {
		let Some(value) = self.level else {
			return Ok(DEFAULT_LEVEL);
		};
		parse_level(&value).ok_or_else(|| {
			ConfigError::invalid(
				"log.level",
				value,
				sources.log_level(),
				"expected off, error, warn, info, debug or trace",
			)
		})
	}
}

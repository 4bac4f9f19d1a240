use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.view.page_size == 0 {
		return Err(ConfigError::invalid(
			"view.page_size",
			config.view.page_size.to_string(),
			sources.page_size(),
			"must be at least 1",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use log::LevelFilter;
	use tabview::Theme;
	use tabview_core::{CsvOptions, ViewConfig};

	use super::super::SettingSource;
	use super::*;

	fn config(page_size: usize) -> ResolvedConfig {
		ResolvedConfig {
			files: vec![PathBuf::from("report.csv")],
			view: ViewConfig {
				page_size,
				..ViewConfig::default()
			},
			csv: CsvOptions::default(),
			theme_name: "slate".into(),
			theme: Theme::default(),
			start_tab: None,
			title: None,
			filters: Vec::new(),
			start_page: None,
			headless: false,
			log_level: LevelFilter::Info,
		}
	}

	#[test]
	fn validation_rejects_zero_page_size() {
		let sources = ConfigSources {
			page_size: Some(SettingSource::CliFlag("--page-size")),
			..ConfigSources::default()
		};

		let err = validate(&config(0), &sources).unwrap_err();
		assert_eq!(err.key, "view.page_size");
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag `--page-size`"));
	}

	#[test]
	fn environment_origins_are_named() {
		let sources = ConfigSources {
			page_size: Some(SettingSource::Environment("TABVIEW__VIEW__PAGE_SIZE")),
			..ConfigSources::default()
		};

		let message = validate(&config(0), &sources).unwrap_err().to_string();
		assert!(message.contains("environment variable `TABVIEW__VIEW__PAGE_SIZE`"));
	}

	#[test]
	fn positive_page_sizes_pass() {
		assert!(validate(&config(1), &ConfigSources::default()).is_ok());
	}
}

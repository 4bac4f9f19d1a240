use serde::Deserialize;
use tabview_core::{Composition, CsvOptions, DEFAULT_PAGE_SIZE, ViewConfig};

use super::super::resolved::{ConfigError, ConfigSources};
use crate::cli::CliArgs;

/// Paging and filter composition values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ViewSection {
	pub(super) page_size: Option<usize>,
	pub(super) compose: Option<Composition>,
}

impl ViewSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(size) = cli.page_size {
			self.page_size = Some(size);
		}
		if let Some(compose) = cli.compose {
			self.compose = Some(compose.into());
		}
	}

	pub(super) fn resolve(self) -> ViewConfig {
		ViewConfig {
			page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
			composition: self.compose.unwrap_or_default(),
		}
	}
}

/// CSV parsing values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CsvSection {
	pub(super) delimiter: Option<String>,
	pub(super) trim: Option<bool>,
}

impl CsvSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(delimiter) = cli.delimiter.clone() {
			self.delimiter = Some(delimiter);
		}
		if let Some(trim) = cli.trim {
			self.trim = Some(trim);
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<CsvOptions, ConfigError> {
		let mut options = CsvOptions::default().trim(self.trim.unwrap_or(false));
		if let Some(value) = self.delimiter {
			let delimiter = parse_delimiter(&value).ok_or_else(|| {
				ConfigError::invalid(
					"csv.delimiter",
					value,
					sources.delimiter(),
					"must be a single ASCII character",
				)
			})?;
			options = options.delimiter(delimiter);
		}
		Ok(options)
	}
}

/// Accept one ASCII character, spelling `\t` and `tab` for a tab.
fn parse_delimiter(value: &str) -> Option<u8> {
	if value == "\\t" || value.eq_ignore_ascii_case("tab") {
		return Some(b'\t');
	}
	match value.as_bytes() {
		[byte] if byte.is_ascii() => Some(*byte),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn delimiters_must_be_one_ascii_byte() {
		assert_eq!(parse_delimiter(";"), Some(b';'));
		assert_eq!(parse_delimiter("\\t"), Some(b'\t'));
		assert_eq!(parse_delimiter("TAB"), Some(b'\t'));
		assert_eq!(parse_delimiter(";;"), None);
		assert_eq!(parse_delimiter(""), None);
		assert_eq!(parse_delimiter("§"), None);
	}
}

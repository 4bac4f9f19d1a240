use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) page_size: Option<SettingSource>,
	pub(crate) delimiter: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
	pub(crate) log_level: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn page_size(&self) -> SettingSource {
		or_key(&self.page_size, "view.page_size")
	}

	pub(crate) fn delimiter(&self) -> SettingSource {
		or_key(&self.delimiter, "csv.delimiter")
	}

	pub(crate) fn theme(&self) -> SettingSource {
		or_key(&self.theme, "ui.theme")
	}

	pub(crate) fn log_level(&self) -> SettingSource {
		or_key(&self.log_level, "log.level")
	}
}

fn or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
	source.clone().unwrap_or(SettingSource::ConfigKey(key))
}

use std::fs;

use clap::Parser;
use log::LevelFilter;
use tabview_core::{ColumnRef, Composition};
use tempfile::tempdir;

use super::RawConfig;
use crate::cli::CliArgs;
use crate::settings::sources::build_config;

fn load_from(toml: &str, args: &[&str]) -> anyhow::Result<crate::settings::ResolvedConfig> {
	let dir = tempdir().expect("tempdir");
	let path = dir.path().join("tabview.toml");
	fs::write(&path, toml).expect("write config");

	let mut argv = vec!["tabview", "--no-config", "--config", path.to_str().expect("utf8 path")];
	argv.extend_from_slice(args);
	argv.push("report.csv");
	let cli = CliArgs::parse_from(argv);

	let mut raw: RawConfig = build_config(&cli)?.try_deserialize()?;
	raw.apply_cli_overrides(&cli);
	raw.resolve(&cli)
}

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"tabview",
		"--page-size",
		"25",
		"--compose",
		"conjunction",
		"--delimiter",
		";",
		"--trim",
		"--theme",
		"light",
		"--tab",
		"others",
		"--title",
		"Outages",
		"--log-level",
		"debug",
		"report.csv",
	]);

	let mut config = RawConfig::default();
	config.view.page_size = Some(10);
	config.ui.theme = Some("solarized".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.view.page_size, Some(25));
	assert_eq!(config.view.compose, Some(Composition::Conjunction));
	assert_eq!(config.csv.delimiter.as_deref(), Some(";"));
	assert_eq!(config.csv.trim, Some(true));
	assert_eq!(config.ui.theme.as_deref(), Some("light"));
	assert_eq!(config.ui.start_tab.as_deref(), Some("others"));
	assert_eq!(config.ui.title.as_deref(), Some("Outages"));
	assert_eq!(config.log.level.as_deref(), Some("debug"));
}

#[test]
fn defaults_apply_without_any_settings() {
	let cli = CliArgs::parse_from(["tabview", "report.csv"]);
	let config = RawConfig::default().resolve(&cli).expect("resolves");

	assert_eq!(config.view.page_size, 50);
	assert_eq!(config.view.composition, Composition::Independent);
	assert_eq!(config.csv.delimiter, b',');
	assert!(!config.csv.trim);
	assert_eq!(config.theme_name, "slate");
	assert_eq!(config.log_level, LevelFilter::Info);
	assert!(!config.headless);
}

#[test]
fn file_values_are_resolved() {
	let config = load_from(
		"[view]\npage_size = 20\ncompose = \"Conjunction\"\n\
		[csv]\ndelimiter = \"\\\\t\"\ntrim = true\n\
		[ui]\ntheme = \"Solarized\"\nstart_tab = \"others\"\n\
		[log]\nlevel = \"off\"\n",
		&[],
	)
	.expect("resolves");

	assert_eq!(config.view.page_size, 20);
	assert_eq!(config.view.composition, Composition::Conjunction);
	assert_eq!(config.csv.delimiter, b'\t');
	assert!(config.csv.trim);
	assert_eq!(config.theme_name, "Solarized");
	assert_eq!(config.start_tab.as_deref(), Some("others"));
	assert_eq!(config.log_level, LevelFilter::Off);
}

#[test]
fn zero_page_size_names_the_config_key() {
	let err = load_from("[view]\npage_size = 0\n", &[]).unwrap_err();
	let message = err.to_string();
	assert!(message.contains("view.page_size"));
	assert!(message.contains("configuration key `view.page_size`"));
}

#[test]
fn cli_values_are_blamed_on_the_flag() {
	let err = load_from("", &["--delimiter", "::"]).unwrap_err();
	let message = err.to_string();
	assert!(message.contains("csv.delimiter"));
	assert!(message.contains("CLI flag `--delimiter`"));
	assert!(message.contains("value: ::"));
}

#[test]
fn unknown_themes_list_the_choices() {
	let err = load_from("[ui]\ntheme = \"neon\"\n", &[]).unwrap_err();
	let message = err.to_string();
	assert!(message.contains("ui.theme"));
	assert!(message.contains("slate"));
}

#[test]
fn unknown_compositions_are_rejected() {
	let err = load_from("[view]\ncompose = \"both\"\n", &[]).unwrap_err();
	assert!(err.to_string().contains("unknown composition 'both'"));
}

#[test]
fn command_line_filters_and_paging_are_carried() {
	let config = load_from("", &["-f", "Impact=isolated", "--page", "3", "--no-tui"])
		.expect("resolves");
	assert_eq!(
		config.filters,
		vec![(ColumnRef::Name("Impact".into()), "isolated".to_string())]
	);
	assert_eq!(config.start_page, Some(3));
	assert!(config.headless);
}

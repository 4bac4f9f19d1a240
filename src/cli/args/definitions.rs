use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::{CompositionArg, FilterArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `tabview` binary.
#[derive(Parser, Debug)]
#[command(
	name = "tabview",
	version,
	long_version = long_version(),
	about = "Browse CSV tables with per-column filters and paging",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "FILE",
		required_unless_present = "list_themes",
		help = "CSV files to open, one tab each"
	)]
	pub(crate) files: Vec<PathBuf>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "TABVIEW_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long = "page-size",
		value_name = "NUM",
		help = "Rows per page (default: 50)"
	)]
	pub(crate) page_size: Option<usize>,
	#[arg(
		long = "compose",
		value_enum,
		help = "How filters and paging combine (default: independent)"
	)]
	pub(crate) compose: Option<CompositionArg>,
	#[arg(
		long,
		value_name = "CHAR",
		help = "Field delimiter of the input files (default: ,)"
	)]
	pub(crate) delimiter: Option<String>,
	#[arg(
		long,
		value_parser = BoolishValueParser::new(),
		num_args = 0..=1,
		require_equals = true,
		default_missing_value = "true",
		help = "Trim whitespace around fields (default: disabled)"
	)]
	pub(crate) trim: Option<bool>,
	#[arg(
		short = 'f',
		long = "filter",
		value_name = "COLUMN=TEXT",
		action = ArgAction::Append,
		help = "Initial filter; COLUMN is a 0-based index or a header name"
	)]
	pub(crate) filters: Vec<FilterArg>,
	#[arg(
		long,
		value_name = "NUM",
		help = "Page to show after applying filters (default: 1)"
	)]
	pub(crate) page: Option<usize>,
	#[arg(
		long,
		value_name = "KEY",
		help = "Tab to activate on start (default: first file)"
	)]
	pub(crate) tab: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Title shown before the tab bar (default: none)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		long = "no-tui",
		help = "Apply filters and paging without the interactive view (default: disabled)"
	)]
	pub(crate) no_tui: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Log file verbosity: off, error, warn, info, debug or trace (default: info)"
	)]
	pub(crate) log_level: Option<String>,
}

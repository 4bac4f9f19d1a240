mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_csv, print_json, print_plain};
use settings::ResolvedConfig;
use tabview::logging;
use workflow::TableWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in tabview_tui::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if let Err(err) = logging::initialize(resolved.log_level) {
		eprintln!("tabview: file logging disabled: {err:#}");
	}

	if cli.print_config {
		resolved.print_summary();
	}

	run_view(cli.output, resolved)
}

/// Load the tables, run the view and print the result in the chosen format.
fn run_view(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = TableWorkflow::from_config(settings)?;
	let report = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&report),
		OutputFormat::Json => print_json(&report)?,
		OutputFormat::Csv => print_csv(&report)?,
	}

	Ok(())
}

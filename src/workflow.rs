use std::path::Path;

use anyhow::{Result, bail};
use log::{debug, warn};
use tabview_core::{TabSet, ViewBindings, ViewController, read_table};
use tabview_tui::{App, TableTab};

use crate::settings::ResolvedConfig;

/// What to print once the view has finished.
#[derive(Debug)]
pub(crate) struct ViewReport {
	pub(crate) accepted: bool,
	pub(crate) key: String,
	pub(crate) selected_row: Option<usize>,
	pub(crate) controller: ViewController,
}

/// Loads the configured files and runs them through the viewer or headlessly.
pub(crate) struct TableWorkflow {
	config: ResolvedConfig,
	tables: Vec<TableTab>,
}

impl TableWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let tables = load_tables(&config)?;
		Ok(Self { config, tables })
	}

	pub(crate) fn run(self) -> Result<ViewReport> {
		if self.config.headless {
			self.run_headless()
		} else {
			self.run_interactive()
		}
	}

	fn run_interactive(self) -> Result<ViewReport> {
		let Self { config, tables } = self;
		let mut app = App::new(tables);
		app.set_theme(config.theme);
		if let Some(title) = config.title {
			app.set_title(title);
		}
		if let Some(tab) = config.start_tab.as_deref() {
			app.activate(tab);
		}

		let outcome = app.run()?;
		debug!("viewer outcome: {outcome:?}");
		let key = outcome.tab.clone().unwrap_or_default();
		let Some((key, controller)) = app
			.into_controllers()
			.into_iter()
			.find(|(candidate, _)| *candidate == key)
		else {
			bail!("viewer exited without an active table");
		};

		Ok(ViewReport {
			accepted: outcome.accepted,
			key,
			selected_row: outcome.selected_row,
			controller,
		})
	}

	fn run_headless(self) -> Result<ViewReport> {
		let Self { config, tables } = self;
		let mut tabs = TabSet::new();
		for table in &tables {
			tabs.insert(table.key.clone(), table.title.clone());
		}
		if let Some(tab) = config.start_tab.as_deref() {
			tabs.activate(tab);
		}
		let Some(active) = tabs.active_key().map(str::to_owned) else {
			bail!("no tables loaded");
		};
		let Some(table) = tables.into_iter().find(|table| table.key == active) else {
			bail!("table '{active}' is not loaded");
		};

		Ok(ViewReport {
			accepted: true,
			key: table.key,
			selected_row: None,
			controller: table.controller,
		})
	}
}

/// Read every configured file into a mounted controller. Files that fail to
/// load are reported and skipped.
fn load_tables(config: &ResolvedConfig) -> Result<Vec<TableTab>> {
	let mut tabs = TabSet::new();
	let mut tables = Vec::with_capacity(config.files.len());

	for path in &config.files {
		let table = match read_table(path, &config.csv) {
			Ok(table) => table,
			Err(err) => {
				warn!("skipping {}: {err}", path.display());
				eprintln!("tabview: skipping {}: {err}", path.display());
				continue;
			}
		};

		let key = unique_key(&tabs, &file_stem(path));
		tabs.insert(key.clone(), key.clone());

		let bindings = ViewBindings::for_table(&table);
		let mut controller = ViewController::new(table, config.view, bindings);
		controller.mount();
		apply_start_state(&key, &mut controller, config);

		tables.push(TableTab::new(key.clone(), key, controller));
	}

	if tables.is_empty() {
		bail!("none of the {} input file(s) could be loaded", config.files.len());
	}
	Ok(tables)
}

/// Apply the command-line filters and starting page to a mounted controller.
fn apply_start_state(key: &str, controller: &mut ViewController, config: &ResolvedConfig) {
	for (column, text) in &config.filters {
		match column.resolve(controller.table()) {
			Some(index) => {
				if !controller.on_filter_input(index, text.as_str()) {
					debug!("table '{key}' has no column {index}; filter ignored");
				}
			}
			None => warn!("table '{key}' has no column named '{column}'; filter ignored"),
		}
	}
	if let Some(page) = config.start_page {
		controller.apply_pagination(page);
	}
}

fn file_stem(path: &Path) -> String {
	path.file_stem()
		.map(|stem| stem.to_string_lossy().into_owned())
		.filter(|stem| !stem.is_empty())
		.unwrap_or_else(|| "table".to_string())
}

/// First of `stem`, `stem-2`, `stem-3`, ... not yet registered in `tabs`.
fn unique_key(tabs: &TabSet, stem: &str) -> String {
	let taken = |key: &str| tabs.panels().any(|panel| panel.key == key);
	if !taken(stem) {
		return stem.to_string();
	}
	(2..)
		.map(|suffix| format!("{stem}-{suffix}"))
		.find(|key| !taken(key.as_str()))
		.unwrap_or_else(|| stem.to_string())
}

//! Library side of the `tabview` binary: application directories and log
//! setup, plus re-exports of the view and terminal crates so embedders can
//! depend on a single crate.

pub mod app_dirs;
pub mod logging;

pub use tabview_core::{
	Composition, CsvOptions, FilterState, PageSummary, Table, TableError, ViewBindings, ViewConfig,
	ViewController,
};
pub use tabview_tui::{App, TableTab, Theme, ViewOutcome};

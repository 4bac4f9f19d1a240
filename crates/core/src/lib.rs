//! View-state primitives for filterable, paginated tables.
//!
//! A [`ViewController`] owns one [`Table`] together with its current
//! [`FilterState`] and page number, and keeps every row's visibility flag in
//! sync with them. The terminal front-end and the headless CLI both drive the
//! controller through the same event handlers, so this crate carries no UI
//! dependency.

pub mod controller;
pub mod csv_source;
mod error;
pub mod filter;
pub mod pagination;
pub mod table;
pub mod tabs;

pub use controller::{
	Composition, FilterInputs, PaginationControls, ViewBindings, ViewConfig, ViewController,
};
pub use csv_source::{CsvOptions, parse_table, read_table, write_visible};
pub use error::TableError;
pub use filter::FilterState;
pub use pagination::{DEFAULT_PAGE_SIZE, PageSummary, PaginationState};
pub use table::{Column, ColumnRef, Row, Table};
pub use tabs::{TabPanel, TabSet};

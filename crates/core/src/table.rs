use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Header metadata for one column of a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
	pub index: usize,
	pub name: String,
}

impl Column {
	#[must_use]
	pub fn new(index: usize, name: impl Into<String>) -> Self {
		Self {
			index,
			name: name.into(),
		}
	}
}

/// A single row of cell text plus its derived visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
	cells: Vec<String>,
	visible: bool,
}

impl Row {
	/// Construct a visible row from its cell values.
	#[must_use]
	pub fn new<I, S>(cells: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			cells: cells.into_iter().map(Into::into).collect(),
			visible: true,
		}
	}

	#[must_use]
	pub fn cells(&self) -> &[String] {
		&self.cells
	}

	/// Text of the cell at `column`, or `None` when the row is shorter.
	#[must_use]
	pub fn cell(&self, column: usize) -> Option<&str> {
		self.cells.get(column).map(String::as_str)
	}

	#[must_use]
	pub fn is_visible(&self) -> bool {
		self.visible
	}

	pub(crate) fn set_visible(&mut self, visible: bool) {
		self.visible = visible;
	}
}

/// Ordered rows and columns read once from a data source.
///
/// The structure never changes after construction; only the per-row
/// visibility flag is updated by a [`ViewController`](crate::ViewController).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
	columns: Vec<Column>,
	rows: Vec<Row>,
}

impl Table {
	/// Build a table from header names and raw records. Records may be ragged.
	#[must_use]
	pub fn from_records<H, S, R, C, T>(headers: H, records: R) -> Self
	where
		H: IntoIterator<Item = S>,
		S: Into<String>,
		R: IntoIterator<Item = C>,
		C: IntoIterator<Item = T>,
		T: Into<String>,
	{
		let columns = headers
			.into_iter()
			.enumerate()
			.map(|(index, name)| Column::new(index, name))
			.collect();
		let rows = records.into_iter().map(Row::new).collect();
		Self { columns, rows }
	}

	#[must_use]
	pub fn columns(&self) -> &[Column] {
		&self.columns
	}

	#[must_use]
	pub fn rows(&self) -> &[Row] {
		&self.rows
	}

	pub(crate) fn rows_mut(&mut self) -> &mut [Row] {
		&mut self.rows
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Find a column by header name, ignoring ASCII case and surrounding space.
	#[must_use]
	pub fn column_index(&self, name: &str) -> Option<usize> {
		let wanted = name.trim();
		self.columns
			.iter()
			.find(|column| column.name.trim().eq_ignore_ascii_case(wanted))
			.map(|column| column.index)
	}

	/// Iterate over the rows currently flagged visible along with their index.
	pub fn visible_rows(&self) -> impl Iterator<Item = (usize, &Row)> {
		self.rows.iter().enumerate().filter(|(_, row)| row.is_visible())
	}
}

/// Reference to a column either by position or by header name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRef {
	Index(usize),
	Name(String),
}

impl ColumnRef {
	/// Resolve against a table. Indices are returned as-is, even past the
	/// last column, since filters on absent cells are ignored rather than
	/// rejected.
	#[must_use]
	pub fn resolve(&self, table: &Table) -> Option<usize> {
		match self {
			Self::Index(index) => Some(*index),
			Self::Name(name) => table.column_index(name),
		}
	}
}

impl FromStr for ColumnRef {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let trimmed = value.trim();
		if trimmed.is_empty() {
			return Err("column reference must not be empty".to_string());
		}
		Ok(match trimmed.parse::<usize>() {
			Ok(index) => Self::Index(index),
			Err(_) => Self::Name(trimmed.to_string()),
		})
	}
}

impl fmt::Display for ColumnRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Index(index) => write!(f, "{index}"),
			Self::Name(name) => f.write_str(name),
		}
	}
}

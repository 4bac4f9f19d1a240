//! Reading tables from delimited text and writing the visible rows back out.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use log::debug;

use crate::error::TableError;
use crate::table::Table;

/// Options for parsing delimited input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
	pub delimiter: u8,
	pub trim: bool,
}

impl Default for CsvOptions {
	fn default() -> Self {
		Self {
			delimiter: b',',
			trim: false,
		}
	}
}

impl CsvOptions {
	#[must_use]
	pub fn delimiter(mut self, delimiter: u8) -> Self {
		self.delimiter = delimiter;
		self
	}

	#[must_use]
	pub fn trim(mut self, trim: bool) -> Self {
		self.trim = trim;
		self
	}
}

/// Read a table from the file at `path`. The first record is the header.
pub fn read_table(path: &Path, options: &CsvOptions) -> Result<Table, TableError> {
	let file = File::open(path).map_err(|source| TableError::Open {
		path: path.to_path_buf(),
		source,
	})?;
	let table = parse_table(file, options)?;
	debug!(
		"loaded {} rows x {} columns from {}",
		table.len(),
		table.columns().len(),
		path.display()
	);
	Ok(table)
}

/// Parse a table from any reader. Records may have more or fewer fields
/// than the header.
pub fn parse_table<R: Read>(reader: R, options: &CsvOptions) -> Result<Table, TableError> {
	let mut reader = csv::ReaderBuilder::new()
		.delimiter(options.delimiter)
		.has_headers(true)
		.flexible(true)
		.trim(if options.trim {
			csv::Trim::All
		} else {
			csv::Trim::None
		})
		.from_reader(reader);

	let headers = reader.headers()?.clone();
	if headers.is_empty() {
		return Err(TableError::MissingHeader);
	}

	let mut records = Vec::new();
	for record in reader.records() {
		let record = record?;
		records.push(record.iter().map(str::to_owned).collect::<Vec<_>>());
	}

	Ok(Table::from_records(headers.iter(), records))
}

/// Write the header and every currently visible row as CSV.
pub fn write_visible<W: Write>(table: &Table, writer: W) -> Result<(), TableError> {
	let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);
	writer.write_record(table.columns().iter().map(|column| column.name.as_str()))?;
	for (_, row) in table.visible_rows() {
		writer.write_record(row.cells())?;
	}
	writer.flush()?;
	Ok(())
}

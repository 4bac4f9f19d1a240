use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing table data.
#[derive(Debug, Error)]
pub enum TableError {
	/// The source file could not be opened.
	#[error("failed to open {}: {source}", .path.display())]
	Open {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The input was not valid delimited text.
	#[error("malformed CSV: {0}")]
	Csv(#[from] csv::Error),

	/// The input contained no header row to derive columns from.
	#[error("input has no header row")]
	MissingHeader,

	#[error(transparent)]
	Io(#[from] io::Error),
}

use std::str::FromStr;

use clap::ValueEnum;
use tabview_core::{ColumnRef, Composition};

/// Filter/paging composition modes accepted via the command line.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub(crate) enum CompositionArg {
	Independent,
	Conjunction,
}

impl From<CompositionArg> for Composition {
	fn from(arg: CompositionArg) -> Self {
		match arg {
			CompositionArg::Independent => Composition::Independent,
			CompositionArg::Conjunction => Composition::Conjunction,
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
	Csv,
}

/// A `COLUMN=TEXT` filter given on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FilterArg {
	pub(crate) column: ColumnRef,
	pub(crate) text: String,
}

impl FromStr for FilterArg {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let Some((column, text)) = value.split_once('=') else {
			return Err(format!("expected COLUMN=TEXT, got '{value}'"));
		};
		Ok(Self {
			column: column.parse()?,
			text: text.to_string(),
		})
	}
}

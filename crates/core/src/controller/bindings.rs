use crate::filter::FilterState;
use crate::pagination::PageSummary;
use crate::table::Table;

/// Per-column filter text entered by the user, ordered by column index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInputs {
	values: Vec<String>,
}

impl FilterInputs {
	/// One empty input per column.
	#[must_use]
	pub fn new(columns: usize) -> Self {
		Self {
			values: vec![String::new(); columns],
		}
	}

	#[must_use]
	pub fn for_table(table: &Table) -> Self {
		Self::new(table.columns().len())
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.values.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	#[must_use]
	pub fn value(&self, column: usize) -> Option<&str> {
		self.values.get(column).map(String::as_str)
	}

	/// Replace the text of one input. Returns `false` when no input exists
	/// for `column`.
	pub fn set(&mut self, column: usize, text: impl Into<String>) -> bool {
		match self.values.get_mut(column) {
			Some(slot) => {
				*slot = text.into();
				true
			}
			None => false,
		}
	}

	/// Overwrite every input with the value `state` holds for its column.
	pub(crate) fn sync(&mut self, state: &FilterState) {
		for (column, slot) in self.values.iter_mut().enumerate() {
			let value = state.get(column).unwrap_or_default();
			if slot.as_str() != value {
				*slot = value.to_string();
			}
		}
	}

	/// Collect the non-empty inputs into a [`FilterState`].
	#[must_use]
	pub fn to_state(&self) -> FilterState {
		self.values
			.iter()
			.enumerate()
			.filter(|(_, value)| !value.is_empty())
			.map(|(column, value)| (column, value.clone()))
			.collect()
	}
}

/// Rendered state of the previous/next buttons and the page label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationControls {
	label: String,
	previous_enabled: bool,
	next_enabled: bool,
}

impl PaginationControls {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn label(&self) -> &str {
		&self.label
	}

	#[must_use]
	pub fn previous_enabled(&self) -> bool {
		self.previous_enabled
	}

	#[must_use]
	pub fn next_enabled(&self) -> bool {
		self.next_enabled
	}

	pub(crate) fn render(&mut self, summary: &PageSummary) {
		self.label = summary.label();
		self.previous_enabled = summary.has_previous();
		self.next_enabled = summary.has_next();
	}
}

/// Companion controls handed to a controller at construction.
///
/// Either control may be absent; the handlers that depend on it then do
/// nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewBindings {
	pub filter_inputs: Option<FilterInputs>,
	pub pagination: Option<PaginationControls>,
}

impl ViewBindings {
	/// No companion controls at all.
	#[must_use]
	pub fn unbound() -> Self {
		Self::default()
	}

	/// One filter input per column plus pagination controls.
	#[must_use]
	pub fn for_table(table: &Table) -> Self {
		Self {
			filter_inputs: Some(FilterInputs::for_table(table)),
			pagination: Some(PaginationControls::new()),
		}
	}

	#[must_use]
	pub fn with_filter_inputs(mut self, inputs: FilterInputs) -> Self {
		self.filter_inputs = Some(inputs);
		self
	}

	#[must_use]
	pub fn with_pagination(mut self, controls: PaginationControls) -> Self {
		self.pagination = Some(controls);
		self
	}
}

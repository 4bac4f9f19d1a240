//! Per-table view state: filter values, current page, and row visibility.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::filter::FilterState;
use crate::pagination::{DEFAULT_PAGE_SIZE, PageSummary, PaginationState};
use crate::table::{Row, Table};

mod bindings;
#[cfg(test)]
mod tests;

pub use bindings::{FilterInputs, PaginationControls, ViewBindings};

/// How filtering and pagination combine on the shared visibility flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Composition {
	/// Each mechanism overwrites every row's visibility on its own; whichever
	/// ran last decides what is shown. Pages are counted over all rows.
	#[default]
	Independent,
	/// A row is shown when it matches the filters and its position among the
	/// matching rows falls on the current page. Pages are counted over the
	/// matching rows.
	Conjunction,
}

impl Composition {
	pub const ALL: [Composition; 2] = [Composition::Independent, Composition::Conjunction];

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Independent => "independent",
			Self::Conjunction => "conjunction",
		}
	}
}

impl fmt::Display for Composition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Composition {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let wanted = value.trim();
		Self::ALL
			.into_iter()
			.find(|mode| mode.as_str().eq_ignore_ascii_case(wanted))
			.ok_or_else(|| {
				format!("unknown composition '{wanted}' (expected independent or conjunction)")
			})
	}
}

impl TryFrom<String> for Composition {
	type Error = String;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

/// Static settings for a [`ViewController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
	pub page_size: usize,
	pub composition: Composition,
}

impl Default for ViewConfig {
	fn default() -> Self {
		Self {
			page_size: DEFAULT_PAGE_SIZE,
			composition: Composition::default(),
		}
	}
}

/// Owns one table's view state and keeps row visibility in sync with it.
///
/// Every mutation happens synchronously inside one of the handler methods,
/// so the visibility flags are always consistent once a call returns.
#[derive(Debug, Clone)]
pub struct ViewController {
	table: Table,
	config: ViewConfig,
	bindings: ViewBindings,
	filters: FilterState,
	pagination: PaginationState,
}

impl ViewController {
	#[must_use]
	pub fn new(table: Table, config: ViewConfig, bindings: ViewBindings) -> Self {
		Self {
			table,
			config,
			bindings,
			filters: FilterState::new(),
			pagination: PaginationState::new(config.page_size),
		}
	}

	/// Bring the view into its initial state: filters from any pre-filled
	/// inputs, then the first page. Without pagination controls every row
	/// stays on a single page.
	pub fn mount(&mut self) -> PageSummary {
		if let Some(inputs) = &self.bindings.filter_inputs {
			let state = inputs.to_state();
			if !state.is_empty() {
				self.apply_filters(&state);
			}
		}
		if self.bindings.pagination.is_none() {
			debug!("no pagination controls bound; showing all rows");
			return self.summary();
		}
		self.apply_pagination(1)
	}

	/// Replace the active filters and recompute visibility. Bound filter
	/// inputs are rewritten to show the new values.
	pub fn apply_filters(&mut self, filters: &FilterState) {
		self.filters = filters.clone();
		if let Some(inputs) = self.bindings.filter_inputs.as_mut() {
			inputs.sync(filters);
		}
		match self.config.composition {
			Composition::Independent => {
				for row in self.table.rows_mut() {
					let visible = filters.matches(row);
					row.set_visible(visible);
				}
			}
			Composition::Conjunction => {
				let summary = self.pagination.reclamp(self.matching_count());
				self.show_matching_page();
				self.render_controls(&summary);
			}
		}
		debug!(
			"applied {} filter(s); {} of {} rows visible",
			self.filters.len(),
			self.table.visible_rows().count(),
			self.table.len()
		);
	}

	/// Move to `page` (clamped into range) and recompute visibility and the
	/// pagination controls.
	pub fn apply_pagination(&mut self, page: usize) -> PageSummary {
		let summary = match self.config.composition {
			Composition::Independent => {
				let summary = self.pagination.go_to(page, self.table.len());
				let bounds = self.pagination.bounds();
				for (index, row) in self.table.rows_mut().iter_mut().enumerate() {
					row.set_visible(bounds.contains(&index));
				}
				summary
			}
			Composition::Conjunction => {
				let summary = self.pagination.go_to(page, self.matching_count());
				self.show_matching_page();
				summary
			}
		};
		self.render_controls(&summary);
		debug!("requested page {page}, showing {summary}");
		summary
	}

	/// Handle an edit of the filter input for `column`.
	///
	/// Returns `false` when no filter inputs are bound or none exists for
	/// `column`.
	pub fn on_filter_input(&mut self, column: usize, text: impl Into<String>) -> bool {
		let Some(inputs) = self.bindings.filter_inputs.as_mut() else {
			debug!("no filter inputs bound; ignoring input for column {column}");
			return false;
		};
		let text: String = text.into();
		if !inputs.set(column, text.as_str()) {
			debug!("no filter input for column {column}");
			return false;
		}
		let mut state = self.filters.clone();
		state.set(column, text);
		self.apply_filters(&state);
		true
	}

	/// Handle a click on "next". Does nothing when the control is absent or
	/// disabled.
	pub fn next_page(&mut self) -> bool {
		if self.bindings.pagination.is_none() {
			debug!("no pagination controls bound; ignoring next page");
			return false;
		}
		let summary = self.summary();
		if !summary.has_next() {
			return false;
		}
		self.apply_pagination(summary.page + 1);
		true
	}

	/// Handle a click on "previous". Does nothing when the control is absent
	/// or disabled.
	pub fn previous_page(&mut self) -> bool {
		if self.bindings.pagination.is_none() {
			debug!("no pagination controls bound; ignoring previous page");
			return false;
		}
		let summary = self.summary();
		if !summary.has_previous() {
			return false;
		}
		self.apply_pagination(summary.page - 1);
		true
	}

	#[must_use]
	pub fn summary(&self) -> PageSummary {
		self.pagination.summary(self.paged_row_count())
	}

	#[must_use]
	pub fn current_page(&self) -> usize {
		self.pagination.current_page()
	}

	#[must_use]
	pub fn composition(&self) -> Composition {
		self.config.composition
	}

	#[must_use]
	pub fn table(&self) -> &Table {
		&self.table
	}

	#[must_use]
	pub fn filters(&self) -> &FilterState {
		&self.filters
	}

	#[must_use]
	pub fn filter_inputs(&self) -> Option<&FilterInputs> {
		self.bindings.filter_inputs.as_ref()
	}

	#[must_use]
	pub fn filter_input(&self, column: usize) -> Option<&str> {
		self.filter_inputs()?.value(column)
	}

	#[must_use]
	pub fn pagination_controls(&self) -> Option<&PaginationControls> {
		self.bindings.pagination.as_ref()
	}

	pub fn visible_rows(&self) -> impl Iterator<Item = (usize, &Row)> {
		self.table.visible_rows()
	}

	#[must_use]
	pub fn visible_indices(&self) -> Vec<usize> {
		self.visible_rows().map(|(index, _)| index).collect()
	}

	fn paged_row_count(&self) -> usize {
		match self.config.composition {
			Composition::Independent => self.table.len(),
			Composition::Conjunction => self.matching_count(),
		}
	}

	fn matching_count(&self) -> usize {
		self.table
			.rows()
			.iter()
			.filter(|row| self.filters.matches(row))
			.count()
	}

	/// Row positions on the current page, or every position when no
	/// pagination controls are bound.
	fn page_bounds(&self) -> Range<usize> {
		if self.bindings.pagination.is_some() {
			self.pagination.bounds()
		} else {
			0..usize::MAX
		}
	}

	fn show_matching_page(&mut self) {
		let bounds = self.page_bounds();
		let filters = &self.filters;
		let mut position = 0;
		for row in self.table.rows_mut() {
			let matched = filters.matches(row);
			row.set_visible(matched && bounds.contains(&position));
			if matched {
				position += 1;
			}
		}
	}

	fn render_controls(&mut self, summary: &PageSummary) {
		if let Some(controls) = self.bindings.pagination.as_mut() {
			controls.render(summary);
		}
	}
}

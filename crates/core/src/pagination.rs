use std::fmt;
use std::ops::Range;

use serde::Serialize;

/// Rows shown per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Fixed page size plus the 1-indexed current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
	page_size: usize,
	current_page: usize,
}

impl Default for PaginationState {
	fn default() -> Self {
		Self::new(DEFAULT_PAGE_SIZE)
	}
}

impl PaginationState {
	/// A zero page size is treated as one row per page.
	#[must_use]
	pub fn new(page_size: usize) -> Self {
		Self {
			page_size: page_size.max(1),
			current_page: 1,
		}
	}

	#[must_use]
	pub fn page_size(&self) -> usize {
		self.page_size
	}

	#[must_use]
	pub fn current_page(&self) -> usize {
		self.current_page
	}

	#[must_use]
	pub fn page_count(&self, row_count: usize) -> usize {
		row_count.div_ceil(self.page_size)
	}

	/// Clamp `page` into `[1, page_count]`, or to 1 when there are no pages.
	#[must_use]
	pub fn clamp(&self, page: usize, row_count: usize) -> usize {
		page.clamp(1, self.page_count(row_count).max(1))
	}

	/// Move to `page`, clamped for `row_count` rows, and describe the result.
	pub fn go_to(&mut self, page: usize, row_count: usize) -> PageSummary {
		self.current_page = self.clamp(page, row_count);
		self.summary(row_count)
	}

	/// Re-clamp the current page after the row count changed.
	pub fn reclamp(&mut self, row_count: usize) -> PageSummary {
		self.go_to(self.current_page, row_count)
	}

	#[must_use]
	pub fn summary(&self, row_count: usize) -> PageSummary {
		PageSummary {
			page: self.current_page,
			page_count: self.page_count(row_count),
		}
	}

	/// Zero-based row positions covered by the current page.
	#[must_use]
	pub fn bounds(&self) -> Range<usize> {
		let start = (self.current_page - 1) * self.page_size;
		start..start + self.page_size
	}
}

/// Snapshot of the pagination controls for one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSummary {
	pub page: usize,
	pub page_count: usize,
}

impl PageSummary {
	#[must_use]
	pub fn has_previous(&self) -> bool {
		self.page > 1
	}

	#[must_use]
	pub fn has_next(&self) -> bool {
		self.page < self.page_count
	}

	/// Summary text such as `Page 2 of 3`.
	#[must_use]
	pub fn label(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for PageSummary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Page {} of {}", self.page, self.page_count)
	}
}

use std::collections::BTreeMap;

use crate::table::Row;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Needle {
	raw: String,
	folded: String,
}

/// Active per-column substring constraints.
///
/// Empty values are never stored, so every entry is an active constraint.
/// Matching is case-insensitive containment using Unicode lowercase folding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
	needles: BTreeMap<usize, Needle>,
}

impl FilterState {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the filter for `column`. An empty value removes the constraint.
	pub fn set(&mut self, column: usize, value: impl Into<String>) {
		let raw = value.into();
		if raw.is_empty() {
			self.needles.remove(&column);
			return;
		}
		let folded = raw.to_lowercase();
		self.needles.insert(column, Needle { raw, folded });
	}

	#[must_use]
	pub fn get(&self, column: usize) -> Option<&str> {
		self.needles.get(&column).map(|needle| needle.raw.as_str())
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.needles.is_empty()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.needles.len()
	}

	/// Active constraints ordered by column index.
	pub fn active(&self) -> impl Iterator<Item = (usize, &str)> {
		self.needles
			.iter()
			.map(|(column, needle)| (*column, needle.raw.as_str()))
	}

	/// Whether `row` satisfies every active constraint.
	///
	/// A constraint on a column the row has no cell for is skipped.
	#[must_use]
	pub fn matches(&self, row: &Row) -> bool {
		self.needles.iter().all(|(column, needle)| {
			row.cell(*column)
				.is_none_or(|text| text.to_lowercase().contains(&needle.folded))
		})
	}
}

impl<S: Into<String>> FromIterator<(usize, S)> for FilterState {
	fn from_iter<I: IntoIterator<Item = (usize, S)>>(iter: I) -> Self {
		let mut state = Self::new();
		for (column, value) in iter {
			state.set(column, value);
		}
		state
	}
}

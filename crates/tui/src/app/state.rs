use log::warn;
use ratatui::widgets::TableState;
use tabview_core::{TabSet, ViewController};

use crate::style::Theme;

/// A table handed to the [`App`], shown under its own tab.
#[derive(Debug)]
pub struct TableTab {
	pub key: String,
	pub title: String,
	pub controller: ViewController,
}

impl TableTab {
	#[must_use]
	pub fn new(key: impl Into<String>, title: impl Into<String>, controller: ViewController) -> Self {
		Self {
			key: key.into(),
			title: title.into(),
			controller,
		}
	}
}

/// How the user left the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOutcome {
	pub accepted: bool,
	/// Key of the tab that was active on exit.
	pub tab: Option<String>,
	/// Table index of the selected row, if any row was selected.
	pub selected_row: Option<usize>,
}

pub(crate) struct TabView {
	pub(crate) key: String,
	pub(crate) controller: ViewController,
	pub(crate) table_state: TableState,
	/// Column whose filter input receives typed text.
	pub(crate) focus: usize,
}

impl TabView {
	fn new(key: String, controller: ViewController) -> Self {
		let mut view = Self {
			key,
			controller,
			table_state: TableState::default(),
			focus: 0,
		};
		view.reset_selection();
		view
	}

	/// Select the first visible row, or nothing when no row is visible.
	pub(crate) fn reset_selection(&mut self) {
		let any_visible = self.controller.visible_rows().next().is_some();
		self.table_state.select(any_visible.then_some(0));
	}

	pub(crate) fn selected_row(&self) -> Option<usize> {
		let selected = self.table_state.selected()?;
		self.controller
			.visible_rows()
			.nth(selected)
			.map(|(index, _)| index)
	}

	pub(crate) fn column_count(&self) -> usize {
		self.controller.table().columns().len()
	}
}

/// Terminal application showing one filterable, paginated table per tab.
///
/// Controllers are expected to arrive mounted; the app only forwards input
/// events to them.
pub struct App {
	pub(crate) views: Vec<TabView>,
	pub(crate) tabs: TabSet,
	pub theme: Theme,
	pub(crate) title: Option<String>,
}

impl App {
	#[must_use]
	pub fn new(tables: Vec<TableTab>) -> Self {
		let mut tabs = TabSet::new();
		let mut views = Vec::with_capacity(tables.len());
		for table in tables {
			if !tabs.insert(table.key.clone(), table.title) {
				warn!("skipping duplicate tab key '{}'", table.key);
				continue;
			}
			views.push(TabView::new(table.key, table.controller));
		}
		Self {
			views,
			tabs,
			theme: Theme::default(),
			title: None,
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn set_title(&mut self, title: impl Into<String>) {
		self.title = Some(title.into());
	}

	/// Switch to the tab registered under `key`. Unknown keys are ignored.
	pub fn activate(&mut self, key: &str) -> bool {
		self.tabs.activate(key)
	}

	#[must_use]
	pub fn active_key(&self) -> Option<&str> {
		self.tabs.active_key()
	}

	#[must_use]
	pub fn tabs(&self) -> &TabSet {
		&self.tabs
	}

	#[must_use]
	pub fn controller(&self, key: &str) -> Option<&ViewController> {
		self.views
			.iter()
			.find(|view| view.key == key)
			.map(|view| &view.controller)
	}

	#[must_use]
	pub fn active_controller(&self) -> Option<&ViewController> {
		self.active_view().map(|view| &view.controller)
	}

	/// Give up the controllers, in tab order, keyed by tab.
	#[must_use]
	pub fn into_controllers(self) -> Vec<(String, ViewController)> {
		self.views
			.into_iter()
			.map(|view| (view.key, view.controller))
			.collect()
	}

	pub(crate) fn active_view(&self) -> Option<&TabView> {
		self.views.get(self.tabs.active_index()?)
	}

	pub(crate) fn active_view_mut(&mut self) -> Option<&mut TabView> {
		let index = self.tabs.active_index()?;
		self.views.get_mut(index)
	}

	pub(crate) fn outcome(&self, accepted: bool) -> ViewOutcome {
		let view = self.active_view();
		ViewOutcome {
			accepted,
			tab: view.map(|view| view.key.clone()),
			selected_row: if accepted {
				view.and_then(TabView::selected_row)
			} else {
				None
			},
		}
	}
}

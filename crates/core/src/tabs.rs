use indexmap::IndexMap;
use log::{debug, warn};

/// One tab and whether its content panel is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabPanel {
	pub key: String,
	pub title: String,
	visible: bool,
}

impl TabPanel {
	#[must_use]
	pub fn is_visible(&self) -> bool {
		self.visible
	}
}

/// A fixed set of keyed tabs of which exactly one is active once any exist.
#[derive(Debug, Clone, Default)]
pub struct TabSet {
	panels: IndexMap<String, TabPanel>,
	active: Option<usize>,
}

impl TabSet {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a tab. The first registered tab becomes active. Returns
	/// `false` without changes when `key` is already taken.
	pub fn insert(&mut self, key: impl Into<String>, title: impl Into<String>) -> bool {
		let key = key.into();
		if self.panels.contains_key(&key) {
			return false;
		}
		let panel = TabPanel {
			key: key.clone(),
			title: title.into(),
			visible: false,
		};
		self.panels.insert(key, panel);
		if self.active.is_none() {
			self.show(0);
		}
		true
	}

	/// Activate the tab registered under `key`. Unknown keys are ignored.
	pub fn activate(&mut self, key: &str) -> bool {
		match self.panels.get_index_of(key) {
			Some(index) => {
				self.show(index);
				true
			}
			None => {
				warn!("ignoring activation of unknown tab '{key}'");
				false
			}
		}
	}

	/// Cycle forward, wrapping after the last tab.
	pub fn next(&mut self) -> bool {
		let Some(active) = self.active else {
			return false;
		};
		self.show((active + 1) % self.panels.len());
		true
	}

	/// Cycle backward, wrapping before the first tab.
	pub fn previous(&mut self) -> bool {
		let Some(active) = self.active else {
			return false;
		};
		let len = self.panels.len();
		self.show((active + len - 1) % len);
		true
	}

	#[must_use]
	pub fn active_index(&self) -> Option<usize> {
		self.active
	}

	#[must_use]
	pub fn active_key(&self) -> Option<&str> {
		let index = self.active?;
		self.panels
			.get_index(index)
			.map(|(key, _)| key.as_str())
	}

	#[must_use]
	pub fn is_visible(&self, key: &str) -> bool {
		self.panels.get(key).is_some_and(TabPanel::is_visible)
	}

	pub fn panels(&self) -> impl Iterator<Item = &TabPanel> {
		self.panels.values()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.panels.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.panels.is_empty()
	}

	fn show(&mut self, index: usize) {
		for (position, panel) in self.panels.values_mut().enumerate() {
			panel.visible = position == index;
		}
		self.active = Some(index);
		debug!("activated tab {:?}", self.active_key());
	}
}

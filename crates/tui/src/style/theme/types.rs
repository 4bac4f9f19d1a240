use ratatui::style::{Color, Modifier, Style};

/// A theme containing styles for the UI elements of a table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Table header row and the active tab.
	pub header: Style,
	/// Selected table row.
	pub row_highlight: Style,
	/// Filter labels and the page summary.
	pub prompt: Style,
	/// Placeholder text and disabled controls.
	pub empty: Style,
	/// Focused filter input and enabled navigation controls.
	pub highlight: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	#[must_use]
	pub fn tab_inactive_style(&self) -> Style {
		Style::new()
			.fg(self.header.fg.unwrap_or(Color::Reset))
			.bg(self.row_highlight.bg.unwrap_or(Color::Reset))
	}

	#[must_use]
	pub fn tab_highlight_style(&self) -> Style {
		self.header.add_modifier(Modifier::BOLD)
	}

	/// Style for a navigation control given whether it can be activated.
	#[must_use]
	pub fn control_style(&self, enabled: bool) -> Style {
		if enabled {
			self.highlight
		} else {
			self.empty.add_modifier(Modifier::DIM)
		}
	}
}

/// A named built-in theme.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	/// Whether `name` refers to this theme, ignoring case.
	#[must_use]
	pub fn answers_to(&self, name: &str) -> bool {
		let wanted = name.trim();
		self.name.eq_ignore_ascii_case(wanted)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(wanted))
	}
}

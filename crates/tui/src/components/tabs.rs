use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Tabs;
use tabview_core::TabSet;

use crate::style::Theme;

/// Build one styled title per tab, the active tab highlighted.
#[must_use]
pub fn tab_titles(tabs: &TabSet, theme: &Theme) -> Vec<Line<'static>> {
	tabs.panels()
		.map(|panel| {
			let style = if panel.is_visible() {
				theme.tab_highlight_style()
			} else {
				theme.tab_inactive_style()
			};
			Line::from(format!(" {} ", panel.title)).style(style)
		})
		.collect()
}

/// Render the tab bar.
pub fn render_tabs(frame: &mut Frame, area: Rect, tabs: &TabSet, theme: &Theme) {
	if area.width == 0 || tabs.is_empty() {
		return;
	}
	let widget = Tabs::new(tab_titles(tabs, theme))
		.select(tabs.active_index())
		.divider("")
		.padding("", " ")
		.highlight_style(theme.tab_highlight_style());
	frame.render_widget(widget, area);
}

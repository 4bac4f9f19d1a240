use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tabview_core::PaginationControls;

use crate::style::Theme;

pub const PREVIOUS_LABEL: &str = "< Previous";
pub const NEXT_LABEL: &str = "Next >";

/// Build the `< Previous  Page n of m  Next >` line, dimming disabled
/// controls.
#[must_use]
pub fn pagination_line<'a>(controls: &'a PaginationControls, theme: &Theme) -> Line<'a> {
	Line::from(vec![
		Span::styled(PREVIOUS_LABEL, theme.control_style(controls.previous_enabled())),
		Span::raw("  "),
		Span::styled(controls.label(), theme.prompt_style()),
		Span::raw("  "),
		Span::styled(NEXT_LABEL, theme.control_style(controls.next_enabled())),
	])
}

/// Render the pagination bar. Nothing is drawn when the table has no
/// pagination controls.
pub fn render_pagination(
	frame: &mut Frame,
	area: Rect,
	controls: Option<&PaginationControls>,
	theme: &Theme,
) {
	let Some(controls) = controls else {
		return;
	};
	let widget = Paragraph::new(pagination_line(controls, theme)).alignment(Alignment::Center);
	frame.render_widget(widget, area);
}

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tabview_core::{Column, FilterInputs};
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

/// Everything needed to draw the filter input row of one table.
pub struct FilterRow<'a> {
	pub columns: &'a [Column],
	pub inputs: Option<&'a FilterInputs>,
	pub focus: usize,
}

/// Build the filter row as `[Name: text] [Age: ]`, the focused input
/// highlighted.
#[must_use]
pub fn filter_line<'a>(row: &FilterRow<'a>, theme: &Theme) -> Line<'a> {
	let Some(inputs) = row.inputs else {
		return Line::from(Span::styled("No filter inputs", theme.empty_style()));
	};

	let mut spans = Vec::with_capacity(row.columns.len() * 4);
	for (position, column) in row.columns.iter().enumerate() {
		if position > 0 {
			spans.push(Span::raw(" "));
		}
		let value = inputs.value(column.index).unwrap_or("");
		let value_style = if position == row.focus {
			theme.highlight_style()
		} else {
			theme.prompt_style()
		};
		spans.push(Span::styled(format!("[{}: ", column.name), theme.prompt_style()));
		spans.push(Span::styled(value, value_style));
		spans.push(Span::styled("]", theme.prompt_style()));
	}
	Line::from(spans)
}

/// Render the filter row and place the terminal cursor after the focused
/// input's text.
pub fn render_filters(frame: &mut Frame, area: Rect, row: FilterRow<'_>, theme: &Theme) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	if let Some(x) = cursor_offset(&row) {
		let x = area.x.saturating_add(x).min(area.right().saturating_sub(1));
		frame.set_cursor_position(Position::new(x, area.y));
	}
	frame.render_widget(Paragraph::new(filter_line(&row, theme)), area);
}

fn cursor_offset(row: &FilterRow<'_>) -> Option<u16> {
	let inputs = row.inputs?;
	let mut offset = 0usize;
	for (position, column) in row.columns.iter().enumerate() {
		if position > 0 {
			offset += 1;
		}
		let prefix = format!("[{}: ", column.name);
		offset += prefix.width();
		let value = inputs.value(column.index).unwrap_or("");
		offset += value.width();
		if position == row.focus {
			return u16::try_from(offset).ok();
		}
		offset += 1;
	}
	None
}

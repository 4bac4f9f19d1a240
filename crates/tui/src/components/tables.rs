use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::widgets::{
	Cell, Clear, HighlightSpacing, Paragraph, Row as TableRow, Table as TableWidget, TableState,
};
use tabview_core::ViewController;
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Widest a column grows before its content is cut off.
pub(crate) const MAX_COLUMN_WIDTH: u16 = 40;
const EMPTY_MESSAGE: &str = "No matching rows";

/// Render the header plus every visible row of `view`.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	view: &ViewController,
	table_state: &mut TableState,
	theme: &Theme,
) {
	let columns = view.table().columns();
	let header = TableRow::new(
		columns
			.iter()
			.map(|column| Cell::from(column.name.as_str())),
	)
	.style(theme.header_style())
	.height(1);

	let rows = view.visible_rows().map(|(_, row)| {
		TableRow::new(
			columns
				.iter()
				.map(|column| Cell::from(row.cell(column.index).unwrap_or(""))),
		)
	});

	let widths = column_widths(view)
		.into_iter()
		.map(Constraint::Length)
		.collect::<Vec<_>>();

	let table = TableWidget::new(rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, area, table_state);

	if view.visible_rows().next().is_none() && area.height > 1 {
		let message_area = Rect {
			y: area.y + 1,
			height: area.height - 1,
			..area
		};
		let empty = Paragraph::new(EMPTY_MESSAGE)
			.alignment(Alignment::Center)
			.style(theme.empty_style());
		frame.render_widget(Clear, message_area);
		frame.render_widget(empty, message_area);
	}
}

/// Display width of each column over its header and the visible cells,
/// capped at [`MAX_COLUMN_WIDTH`].
pub(crate) fn column_widths(view: &ViewController) -> Vec<u16> {
	let columns = view.table().columns();
	let mut widths: Vec<usize> = columns.iter().map(|column| column.name.width()).collect();
	for (_, row) in view.visible_rows() {
		for (slot, column) in widths.iter_mut().zip(columns) {
			let width = row.cell(column.index).map_or(0, UnicodeWidthStr::width);
			*slot = (*slot).max(width);
		}
	}
	widths
		.into_iter()
		.map(|width| u16::try_from(width).unwrap_or(u16::MAX).min(MAX_COLUMN_WIDTH))
		.collect()
}

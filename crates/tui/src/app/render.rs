use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::App;
use crate::components::{
	FilterRow, render_filters, render_pagination, render_table, render_tabs,
};

const HINT: &str =
	"Tab: switch table  ←/→: column  PgUp/PgDn: page  Ctrl+U: clear  Enter: accept  Esc: quit";

impl App {
	/// Draw the whole screen: tabs, filters, table, pagination and hints.
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(1),
				Constraint::Length(1),
				Constraint::Length(1),
			])
			.split(area);

		self.render_header(frame, layout[0]);

		let theme = self.theme;
		let Some(view) = self.active_view_mut() else {
			let empty = Paragraph::new("No tables loaded")
				.alignment(Alignment::Center)
				.style(theme.empty_style());
			frame.render_widget(empty, layout[2]);
			return;
		};

		let row = FilterRow {
			columns: view.controller.table().columns(),
			inputs: view.controller.filter_inputs(),
			focus: view.focus,
		};
		render_filters(frame, layout[1], row, &theme);
		render_table(
			frame,
			layout[2],
			&view.controller,
			&mut view.table_state,
			&theme,
		);
		render_pagination(
			frame,
			layout[3],
			view.controller.pagination_controls(),
			&theme,
		);

		let hint = Paragraph::new(HINT).style(theme.empty_style());
		frame.render_widget(hint, layout[4]);
	}

	fn render_header(&self, frame: &mut Frame, area: Rect) {
		let Some(title) = self.title.as_deref() else {
			render_tabs(frame, area, &self.tabs, &self.theme);
			return;
		};

		let prompt = format!("{title} > ");
		let width = u16::try_from(prompt.chars().count())
			.unwrap_or(u16::MAX)
			.min(area.width);
		let columns = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([Constraint::Length(width), Constraint::Min(1)])
			.split(area);
		let label = Paragraph::new(Line::from(Span::styled(prompt, self.theme.prompt_style())));
		frame.render_widget(label, columns[0]);
		render_tabs(frame, columns[1], &self.tabs, &self.theme);
	}
}

use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, ViewOutcome};

impl App {
	/// Process a keyboard event and return an outcome if the user exits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ViewOutcome>> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Ok(Some(self.outcome(false))),
			KeyCode::Enter => return Ok(Some(self.outcome(true))),
			KeyCode::Tab => {
				self.tabs.next();
			}
			KeyCode::BackTab => {
				self.tabs.previous();
			}
			KeyCode::Left => self.move_focus(-1),
			KeyCode::Right => self.move_focus(1),
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			KeyCode::PageDown => self.next_page(),
			KeyCode::PageUp => self.previous_page(),
			KeyCode::Char('n') if ctrl => self.next_page(),
			KeyCode::Char('p') if ctrl => self.previous_page(),
			KeyCode::Char('u') if ctrl => self.edit_filter(|text| text.clear()),
			KeyCode::Backspace => self.edit_filter(|text| {
				text.pop();
			}),
			KeyCode::Char(ch) if !ctrl => self.edit_filter(|text| text.push(ch)),
			_ => {}
		}
		Ok(None)
	}

	fn move_focus(&mut self, delta: isize) {
		let Some(view) = self.active_view_mut() else {
			return;
		};
		let columns = view.column_count();
		if columns == 0 {
			return;
		}
		view.focus = view.focus.saturating_add_signed(delta).min(columns - 1);
	}

	fn edit_filter(&mut self, edit: impl FnOnce(&mut String)) {
		let Some(view) = self.active_view_mut() else {
			return;
		};
		let column = view.focus;
		let mut text = view
			.controller
			.filter_input(column)
			.unwrap_or_default()
			.to_string();
		edit(&mut text);
		if view.controller.on_filter_input(column, text) {
			view.reset_selection();
		}
	}

	fn next_page(&mut self) {
		if let Some(view) = self.active_view_mut()
			&& view.controller.next_page()
		{
			view.reset_selection();
		}
	}

	fn previous_page(&mut self) {
		if let Some(view) = self.active_view_mut()
			&& view.controller.previous_page()
		{
			view.reset_selection();
		}
	}

	fn move_selection_up(&mut self) {
		let Some(view) = self.active_view_mut() else {
			return;
		};
		if let Some(selected) = view.table_state.selected()
			&& selected > 0
		{
			view.table_state.select(Some(selected - 1));
		}
	}

	fn move_selection_down(&mut self) {
		let Some(view) = self.active_view_mut() else {
			return;
		};
		let len = view.controller.visible_rows().count();
		if let Some(selected) = view.table_state.selected()
			&& selected + 1 < len
		{
			view.table_state.select(Some(selected + 1));
		}
	}
}

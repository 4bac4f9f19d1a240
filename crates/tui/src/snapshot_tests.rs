use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tabview_core::{Composition, Table, ViewBindings, ViewConfig, ViewController};

use crate::{App, TableTab};

fn numbered(rows: usize) -> Table {
	Table::from_records(
		["Id", "Name"],
		(0..rows).map(|index| vec![index.to_string(), format!("row {index}")]),
	)
}

fn mounted(table: Table, composition: Composition) -> ViewController {
	let bindings = ViewBindings::for_table(&table);
	let config = ViewConfig {
		composition,
		..ViewConfig::default()
	};
	let mut controller = ViewController::new(table, config, bindings);
	controller.mount();
	controller
}

fn sample_app() -> App {
	App::new(vec![
		TableTab::new("we", "WE", mounted(numbered(120), Composition::Independent)),
		TableTab::new("others", "Others", mounted(numbered(3), Composition::Conjunction)),
	])
}

fn render(app: &mut App) -> Vec<String> {
	let backend = TestBackend::new(80, 12);
	let mut terminal = Terminal::new(backend).expect("terminal");
	terminal
		.draw(|frame| app.draw(frame))
		.expect("draw snapshot frame");
	buffer_to_string(terminal.backend().buffer())
		.lines()
		.map(str::to_owned)
		.collect()
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line.trim_end().to_string());
	}
	lines.join("\n")
}

fn press(app: &mut App, code: KeyCode) {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
		.expect("key handled");
}

#[test]
fn first_page_frame_shows_every_section() {
	let mut app = sample_app();
	let lines = render(&mut app);

	assert!(lines[0].contains("WE"));
	assert!(lines[0].contains("Others"));
	assert!(lines[1].contains("[Id: ] [Name: ]"));
	assert!(lines[2].contains("Id"));
	assert!(lines[2].contains("Name"));
	assert!(lines[3].contains("▶ 0"));
	assert!(lines[3].contains("row 0"));
	assert!(lines[11].contains("Tab: switch table"));
	insta::assert_snapshot!(lines[10].trim(), @"< Previous  Page 1 of 3  Next >");
}

#[test]
fn paging_updates_the_rows_and_the_label() {
	let mut app = sample_app();
	press(&mut app, KeyCode::PageDown);
	let lines = render(&mut app);

	assert!(lines[3].contains("row 50"));
	assert!(!lines.iter().any(|line| line.contains("row 49")));
	insta::assert_snapshot!(lines[10].trim(), @"< Previous  Page 2 of 3  Next >");
}

#[test]
fn typed_filters_show_in_the_filter_row() {
	let mut app = sample_app();
	press(&mut app, KeyCode::Char('7'));
	let lines = render(&mut app);

	assert!(lines[1].contains("[Id: 7] [Name: ]"));
	assert!(lines[3].contains("row 7"));
}

#[test]
fn filters_without_matches_show_a_placeholder() {
	let mut app = sample_app();
	press(&mut app, KeyCode::Tab);
	for ch in "zzz".chars() {
		press(&mut app, KeyCode::Char(ch));
	}
	let lines = render(&mut app);

	assert!(lines.iter().any(|line| line.contains("No matching rows")));
	insta::assert_snapshot!(lines[10].trim(), @"< Previous  Page 1 of 0  Next >");
}

#[test]
fn title_prefixes_the_tab_bar() {
	let mut app = sample_app();
	app.set_title("tabview");
	let lines = render(&mut app);

	assert!(lines[0].trim_start().starts_with("tabview > "));
	assert!(lines[0].contains("WE"));
}

#[test]
fn empty_app_says_so() {
	let mut app = App::new(Vec::new());
	let lines = render(&mut app);

	assert!(lines.iter().any(|line| line.contains("No tables loaded")));
}

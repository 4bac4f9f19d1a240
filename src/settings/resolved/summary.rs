use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	for file in &config.files {
		let _ = writeln!(out, "  File: {}", file.display());
	}
	let _ = writeln!(out, "  Page size: {}", config.view.page_size);
	let _ = writeln!(out, "  Composition: {}", config.view.composition);
	let _ = writeln!(out, "  Delimiter: {}", describe_delimiter(config.csv.delimiter));
	let _ = writeln!(out, "  Trim fields: {}", bool_to_word(config.csv.trim));
	let _ = writeln!(out, "  UI theme: {}", config.theme_name);
	if let Some(tab) = &config.start_tab {
		let _ = writeln!(out, "  Start tab: {tab}");
	}
	if let Some(title) = &config.title {
		let _ = writeln!(out, "  Title: {title}");
	}
	for (column, text) in &config.filters {
		let _ = writeln!(out, "  Filter: {column}={text}");
	}
	if let Some(page) = config.start_page {
		let _ = writeln!(out, "  Start page: {page}");
	}
	let _ = writeln!(out, "  Interactive: {}", bool_to_word(!config.headless));
	let _ = writeln!(out, "  Log level: {}", config.log_level);
	out
}

fn describe_delimiter(delimiter: u8) -> String {
	match delimiter {
		b'\t' => "tab".to_string(),
		other => char::from(other).to_string(),
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

use std::fmt::Write as _;
use std::io;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use tabview_core::{Column, Composition, PageSummary, ViewController, write_visible};
use unicode_width::UnicodeWidthStr;

use crate::workflow::ViewReport;

const COLUMN_GAP: &str = "  ";

/// Print the visible rows as an aligned text table followed by a summary.
pub(crate) fn print_plain(report: &ViewReport) {
	if !report.accepted {
		println!("Cancelled");
		return;
	}
	println!("{}", format_plain(&report.controller));
}

/// Lay out the header and visible rows in aligned columns.
pub(crate) fn format_plain(view: &ViewController) -> String {
	let columns = view.table().columns();
	let mut widths: Vec<usize> = columns.iter().map(|column| column.name.width()).collect();
	for (_, row) in view.visible_rows() {
		for (slot, column) in widths.iter_mut().zip(columns) {
			let width = row.cell(column.index).map_or(0, UnicodeWidthStr::width);
			*slot = (*slot).max(width);
		}
	}

	let mut out = String::new();
	let header = columns.iter().map(|column| column.name.as_str());
	push_aligned(&mut out, header, &widths);
	let mut shown = 0;
	for (_, row) in view.visible_rows() {
		let cells = columns
			.iter()
			.map(|column| row.cell(column.index).unwrap_or(""));
		push_aligned(&mut out, cells, &widths);
		shown += 1;
	}

	let _ = write!(
		out,
		"{} ({shown} of {} rows visible)",
		view.summary(),
		view.table().len()
	);
	out
}

fn push_aligned<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
	let mut line = String::new();
	for (position, (cell, width)) in cells.zip(widths).enumerate() {
		if position > 0 {
			line.push_str(COLUMN_GAP);
		}
		line.push_str(cell);
		let padding = width.saturating_sub(cell.width());
		line.extend(std::iter::repeat_n(' ', padding));
	}
	out.push_str(line.trim_end());
	out.push('\n');
}

#[derive(Serialize)]
struct JsonReport<'a> {
	accepted: bool,
	tab: &'a str,
	selected_row: Option<usize>,
	composition: Composition,
	#[serde(flatten)]
	summary: PageSummary,
	total_rows: usize,
	columns: &'a [Column],
	rows: Vec<JsonRow>,
}

#[derive(Serialize)]
struct JsonRow {
	index: usize,
	cells: Map<String, Value>,
}

/// Format the outcome and the visible rows as a JSON document.
pub(crate) fn format_report_json(report: &ViewReport) -> Result<String> {
	let view = &report.controller;
	let columns = view.table().columns();
	let rows = view
		.visible_rows()
		.map(|(index, row)| {
			let cells = columns
				.iter()
				.map(|column| {
					let cell = row.cell(column.index).unwrap_or_default();
					(column.name.clone(), Value::from(cell))
				})
				.collect();
			JsonRow { index, cells }
		})
		.collect();

	let payload = JsonReport {
		accepted: report.accepted,
		tab: &report.key,
		selected_row: report.selected_row,
		composition: view.composition(),
		summary: view.summary(),
		total_rows: view.table().len(),
		columns,
		rows,
	};

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(report: &ViewReport) -> Result<()> {
	println!("{}", format_report_json(report)?);
	Ok(())
}

/// Write the header and visible rows to stdout as CSV. Nothing is written
/// when the viewer was cancelled.
pub(crate) fn print_csv(report: &ViewReport) -> Result<()> {
	if !report.accepted {
		return Ok(());
	}
	write_visible(report.controller.table(), io::stdout().lock())
		.context("failed to write CSV output")
}

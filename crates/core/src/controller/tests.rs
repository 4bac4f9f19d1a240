use super::*;

fn people() -> Table {
	Table::from_records(
		["Name", "Age"],
		[vec!["Alice", "30"], vec!["Bob", "25"], vec!["Alina", "40"]],
	)
}

fn numbered(rows: usize) -> Table {
	Table::from_records(
		["Id", "Parity"],
		(0..rows).map(|index| {
			let parity = if index % 2 == 0 { "even" } else { "odd" };
			vec![index.to_string(), parity.to_string()]
		}),
	)
}

fn bound(table: Table, composition: Composition) -> ViewController {
	let bindings = ViewBindings::for_table(&table);
	let config = ViewConfig {
		composition,
		..ViewConfig::default()
	};
	ViewController::new(table, config, bindings)
}

fn filter(column: usize, value: &str) -> FilterState {
	[(column, value)].into_iter().collect()
}

#[test]
fn substring_filter_keeps_matching_rows() {
	let mut view = bound(people(), Composition::Independent);
	view.apply_filters(&filter(0, "ali"));
	assert_eq!(view.visible_indices(), vec![0, 2]);
}

#[test]
fn applying_filters_twice_is_idempotent() {
	let mut view = bound(people(), Composition::Independent);
	let state = filter(1, "0");
	view.apply_filters(&state);
	let first = view.visible_indices();
	view.apply_filters(&state);
	assert_eq!(view.visible_indices(), first);
	assert_eq!(first, vec![0, 2]);
}

#[test]
fn clearing_filters_shows_every_row() {
	let mut view = bound(people(), Composition::Independent);
	view.apply_filters(&filter(0, "bob"));
	assert_eq!(view.visible_indices(), vec![1]);
	view.apply_filters(&FilterState::new());
	assert_eq!(view.visible_indices(), vec![0, 1, 2]);
}

#[test]
fn filters_on_absent_columns_hide_nothing() {
	let mut view = bound(people(), Composition::Independent);
	view.apply_filters(&filter(5, "zzz"));
	assert_eq!(view.visible_indices(), vec![0, 1, 2]);
}

#[test]
fn hidden_iff_some_filter_fails() {
	let table = Table::from_records(
		["Code", "Status", "Impact"],
		[
			vec!["MSAN001", "UP", "Isolated"],
			vec!["MSAN002", "ST", "Partially Impacted"],
			vec!["MSAN003", "UP"],
			vec!["EDGE004", "up", "isolated"],
		],
	);
	let mut view = bound(table, Composition::Independent);
	let state: FilterState = [(0, "msan"), (1, "Up"), (2, "ISOL")].into_iter().collect();
	view.apply_filters(&state);

	for (index, row) in view.table().rows().iter().enumerate() {
		let fails = state.active().any(|(column, needle)| {
			row.cell(column)
				.is_some_and(|text| !text.to_lowercase().contains(&needle.to_lowercase()))
		});
		assert_eq!(row.is_visible(), !fails, "row {index}");
	}
	assert_eq!(view.visible_indices(), vec![0, 2]);
}

#[test]
fn second_page_of_three() {
	let mut view = bound(numbered(120), Composition::Independent);
	let summary = view.apply_pagination(2);

	assert_eq!(summary.page_count, 3);
	assert_eq!(view.visible_indices(), (50..100).collect::<Vec<_>>());
	let controls = view.pagination_controls().expect("bound");
	assert_eq!(controls.label(), "Page 2 of 3");
	assert!(controls.previous_enabled());
	assert!(controls.next_enabled());
}

#[test]
fn last_page_disables_next() {
	let mut view = bound(numbered(120), Composition::Independent);
	view.apply_pagination(3);

	assert_eq!(view.visible_indices(), (100..120).collect::<Vec<_>>());
	let controls = view.pagination_controls().expect("bound");
	assert_eq!(controls.label(), "Page 3 of 3");
	assert!(controls.previous_enabled());
	assert!(!controls.next_enabled());
}

#[test]
fn out_of_range_pages_are_clamped() {
	let mut view = bound(numbered(120), Composition::Independent);

	assert_eq!(view.apply_pagination(0).page, 1);
	assert_eq!(view.visible_indices(), (0..50).collect::<Vec<_>>());
	assert_eq!(
		view.pagination_controls().map(PaginationControls::label),
		Some("Page 1 of 3")
	);

	assert_eq!(view.apply_pagination(42).page, 3);
	assert_eq!(
		view.pagination_controls().map(PaginationControls::label),
		Some("Page 3 of 3")
	);
}

#[test]
fn empty_table_shows_page_one_of_zero() {
	let table = Table::from_records(["Name"], Vec::<Vec<String>>::new());
	let mut view = bound(table, Composition::Independent);
	let summary = view.mount();

	assert_eq!(summary.page, 1);
	assert_eq!(summary.page_count, 0);
	let controls = view.pagination_controls().expect("bound");
	assert_eq!(controls.label(), "Page 1 of 0");
	assert!(!controls.previous_enabled());
	assert!(!controls.next_enabled());
	assert!(!view.next_page());
	assert!(!view.previous_page());
}

#[test]
fn navigation_moves_one_page_and_stops_at_the_edges() {
	let mut view = bound(numbered(120), Composition::Independent);
	view.mount();

	assert!(!view.previous_page());
	assert!(view.next_page());
	assert!(view.next_page());
	assert_eq!(view.current_page(), 3);
	assert!(!view.next_page());
	assert!(view.previous_page());
	assert_eq!(view.current_page(), 2);
}

#[test]
fn independent_mode_lets_the_last_mechanism_win() {
	let mut view = bound(numbered(120), Composition::Independent);
	view.mount();
	view.next_page();

	view.on_filter_input(1, "odd");
	assert_eq!(view.visible_indices().len(), 60);
	assert_eq!(view.current_page(), 2);

	view.apply_pagination(1);
	assert_eq!(view.visible_indices(), (0..50).collect::<Vec<_>>());
}

#[test]
fn conjunction_mode_pages_over_matching_rows() {
	let mut view = bound(numbered(120), Composition::Conjunction);
	view.mount();

	view.on_filter_input(1, "even");
	let summary = view.summary();
	assert_eq!(summary.page_count, 2);
	let visible = view.visible_indices();
	assert_eq!(visible.len(), 50);
	assert_eq!(visible.first(), Some(&0));
	assert_eq!(visible.last(), Some(&98));

	assert!(view.next_page());
	let visible = view.visible_indices();
	assert_eq!(visible, (100..120).step_by(2).collect::<Vec<_>>());
	assert_eq!(
		view.pagination_controls().map(PaginationControls::label),
		Some("Page 2 of 2")
	);
}

#[test]
fn conjunction_mode_clamps_the_page_when_matches_shrink() {
	let mut view = bound(numbered(120), Composition::Conjunction);
	view.mount();
	view.apply_pagination(3);

	view.on_filter_input(0, "11");
	let summary = view.summary();
	assert_eq!(summary, PageSummary { page: 1, page_count: 1 });
	assert_eq!(view.visible_indices(), vec![11, 110, 111, 112, 113, 114, 115, 116, 117, 118, 119]);
	assert_eq!(
		view.pagination_controls().map(PaginationControls::label),
		Some("Page 1 of 1")
	);
}

#[test]
fn filter_input_updates_the_bound_inputs() {
	let mut view = bound(people(), Composition::Independent);
	assert!(view.on_filter_input(0, "ali"));
	assert_eq!(view.filter_input(0), Some("ali"));
	assert_eq!(view.filters().get(0), Some("ali"));
	assert_eq!(view.visible_indices(), vec![0, 2]);

	assert!(view.on_filter_input(1, "4"));
	assert_eq!(view.visible_indices(), vec![2]);
}

#[test]
fn handlers_without_bound_controls_do_nothing() {
	let mut view = ViewController::new(numbered(120), ViewConfig::default(), ViewBindings::unbound());
	view.mount();

	assert!(!view.on_filter_input(0, "1"));
	assert!(!view.next_page());
	assert_eq!(view.current_page(), 1);
	assert!(view.pagination_controls().is_none());
	assert_eq!(view.visible_indices().len(), 120);
}

#[test]
fn unbound_pagination_keeps_every_row_reachable() {
	let table = numbered(120);
	let bindings = ViewBindings::unbound().with_filter_inputs(FilterInputs::for_table(&table));
	let mut view = ViewController::new(table, ViewConfig::default(), bindings);
	view.mount();

	assert_eq!(view.visible_indices(), (0..120).collect::<Vec<_>>());
	assert!(!view.next_page());
	assert_eq!(view.visible_indices().len(), 120);

	assert!(view.on_filter_input(1, "odd"));
	assert_eq!(view.visible_indices().len(), 60);
}

#[test]
fn unbound_pagination_in_conjunction_shows_all_matches() {
	let table = numbered(120);
	let bindings = ViewBindings::unbound().with_filter_inputs(FilterInputs::for_table(&table));
	let config = ViewConfig {
		composition: Composition::Conjunction,
		..ViewConfig::default()
	};
	let mut view = ViewController::new(table, config, bindings);
	view.mount();

	view.on_filter_input(1, "even");
	assert_eq!(view.visible_indices().len(), 60);
}

#[test]
fn applied_filters_show_in_the_bound_inputs() {
	let mut view = bound(people(), Composition::Independent);
	view.apply_filters(&filter(0, "bob"));
	assert_eq!(view.filter_input(0), Some("bob"));
	assert_eq!(view.filter_input(1), Some(""));

	assert!(view.on_filter_input(1, "5"));
	assert_eq!(view.filters().get(0), Some("bob"));
	assert_eq!(view.visible_indices(), vec![1]);

	view.apply_filters(&FilterState::new());
	assert_eq!(view.filter_input(0), Some(""));
	assert_eq!(view.filter_input(1), Some(""));
}

#[test]
fn filter_input_for_unknown_column_is_ignored() {
	let mut view = bound(people(), Composition::Independent);
	assert!(!view.on_filter_input(7, "x"));
	assert!(view.filters().is_empty());
}

#[test]
fn mount_applies_prefilled_inputs_before_paging() {
	let table = numbered(10);
	let mut inputs = FilterInputs::for_table(&table);
	inputs.set(1, "odd");
	let bindings = ViewBindings::unbound()
		.with_filter_inputs(inputs)
		.with_pagination(PaginationControls::new());
	let config = ViewConfig {
		page_size: 3,
		composition: Composition::Conjunction,
	};
	let mut view = ViewController::new(table, config, bindings);

	let summary = view.mount();
	assert_eq!(summary, PageSummary { page: 1, page_count: 2 });
	assert_eq!(view.visible_indices(), vec![1, 3, 5]);
}

#[test]
fn composition_names_parse_case_insensitively() {
	assert_eq!("Conjunction".parse(), Ok(Composition::Conjunction));
	assert_eq!(" independent ".parse(), Ok(Composition::Independent));
	assert!("both".parse::<Composition>().is_err());
}

#[test]
fn composition_round_trips_through_lowercase_names() {
	let json = serde_json::to_string(&Composition::Conjunction).expect("serialize");
	assert_eq!(json, "\"conjunction\"");
	let mode: Composition = serde_json::from_str("\"Independent\"").expect("deserialize");
	assert_eq!(mode, Composition::Independent);
	assert!(serde_json::from_str::<Composition>("\"both\"").is_err());
}

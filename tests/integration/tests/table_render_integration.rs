//! Table renderer integration tests
//!
//! Builds tables, renders their payloads and checks the markup, the
//! diagnostics and the fallback warnings.

use papaleguas_conf::RenderSettings;
use papaleguas_core::{Color, HasLabel, TablePayload};
use papaleguas_integration_tests::logging::LogCapture;
use papaleguas_render::{DiagnosticKind, Renderers, ViewContext, ViewRenderer};
use papaleguas_tables::action::{CreateHeaderAction, DeleteBulkAction, RowAction};
use papaleguas_tables::column::{BadgeColumn, ColumnBuilder, CustomColumn, NumberColumn, TextColumn};
use papaleguas_tables::filter::{FilterBuilder, SelectFilter, TextFilter};
use papaleguas_tables::table::{Table, TableRequest};
use papaleguas_tables::view::{CardView, KanbanColumn, KanbanView};
use papaleguas_core::Record;
use rstest::*;
use serde_json::json;

fn records(value: serde_json::Value) -> Vec<Record> {
	value
		.as_array()
		.unwrap()
		.iter()
		.filter_map(|row| row.as_object().cloned())
		.collect()
}

#[fixture]
fn users() -> Vec<Record> {
	records(json!([
		{ "id": 1, "name": "Ana", "status": "active", "price": 10.5 },
		{ "id": 2, "name": "Bruno <script>", "status": "banned", "price": 3 },
		{ "id": 3, "name": "Carla", "status": "active", "price": 7.25 }
	]))
}

#[rstest]
fn test_unknown_column_type_renders_as_text_with_one_diagnostic(users: Vec<Record>) {
	// Arrange
	let (logs, _guard) = LogCapture::install();

	let payload = Table::make()
		.column(TextColumn::make("name"))
		.column(CustomColumn::make("status", "unknown-type"))
		.records(users)
		.render()
		.unwrap();

	// Act
	let output = Renderers::with_defaults().render(&payload);

	// Assert
	assert!(output.html.contains(r#"data-key="name">Ana</td>"#));
	assert!(output.html.contains(r#"data-key="status">active</td>"#));
	assert!(output.html.contains(r#"data-key="status">banned</td>"#));
	assert_eq!(output.diagnostics.len(), 1);
	assert_eq!(output.diagnostics[0].kind, DiagnosticKind::Column);
	assert_eq!(output.diagnostics[0].subject, "status");
	assert_eq!(
		output.diagnostics[0].message,
		"No column renderer registered for type 'unknown-type'"
	);

	let warnings = logs.warnings();
	assert_eq!(warnings.len(), 1, "{warnings:?}");
	assert!(warnings[0].contains("unknown-type"));
}

#[rstest]
fn test_cells_are_escaped(users: Vec<Record>) {
	let payload = Table::make().column(TextColumn::make("name")).records(users).render().unwrap();

	let output = Renderers::with_defaults().render(&payload);

	assert!(output.html.contains("Bruno &lt;script&gt;"));
	assert!(!output.html.contains("<script>"));
}

#[rstest]
fn test_render_as_overrides_type(users: Vec<Record>) {
	let payload = Table::make()
		.column(TextColumn::make("status").render_as("badge"))
		.records(users)
		.render()
		.unwrap();

	let output = Renderers::with_defaults().render(&payload);

	assert!(output.html.contains(r#"<span class="pl-badge pl-badge-secondary">active</span>"#));
	assert!(output.diagnostics.is_empty());
}

#[rstest]
fn test_malformed_filters_render_default_filter() {
	// Arrange
	let (logs, _guard) = LogCapture::install();
	let props = json!({
		"filters": [
			"not-an-object",
			{ "key": "q", "label": "Query" },
			{ "key": "status", "type": "select", "options": [] }
		]
	});
	let payload = TablePayload {
		component: "PapaLeguas/Table".to_string(),
		id: Some("t".to_string()),
		props: props.as_object().cloned().unwrap(),
	};

	// Act
	let output = Renderers::with_defaults().render(&payload);

	// Assert
	assert_eq!(output.diagnostics.len(), 2);
	assert!(output.diagnostics.iter().all(|d| d.kind == DiagnosticKind::Filter));
	assert_eq!(output.diagnostics[1].subject, "q");
	assert_eq!(output.html.matches("pl-filter-default").count(), 2);
	assert!(output.html.contains("pl-filter-select"));
	assert!(output.html.contains(r#"id="t""#));
	assert_eq!(logs.warnings().len(), 2);
}

#[rstest]
fn test_full_table_markup(users: Vec<Record>) {
	let payload = Table::make()
		.column(TextColumn::make("name").sortable(true))
		.column(BadgeColumn::make("status").variant("active", Color::Success).variant("banned", Color::Danger))
		.column(NumberColumn::make("price").currency("$"))
		.filter(SelectFilter::make("status").option("active", "Active").option("banned", "Banned"))
		.filter(TextFilter::make("name").placeholder("Name"))
		.header_action(CreateHeaderAction::make("/users/create"))
		.bulk_action(DeleteBulkAction::make())
		.row_action(RowAction::make("edit").label("Edit").route("/users/{id}/edit"))
		.records(users)
		.with_request(TableRequest::from_query("filters[status]=active&per_page=1").unwrap())
		.render()
		.unwrap();

	let output = Renderers::with_defaults().render(&payload);

	assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);
	assert!(output.html.contains(r#"<span class="pl-badge pl-badge-success">active</span>"#));
	assert!(output.html.contains("$ 10.50"));
	assert!(output.html.contains(r#"href="/users/1/edit""#));
	assert!(output.html.contains(r#"<option value="active" selected>Active</option>"#));
	assert!(output.html.contains(r#"<div class="pl-bulk-actions" hidden>"#));
	assert!(output.html.contains("Showing 1 to 1 of 2"));
	assert!(output.html.contains(
		r#"<a class="pl-page" href="?per_page=1&amp;filters%5Bstatus%5D=active&amp;page=2">Next</a>"#
	));
	assert!(!output.html.contains("Carla"));
}

#[rstest]
fn test_kanban_view_groups_records(users: Vec<Record>) {
	let payload = Table::make()
		.column(TextColumn::make("name"))
		.column(TextColumn::make("price"))
		.view(KanbanView::make("board", "Board").columns(vec![
			KanbanColumn::new("active", "Active").limit(1),
			KanbanColumn::new("pending", "Pending"),
		]))
		.view(CardView::make("cards", "Cards").title_column("name"))
		.records(users)
		.render()
		.unwrap();

	let output = Renderers::with_defaults().render(&payload);
	let html = &output.html;

	assert!(html.contains(r#"<section class="pl-kanban-lane pl-over-limit" data-lane="active">"#));
	assert!(html.contains(r#"<header>Pending<span class="pl-count">0</span></header>"#));
	assert!(html.contains(r#"<header>Unassigned<span class="pl-count">1</span></header>"#));
	assert!(html.contains(r#"aria-current="true""#));
	assert!(output.diagnostics.is_empty());
}

#[rstest]
fn test_unknown_view_type_falls_back_to_table(users: Vec<Record>) {
	let payload = Table::make()
		.column(TextColumn::make("name"))
		.view(papaleguas_tables::view::View::of_type("map", "Map", "geo"))
		.records(users)
		.render()
		.unwrap();

	let output = Renderers::with_defaults().render(&payload);

	assert!(output.html.contains(r#"<table class="pl-table">"#));
	assert_eq!(output.diagnostics.len(), 1);
	assert_eq!(output.diagnostics[0].kind, DiagnosticKind::View);
}

struct Timeline;

impl ViewRenderer for Timeline {
	fn render(&self, context: &ViewContext<'_>) -> String {
		format!("<ol class=\"timeline\">{} events</ol>", context.records.len())
	}
}

#[rstest]
fn test_custom_view_renderer(users: Vec<Record>) {
	let mut renderers = Renderers::with_defaults();
	renderers.add_views_renderer("timeline", Timeline);
	let payload = Table::make()
		.view(papaleguas_tables::view::View::of_type("history", "History", "timeline"))
		.records(users)
		.render()
		.unwrap();

	let output = renderers.render(&payload);

	assert!(output.html.contains("<ol class=\"timeline\">3 events</ol>"));
}

#[rstest]
fn test_quiet_fallback_setting_still_reports_diagnostics(users: Vec<Record>) {
	let (logs, _guard) = LogCapture::install();
	let payload = Table::make()
		.column(CustomColumn::make("status", "unknown-type").label("Status"))
		.records(users)
		.render()
		.unwrap();

	let renderers = Renderers::with_settings(&RenderSettings {
		warn_on_fallback: false,
	});
	let output = renderers.render(&payload);

	assert_eq!(output.diagnostics.len(), 1);
	assert!(logs.warnings().is_empty());
}

#[rstest]
fn test_editable_columns_carry_editor(users: Vec<Record>) {
	let payload = Table::make()
		.column(BadgeColumn::make("status").variant("active", Color::Success).editable(true))
		.records(users)
		.render()
		.unwrap();

	let output = Renderers::with_defaults().render(&payload);

	assert!(output.html.contains(r#"<template class="pl-editor"><select class="pl-edit" name="status">"#));
	assert!(output.diagnostics.is_empty());
}

#[rstest]
fn test_editor_for_unknown_type_is_reported() {
	let props = json!({
		"columns": [{ "key": "rating", "type": "stars", "editable": true }],
		"records": [{ "rating": 4 }]
	});
	let payload = TablePayload {
		component: "PapaLeguas/Table".to_string(),
		id: None,
		props: props.as_object().cloned().unwrap(),
	};
	let mut renderers = Renderers::with_defaults();
	renderers.add_column_renderer("stars", |column: &papaleguas_render::ColumnDescriptor, record: &Record| {
		let count = column.value_in(record).and_then(|v| v.as_u64()).unwrap_or(0);
		"*".repeat(count as usize)
	});

	let output = renderers.render(&payload);

	assert!(output.html.contains(">****<template"));
	assert_eq!(output.diagnostics.len(), 1);
	assert_eq!(output.diagnostics[0].kind, DiagnosticKind::Edit);
	assert!(output.html.contains(r#"<input class="pl-edit" type="text" name="rating" value="4">"#));
}

#[rstest]
fn test_malformed_columns_keep_their_cells() {
	// Arrange
	let (logs, _guard) = LogCapture::install();
	let props = json!({
		"columns": [
			{ "key": "status", "type": 7 },
			{ "key": "score", "label": 3, "type": "number" },
			"not-an-object"
		],
		"records": [{ "status": "active", "score": 42 }]
	});
	let payload = TablePayload {
		component: "PapaLeguas/Table".to_string(),
		id: None,
		props: props.as_object().cloned().unwrap(),
	};

	// Act
	let output = Renderers::with_defaults().render(&payload);

	// Assert
	assert!(output.html.contains(r#"data-key="status">active</td>"#));
	assert!(output.html.contains(r#"data-key="score">42</td>"#));
	let subjects: Vec<&str> = output.diagnostics.iter().map(|d| d.subject.as_str()).collect();
	assert_eq!(subjects, vec!["status", "score", ""]);
	assert!(output.diagnostics.iter().all(|d| d.kind == DiagnosticKind::Column));
	assert!(output.diagnostics[0].message.starts_with("Malformed column:"));
	assert_eq!(logs.warnings().len(), 3);
}

#[rstest]
fn test_links_and_form_keep_request_state(users: Vec<Record>) {
	// Arrange
	let payload = Table::make()
		.column(TextColumn::make("name").sortable(true).searchable(true))
		.filter(SelectFilter::make("status").option("active", "Active").option("banned", "Banned"))
		.view(CardView::make("cards", "Cards").title_column("name"))
		.view(KanbanView::make("board", "Board").columns(vec![KanbanColumn::new("active", "Active")]))
		.searchable(true)
		.records(users)
		.with_request(
			TableRequest::from_query("search=a&sort=name&direction=desc&per_page=1&filters[status]=active")
				.unwrap(),
		)
		.render()
		.unwrap();

	// Act
	let output = Renderers::with_defaults().render(&payload);
	let html = &output.html;

	// Assert
	assert!(html.contains(
		r#"href="?search=a&amp;sort=name&amp;direction=desc&amp;view=cards&amp;per_page=1&amp;filters%5Bstatus%5D=active&amp;page=2">Next</a>"#
	));
	assert!(html.contains(
		r#"<a class="pl-view" href="?search=a&amp;sort=name&amp;direction=desc&amp;per_page=1&amp;filters%5Bstatus%5D=active&amp;view=board">Board</a>"#
	));
	assert!(html.contains(r#"<form class="pl-query" method="get"><input type="hidden" name="sort" value="name">"#));
	assert!(html.contains(r#"<input type="hidden" name="per_page" value="1">"#));
	assert!(html.contains(r#"name="search" value="a""#));
	assert!(html.contains(r#"<button class="pl-apply" type="submit">Apply</button></form>"#));
	assert!(html.contains(r#"<input type="hidden" name="view" value="cards">"#));
}

//! Renderer registry integration tests
//!
//! Registers application renderers next to the built-in ones and checks
//! how unknown and malformed entries degrade.

use papaleguas::prelude::*;
use papaleguas::render::{ResolveError, builtin};
use papaleguas::{DiagnosticKind, TablePayload};
use papaleguas_integration_tests::fixtures::Product;
use papaleguas_integration_tests::logging::LogCapture;
use rstest::*;
use serde_json::{Value, json};

fn stars(column: &ColumnDescriptor, record: &Record) -> String {
	let count = column.value_in(record).and_then(Value::as_u64).unwrap_or(0).min(5);
	format!(r#"<span class="stars">{}</span>"#, "★".repeat(count as usize))
}

fn stock_filter(filter: &FilterDescriptor) -> String {
	format!(r#"<input type="range" name="filters[{}]">"#, filter.key)
}

struct Gallery;

impl ViewRenderer for Gallery {
	fn render(&self, context: &ViewContext<'_>) -> String {
		let tiles: String = context
			.records
			.iter()
			.map(|record| format!("<li>{}</li>", record["name"].as_str().unwrap_or("")))
			.collect();
		format!(r#"<ul class="gallery">{tiles}</ul>"#)
	}
}

fn payload(table: Table) -> TablePayload {
	table.model::<Product>().per_page(2).render().unwrap()
}

#[rstest]
fn test_application_renderers_for_every_kind() {
	// Arrange
	let mut renderers = Renderers::with_defaults();
	renderers
		.add_column_renderer("stars", stars)
		.add_filter_renderer("stock", stock_filter)
		.add_views_renderer("gallery", Gallery)
		.add_edit_renderer("stars", |column: &ColumnDescriptor, _: &Record| {
			format!(r#"<input type="number" min="0" max="5" name="{}">"#, column.key)
		});
	let payload = payload(
		Table::make()
			.column(CustomColumn::make("stock", "stars").editable(true))
			.filter(papaleguas::filter::TextFilter::make("stock"))
			.view(View::of_type("gallery", "Gallery", "gallery")),
	);
	let mut props = payload.props.clone();
	props["filters"][0]["type"] = json!("stock");
	let payload = TablePayload { props, ..payload };

	// Act
	let output = renderers.render(&payload);

	// Assert
	assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);
	assert!(output.html.contains(r#"<input type="range" name="filters[stock]">"#));
	assert!(output.html.contains(r#"<ul class="gallery"><li>Road Runner Skates</li><li>Anvil</li></ul>"#));
}

#[rstest]
fn test_custom_cells_in_fallback_view() {
	let mut renderers = Renderers::with_defaults();
	renderers.add_column_renderer("stars", stars);
	let payload = payload(Table::make().column(CustomColumn::make("stock", "stars")));

	let output = renderers.render(&payload);

	assert!(output.html.contains(r#"<span class="stars">★★★★</span>"#));
	assert!(output.html.contains(r#"<span class="stars"></span>"#));
}

#[rstest]
fn test_removed_renderer_falls_back() {
	// Arrange
	let (logs, _guard) = LogCapture::install();
	let mut renderers = Renderers::with_defaults();
	let removed = renderers.columns_mut().remove("badge");
	let payload = payload(Table::make().column(BadgeColumn::make("category")));

	// Act
	let output = renderers.render(&payload);

	// Assert
	assert!(removed.is_some());
	assert!(!renderers.columns().has("badge"));
	assert!(output.html.contains(r#"data-key="category">sports</td>"#));
	assert_eq!(output.diagnostics.len(), 1);
	assert_eq!(output.diagnostics[0].kind, DiagnosticKind::Column);
	assert_eq!(logs.warnings().len(), 1);
}

#[rstest]
fn test_fallback_cannot_be_removed() {
	let (logs, _guard) = LogCapture::install();
	let mut renderers = Renderers::with_defaults();

	assert!(renderers.columns_mut().remove(Renderers::DEFAULT_COLUMN).is_none());
	assert!(renderers.filters_mut().remove(Renderers::DEFAULT_FILTER).is_none());
	assert!(renderers.views_mut().remove(Renderers::DEFAULT_VIEW).is_none());
	assert!(renderers.edits_mut().remove(Renderers::DEFAULT_EDIT).is_none());
	assert!(renderers.columns().has("text"));
	assert_eq!(logs.warnings().len(), 4);
}

#[rstest]
fn test_replacing_the_fallback_changes_unknown_types() {
	let mut renderers = Renderers::with_defaults();
	renderers.add_column_renderer(Renderers::DEFAULT_COLUMN, |_: &ColumnDescriptor, _: &Record| {
		"?".to_string()
	});
	let payload = payload(
		Table::make()
			.column(TextColumn::make("name"))
			.column(CustomColumn::make("category", "chip")),
	);

	let output = renderers.render(&payload);

	assert!(output.html.contains(r#"data-key="name">?</td>"#));
	assert!(output.html.contains(r#"data-key="category">?</td>"#));
	assert_eq!(output.diagnostics.len(), 1);
}

#[rstest]
fn test_registries_list_builtin_types() {
	let renderers = Renderers::with_defaults();

	let columns: Vec<String> = renderers.columns().all().into_keys().collect();
	let filters: Vec<String> = renderers.filters().all().into_keys().collect();
	let views: Vec<String> = renderers.views().all().into_keys().collect();

	for column_type in ["text", "badge", "boolean", "date", "number", "image", "link"] {
		assert!(columns.iter().any(|key| key == column_type), "{column_type}");
	}
	for filter_type in ["default", "text", "select", "boolean", "date_range", "number_range"] {
		assert!(filters.iter().any(|key| key == filter_type), "{filter_type}");
	}
	assert!(views.iter().any(|key| key == "kanban"));
	assert!(views.iter().any(|key| key == "cards"));
	assert!(Renderers::empty().columns().has(Renderers::DEFAULT_COLUMN));
}

#[rstest]
fn test_resolve_errors() {
	let renderers = Renderers::with_defaults();

	assert!(matches!(
		renderers.views().resolve(Some("timeline")),
		Err(ResolveError::Unregistered { .. })
	));
	assert!(matches!(
		renderers.filters().resolve(None),
		Err(ResolveError::MissingType { .. })
	));
	assert!(renderers.columns().resolve(Some("date")).is_ok());
}

#[rstest]
fn test_builtin_renderers_are_reusable() {
	let mut renderers = Renderers::with_defaults();
	renderers.add_column_renderer("money", builtin::column::number);
	let payload = payload(
		Table::make().column(CustomColumn::make("price", "money").option("prefix", "€").option("decimals", 1)),
	);

	let output = renderers.render(&payload);

	assert!(output.html.contains("€129.9"));
	assert!(output.diagnostics.is_empty());
}

#[rstest]
fn test_action_presets_render() {
	let payload = payload(
		Table::make()
			.column(TextColumn::make("name"))
			.header_action(CreateHeaderAction::make("/products/new"))
			.header_action(ExportHeaderAction::make("/products/export").open_in_new_tab())
			.header_action(RefreshHeaderAction::make())
			.bulk_action(ActivateBulkAction::make())
			.bulk_action(DeactivateBulkAction::make())
			.bulk_action(DeleteBulkAction::make()),
	);

	let html = Renderers::with_defaults().render(&payload).html;

	assert!(html.contains(r#"data-action="create""#));
	assert!(html.contains(r#"href="/products/export" data-action="export" target="_blank""#));
	assert!(html.contains(r#"<span class="pl-sr-only">Refresh</span>"#));
	assert!(html.contains(&format!(
		r#"data-confirm-title="{}""#,
		DeleteBulkAction::CONFIRMATION_TITLE
	)));
	assert_eq!(html.matches("data-confirm-title").count(), 3);
}

//! Table pipeline integration tests
//!
//! Runs model-backed tables through request parsing, search, filters,
//! sorting and pagination, then renders the payload.

use papaleguas::PapaError;
use papaleguas::prelude::*;
use papaleguas_integration_tests::fixtures::{Product, loose_records, products};
use papaleguas_integration_tests::logging::LogCapture;
use proptest::prelude::*;
use rstest::*;
use serde_json::{Value, json};

fn catalog() -> Table {
	Table::make()
		.model::<Product>()
		.column(TextColumn::make("name").sortable(true).searchable(true))
		.column(BadgeColumn::make("category"))
		.column(NumberColumn::make("price").currency("$").sortable(true))
		.column(NumberColumn::make("stock").sortable(true))
		.column(BooleanColumn::make("published"))
		.column(DateColumn::make("released_at").format("%d/%m/%Y"))
		.filter(SelectFilter::make("category").options([("sports", "Sports"), ("tools", "Tools"), ("food", "Food")]))
		.filter(NumberRangeFilter::make("price"))
		.filter(BooleanFilter::make("published"))
		.filter(DateRangeFilter::make("released_at"))
		.bulk_action(DeleteBulkAction::make())
		.row_action(RowAction::make("edit").label("Edit").route("/products/{id}/edit"))
		.default_sort("name", SortOrder::Ascending)
		.per_page(3)
}

fn names(props: &Props) -> Vec<String> {
	props["records"]
		.as_array()
		.unwrap()
		.iter()
		.map(|record| record["name"].as_str().unwrap().to_string())
		.collect()
}

#[rstest]
#[case("filters[category]=sports&filters[price][min]=100&filters[price][max]=1000&sort=price&direction=desc", vec!["Jet Bike", "Road Runner Skates"])]
#[case("filters[published]=0", vec!["Earthquake Pills", "Rocket Sled"])]
#[case("filters[released_at][from]=2024-01-01&filters[released_at][to]=2024-03-31", vec!["Earthquake Pills", "Road Runner Skates"])]
#[case("search=BI", vec!["Bird Seed", "Jet Bike"])]
#[case("filters[category][]=tools&filters[category][]=food&sort=stock&direction=asc&per_page=10", vec!["Anvil", "Dehydrated Boulders", "Giant Magnet", "Earthquake Pills", "Bird Seed"])]
fn test_request_drives_pipeline(#[case] query: &str, #[case] expected: Vec<&str>) {
	// Arrange
	let request = TableRequest::from_query(query).unwrap();

	// Act
	let props = catalog().with_request(request).get_props().unwrap();

	// Assert
	assert_eq!(names(&props), expected);
	assert_eq!(props["model"], "Product");
}

#[rstest]
fn test_stable_sort_keeps_source_order_for_ties() {
	// Anvil and Dehydrated Boulders are both out of stock
	let request = TableRequest::new().sort("stock", SortOrder::Ascending).per_page(2);

	let props = catalog().with_request(request).get_props().unwrap();

	assert_eq!(names(&props), vec!["Anvil", "Dehydrated Boulders"]);
}

#[rstest]
fn test_pagination_metadata(products: Vec<Product>) {
	let request = TableRequest::from_query("page=3").unwrap();

	let props = catalog().with_request(request).get_props().unwrap();

	assert_eq!(
		props["pagination"],
		json!({
			"enabled": true,
			"currentPage": 3,
			"perPage": 3,
			"perPageOptions": [10, 15, 25, 50, 100],
			"total": products.len(),
			"lastPage": 3,
			"from": 7,
			"to": 8,
		})
	);
	assert_eq!(names(&props), vec!["Road Runner Skates", "Rocket Sled"]);
}

#[rstest]
fn test_active_filter_values_are_echoed() {
	let request = TableRequest::new()
		.filter("category", "tools")
		.filter("published", json!("maybe"));

	let props = catalog().with_request(request).get_props().unwrap();
	let filters = props["filters"].as_array().unwrap();

	assert_eq!(filters[0]["value"], "tools");
	// Unparseable booleans leave the filter inactive
	assert!(filters[2].get("value").is_none());
	assert_eq!(names(&props), vec!["Anvil", "Giant Magnet"]);
}

#[rstest]
fn test_undeclared_filter_keys_are_ignored() {
	let (logs, _guard) = LogCapture::install();
	let request = TableRequest::new().filter("colour", "red");

	let props = catalog().with_request(request).get_props().unwrap();

	assert_eq!(props["pagination"]["total"], 8);
	assert!(logs.warnings().is_empty());
	assert!(logs.lines().iter().any(|line| line.starts_with("[DEBUG]") && line.contains("undeclared filter")));
}

#[rstest]
fn test_rendered_catalog() {
	// Arrange
	let request = TableRequest::from_query("filters[category]=food&sort=price&direction=asc").unwrap();
	let payload = catalog().with_request(request).render().unwrap();

	// Act
	let output = Renderers::with_defaults().render(&payload);

	// Assert
	let html = &output.html;
	assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);
	assert!(html.contains(r#"data-component="PapaLeguas/Table""#));
	assert!(html.contains("$ 4.99"));
	assert!(html.contains(r#"<time datetime="2021-03-15">15/03/2021</time>"#));
	assert!(html.contains(r#"href="/products/5/edit""#));
	assert!(html.contains(r#"<th class="pl-select"><input type="checkbox" data-select-all></th>"#));
	assert!(html.find("Bird Seed").unwrap() < html.find("Earthquake Pills").unwrap());
	assert!(html.find("Earthquake Pills").unwrap() < html.find("Dehydrated Boulders").unwrap());
	assert!(!html.contains("Anvil"));
}

#[rstest]
fn test_kanban_board_over_model() {
	let payload = Table::make()
		.model::<Product>()
		.column(TextColumn::make("name"))
		.column(NumberColumn::make("stock"))
		.view(View::make("list", "List"))
		.view(KanbanView::make("board", "Board").group_by("stage").workflow("catalog", "Catalog"))
		.with_request(TableRequest::new().view("board"))
		.paginate(false)
		.render()
		.unwrap();

	assert_eq!(payload.props["activeView"], "board");
	assert_eq!(payload.props["records"].as_array().map(Vec::len), Some(8));

	let html = Renderers::with_defaults().render(&payload).html;
	let draft = html.find(r#"data-lane="draft""#).unwrap();
	let review = html.find(r#"data-lane="review""#).unwrap();
	let published = html.find(r#"data-lane="published""#).unwrap();
	assert!(draft < review && review < published);
	assert!(html.contains(r#"data-workflow="catalog""#));
	assert!(html.contains(r#"<header>review<span class="pl-count">3</span></header>"#));
}

#[rstest]
fn test_query_source_with_nested_fields(loose_records: Vec<Record>) {
	let payload = Table::make()
		.query(move || loose_records.clone())
		.column(TextColumn::make("title"))
		.column(TextColumn::make("assignee.name").label("Assignee").placeholder("Nobody"))
		.render()
		.unwrap();

	assert_eq!(payload.props["model"], Value::Null);
	assert_eq!(payload.props["columns"][1]["label"], "Assignee");

	let html = Renderers::with_defaults().render(&payload).html;
	assert!(html.contains(r#"data-key="assignee.name">Ana</td>"#));
	assert!(html.contains(r#"<span class="pl-placeholder">Nobody</span>"#));
}

#[rstest]
fn test_empty_table_renders_empty_row() {
	let payload = Table::make().column(TextColumn::make("name")).render().unwrap();

	let output = Renderers::with_defaults().render(&payload);

	assert!(output.html.contains("No records found"));
	assert!(output.html.contains("Showing 0 of 0"));
}

#[rstest]
fn test_invalid_requests_are_rejected() {
	assert!(matches!(
		TableRequest::from_query("direction=sideways"),
		Err(PapaError::InvalidRequest(_))
	));
	assert!(matches!(
		catalog().with_request(TableRequest::new().per_page(0)).get_props(),
		Err(PapaError::InvalidPerPage(0))
	));
}

fn mixed_cell() -> impl Strategy<Value = Value> {
	prop_oneof![
		(-100i64..100).prop_map(|n| json!(n)),
		(-100i64..100).prop_map(|n| json!(n.to_string())),
		Just(json!("N/A")),
		Just(Value::Null),
	]
}

proptest! {
	#[test]
	fn prop_sorting_mixed_cells_returns_a_page(cells in proptest::collection::vec(mixed_cell(), 0..50)) {
		// Arrange
		let records: Vec<Record> = cells
			.iter()
			.filter_map(|cell| json!({ "v": cell }).as_object().cloned())
			.collect();
		let table = Table::make()
			.column(TextColumn::make("v").sortable(true))
			.records(records)
			.with_request(TableRequest::new().sort("v", SortOrder::Descending).per_page(100));

		// Act
		let props = table.get_props().unwrap();

		// Assert
		let sorted = props["records"].as_array().cloned().unwrap_or_default();
		prop_assert_eq!(sorted.len(), cells.len());
		let first_number = sorted.iter().position(|r| r["v"].is_number()).unwrap_or(sorted.len());
		prop_assert!(sorted[first_number..].iter().all(|r| !r["v"].is_string()));
		let numbers: Vec<f64> = sorted.iter().filter_map(|r| r["v"].as_f64()).collect();
		prop_assert!(numbers.windows(2).all(|pair| pair[0] >= pair[1]));
	}
}

//! Models and records shared by the integration tests

use papaleguas_core::Record;
use papaleguas_tables::table::Model;
use rstest::*;
use serde::Serialize;
use serde_json::json;

/// Catalog product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
	pub id: u32,
	pub name: String,
	pub category: String,
	pub price: f64,
	pub stock: u32,
	pub published: bool,
	pub stage: String,
	pub released_at: String,
}

impl Product {
	#[allow(clippy::too_many_arguments)]
	fn new(
		id: u32,
		name: &str,
		category: &str,
		price: f64,
		stock: u32,
		published: bool,
		stage: &str,
		released_at: &str,
	) -> Self {
		Self {
			id,
			name: name.to_string(),
			category: category.to_string(),
			price,
			stock,
			published,
			stage: stage.to_string(),
			released_at: released_at.to_string(),
		}
	}
}

impl Model for Product {
	const NAME: &'static str = "Product";

	fn all() -> Vec<Self> {
		products()
	}
}

/// Eight products over three categories and three workflow stages
#[fixture]
pub fn products() -> Vec<Product> {
	vec![
		Product::new(1, "Road Runner Skates", "sports", 129.9, 4, true, "draft", "2024-01-10"),
		Product::new(2, "Anvil", "tools", 89.0, 0, true, "review", "2023-11-02"),
		Product::new(3, "Rocket Sled", "sports", 1499.0, 2, false, "draft", "2024-05-21"),
		Product::new(4, "Giant Magnet", "tools", 59.5, 12, true, "published", "2022-08-30"),
		Product::new(5, "Bird Seed", "food", 4.99, 240, true, "published", "2021-03-15"),
		Product::new(6, "Earthquake Pills", "food", 12.0, 35, false, "review", "2024-02-29"),
		Product::new(7, "Dehydrated Boulders", "food", 19.99, 0, true, "published", "2023-06-01"),
		Product::new(8, "Jet Bike", "sports", 899.0, 1, true, "review", "2024-07-04"),
	]
}

/// Loosely shaped records, as a query against an untyped store returns them
#[fixture]
pub fn loose_records() -> Vec<Record> {
	let value = json!([
		{ "id": 1, "title": "Deploy", "assignee": { "name": "Ana" }, "priority": 3 },
		{ "id": 2, "title": "Rollback", "assignee": null, "priority": "1" },
		{ "id": 3, "title": "Monitor", "assignee": { "name": "Caio" } }
	]);
	value
		.as_array()
		.map(|rows| rows.iter().filter_map(|row| row.as_object().cloned()).collect())
		.unwrap_or_default()
}

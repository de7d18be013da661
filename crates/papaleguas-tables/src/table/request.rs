//! Query-string state of a table request

use indexmap::IndexMap;
use papaleguas_core::{PapaError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Direction of a sort
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
	/// Smallest first
	#[default]
	#[serde(rename = "asc")]
	Ascending,
	/// Largest first
	#[serde(rename = "desc")]
	Descending,
}

impl SortOrder {
	/// Returns the query-string form
	pub fn as_str(&self) -> &'static str {
		match self {
			SortOrder::Ascending => "asc",
			SortOrder::Descending => "desc",
		}
	}
}

impl fmt::Display for SortOrder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SortOrder {
	type Err = PapaError;

	fn from_str(s: &str) -> Result<Self> {
		match s.to_ascii_lowercase().as_str() {
			"asc" => Ok(SortOrder::Ascending),
			"desc" => Ok(SortOrder::Descending),
			other => Err(PapaError::InvalidRequest(format!(
				"direction must be 'asc' or 'desc', got '{other}'"
			))),
		}
	}
}

/// Requested sort column and direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
	/// Column key
	pub field: String,
	/// Direction
	pub order: SortOrder,
}

impl SortConfig {
	/// Creates a sort on `field`
	pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
		Self {
			field: field.into(),
			order,
		}
	}
}

/// Table state submitted by the client
///
/// # Examples
///
/// ```
/// use papaleguas_tables::table::{SortOrder, TableRequest};
///
/// let request = TableRequest::from_query(
///     "search=ana&sort=name&direction=desc&page=2&filters[status][]=active&filters[status][]=banned",
/// )
/// .unwrap();
///
/// assert_eq!(request.search.as_deref(), Some("ana"));
/// assert_eq!(request.sort.as_ref().unwrap().order, SortOrder::Descending);
/// assert_eq!(request.page, Some(2));
/// assert_eq!(request.filters["status"], serde_json::json!(["active", "banned"]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRequest {
	/// Global search term
	pub search: Option<String>,
	/// Requested sort
	pub sort: Option<SortConfig>,
	/// Requested page, starting at 1
	pub page: Option<u64>,
	/// Requested page size
	pub per_page: Option<u64>,
	/// Submitted filter values keyed by filter key
	pub filters: IndexMap<String, Value>,
	/// Requested view id
	pub view: Option<String>,
}

impl TableRequest {
	/// Creates an empty request
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses an `application/x-www-form-urlencoded` query string
	///
	/// Filter values are read from `filters[key]`; `filters[key][]` collects
	/// a list and `filters[key][bound]` an object. Unknown parameters are
	/// ignored.
	pub fn from_query(query: &str) -> Result<Self> {
		let pairs: Vec<(String, String)> =
			serde_urlencoded::from_str(query.trim_start_matches('?'))
				.map_err(|e| PapaError::InvalidRequest(e.to_string()))?;

		let mut request = Self::new();
		let mut sort_field = None;
		let mut direction = None;

		for (name, value) in pairs {
			match name.as_str() {
				"search" => request.search = non_empty(value),
				"sort" => sort_field = non_empty(value),
				"direction" => direction = Some(value.parse::<SortOrder>()?),
				"page" => request.page = Some(parse_number("page", &value)?),
				"per_page" => request.per_page = Some(parse_number("per_page", &value)?),
				"view" => request.view = non_empty(value),
				_ => {
					if let Some(path) = name.strip_prefix("filters[") {
						request.insert_filter(path, value)?;
					}
				}
			}
		}

		request.sort =
			sort_field.map(|field| SortConfig::new(field, direction.unwrap_or_default()));
		Ok(request)
	}

	/// Sets the search term
	pub fn search(mut self, term: impl Into<String>) -> Self {
		self.search = Some(term.into());
		self
	}

	/// Sets the sort
	pub fn sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
		self.sort = Some(SortConfig::new(field, order));
		self
	}

	/// Sets the page
	pub fn page(mut self, page: u64) -> Self {
		self.page = Some(page);
		self
	}

	/// Sets the page size
	pub fn per_page(mut self, per_page: u64) -> Self {
		self.per_page = Some(per_page);
		self
	}

	/// Sets a filter value
	pub fn filter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.filters.insert(key.into(), value.into());
		self
	}

	/// Sets the view
	pub fn view(mut self, view: impl Into<String>) -> Self {
		self.view = Some(view.into());
		self
	}

	// `path` is what follows `filters[`, e.g. `status]`, `status][]` or
	// `created_at][from]`.
	fn insert_filter(&mut self, path: &str, value: String) -> Result<()> {
		let malformed =
			|| PapaError::InvalidRequest(format!("malformed filter parameter 'filters[{path}'"));
		let (key, rest) = path.split_once(']').ok_or_else(malformed)?;
		if key.is_empty() {
			return Err(malformed());
		}

		match rest {
			"" => {
				self.filters.insert(key.to_string(), Value::String(value));
			}
			"[]" => {
				let entry = self
					.filters
					.entry(key.to_string())
					.or_insert_with(|| Value::Array(Vec::new()));
				match entry {
					Value::Array(items) => items.push(Value::String(value)),
					other => *other = Value::Array(vec![Value::String(value)]),
				}
			}
			nested => {
				let sub = nested
					.strip_prefix('[')
					.and_then(|s| s.strip_suffix(']'))
					.filter(|s| !s.is_empty())
					.ok_or_else(malformed)?;
				let entry = self
					.filters
					.entry(key.to_string())
					.or_insert_with(|| Value::Object(Map::new()));
				if !entry.is_object() {
					*entry = Value::Object(Map::new());
				}
				if let Value::Object(bounds) = entry {
					bounds.insert(sub.to_string(), Value::String(value));
				}
			}
		}
		Ok(())
	}
}

fn non_empty(value: String) -> Option<String> {
	let trimmed = value.trim();
	(!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_number(name: &str, value: &str) -> Result<u64> {
	value
		.trim()
		.parse()
		.map_err(|_| {
			PapaError::InvalidRequest(format!(
				"{name} must be a non-negative integer, got '{value}'"
			))
		})
}

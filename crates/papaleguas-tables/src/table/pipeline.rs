//! In-memory search, filtering, sorting and pagination

use super::request::SortOrder;
use crate::filter::Filter;
use indexmap::IndexMap;
use papaleguas_core::record::lookup;
use papaleguas_core::{PapaError, Record, Result, value_to_text};
use serde_json::Value;
use std::cmp::Ordering;

/// One page of records and the totals around it
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
	/// Records on this page
	pub records: Vec<Record>,
	/// Records matching search and filters, across all pages
	pub total: usize,
	/// Current page, starting at 1
	pub page: u64,
	/// Page size
	pub per_page: u64,
	/// Last page, at least 1
	pub last_page: u64,
}

impl Page {
	/// 1-based position of the first record on this page
	pub fn first_position(&self) -> Option<u64> {
		(!self.records.is_empty()).then(|| (self.page - 1) * self.per_page + 1)
	}

	/// 1-based position of the last record on this page
	pub fn last_position(&self) -> Option<u64> {
		self.first_position()
			.map(|first| first + self.records.len() as u64 - 1)
	}
}

/// Keeps records where any of `keys` contains `term`, ignoring case
pub(crate) fn search(records: Vec<Record>, term: &str, keys: &[&str]) -> Vec<Record> {
	let needle = term.trim().to_lowercase();
	if needle.is_empty() {
		return records;
	}
	records
		.into_iter()
		.filter(|record| {
			keys.iter().any(|key| {
				lookup(record, key)
					.map(|value| value_to_text(value).to_lowercase().contains(&needle))
					.unwrap_or(false)
			})
		})
		.collect()
}

/// Keeps records accepted by every active filter
pub(crate) fn apply_filters(
	records: Vec<Record>,
	active: &[(&dyn Filter, &Value)],
) -> Vec<Record> {
	if active.is_empty() {
		return records;
	}
	records
		.into_iter()
		.filter(|record| active.iter().all(|(filter, value)| filter.matches(record, value)))
		.collect()
}

/// Resolves which filters apply, falling back to filter defaults
pub(crate) fn active_filters<'a>(
	filters: &'a IndexMap<String, Box<dyn Filter>>,
	submitted: &'a IndexMap<String, Value>,
) -> Vec<(&'a dyn Filter, &'a Value)> {
	for key in submitted.keys() {
		if !filters.contains_key(key) {
			tracing::debug!(filter = %key, "Ignoring value for undeclared filter");
		}
	}
	filters
		.iter()
		.filter_map(|(key, filter)| {
			let value = submitted
				.get(key)
				.or_else(|| filter.base().default_value())?;
			filter.is_active(value).then_some((filter.as_ref(), value))
		})
		.collect()
}

/// Sorts records in place by `field`; equal values keep their order
pub(crate) fn sort(records: &mut [Record], field: &str, order: SortOrder) {
	records.sort_by(|a, b| {
		let ordering = compare(lookup(a, field), lookup(b, field));
		match order {
			SortOrder::Ascending => ordering,
			SortOrder::Descending => ordering.reverse(),
		}
	});
}

/// Orders two cell values
///
/// Values are ranked by kind first: missing and null, booleans, numbers,
/// strings, then arrays and objects. Numbers compare numerically, strings
/// lexicographically and the rest by their text form, so mixed columns
/// still get a total order.
pub(crate) fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
	let a = a.unwrap_or(&Value::Null);
	let b = b.unwrap_or(&Value::Null);
	kind_rank(a).cmp(&kind_rank(b)).then_with(|| match (a, b) {
		(Value::Bool(x), Value::Bool(y)) => x.cmp(y),
		(Value::Number(x), Value::Number(y)) => {
			let x = x.as_f64().unwrap_or(0.0);
			let y = y.as_f64().unwrap_or(0.0);
			x.total_cmp(&y)
		}
		(Value::String(x), Value::String(y)) => x.cmp(y),
		(x, y) => value_to_text(x).cmp(&value_to_text(y)),
	})
}

fn kind_rank(value: &Value) -> u8 {
	match value {
		Value::Null => 0,
		Value::Bool(_) => 1,
		Value::Number(_) => 2,
		Value::String(_) => 3,
		Value::Array(_) | Value::Object(_) => 4,
	}
}

/// Cuts one page out of `records`
///
/// Pages past the end clamp to the last page.
pub(crate) fn paginate(records: Vec<Record>, page: u64, per_page: u64) -> Result<Page> {
	if per_page == 0 {
		return Err(PapaError::InvalidPerPage(per_page));
	}
	if page == 0 {
		return Err(PapaError::InvalidPage(page));
	}

	let total = records.len();
	let last_page = (total as u64).div_ceil(per_page).max(1);
	let page = page.min(last_page);
	let skip = ((page - 1) * per_page) as usize;

	let records = records
		.into_iter()
		.skip(skip)
		.take(per_page as usize)
		.collect();

	Ok(Page {
		records,
		total,
		page,
		per_page,
		last_page,
	})
}

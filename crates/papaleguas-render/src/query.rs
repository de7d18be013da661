//! Request state carried by links and forms
//!
//! Pagination and view links must not drop the search, sort or filter the
//! user is looking at. The state is read back from the props, so it always
//! matches what the table actually applied.

use crate::builtin::attr;
use papaleguas_core::{Props, value_to_text};
use serde_json::Value;

/// Query parameters of a rendered table, in the form `TableRequest` parses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct QueryState {
	pairs: Vec<(String, String)>,
}

impl QueryState {
	/// Collects `search`, `sort`, `direction`, `view`, `per_page` and
	/// `filters[...]` from table props
	pub(crate) fn from_props(props: &Props) -> Self {
		let mut pairs = Vec::new();
		let mut push = |name: &str, value: Option<&str>| {
			if let Some(value) = value.filter(|value| !value.is_empty()) {
				pairs.push((name.to_string(), value.to_string()));
			}
		};

		push("search", props.get("search").and_then(|s| s["value"].as_str()));
		let sorting = props.get("sorting");
		push("sort", sorting.and_then(|s| s["column"].as_str()));
		push("direction", sorting.and_then(|s| s["direction"].as_str()));
		push("view", props.get("activeView").and_then(Value::as_str));
		let per_page = props
			.get("pagination")
			.and_then(|p| p["perPage"].as_u64())
			.map(|n| n.to_string());
		push("per_page", per_page.as_deref());

		for filter in props.get("filters").and_then(Value::as_array).into_iter().flatten() {
			let (Some(key), Some(value)) = (filter["key"].as_str(), filter.get("value")) else {
				continue;
			};
			match value {
				Value::Null => {}
				Value::Array(items) => {
					let name = format!("filters[{key}][]");
					for item in items {
						pairs.push((name.clone(), value_to_text(item)));
					}
				}
				Value::Object(bounds) => {
					for (bound, item) in bounds {
						if !item.is_null() {
							pairs.push((format!("filters[{key}][{bound}]"), value_to_text(item)));
						}
					}
				}
				other => pairs.push((format!("filters[{key}]"), value_to_text(other))),
			}
		}

		Self { pairs }
	}

	/// Builds a `?query` link with `name` set to `value`
	pub(crate) fn href_with(&self, name: &str, value: &str) -> String {
		let mut pairs: Vec<(&str, &str)> = self
			.pairs
			.iter()
			.filter(|(key, _)| key != name)
			.map(|(key, value)| (key.as_str(), value.as_str()))
			.collect();
		pairs.push((name, value));

		match serde_urlencoded::to_string(&pairs) {
			Ok(query) => format!("?{query}"),
			Err(error) => {
				tracing::debug!(%error, "Dropping table state from link");
				format!("?{}", serde_urlencoded::to_string([(name, value)]).unwrap_or_default())
			}
		}
	}

	/// Renders hidden inputs for the parameters named in `names`
	///
	/// Used by the toolbar form, whose visible fields cover the rest.
	pub(crate) fn hidden_inputs(&self, names: &[&str]) -> String {
		self.pairs
			.iter()
			.filter(|(key, _)| names.contains(&key.as_str()))
			.map(|(key, value)| format!(r#"<input type="hidden"{}{}>"#, attr("name", key), attr("value", value)))
			.collect()
	}
}

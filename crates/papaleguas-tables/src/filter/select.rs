use super::{Filter, FilterBase};
use papaleguas_core::record::to_props;
use papaleguas_core::{Props, Record, Result, value_to_text};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One choice offered by a [`SelectFilter`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOption {
	/// Submitted value
	pub value: Value,
	/// Display text
	pub label: String,
}

/// Filter with a fixed list of choices
///
/// # Examples
///
/// ```
/// use papaleguas_tables::filter::{Filter, SelectFilter};
///
/// let filter = SelectFilter::make("status")
///     .option("active", "Active")
///     .option("banned", "Banned")
///     .multiple(true);
///
/// let props = filter.to_props().unwrap();
/// assert_eq!(props["options"][1]["label"], "Banned");
/// assert_eq!(props["multiple"], true);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectFilter {
	#[serde(flatten)]
	base: FilterBase,
	options: Vec<FilterOption>,
	multiple: bool,
}

impl SelectFilter {
	/// Type string emitted by this filter
	pub const TYPE: &'static str = "select";

	/// Creates a select filter for `key`
	pub fn make(key: impl Into<String>) -> Self {
		Self {
			base: FilterBase::new(key, Self::TYPE),
			options: Vec::new(),
			multiple: false,
		}
	}

	/// Appends a choice
	pub fn option(mut self, value: impl Into<Value>, label: impl Into<String>) -> Self {
		self.options.push(FilterOption {
			value: value.into(),
			label: label.into(),
		});
		self
	}

	/// Replaces all choices with `(value, label)` pairs
	pub fn options<V, L>(mut self, options: impl IntoIterator<Item = (V, L)>) -> Self
	where
		V: Into<Value>,
		L: Into<String>,
	{
		self.options = options
			.into_iter()
			.map(|(value, label)| FilterOption {
				value: value.into(),
				label: label.into(),
			})
			.collect();
		self
	}

	/// Allows several choices at once
	pub fn multiple(mut self, multiple: bool) -> Self {
		self.multiple = multiple;
		self
	}

	/// Returns the configured choices
	pub fn choices(&self) -> &[FilterOption] {
		&self.options
	}
}

super::impl_filter_attributes!(SelectFilter);

impl Filter for SelectFilter {
	fn base(&self) -> &FilterBase {
		&self.base
	}

	fn to_props(&self) -> Result<Props> {
		to_props(self)
	}

	fn matches(&self, record: &Record, value: &Value) -> bool {
		let Some(actual) = self.base.target(record) else {
			return false;
		};
		let actual = value_to_text(actual);
		match value {
			Value::Array(selected) => selected.iter().any(|v| value_to_text(v) == actual),
			single => value_to_text(single) == actual,
		}
	}
}

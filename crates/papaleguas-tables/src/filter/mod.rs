//! Table filters
//!
//! A filter serializes to a descriptor the renderer turns into an input,
//! and evaluates submitted values against records when the table runs its
//! data pipeline. Each variant decides what an "empty" submission is and
//! how a record satisfies it.

mod boolean;
mod date_range;
mod number_range;
mod select;
mod text;

pub use boolean::BooleanFilter;
pub use date_range::DateRangeFilter;
pub use number_range::NumberRangeFilter;
pub use select::{FilterOption, SelectFilter};
pub use text::TextFilter;

use papaleguas_core::attributes::humanize;
use papaleguas_core::record::lookup;
use papaleguas_core::{Attributes, Props, Record, Result};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Debug;

/// Fields shared by every filter type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterBase {
	key: String,
	#[serde(flatten)]
	attributes: Attributes,
	#[serde(rename = "type")]
	filter_type: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	placeholder: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	default: Option<Value>,
	#[serde(skip)]
	field: Option<String>,
}

impl FilterBase {
	/// Creates the base of a filter of the given type
	pub fn new(key: impl Into<String>, filter_type: impl Into<String>) -> Self {
		let key = key.into();
		let attributes = Attributes::labelled(humanize(&key));
		Self {
			key,
			attributes,
			filter_type: filter_type.into(),
			placeholder: None,
			default: None,
			field: None,
		}
	}

	/// Returns the filter key
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Returns the declared type
	pub fn filter_type(&self) -> &str {
		&self.filter_type
	}

	/// Returns the default value applied when nothing was submitted
	pub fn default_value(&self) -> Option<&Value> {
		self.default.as_ref()
	}

	/// Returns the record field the filter reads, which defaults to the key
	pub fn field(&self) -> &str {
		self.field.as_deref().unwrap_or(&self.key)
	}

	/// Reads the filtered field from a record
	pub fn target<'a>(&self, record: &'a Record) -> Option<&'a Value> {
		lookup(record, self.field())
	}
}

/// Trait for table filter definitions
pub trait Filter: Debug + Send + Sync {
	/// Returns the shared filter fields
	fn base(&self) -> &FilterBase;

	/// Serializes the filter into its descriptor
	fn to_props(&self) -> Result<Props>;

	/// Returns whether `record` satisfies the submitted `value`
	///
	/// Only called with values for which [`Filter::is_active`] holds.
	fn matches(&self, record: &Record, value: &Value) -> bool;

	/// Returns whether a submitted value constrains the result set
	fn is_active(&self, value: &Value) -> bool {
		!is_blank(value)
	}

	/// Returns the filter key
	fn key(&self) -> &str {
		self.base().key()
	}
}

/// Fluent setters shared by every filter variant
pub trait FilterBuilder: Sized {
	/// Mutably borrows the shared filter fields
	fn base_mut(&mut self) -> &mut FilterBase;

	/// Sets the input placeholder
	fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.base_mut().placeholder = Some(placeholder.into());
		self
	}

	/// Sets the value applied when the request carries none
	fn default(mut self, value: impl Into<Value>) -> Self {
		self.base_mut().default = Some(value.into());
		self
	}

	/// Reads another record field than the key, dotted paths allowed
	fn field(mut self, field: impl Into<String>) -> Self {
		self.base_mut().field = Some(field.into());
		self
	}
}

/// Returns whether a submitted value carries no constraint
pub(crate) fn is_blank(value: &Value) -> bool {
	match value {
		Value::Null => true,
		Value::String(s) => s.trim().is_empty(),
		Value::Array(items) => items.iter().all(is_blank),
		Value::Object(map) => map.values().all(is_blank),
		Value::Bool(_) | Value::Number(_) => false,
	}
}

/// Implements the capability traits and [`FilterBuilder`] for a variant
/// with a `base: FilterBase` field
macro_rules! impl_filter_attributes {
	($ty:ty) => {
		impl papaleguas_core::HasAttributes for $ty {
			fn attributes(&self) -> &papaleguas_core::Attributes {
				&self.base.attributes
			}

			fn attributes_mut(&mut self) -> &mut papaleguas_core::Attributes {
				&mut self.base.attributes
			}
		}

		impl papaleguas_core::HasLabel for $ty {}

		impl $crate::filter::FilterBuilder for $ty {
			fn base_mut(&mut self) -> &mut $crate::filter::FilterBase {
				&mut self.base
			}
		}
	};
}

pub(crate) use impl_filter_attributes;

#[cfg(test)]
mod tests {
	use super::*;
	use papaleguas_core::HasLabel;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!(null), true)]
	#[case(json!(""), true)]
	#[case(json!("  "), true)]
	#[case(json!([]), true)]
	#[case(json!({ "from": "", "to": null }), true)]
	#[case(json!("x"), false)]
	#[case(json!(false), false)]
	#[case(json!(0), false)]
	#[case(json!({ "from": "2024-01-01" }), false)]
	fn test_is_blank(#[case] value: Value, #[case] expected: bool) {
		assert_eq!(is_blank(&value), expected);
	}

	#[rstest]
	fn test_filter_descriptor() {
		let filter = TextFilter::make("email")
			.label("E-mail")
			.placeholder("Search e-mail")
			.default("@example.com");

		let props = filter.to_props().unwrap();

		assert_eq!(props["key"], "email");
		assert_eq!(props["label"], "E-mail");
		assert_eq!(props["type"], "text");
		assert_eq!(props["placeholder"], "Search e-mail");
		assert_eq!(props["default"], "@example.com");
		assert!(!props.contains_key("field"));
	}

	#[rstest]
	fn test_field_reads_nested_values() {
		let filter = TextFilter::make("author").field("author.name");
		let record = json!({ "author": { "name": "Ana Lima" } });
		let record = record.as_object().unwrap();

		assert_eq!(filter.base().field(), "author.name");
		assert!(filter.matches(record, &json!("ana")));
	}
}

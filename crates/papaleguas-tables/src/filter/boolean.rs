use super::{Filter, FilterBase};
use papaleguas_core::record::to_props;
use papaleguas_core::{Props, Record, Result};
use serde::Serialize;
use serde_json::Value;

/// Yes/no filter
///
/// Accepts `true`/`false`, `1`/`0` and `yes`/`no` submissions. Anything
/// else leaves the filter inactive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanFilter {
	#[serde(flatten)]
	base: FilterBase,
	true_label: String,
	false_label: String,
}

impl BooleanFilter {
	/// Type string emitted by this filter
	pub const TYPE: &'static str = "boolean";

	/// Creates a boolean filter for `key`
	pub fn make(key: impl Into<String>) -> Self {
		Self {
			base: FilterBase::new(key, Self::TYPE),
			true_label: "Yes".to_string(),
			false_label: "No".to_string(),
		}
	}

	/// Sets the texts of the two choices
	pub fn labels(mut self, true_label: impl Into<String>, false_label: impl Into<String>) -> Self {
		self.true_label = true_label.into();
		self.false_label = false_label.into();
		self
	}
}

super::impl_filter_attributes!(BooleanFilter);

fn truthiness(value: &Value) -> Option<bool> {
	match value {
		Value::Bool(b) => Some(*b),
		Value::Number(n) => n.as_f64().map(|n| n != 0.0),
		Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
			"true" | "1" | "yes" | "on" => Some(true),
			"false" | "0" | "no" | "off" => Some(false),
			_ => None,
		},
		_ => None,
	}
}

impl Filter for BooleanFilter {
	fn base(&self) -> &FilterBase {
		&self.base
	}

	fn to_props(&self) -> Result<Props> {
		to_props(self)
	}

	fn is_active(&self, value: &Value) -> bool {
		truthiness(value).is_some()
	}

	fn matches(&self, record: &Record, value: &Value) -> bool {
		let wanted = truthiness(value);
		let actual = self.base.target(record).and_then(truthiness).unwrap_or(false);
		wanted.is_none_or(|wanted| wanted == actual)
	}
}

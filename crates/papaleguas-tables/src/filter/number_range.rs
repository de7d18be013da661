use super::{Filter, FilterBase};
use papaleguas_core::record::to_props;
use papaleguas_core::{Props, Record, Result};
use serde::Serialize;
use serde_json::Value;

/// Inclusive numeric range filter submitted as `{"min": .., "max": ..}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberRangeFilter {
	#[serde(flatten)]
	base: FilterBase,
	#[serde(skip_serializing_if = "Option::is_none")]
	step: Option<f64>,
}

impl NumberRangeFilter {
	/// Type string emitted by this filter
	pub const TYPE: &'static str = "number_range";

	/// Creates a number range filter for `key`
	pub fn make(key: impl Into<String>) -> Self {
		Self {
			base: FilterBase::new(key, Self::TYPE),
			step: None,
		}
	}

	/// Sets the input step
	pub fn step(mut self, step: f64) -> Self {
		self.step = Some(step);
		self
	}
}

super::impl_filter_attributes!(NumberRangeFilter);

fn parse_number(value: &Value) -> Option<f64> {
	match value {
		Value::Number(n) => n.as_f64(),
		Value::String(s) => s.trim().parse().ok(),
		_ => None,
	}
}

impl Filter for NumberRangeFilter {
	fn base(&self) -> &FilterBase {
		&self.base
	}

	fn to_props(&self) -> Result<Props> {
		to_props(self)
	}

	fn is_active(&self, value: &Value) -> bool {
		value
			.as_object()
			.is_some_and(|bounds| bounds.values().any(|v| parse_number(v).is_some()))
	}

	fn matches(&self, record: &Record, value: &Value) -> bool {
		let Some(number) = self.base.target(record).and_then(parse_number) else {
			return false;
		};
		let min = value.get("min").and_then(parse_number);
		let max = value.get("max").and_then(parse_number);

		min.is_none_or(|min| number >= min) && max.is_none_or(|max| number <= max)
	}
}

use super::{Filter, FilterBase};
use chrono::NaiveDate;
use papaleguas_core::record::to_props;
use papaleguas_core::{Props, Record, Result};
use serde::Serialize;
use serde_json::Value;

/// Inclusive date range filter
///
/// Submitted as `{"from": "YYYY-MM-DD", "to": "YYYY-MM-DD"}`, either bound
/// optional. Date-time strings are compared on their date part.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateRangeFilter {
	#[serde(flatten)]
	base: FilterBase,
}

impl DateRangeFilter {
	/// Type string emitted by this filter
	pub const TYPE: &'static str = "date_range";

	/// Creates a date range filter for `key`
	pub fn make(key: impl Into<String>) -> Self {
		Self {
			base: FilterBase::new(key, Self::TYPE),
		}
	}
}

super::impl_filter_attributes!(DateRangeFilter);

fn parse_date(value: &Value) -> Option<NaiveDate> {
	let text = value.as_str()?.trim();
	let date = text.get(..10).unwrap_or(text);
	NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

impl Filter for DateRangeFilter {
	fn base(&self) -> &FilterBase {
		&self.base
	}

	fn to_props(&self) -> Result<Props> {
		to_props(self)
	}

	fn is_active(&self, value: &Value) -> bool {
		value
			.as_object()
			.is_some_and(|bounds| bounds.values().any(|v| parse_date(v).is_some()))
	}

	fn matches(&self, record: &Record, value: &Value) -> bool {
		let Some(date) = self.base.target(record).and_then(parse_date) else {
			return false;
		};
		let from = value.get("from").and_then(parse_date);
		let to = value.get("to").and_then(parse_date);

		from.is_none_or(|from| date >= from) && to.is_none_or(|to| date <= to)
	}
}

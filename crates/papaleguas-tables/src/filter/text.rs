use super::{Filter, FilterBase};
use papaleguas_core::record::to_props;
use papaleguas_core::{Props, Record, Result, value_to_text};
use serde::Serialize;
use serde_json::Value;

/// Free-text filter
///
/// Matches records whose field contains the submitted text, ignoring case.
/// [`TextFilter::exact`] requires the whole value to match instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextFilter {
	#[serde(flatten)]
	base: FilterBase,
	exact: bool,
}

impl TextFilter {
	/// Type string emitted by this filter
	pub const TYPE: &'static str = "text";

	/// Creates a text filter for `key`
	pub fn make(key: impl Into<String>) -> Self {
		Self {
			base: FilterBase::new(key, Self::TYPE),
			exact: false,
		}
	}

	/// Requires a case-insensitive full match
	pub fn exact(mut self, exact: bool) -> Self {
		self.exact = exact;
		self
	}
}

super::impl_filter_attributes!(TextFilter);

impl Filter for TextFilter {
	fn base(&self) -> &FilterBase {
		&self.base
	}

	fn to_props(&self) -> Result<Props> {
		to_props(self)
	}

	fn matches(&self, record: &Record, value: &Value) -> bool {
		let needle = value_to_text(value).trim().to_lowercase();
		let haystack = self
			.base
			.target(record)
			.map(value_to_text)
			.unwrap_or_default()
			.to_lowercase();

		if self.exact {
			haystack == needle
		} else {
			haystack.contains(&needle)
		}
	}
}

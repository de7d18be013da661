use super::ColumnBase;
use serde::Serialize;

/// Plain text column, the renderer's fallback type
///
/// # Examples
///
/// ```
/// use papaleguas_tables::column::{Column, ColumnBuilder, TextColumn};
///
/// let column = TextColumn::make("title").limit(40).searchable(true);
/// let props = column.to_props().unwrap();
/// assert_eq!(props["type"], "text");
/// assert_eq!(props["limit"], 40);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextColumn {
	#[serde(flatten)]
	base: ColumnBase,
	#[serde(skip_serializing_if = "Option::is_none")]
	limit: Option<usize>,
	#[serde(skip_serializing_if = "Option::is_none")]
	placeholder: Option<String>,
}

impl TextColumn {
	/// Type string emitted by this column
	pub const TYPE: &'static str = "text";

	/// Creates a text column for `key`
	pub fn make(key: impl Into<String>) -> Self {
		Self {
			base: ColumnBase::new(key, Self::TYPE),
			limit: None,
			placeholder: None,
		}
	}

	/// Truncates cell text to `limit` characters
	pub fn limit(mut self, limit: usize) -> Self {
		self.limit = Some(limit);
		self
	}

	/// Text shown for empty values
	pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}
}

super::impl_column!(TextColumn);

use super::ColumnBase;
use papaleguas_core::Props;
use serde::Serialize;
use serde_json::Value;

/// Column with an application-defined type
///
/// The renderer resolves the type through its column registry; an
/// application registers a renderer for it at startup. Unregistered types
/// are rendered as text.
///
/// # Examples
///
/// ```
/// use papaleguas_tables::column::{Column, CustomColumn};
///
/// let column = CustomColumn::make("rating", "stars").option("max", 5);
/// let props = column.to_props().unwrap();
/// assert_eq!(props["type"], "stars");
/// assert_eq!(props["max"], 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomColumn {
	#[serde(flatten)]
	base: ColumnBase,
	#[serde(flatten)]
	options: Props,
}

impl CustomColumn {
	/// Creates a column for `key` dispatched on `column_type`
	pub fn make(key: impl Into<String>, column_type: impl Into<String>) -> Self {
		Self {
			base: ColumnBase::new(key, column_type),
			options: Props::new(),
		}
	}

	/// Adds a type-specific option to the descriptor
	pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.options.insert(key.into(), value.into());
		self
	}
}

super::impl_column!(CustomColumn);

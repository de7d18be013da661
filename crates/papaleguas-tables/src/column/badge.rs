use super::ColumnBase;
use indexmap::IndexMap;
use papaleguas_core::Color;
use serde::Serialize;

/// Colored badge whose color depends on the cell value
///
/// # Examples
///
/// ```
/// use papaleguas_tables::column::{BadgeColumn, Column};
/// use papaleguas_core::Color;
///
/// let column = BadgeColumn::make("status")
///     .variant("active", Color::Success)
///     .variant("banned", Color::Danger)
///     .value_label("banned", "Banned forever");
///
/// let props = column.to_props().unwrap();
/// assert_eq!(props["variants"]["active"], "success");
/// assert_eq!(props["valueLabels"]["banned"], "Banned forever");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeColumn {
	#[serde(flatten)]
	base: ColumnBase,
	variants: IndexMap<String, Color>,
	value_labels: IndexMap<String, String>,
	default_color: Color,
}

impl BadgeColumn {
	/// Type string emitted by this column
	pub const TYPE: &'static str = "badge";

	/// Creates a badge column for `key`
	pub fn make(key: impl Into<String>) -> Self {
		Self {
			base: ColumnBase::new(key, Self::TYPE),
			variants: IndexMap::new(),
			value_labels: IndexMap::new(),
			default_color: Color::Secondary,
		}
	}

	/// Maps a cell value to a color
	pub fn variant(mut self, value: impl Into<String>, color: impl Into<Color>) -> Self {
		self.variants.insert(value.into(), color.into());
		self
	}

	/// Maps a cell value to display text
	pub fn value_label(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
		self.value_labels.insert(value.into(), label.into());
		self
	}

	/// Color used for values without a variant
	pub fn default_color(mut self, color: impl Into<Color>) -> Self {
		self.default_color = color.into();
		self
	}
}

super::impl_column!(BadgeColumn);

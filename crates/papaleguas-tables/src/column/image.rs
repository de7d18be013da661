use super::ColumnBase;
use serde::Serialize;

/// Thumbnail column whose cell value is an image URL
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageColumn {
	#[serde(flatten)]
	base: ColumnBase,
	size: u32,
	rounded: bool,
}

impl ImageColumn {
	/// Type string emitted by this column
	pub const TYPE: &'static str = "image";

	/// Creates an image column for `key`
	pub fn make(key: impl Into<String>) -> Self {
		Self {
			base: ColumnBase::new(key, Self::TYPE),
			size: 40,
			rounded: false,
		}
	}

	/// Sets the thumbnail edge length in pixels
	pub fn size(mut self, size: u32) -> Self {
		self.size = size;
		self
	}

	/// Renders the thumbnail as a circle
	pub fn rounded(mut self, rounded: bool) -> Self {
		self.rounded = rounded;
		self
	}
}

super::impl_column!(ImageColumn);

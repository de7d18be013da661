use super::{Alignment, ColumnBase};
use serde::Serialize;

/// Yes/no column
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanColumn {
	#[serde(flatten)]
	base: ColumnBase,
	true_label: String,
	false_label: String,
	true_icon: String,
	false_icon: String,
}

impl BooleanColumn {
	/// Type string emitted by this column
	pub const TYPE: &'static str = "boolean";

	/// Creates a boolean column for `key`, centered by default
	pub fn make(key: impl Into<String>) -> Self {
		let mut base = ColumnBase::new(key, Self::TYPE);
		base.alignment = Alignment::Center;
		Self {
			base,
			true_label: "Yes".to_string(),
			false_label: "No".to_string(),
			true_icon: "check".to_string(),
			false_icon: "x".to_string(),
		}
	}

	/// Sets the texts shown for true and false
	pub fn labels(mut self, true_label: impl Into<String>, false_label: impl Into<String>) -> Self {
		self.true_label = true_label.into();
		self.false_label = false_label.into();
		self
	}

	/// Sets the icons shown for true and false
	pub fn icons(mut self, true_icon: impl Into<String>, false_icon: impl Into<String>) -> Self {
		self.true_icon = true_icon.into();
		self.false_icon = false_icon.into();
		self
	}
}

super::impl_column!(BooleanColumn);

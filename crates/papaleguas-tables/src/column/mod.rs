//! Column definitions
//!
//! Every column variant embeds a [`ColumnBase`] holding the fields the
//! renderer needs regardless of type (key, label, sortability, width, ...)
//! and adds its own type-specific options, which are flattened into the
//! serialized descriptor.
//!
//! The `type` string is what the renderer's column registry dispatches on.
//! [`CustomColumn`] lets applications emit any type string, matched by a
//! renderer they register themselves.

mod badge;
mod boolean;
mod custom;
mod date;
mod image;
mod link;
mod number;
mod text;

pub use badge::BadgeColumn;
pub use boolean::BooleanColumn;
pub use custom::CustomColumn;
pub use date::DateColumn;
pub use image::ImageColumn;
pub use link::LinkColumn;
pub use number::NumberColumn;
pub use text::TextColumn;

use papaleguas_core::attributes::humanize;
use papaleguas_core::{Attributes, Props, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Horizontal alignment of a column's cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
	/// Left aligned
	#[default]
	Left,
	/// Centered
	Center,
	/// Right aligned
	Right,
}

/// Fields shared by every column type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnBase {
	key: String,
	#[serde(flatten)]
	attributes: Attributes,
	#[serde(rename = "type")]
	column_type: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	render_as: Option<String>,
	sortable: bool,
	searchable: bool,
	hidden: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	width: Option<String>,
	alignment: Alignment,
	editable: bool,
}

impl ColumnBase {
	/// Creates the base of a column of the given type
	///
	/// The label defaults to the humanized key.
	pub fn new(key: impl Into<String>, column_type: impl Into<String>) -> Self {
		let key = key.into();
		let attributes = Attributes::labelled(humanize(&key));
		Self {
			key,
			attributes,
			column_type: column_type.into(),
			render_as: None,
			sortable: false,
			searchable: false,
			hidden: false,
			width: None,
			alignment: Alignment::Left,
			editable: false,
		}
	}

	/// Returns the column key
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Returns the declared type
	pub fn column_type(&self) -> &str {
		&self.column_type
	}

	/// Returns the renderer override, if any
	pub fn render_as(&self) -> Option<&str> {
		self.render_as.as_deref()
	}

	/// Returns the attributes
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	/// Returns whether the column can be sorted
	pub fn is_sortable(&self) -> bool {
		self.sortable
	}

	/// Returns whether the column takes part in global search
	pub fn is_searchable(&self) -> bool {
		self.searchable
	}

	/// Returns whether the column is hidden by default
	pub fn is_hidden(&self) -> bool {
		self.hidden
	}

	/// Returns whether cells can be edited inline
	pub fn is_editable(&self) -> bool {
		self.editable
	}

	/// Returns the alignment
	pub fn alignment(&self) -> Alignment {
		self.alignment
	}
}

/// Trait for table column definitions
///
/// Implemented by every column variant; the table stores columns as
/// `Box<dyn Column>` keyed by [`ColumnBase::key`].
pub trait Column: Debug + Send + Sync {
	/// Returns the shared column fields
	fn base(&self) -> &ColumnBase;

	/// Serializes the column into its descriptor
	fn to_props(&self) -> Result<Props>;

	/// Returns the column key
	fn key(&self) -> &str {
		self.base().key()
	}
}

/// Fluent setters shared by every column variant
pub trait ColumnBuilder: Sized {
	/// Mutably borrows the shared column fields
	fn base_mut(&mut self) -> &mut ColumnBase;

	/// Sets whether this column is sortable
	fn sortable(mut self, sortable: bool) -> Self {
		self.base_mut().sortable = sortable;
		self
	}

	/// Sets whether this column takes part in global search
	fn searchable(mut self, searchable: bool) -> Self {
		self.base_mut().searchable = searchable;
		self
	}

	/// Hides the column by default
	fn hidden(mut self, hidden: bool) -> Self {
		self.base_mut().hidden = hidden;
		self
	}

	/// Sets a CSS width such as `"120px"` or `"20%"`
	fn width(mut self, width: impl Into<String>) -> Self {
		self.base_mut().width = Some(width.into());
		self
	}

	/// Sets the cell alignment
	fn alignment(mut self, alignment: Alignment) -> Self {
		self.base_mut().alignment = alignment;
		self
	}

	/// Renders the column with another registered renderer type
	fn render_as(mut self, renderer: impl Into<String>) -> Self {
		self.base_mut().render_as = Some(renderer.into());
		self
	}

	/// Allows inline editing of the column's cells
	fn editable(mut self, editable: bool) -> Self {
		self.base_mut().editable = editable;
		self
	}
}

/// Implements the capability traits and [`Column`] for a variant with a
/// `base: ColumnBase` field
macro_rules! impl_column {
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
		impl papaleguas_core::HasDescription for $ty {}

		impl $crate::column::ColumnBuilder for $ty {
			fn base_mut(&mut self) -> &mut $crate::column::ColumnBase {
				&mut self.base
			}
		}

		impl $crate::column::Column for $ty {
			fn base(&self) -> &$crate::column::ColumnBase {
				&self.base
			}

			fn to_props(&self) -> papaleguas_core::Result<papaleguas_core::Props> {
				papaleguas_core::record::to_props(self)
			}
		}
	};
}

pub(crate) use impl_column;

#[cfg(test)]
mod tests {
	use super::*;
	use papaleguas_core::{HasDescription, HasLabel};
	use rstest::rstest;
	use serde_json::{Value, json};

	#[rstest]
	fn test_column_defaults() {
		let column = TextColumn::make("created_at");
		let props = column.to_props().unwrap();

		assert_eq!(column.key(), "created_at");
		assert_eq!(props["label"], "Created at");
		assert_eq!(props["type"], "text");
		assert_eq!(props["sortable"], false);
		assert_eq!(props["searchable"], false);
		assert_eq!(props["hidden"], false);
		assert_eq!(props["alignment"], "left");
		assert!(!props.contains_key("renderAs"));
		assert!(!props.contains_key("width"));
	}

	#[rstest]
	fn test_shared_builder_methods() {
		let column = TextColumn::make("name")
			.label("Full name")
			.description("Given and family name")
			.sortable(true)
			.searchable(true)
			.width("240px")
			.alignment(Alignment::Center)
			.render_as("avatar-name")
			.editable(true);

		let props = Value::Object(column.to_props().unwrap());

		assert_eq!(props["label"], "Full name");
		assert_eq!(props["description"], "Given and family name");
		assert_eq!(props["sortable"], true);
		assert_eq!(props["searchable"], true);
		assert_eq!(props["width"], "240px");
		assert_eq!(props["alignment"], "center");
		assert_eq!(props["renderAs"], "avatar-name");
		assert_eq!(props["editable"], true);
		assert!(column.base().is_sortable());
		assert_eq!(column.base().render_as(), Some("avatar-name"));
	}

	#[rstest]
	fn test_columns_as_trait_objects() {
		let columns: Vec<Box<dyn Column>> = vec![
			Box::new(TextColumn::make("name")),
			Box::new(BadgeColumn::make("status")),
			Box::new(CustomColumn::make("rating", "stars")),
		];

		let types: Vec<Value> = columns
			.iter()
			.map(|column| column.to_props().unwrap()["type"].clone())
			.collect();

		assert_eq!(types, vec![json!("text"), json!("badge"), json!("stars")]);
	}
}

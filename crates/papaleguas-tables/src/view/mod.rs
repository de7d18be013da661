//! Display modes of a table
//!
//! A [`View`] is a named presentation (the default table, a card grid, a
//! kanban board) with a free-form `config` map interpreted by the view's
//! renderer. [`CardView`] and [`KanbanView`] are typed front-ends that write
//! well-known keys into the same map.

mod card;
mod kanban;

pub use card::CardView;
pub use kanban::{KanbanColumn, KanbanView};

use papaleguas_core::record::to_props;
use papaleguas_core::{
	Attributes, HasAttributes, HasDescription, HasIcon, HasLabel, HasName, Props, Result,
};
use serde::Serialize;
use serde_json::Value;

/// A display mode of a table
///
/// # Examples
///
/// ```
/// use papaleguas_tables::view::View;
/// use papaleguas_core::HasIcon;
///
/// let view = View::make("list", "List").icon("list");
/// let props = view.to_props().unwrap();
///
/// assert_eq!(props["id"], "list");
/// assert_eq!(props["name"], "list");
/// assert_eq!(props["type"], "table");
/// assert_eq!(props["config"], serde_json::json!({}));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
	id: String,
	name: String,
	#[serde(flatten)]
	attributes: Attributes,
	#[serde(rename = "type")]
	view_type: String,
	config: Props,
}

impl View {
	/// Type of views created by [`View::make`]
	pub const DEFAULT_TYPE: &'static str = "table";

	/// Creates a table view
	pub fn make(id: impl Into<String>, label: impl Into<String>) -> Self {
		Self::of_type(id, label, Self::DEFAULT_TYPE)
	}

	/// Creates a view rendered by the `view_type` renderer
	pub fn of_type(
		id: impl Into<String>,
		label: impl Into<String>,
		view_type: impl Into<String>,
	) -> Self {
		let id = id.into();
		Self {
			name: id.clone(),
			id,
			attributes: Attributes::labelled(label),
			view_type: view_type.into(),
			config: Props::new(),
		}
	}

	/// Replaces the whole config map
	///
	/// Keys written earlier, including those set through [`KanbanView`] or
	/// [`CardView`] helpers, are discarded.
	pub fn config(mut self, config: Props) -> Self {
		self.config = config;
		self
	}

	/// Sets a single config key, keeping the others
	pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.config.insert(key.into(), value.into());
		self
	}

	/// Returns the config map
	pub fn get_config(&self) -> &Props {
		&self.config
	}

	/// Returns the view id
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Returns the renderer type
	pub fn view_type(&self) -> &str {
		&self.view_type
	}

	/// Serializes the view
	pub fn to_props(&self) -> Result<Props> {
		to_props(self)
	}
}

impl HasName for View {
	fn name(&self) -> &str {
		&self.name
	}
}

impl HasAttributes for View {
	fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	fn attributes_mut(&mut self) -> &mut Attributes {
		&mut self.attributes
	}
}

impl HasLabel for View {}
impl HasIcon for View {}
impl HasDescription for View {}

/// Forwards the capability traits of a view wrapper to its inner [`View`]
macro_rules! forward_view_attributes {
	($ty:ty) => {
		impl papaleguas_core::HasAttributes for $ty {
			fn attributes(&self) -> &papaleguas_core::Attributes {
				papaleguas_core::HasAttributes::attributes(&self.view)
			}

			fn attributes_mut(&mut self) -> &mut papaleguas_core::Attributes {
				papaleguas_core::HasAttributes::attributes_mut(&mut self.view)
			}
		}

		impl papaleguas_core::HasName for $ty {
			fn name(&self) -> &str {
				papaleguas_core::HasName::name(&self.view)
			}
		}

		impl papaleguas_core::HasLabel for $ty {}
		impl papaleguas_core::HasIcon for $ty {}
		impl papaleguas_core::HasDescription for $ty {}

		impl From<$ty> for $crate::view::View {
			fn from(view: $ty) -> Self {
				view.view
			}
		}
	};
}

pub(crate) use forward_view_attributes;

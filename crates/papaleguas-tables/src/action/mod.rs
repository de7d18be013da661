//! Table actions
//!
//! Actions are value objects: built with `make`, configured through a fluent
//! chain and serialized on demand. The table partitions them by scope:
//!
//! - [`HeaderAction`]: table-level operations such as create, export, refresh
//! - [`BulkAction`]: operations over the current row selection
//! - [`RowAction`]: operations on a single record
//!
//! The plain [`Action`] carries only the fields every action shares.

mod bulk;
mod header;
pub mod presets;
mod row;

pub use bulk::BulkAction;
pub use header::{HeaderAction, Target};
pub use presets::{
	ActivateBulkAction, CreateHeaderAction, DeactivateBulkAction, DeleteBulkAction,
	ExportHeaderAction, RefreshHeaderAction,
};
pub use row::RowAction;

use indexmap::IndexMap;
use papaleguas_core::record::to_props;
use papaleguas_core::{Attributes, HasAttributes, HasLabel, HasName, Props, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Scope of an action, serialized as its `type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
	/// Applies to the selected rows
	Bulk,
	/// Applies to the whole table
	Header,
	/// Applies to one record
	Row,
}

/// Route parameters attached to an action
pub type RouteParameters = IndexMap<String, Value>;

/// Base action with a unique name and a label
///
/// # Examples
///
/// ```
/// use papaleguas_tables::action::Action;
/// use papaleguas_core::HasLabel;
///
/// let props = Action::make("archive").label("Archive").to_props().unwrap();
/// assert_eq!(props["name"], "archive");
/// assert_eq!(props["label"], "Archive");
/// assert_eq!(props["hiddenLabel"], false);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Action {
	name: String,
	#[serde(flatten)]
	attributes: Attributes,
}

impl Action {
	/// Creates an action identified by `name`
	pub fn make(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			attributes: Attributes::new(),
		}
	}

	/// Serializes the action
	pub fn to_props(&self) -> Result<Props> {
		to_props(self)
	}
}

impl HasName for Action {
	fn name(&self) -> &str {
		&self.name
	}
}

impl HasAttributes for Action {
	fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	fn attributes_mut(&mut self) -> &mut Attributes {
		&mut self.attributes
	}
}

impl HasLabel for Action {}

/// Route and parameters shared by actions that navigate or submit
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Route {
	pub(crate) route: String,
	pub(crate) route_parameters: RouteParameters,
}

impl Route {
	pub(crate) fn parameter(&mut self, key: impl Into<String>, value: impl Into<Value>) {
		self.route_parameters.insert(key.into(), value.into());
	}
}

/// Confirmation dialog settings shared by bulk and row actions
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Confirmation {
	pub(crate) confirmation: bool,
	pub(crate) confirmation_title: Option<String>,
	pub(crate) confirmation_description: Option<String>,
}

impl Confirmation {
	pub(crate) fn confirm(&mut self, title: String, description: String) {
		self.confirmation = true;
		self.confirmation_title = Some(title);
		self.confirmation_description = Some(description);
	}
}

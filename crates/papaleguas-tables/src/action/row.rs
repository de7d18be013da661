use super::{ActionType, Confirmation, Route};
use papaleguas_core::record::to_props;
use papaleguas_core::{
	Attributes, HasAttributes, HasColor, HasIcon, HasLabel, HasName, Props, Result,
};
use serde::Serialize;
use serde_json::Value;

/// Action rendered on each row
///
/// `{field}` placeholders in the route are replaced with the row's values
/// when the row is rendered, e.g. `/users/{id}/edit`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowAction {
	#[serde(rename = "type")]
	kind: ActionType,
	name: String,
	#[serde(flatten)]
	attributes: Attributes,
	#[serde(flatten)]
	route: Route,
	#[serde(flatten)]
	confirmation: Confirmation,
}

impl RowAction {
	/// Creates a row action identified by `name`
	pub fn make(name: impl Into<String>) -> Self {
		Self {
			kind: ActionType::Row,
			name: name.into(),
			attributes: Attributes::new(),
			route: Route::default(),
			confirmation: Confirmation::default(),
		}
	}

	/// Sets the route, which may contain `{field}` placeholders
	pub fn route(mut self, route: impl Into<String>) -> Self {
		self.route.route = route.into();
		self
	}

	/// Adds a route parameter
	pub fn route_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.route.parameter(key, value);
		self
	}

	/// Requires confirmation with the given dialog text
	pub fn confirm(mut self, title: impl Into<String>, description: impl Into<String>) -> Self {
		self.confirmation.confirm(title.into(), description.into());
		self
	}

	/// Returns the scope of the action
	pub fn kind(&self) -> ActionType {
		self.kind
	}

	/// Returns the route template
	pub fn route_name(&self) -> &str {
		&self.route.route
	}

	/// Serializes the action
	pub fn to_props(&self) -> Result<Props> {
		to_props(self)
	}
}

impl HasName for RowAction {
	fn name(&self) -> &str {
		&self.name
	}
}

impl HasAttributes for RowAction {
	fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	fn attributes_mut(&mut self) -> &mut Attributes {
		&mut self.attributes
	}
}

impl HasLabel for RowAction {}
impl HasIcon for RowAction {}
impl HasColor for RowAction {}

use super::{ActionType, Route};
use papaleguas_core::record::to_props;
use papaleguas_core::{
	Attributes, HasAttributes, HasColor, HasDescription, HasIcon, HasLabel, HasName, Props,
	Result,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Where a header action navigates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
	/// Same browsing context
	#[default]
	#[serde(rename = "_self")]
	SelfTarget,
	/// New tab or window
	#[serde(rename = "_blank")]
	Blank,
}

/// Table-level action rendered above the table
///
/// Header actions navigate rather than confirm; they carry a [`Target`]
/// instead of confirmation text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderAction {
	#[serde(rename = "type")]
	kind: ActionType,
	name: String,
	#[serde(flatten)]
	attributes: Attributes,
	#[serde(flatten)]
	route: Route,
	target: Target,
}

impl HeaderAction {
	/// Creates a header action identified by `name`
	pub fn make(name: impl Into<String>) -> Self {
		Self {
			kind: ActionType::Header,
			name: name.into(),
			attributes: Attributes::new(),
			route: Route::default(),
			target: Target::default(),
		}
	}

	/// Sets the route to navigate to
	pub fn route(mut self, route: impl Into<String>) -> Self {
		self.route.route = route.into();
		self
	}

	/// Adds a route parameter
	pub fn route_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.route.parameter(key, value);
		self
	}

	/// Sets the navigation target
	pub fn target(mut self, target: Target) -> Self {
		self.target = target;
		self
	}

	/// Opens the route in a new tab
	pub fn open_in_new_tab(self) -> Self {
		self.target(Target::Blank)
	}

	/// Returns the scope of the action
	pub fn kind(&self) -> ActionType {
		self.kind
	}

	/// Returns the route name, empty when unset
	pub fn route_name(&self) -> &str {
		&self.route.route
	}

	/// Returns the navigation target
	pub fn navigation_target(&self) -> Target {
		self.target
	}

	/// Serializes the action
	pub fn to_props(&self) -> Result<Props> {
		to_props(self)
	}
}

impl HasName for HeaderAction {
	fn name(&self) -> &str {
		&self.name
	}
}

impl HasAttributes for HeaderAction {
	fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	fn attributes_mut(&mut self) -> &mut Attributes {
		&mut self.attributes
	}
}

impl HasLabel for HeaderAction {}
impl HasIcon for HeaderAction {}
impl HasColor for HeaderAction {}
impl HasDescription for HeaderAction {}

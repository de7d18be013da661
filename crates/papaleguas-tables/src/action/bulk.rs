use super::{ActionType, Confirmation, Route};
use papaleguas_core::record::to_props;
use papaleguas_core::{
	Attributes, HasAttributes, HasColor, HasDescription, HasIcon, HasLabel, HasName, Props,
	Result,
};
use serde::Serialize;
use serde_json::Value;

/// Action applied to the selected rows
///
/// # Examples
///
/// ```
/// use papaleguas_tables::action::BulkAction;
/// use papaleguas_core::{HasColor, HasLabel};
///
/// let action = BulkAction::make("archive")
///     .label("Archive")
///     .color("warning")
///     .route("users.archive")
///     .confirm("Archive users", "Archived users can be restored later.");
///
/// let props = action.to_props().unwrap();
/// assert_eq!(props["type"], "bulk");
/// assert_eq!(props["confirmation"], true);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkAction {
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

impl BulkAction {
	/// Creates a bulk action identified by `name`
	pub fn make(name: impl Into<String>) -> Self {
		Self {
			kind: ActionType::Bulk,
			name: name.into(),
			attributes: Attributes::new(),
			route: Route::default(),
			confirmation: Confirmation::default(),
		}
	}

	/// Sets the route the selection is submitted to
	pub fn route(mut self, route: impl Into<String>) -> Self {
		self.route.route = route.into();
		self
	}

	/// Adds a route parameter
	pub fn route_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.route.parameter(key, value);
		self
	}

	/// Sets whether the user must confirm before the action runs
	pub fn requires_confirmation(mut self, required: bool) -> Self {
		self.confirmation.confirmation = required;
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

	/// Returns the route name, empty when unset
	pub fn route_name(&self) -> &str {
		&self.route.route
	}

	/// Returns whether confirmation is required
	pub fn needs_confirmation(&self) -> bool {
		self.confirmation.confirmation
	}

	/// Returns the confirmation dialog title
	pub fn confirmation_title(&self) -> Option<&str> {
		self.confirmation.confirmation_title.as_deref()
	}

	/// Returns the confirmation dialog description
	pub fn confirmation_description(&self) -> Option<&str> {
		self.confirmation.confirmation_description.as_deref()
	}

	/// Serializes the action
	pub fn to_props(&self) -> Result<Props> {
		to_props(self)
	}
}

impl HasName for BulkAction {
	fn name(&self) -> &str {
		&self.name
	}
}

impl HasAttributes for BulkAction {
	fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	fn attributes_mut(&mut self) -> &mut Attributes {
		&mut self.attributes
	}
}

impl HasLabel for BulkAction {}
impl HasIcon for BulkAction {}
impl HasColor for BulkAction {}
impl HasDescription for BulkAction {}

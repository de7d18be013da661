//! Typed views over the serialized payload
//!
//! The renderer never sees the builders, only their props. Descriptors read
//! the fields the renderer needs and keep everything else in `options`, so
//! application renderers can consume type-specific keys. Every field has a
//! default: a descriptor with missing fields still renders, degraded.

use papaleguas_core::record::lookup;
use papaleguas_core::{Props, Record, value_to_text};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A serialized column
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnDescriptor {
	/// Record field displayed by the column
	pub key: String,
	/// Header text
	pub label: Option<String>,
	/// Declared type
	#[serde(rename = "type")]
	pub column_type: Option<String>,
	/// Renderer override
	pub render_as: Option<String>,
	/// Hidden by default
	pub hidden: bool,
	/// Sortable through the request
	pub sortable: bool,
	/// `left`, `center` or `right`
	pub alignment: Option<String>,
	/// CSS width
	pub width: Option<String>,
	/// Inline editing allowed
	pub editable: bool,
	/// Type-specific options
	#[serde(flatten)]
	pub options: Props,
}

impl ColumnDescriptor {
	/// Returns the registry key: `renderAs` when set, else `type`
	///
	/// Blank strings count as unset.
	pub fn renderer_type(&self) -> Option<&str> {
		non_blank(self.render_as.as_deref()).or_else(|| non_blank(self.column_type.as_deref()))
	}

	/// Reads this column's value from a record
	pub fn value_in<'a>(&self, record: &'a Record) -> Option<&'a Value> {
		lookup(record, &self.key)
	}

	/// Returns a type-specific option
	pub fn option(&self, key: &str) -> Option<&Value> {
		self.options.get(key)
	}

	/// Returns a type-specific string option
	pub fn option_str(&self, key: &str) -> Option<&str> {
		self.option(key).and_then(Value::as_str)
	}

	/// Returns the header text, falling back to the key
	pub fn heading(&self) -> &str {
		self.label.as_deref().unwrap_or(&self.key)
	}
}

/// A serialized filter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterDescriptor {
	/// Request key
	pub key: String,
	/// Input label
	pub label: Option<String>,
	/// Declared type
	#[serde(rename = "type")]
	pub filter_type: Option<String>,
	/// Input placeholder
	pub placeholder: Option<String>,
	/// Value applied when nothing was submitted
	pub default: Option<Value>,
	/// Value currently applied
	pub value: Option<Value>,
	/// Type-specific options
	#[serde(flatten)]
	pub options: Props,
}

impl FilterDescriptor {
	/// Returns the registry key
	pub fn renderer_type(&self) -> Option<&str> {
		non_blank(self.filter_type.as_deref())
	}

	/// Returns the applied value, else the default
	pub fn current_value(&self) -> Option<&Value> {
		self.value.as_ref().or(self.default.as_ref())
	}

	/// Returns the input label, falling back to the key
	pub fn heading(&self) -> &str {
		self.label.as_deref().unwrap_or(&self.key)
	}
}

/// A serialized view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewDescriptor {
	/// View id
	pub id: String,
	/// Switcher text
	pub label: Option<String>,
	/// Switcher icon
	pub icon: Option<String>,
	/// Declared type
	#[serde(rename = "type")]
	pub view_type: Option<String>,
	/// Renderer-specific config
	pub config: Props,
}

impl ViewDescriptor {
	/// Returns the registry key
	pub fn renderer_type(&self) -> Option<&str> {
		non_blank(self.view_type.as_deref())
	}

	/// Returns a string config entry
	pub fn config_str(&self, key: &str) -> Option<&str> {
		self.config.get(key).and_then(Value::as_str)
	}
}

/// A serialized header, bulk or row action
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionDescriptor {
	/// `header`, `bulk` or `row`
	#[serde(rename = "type")]
	pub action_type: Option<String>,
	/// Action name
	pub name: String,
	/// Button text
	pub label: Option<String>,
	/// Render the label for screen readers only
	pub hidden_label: bool,
	/// Icon name
	pub icon: Option<String>,
	/// Color name
	pub color: Option<String>,
	/// Route, possibly with `{field}` placeholders
	pub route: String,
	/// Ask before running
	pub confirmation: bool,
	/// Confirmation dialog title
	pub confirmation_title: Option<String>,
	/// Confirmation dialog text
	pub confirmation_description: Option<String>,
	/// Link target of header actions
	pub target: Option<String>,
	/// Remaining fields
	#[serde(flatten)]
	pub extra: Props,
}

impl ActionDescriptor {
	/// Returns the button text, falling back to the name
	pub fn heading(&self) -> &str {
		self.label.as_deref().unwrap_or(&self.name)
	}

	/// Fills `{field}` placeholders in the route from `record`
	pub fn route_for(&self, record: &Record) -> String {
		interpolate(&self.route, record)
	}
}

/// Replaces `{field}` placeholders in `template` with values from `record`
///
/// Dotted paths are followed; unknown placeholders are left untouched.
///
/// # Examples
///
/// ```
/// use papaleguas_render::descriptor::interpolate;
/// use serde_json::json;
///
/// let record = json!({ "id": 7 });
/// let record = record.as_object().unwrap();
/// assert_eq!(interpolate("/users/{id}/edit", record), "/users/7/edit");
/// ```
pub fn interpolate(template: &str, record: &Record) -> String {
	let mut output = String::with_capacity(template.len());
	let mut rest = template;
	while let Some(start) = rest.find('{') {
		let Some(len) = rest[start..].find('}') else {
			break;
		};
		let field = &rest[start + 1..start + len];
		output.push_str(&rest[..start]);
		match lookup(record, field) {
			Some(value) => output.push_str(&value_to_text(value)),
			None => output.push_str(&rest[start..=start + len]),
		}
		rest = &rest[start + len + 1..];
	}
	output.push_str(rest);
	output
}

fn non_blank(value: Option<&str>) -> Option<&str> {
	value.map(str::trim).filter(|value| !value.is_empty())
}

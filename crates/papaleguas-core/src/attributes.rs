//! Capability traits shared by every builder
//!
//! A builder stores its presentation data in an [`Attributes`] value and
//! implements [`HasAttributes`] once. The setters are then unlocked one
//! capability at a time, so a plain `Action` can take a label while only the
//! richer action types accept an icon or a color.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Presentation attributes common to actions, columns, filters and views
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attributes {
	#[serde(default)]
	label: Option<String>,
	#[serde(default)]
	hidden_label: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	icon: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	color: Option<Color>,
	#[serde(skip_serializing_if = "Option::is_none")]
	description: Option<String>,
}

impl Attributes {
	/// Creates an empty attribute set
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an attribute set with a label
	pub fn labelled(label: impl Into<String>) -> Self {
		Self {
			label: Some(label.into()),
			..Self::default()
		}
	}

	/// Returns the label, if one was set
	pub fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	/// Returns whether the label should be visually hidden
	pub fn is_label_hidden(&self) -> bool {
		self.hidden_label
	}

	/// Returns the icon name, if one was set
	pub fn icon(&self) -> Option<&str> {
		self.icon.as_deref()
	}

	/// Returns the color, if one was set
	pub fn color(&self) -> Option<&Color> {
		self.color.as_ref()
	}

	/// Returns the description, if one was set
	pub fn description(&self) -> Option<&str> {
		self.description.as_deref()
	}

	/// Returns the label, or a humanized version of `fallback` when unset
	///
	/// # Examples
	///
	/// ```
	/// use papaleguas_core::Attributes;
	///
	/// let attributes = Attributes::new();
	/// assert_eq!(attributes.label_or_humanized("created_at"), "Created at");
	/// ```
	pub fn label_or_humanized(&self, fallback: &str) -> String {
		match &self.label {
			Some(label) => label.clone(),
			None => humanize(fallback),
		}
	}
}

/// Turns `snake_case` or `kebab-case` keys into a sentence-cased label
pub fn humanize(key: &str) -> String {
	let spaced = key.replace(['_', '-', '.'], " ");
	let mut chars = spaced.trim().chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Access to the [`Attributes`] embedded in a builder
pub trait HasAttributes {
	/// Borrows the attributes
	fn attributes(&self) -> &Attributes;

	/// Mutably borrows the attributes
	fn attributes_mut(&mut self) -> &mut Attributes;
}

/// Builders identified by a unique name
pub trait HasName {
	/// Returns the name used as identifier
	fn name(&self) -> &str;
}

/// Fluent label setters
pub trait HasLabel: HasAttributes + Sized {
	/// Sets the label
	fn label(mut self, label: impl Into<String>) -> Self {
		self.attributes_mut().label = Some(label.into());
		self
	}

	/// Sets whether the label is rendered visually hidden
	fn hidden_label(mut self, hidden: bool) -> Self {
		self.attributes_mut().hidden_label = hidden;
		self
	}
}

/// Fluent icon setter
pub trait HasIcon: HasAttributes + Sized {
	/// Sets the icon name
	fn icon(mut self, icon: impl Into<String>) -> Self {
		self.attributes_mut().icon = Some(icon.into());
		self
	}
}

/// Fluent color setter
pub trait HasColor: HasAttributes + Sized {
	/// Sets the color
	fn color(mut self, color: impl Into<Color>) -> Self {
		self.attributes_mut().color = Some(color.into());
		self
	}
}

/// Fluent description setter
pub trait HasDescription: HasAttributes + Sized {
	/// Sets the description
	fn description(mut self, description: impl Into<String>) -> Self {
		self.attributes_mut().description = Some(description.into());
		self
	}
}

//! Semantic colors understood by the renderers

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Semantic color of an action, badge or kanban lane
///
/// Known names map to dedicated variants; anything else is kept verbatim in
/// [`Color::Custom`] so hex codes or design-system tokens pass through.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Color {
	/// Main call to action
	Primary,
	/// Neutral, secondary emphasis
	Secondary,
	/// Positive outcome
	Success,
	/// Destructive or failing outcome
	Danger,
	/// Needs attention
	Warning,
	/// Informational
	Info,
	/// Any other color token
	Custom(String),
}

impl Color {
	/// Returns the serialized name of the color
	pub fn as_str(&self) -> &str {
		match self {
			Color::Primary => "primary",
			Color::Secondary => "secondary",
			Color::Success => "success",
			Color::Danger => "danger",
			Color::Warning => "warning",
			Color::Info => "info",
			Color::Custom(value) => value,
		}
	}
}

impl From<&str> for Color {
	fn from(value: &str) -> Self {
		match value {
			"primary" => Color::Primary,
			"secondary" => Color::Secondary,
			"success" => Color::Success,
			"danger" => Color::Danger,
			"warning" => Color::Warning,
			"info" => Color::Info,
			other => Color::Custom(other.to_string()),
		}
	}
}

impl From<String> for Color {
	fn from(value: String) -> Self {
		Color::from(value.as_str())
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Serialize for Color {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}

impl<'de> Deserialize<'de> for Color {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = String::deserialize(deserializer)?;
		Ok(Color::from(value))
	}
}

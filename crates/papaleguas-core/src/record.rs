//! Record and props representations
//!
//! Records travel to the renderer as JSON objects, and every builder
//! serializes to the same shape, so both are plain `serde_json` maps.

use crate::error::{PapaError, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// A single row of table data
pub type Record = Map<String, Value>;

/// Serialized configuration of a builder
pub type Props = Map<String, Value>;

/// Serializes any builder into a props map
///
/// Non-object values are rejected since every descriptor consumed by the
/// renderer is keyed.
pub fn to_props<T: Serialize + ?Sized>(value: &T) -> Result<Props> {
	match serde_json::to_value(value)? {
		Value::Object(map) => Ok(map),
		other => Err(PapaError::NotAnObject(kind_of(&other))),
	}
}

/// Looks up a value by key, following dots into nested objects
///
/// A literal key containing dots wins over the nested path.
///
/// # Examples
///
/// ```
/// use papaleguas_core::record::lookup;
/// use serde_json::json;
///
/// let record = json!({ "author": { "name": "Ana" } });
/// let record = record.as_object().unwrap();
/// assert_eq!(lookup(record, "author.name"), Some(&json!("Ana")));
/// assert_eq!(lookup(record, "author.email"), None);
/// ```
pub fn lookup<'a>(record: &'a Record, key: &str) -> Option<&'a Value> {
	if let Some(value) = record.get(key) {
		return Some(value);
	}
	let mut segments = key.split('.');
	let mut current = record.get(segments.next()?)?;
	for segment in segments {
		current = current.as_object()?.get(segment)?;
	}
	Some(current)
}

/// Renders a JSON value as display text
///
/// Strings are returned without quotes and `null` becomes an empty string.
pub fn value_to_text(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		Value::Bool(b) => b.to_string(),
		Value::Number(n) => n.to_string(),
		Value::Array(items) => items
			.iter()
			.map(value_to_text)
			.collect::<Vec<_>>()
			.join(", "),
		Value::Object(_) => value.to_string(),
	}
}

fn kind_of(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

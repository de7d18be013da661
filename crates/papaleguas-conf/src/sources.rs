//! Configuration sources for layered settings
//!
//! Sources are merged in priority order (environment variables > TOML file >
//! defaults). Each source yields a nested map of JSON values so the merged
//! result can be deserialized straight into [`Settings`](crate::Settings).

use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;

/// Trait for configuration sources
pub trait ConfigSource: Send + Sync {
	/// Load configuration from this source
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError>;

	/// Get the priority of this source (higher = more important)
	fn priority(&self) -> u8;

	/// Get a description of this source
	fn description(&self) -> String;
}

/// Error type for configuration sources
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Parse error: {0}")]
	Parse(String),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

/// Built-in defaults, lowest priority
pub struct DefaultSource {
	values: IndexMap<String, Value>,
}

impl DefaultSource {
	/// Creates a default source from a JSON object
	///
	/// Non-object values yield an empty source.
	pub fn new(values: Value) -> Self {
		let values = match values {
			Value::Object(map) => map.into_iter().collect(),
			_ => IndexMap::new(),
		};
		Self { values }
	}
}

impl ConfigSource for DefaultSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		Ok(self.values.clone())
	}

	fn priority(&self) -> u8 {
		0
	}

	fn description(&self) -> String {
		"Default values".to_string()
	}
}

/// TOML configuration file
///
/// A missing file is not an error; it simply contributes nothing.
pub struct TomlFileSource {
	path: PathBuf,
}

impl TomlFileSource {
	/// Creates a source reading the given file
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl ConfigSource for TomlFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		if !self.path.exists() {
			return Ok(IndexMap::new());
		}

		let content = fs::read_to_string(&self.path)?;
		let toml_value: toml::Value = toml::from_str(&content)?;
		let json_value = serde_json::to_value(toml_value)?;

		let map = json_value
			.as_object()
			.ok_or_else(|| SourceError::Parse("Expected table at root".to_string()))?;

		Ok(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
	}

	fn priority(&self) -> u8 {
		50
	}

	fn description(&self) -> String {
		format!("TOML file: {}", self.path.display())
	}
}

/// Environment variables, highest priority
///
/// `PAPALEGUAS_TABLE__PER_PAGE=25` becomes `{"table": {"per_page": 25}}`:
/// the prefix is stripped, keys are lowercased and `__` separates levels.
pub struct EnvSource {
	prefix: String,
	vars: Option<Vec<(String, String)>>,
}

/// Prefix used by [`EnvSource::new`]
pub const ENV_PREFIX: &str = "PAPALEGUAS_";

impl EnvSource {
	/// Reads the process environment with the default prefix
	pub fn new() -> Self {
		Self {
			prefix: ENV_PREFIX.to_string(),
			vars: None,
		}
	}

	/// Changes the variable prefix
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}

	/// Reads from the given pairs instead of the process environment
	pub fn with_vars<I, K, V>(mut self, vars: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.vars = Some(
			vars.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		);
		self
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for EnvSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		let vars = match &self.vars {
			Some(vars) => vars.clone(),
			None => std::env::vars().collect(),
		};

		let mut config = IndexMap::new();
		for (key, value) in vars {
			let Some(stripped) = key.strip_prefix(&self.prefix) else {
				continue;
			};
			let path: Vec<String> = stripped
				.split("__")
				.filter(|segment| !segment.is_empty())
				.map(str::to_lowercase)
				.collect();
			if path.is_empty() {
				continue;
			}
			insert_path(&mut config, &path, parse_env_value(&value));
		}

		Ok(config)
	}

	fn priority(&self) -> u8 {
		100
	}

	fn description(&self) -> String {
		format!("Environment variables (prefix: {})", self.prefix)
	}
}

fn insert_path(config: &mut IndexMap<String, Value>, path: &[String], value: Value) {
	let Some((head, rest)) = path.split_first() else {
		return;
	};
	if rest.is_empty() {
		config.insert(head.clone(), value);
		return;
	}
	let entry = config
		.entry(head.clone())
		.or_insert_with(|| Value::Object(Map::new()));
	insert_nested(entry, rest, value);
}

fn insert_nested(target: &mut Value, path: &[String], value: Value) {
	if !target.is_object() {
		*target = Value::Object(Map::new());
	}
	let (Value::Object(map), Some((head, rest))) = (target, path.split_first()) else {
		return;
	};
	if rest.is_empty() {
		map.insert(head.clone(), value);
	} else {
		let entry = map
			.entry(head.clone())
			.or_insert_with(|| Value::Object(Map::new()));
		insert_nested(entry, rest, value);
	}
}

fn parse_env_value(raw: &str) -> Value {
	if raw.contains(',') {
		return Value::Array(raw.split(',').map(|part| parse_scalar(part.trim())).collect());
	}
	parse_scalar(raw.trim())
}

fn parse_scalar(raw: &str) -> Value {
	match raw.to_lowercase().as_str() {
		"true" | "yes" | "on" => return Value::Bool(true),
		"false" | "no" | "off" => return Value::Bool(false),
		_ => {}
	}
	if let Ok(num) = raw.parse::<i64>() {
		Value::Number(num.into())
	} else {
		Value::String(raw.to_string())
	}
}

/// Deep-merges `overlay` into `base`, with `overlay` winning on conflicts
pub(crate) fn merge(base: &mut IndexMap<String, Value>, overlay: IndexMap<String, Value>) {
	for (key, value) in overlay {
		match base.get_mut(&key) {
			Some(existing) => merge_value(existing, value),
			None => {
				base.insert(key, value);
			}
		}
	}
}

fn merge_value(base: &mut Value, overlay: Value) {
	match (base, overlay) {
		(Value::Object(existing), Value::Object(incoming)) => {
			for (key, value) in incoming {
				match existing.get_mut(&key) {
					Some(slot) => merge_value(slot, value),
					None => {
						existing.insert(key, value);
					}
				}
			}
		}
		(slot, value) => *slot = value,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_env_source_nests_and_parses() {
		// Arrange
		let source = EnvSource::new().with_vars([
			("PAPALEGUAS_TABLE__PER_PAGE", "25"),
			("PAPALEGUAS_TABLE__PER_PAGE_OPTIONS", "10, 25"),
			("PAPALEGUAS_RENDER__WARN_ON_FALLBACK", "off"),
			("UNRELATED", "ignored"),
		]);

		// Act
		let config = source.load().unwrap();

		// Assert
		assert_eq!(config.len(), 2);
		assert_eq!(
			config["table"],
			json!({ "per_page": 25, "per_page_options": [10, 25] })
		);
		assert_eq!(config["render"], json!({ "warn_on_fallback": false }));
	}

	#[rstest]
	fn test_missing_toml_file_is_empty() {
		let source = TomlFileSource::new("/definitely/not/here.toml");
		assert!(source.load().unwrap().is_empty());
	}

	#[rstest]
	fn test_merge_is_deep() {
		let mut base: IndexMap<String, Value> = [(
			"table".to_string(),
			json!({ "per_page": 15, "component": "PapaLeguas/Table" }),
		)]
		.into_iter()
		.collect();
		let overlay = [("table".to_string(), json!({ "per_page": 50 }))]
			.into_iter()
			.collect();

		merge(&mut base, overlay);

		assert_eq!(
			base["table"],
			json!({ "per_page": 50, "component": "PapaLeguas/Table" })
		);
	}
}

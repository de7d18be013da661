//! Typed settings assembled from configuration sources

use crate::sources::{ConfigSource, DefaultSource, EnvSource, SourceError, TomlFileSource, merge};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

/// Settings consumed by the table builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
	/// Page component name the rendered payload is addressed to
	pub component: String,
	/// Default page size
	pub per_page: u64,
	/// Page sizes offered to the user
	pub per_page_options: Vec<u64>,
	/// Whether new tables enable global search
	pub searchable: bool,
}

impl Default for TableSettings {
	fn default() -> Self {
		Self {
			component: "PapaLeguas/Table".to_string(),
			per_page: 15,
			per_page_options: vec![10, 15, 25, 50, 100],
			searchable: true,
		}
	}
}

/// Settings consumed by the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
	/// Emit a warning each time a renderer falls back to the default entry
	pub warn_on_fallback: bool,
}

impl Default for RenderSettings {
	fn default() -> Self {
		Self {
			warn_on_fallback: true,
		}
	}
}

/// Root settings object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// Table builder settings
	pub table: TableSettings,
	/// Renderer settings
	pub render: RenderSettings,
}

/// Errors raised while assembling settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Failed to load {source_description}: {error}")]
	Source {
		source_description: String,
		#[source]
		error: SourceError,
	},

	#[error("Invalid settings: {0}")]
	Invalid(#[from] serde_json::Error),
}

/// Builds [`Settings`] by merging sources in priority order
///
/// # Examples
///
/// ```
/// use papaleguas_conf::{EnvSource, SettingsBuilder};
///
/// let settings = SettingsBuilder::new()
///     .add_source(EnvSource::new().with_vars([("PAPALEGUAS_TABLE__PER_PAGE", "30")]))
///     .build()
///     .unwrap();
///
/// assert_eq!(settings.table.per_page, 30);
/// assert_eq!(settings.table.component, "PapaLeguas/Table");
/// ```
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsBuilder {
	/// Creates a builder seeded with the built-in defaults
	pub fn new() -> Self {
		let defaults = serde_json::to_value(Settings::default()).unwrap_or(Value::Null);
		Self {
			sources: vec![Box::new(DefaultSource::new(defaults))],
		}
	}

	/// Adds a configuration source
	pub fn add_source(mut self, source: impl ConfigSource + 'static) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	/// Adds the standard layers: an optional TOML file and the environment
	pub fn with_standard_sources(self, config_file: Option<PathBuf>) -> Self {
		let builder = match config_file {
			Some(path) => self.add_source(TomlFileSource::new(path)),
			None => self,
		};
		builder.add_source(EnvSource::new())
	}

	/// Merges every source and deserializes the result
	pub fn build(mut self) -> Result<Settings, SettingsError> {
		self.sources.sort_by_key(|source| source.priority());

		let mut merged = IndexMap::new();
		for source in &self.sources {
			let values = source.load().map_err(|error| SettingsError::Source {
				source_description: source.description(),
				error,
			})?;
			tracing::debug!(
				source = %source.description(),
				keys = values.len(),
				"loaded settings source"
			);
			merge(&mut merged, values);
		}

		let object: serde_json::Map<String, Value> = merged.into_iter().collect();
		Ok(serde_json::from_value(Value::Object(object))?)
	}
}

impl Default for SettingsBuilder {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write;

	#[rstest]
	fn test_defaults_only() {
		let settings = SettingsBuilder::new().build().unwrap();
		assert_eq!(settings, Settings::default());
	}

	#[rstest]
	fn test_env_overrides_file_overrides_defaults() {
		// Arrange
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(
			file,
			"[table]\nper_page = 25\ncomponent = \"Admin/Table\"\n\n[render]\nwarn_on_fallback = false"
		)
		.unwrap();

		// Act
		let settings = SettingsBuilder::new()
			.add_source(EnvSource::new().with_vars([("PAPALEGUAS_TABLE__PER_PAGE", "50")]))
			.add_source(TomlFileSource::new(file.path()))
			.build()
			.unwrap();

		// Assert
		assert_eq!(settings.table.per_page, 50);
		assert_eq!(settings.table.component, "Admin/Table");
		assert_eq!(settings.table.per_page_options, vec![10, 15, 25, 50, 100]);
		assert!(!settings.render.warn_on_fallback);
	}

	#[rstest]
	fn test_invalid_value_is_reported() {
		let result = SettingsBuilder::new()
			.add_source(EnvSource::new().with_vars([("PAPALEGUAS_TABLE__PER_PAGE", "many")]))
			.build();
		assert!(matches!(result, Err(SettingsError::Invalid(_))));
	}

	#[rstest]
	fn test_broken_toml_names_the_source() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[table\nper_page = ").unwrap();

		let err = SettingsBuilder::new()
			.add_source(TomlFileSource::new(file.path()))
			.build()
			.unwrap_err();

		assert!(err.to_string().starts_with("Failed to load TOML file:"));
	}
}

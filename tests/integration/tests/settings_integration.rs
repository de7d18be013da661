//! Settings integration tests
//!
//! Layers defaults, a TOML file and environment variables, then feeds the
//! resulting sections to the table builder and the renderer.

use papaleguas::conf::{EnvSource, SettingsBuilder, TomlFileSource};
use papaleguas::prelude::*;
use papaleguas_integration_tests::fixtures::Product;
use papaleguas_integration_tests::logging::LogCapture;
use rstest::*;
use std::fs;
use tempfile::TempDir;

#[fixture]
fn config_dir() -> TempDir {
	let dir = TempDir::new().unwrap();
	fs::write(
		dir.path().join("papaleguas.toml"),
		r#"
[table]
component = "Admin/Table"
per_page = 4
per_page_options = [4, 8]
searchable = false

[render]
warn_on_fallback = false
"#,
	)
	.unwrap();
	dir
}

#[rstest]
fn test_file_settings_seed_tables(config_dir: TempDir) {
	// Arrange
	let settings = SettingsBuilder::new()
		.add_source(TomlFileSource::new(config_dir.path().join("papaleguas.toml")))
		.build()
		.unwrap();

	// Act
	let payload = Table::make_with(&settings.table)
		.model::<Product>()
		.column(TextColumn::make("name").searchable(true))
		.with_request(TableRequest::new().search("anvil"))
		.render()
		.unwrap();

	// Assert
	assert_eq!(payload.component, "Admin/Table");
	assert_eq!(payload.props["pagination"]["perPage"], 4);
	assert_eq!(payload.props["pagination"]["perPageOptions"], serde_json::json!([4, 8]));
	assert_eq!(payload.props["pagination"]["lastPage"], 2);
	// Search is disabled by the file, so the term is ignored
	assert_eq!(payload.props["search"]["enabled"], false);
	assert_eq!(payload.props["pagination"]["total"], 8);
}

#[rstest]
fn test_environment_overrides_file(config_dir: TempDir) {
	let settings = SettingsBuilder::new()
		.add_source(TomlFileSource::new(config_dir.path().join("papaleguas.toml")))
		.add_source(EnvSource::new().with_vars([
			("PAPALEGUAS_TABLE__PER_PAGE", "8"),
			("PAPALEGUAS_RENDER__WARN_ON_FALLBACK", "true"),
			("UNRELATED_VARIABLE", "1"),
		]))
		.build()
		.unwrap();

	assert_eq!(settings.table.per_page, 8);
	assert_eq!(settings.table.component, "Admin/Table");
	assert!(settings.render.warn_on_fallback);
}

#[rstest]
fn test_missing_file_keeps_defaults() {
	let dir = TempDir::new().unwrap();

	let settings = SettingsBuilder::new()
		.add_source(TomlFileSource::new(dir.path().join("absent.toml")))
		.build()
		.unwrap();

	assert_eq!(settings, papaleguas::Settings::default());
	assert_eq!(Table::make_with(&settings.table).render().unwrap().component, "PapaLeguas/Table");
}

#[rstest]
fn test_malformed_file_is_an_error() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("broken.toml");
	fs::write(&path, "[table\nper_page = ").unwrap();

	let result = SettingsBuilder::new().add_source(TomlFileSource::new(path)).build();

	assert!(result.is_err());
}

#[rstest]
#[case(false, 0)]
#[case(true, 1)]
fn test_render_settings_control_fallback_warnings(#[case] warn: bool, #[case] expected_warnings: usize) {
	// Arrange
	let (logs, _guard) = LogCapture::install();
	let settings = SettingsBuilder::new()
		.add_source(EnvSource::new().with_vars([(
			"PAPALEGUAS_RENDER__WARN_ON_FALLBACK",
			if warn { "true" } else { "false" },
		)]))
		.build()
		.unwrap();
	let payload = Table::make()
		.model::<Product>()
		.column(CustomColumn::make("name", "marquee"))
		.render()
		.unwrap();

	// Act
	let output = Renderers::with_settings(&settings.render).render(&payload);

	// Assert
	assert_eq!(output.diagnostics.len(), 1);
	assert_eq!(logs.warnings().len(), expected_warnings);
	assert!(output.html.contains(r#"data-key="name">Anvil</td>"#));
}

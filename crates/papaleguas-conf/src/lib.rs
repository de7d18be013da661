//! Settings for Papa Leguas
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `PAPALEGUAS_*` environment variables. The merged map is deserialized into
//! [`Settings`], whose sections are handed to the table builder and the
//! renderer.
//!
//! ```toml
//! [table]
//! component = "Admin/Table"
//! per_page = 25
//! per_page_options = [10, 25, 50]
//!
//! [render]
//! warn_on_fallback = true
//! ```

pub mod settings;
pub mod sources;

pub use settings::{RenderSettings, Settings, SettingsBuilder, SettingsError, TableSettings};
pub use sources::{ConfigSource, DefaultSource, EnvSource, SourceError, TomlFileSource};

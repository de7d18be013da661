//! # Papa Leguas
//!
//! Declarative admin tables for Rust.
//!
//! A [`Table`] is assembled from columns, filters, actions and views, each
//! configured through a fluent builder. Given a [`TableRequest`] the table
//! searches, filters, sorts and paginates its records and serializes the
//! result into a [`TablePayload`]. The renderer then looks up every column,
//! filter and view type in its registries and turns the payload into HTML,
//! falling back to a default renderer when a type is unknown.
//!
//! ## Feature Flags
//!
//! - `minimal` - Builders and the table pipeline, without the renderer or the
//!   settings API
//! - `conf` - Re-exports the layered settings API (defaults, TOML file,
//!   `PAPALEGUAS_*` variables). The settings crate is compiled either way,
//!   since `Table::make_with` and `Renderers::with_settings` take its structs.
//! - `render` - Renderer registries and the HTML table renderer
//! - `full` (default) - All of the above
//!
//! ## Quick Example
//!
//! ```rust
//! use papaleguas::prelude::*;
//! use serde_json::json;
//!
//! let records = json!([
//!     { "id": 1, "name": "Ana", "status": "active" },
//!     { "id": 2, "name": "Bruno", "status": "pending" }
//! ]);
//!
//! let payload = Table::make()
//!     .column(TextColumn::make("name").sortable(true).searchable(true))
//!     .column(BadgeColumn::make("status").variant("active", Color::Success))
//!     .filter(SelectFilter::make("status").option("active", "Active"))
//!     .row_action(RowAction::make("edit").label("Edit").route("/users/{id}/edit"))
//!     .records(records.as_array().unwrap().iter().filter_map(|r| r.as_object().cloned()).collect())
//!     .with_request(TableRequest::from_query("search=an").unwrap())
//!     .render()
//!     .unwrap();
//!
//! let output = Renderers::with_defaults().render(&payload);
//! assert!(output.html.contains("Ana"));
//! assert!(output.diagnostics.is_empty());
//! ```

#![warn(missing_docs)]

// Re-export builder modules
pub use papaleguas_tables::{action, column, filter, table, view};

/// Settings layering
#[cfg(feature = "conf")]
pub mod conf {
	pub use papaleguas_conf::*;
}

/// Renderer registries and HTML rendering
#[cfg(feature = "render")]
pub mod render {
	pub use papaleguas_render::*;
}

// Re-export core types
pub use papaleguas_core::{
	Attributes, Color, HasAttributes, HasColor, HasDescription, HasIcon, HasLabel, HasName,
	PapaError, Props, Record, Result, TablePayload,
};

// Re-export the table aggregate
pub use papaleguas_tables::table::{DataSource, Model, Page, SortOrder};
pub use papaleguas_tables::{Table, TableRequest};

// Re-export settings from dedicated crate
#[cfg(feature = "conf")]
pub use papaleguas_conf::{RenderSettings, Settings, SettingsBuilder, SettingsError, TableSettings};

// Re-export renderer entry points
#[cfg(feature = "render")]
pub use papaleguas_render::{Diagnostic, DiagnosticKind, RenderOutput, Renderers, TableRenderer};

/// Everything needed to declare and render a table
pub mod prelude {
	// Core types - always available
	pub use crate::{
		Color, HasColor, HasDescription, HasIcon, HasLabel, HasName, Props, Record, Table,
		TablePayload, TableRequest,
	};

	pub use papaleguas_tables::action::{
		ActivateBulkAction, BulkAction, CreateHeaderAction, DeactivateBulkAction,
		DeleteBulkAction, ExportHeaderAction, HeaderAction, RefreshHeaderAction, RowAction,
	};
	pub use papaleguas_tables::column::{
		Alignment, BadgeColumn, BooleanColumn, ColumnBuilder, CustomColumn, DateColumn,
		ImageColumn, LinkColumn, NumberColumn, TextColumn,
	};
	pub use papaleguas_tables::filter::{
		BooleanFilter, DateRangeFilter, FilterBuilder, NumberRangeFilter, SelectFilter,
		TextFilter,
	};
	pub use papaleguas_tables::table::{Model, SortOrder};
	pub use papaleguas_tables::view::{CardView, KanbanColumn, KanbanView, View};

	#[cfg(feature = "conf")]
	pub use crate::{Settings, SettingsBuilder};

	#[cfg(feature = "render")]
	pub use crate::render::{
		ColumnDescriptor, ColumnRenderer, EditRenderer, FilterDescriptor, FilterRenderer,
		ViewContext, ViewRenderer,
	};
	#[cfg(feature = "render")]
	pub use crate::{RenderOutput, Renderers};
}

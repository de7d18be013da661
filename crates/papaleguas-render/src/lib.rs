//! # Papa Leguas renderer
//!
//! Turns a table payload into HTML. Columns, filters, views and inline
//! editors are looked up by their type string in [`Renderers`], a set of
//! registries seeded with built-in renderers and open to application
//! types.
//!
//! Unknown types never fail a render: the registry's fallback entry takes
//! over, a `tracing` warning is emitted and a [`Diagnostic`] is recorded in
//! the [`RenderOutput`].
//!
//! ## Example
//!
//! ```
//! use papaleguas_render::Renderers;
//! use papaleguas_core::TablePayload;
//! use serde_json::json;
//!
//! let props = json!({
//!     "columns": [
//!         { "key": "name", "label": "Name", "type": "text" },
//!         { "key": "status", "label": "Status", "type": "traffic-light" }
//!     ],
//!     "records": [{ "name": "Ana", "status": "green" }]
//! });
//! let payload = TablePayload {
//!     component: "PapaLeguas/Table".to_string(),
//!     id: None,
//!     props: props.as_object().cloned().unwrap(),
//! };
//!
//! let output = Renderers::with_defaults().render(&payload);
//!
//! assert!(output.html.contains(">green</td>"));
//! assert_eq!(output.diagnostics.len(), 1);
//! ```

#![warn(missing_docs)]

pub mod builtin;
pub mod descriptor;
mod query;
pub mod registry;
pub mod renderer;
pub mod renderers;
pub mod table;

pub use descriptor::{ActionDescriptor, ColumnDescriptor, FilterDescriptor, ViewDescriptor};
pub use registry::{RendererRegistry, ResolveError};
pub use renderer::{BoundColumn, ColumnRenderer, EditRenderer, FilterRenderer, ViewContext, ViewRenderer};
pub use renderers::Renderers;
pub use table::{Diagnostic, DiagnosticKind, RenderOutput, TableRenderer};

//! # Papa Leguas tables
//!
//! Declarative builders for admin tables: columns, filters, actions and
//! views, composed into a [`Table`](table::Table) that serializes to the
//! props payload consumed by a renderer.
//!
//! ## Example
//!
//! ```
//! use papaleguas_tables::action::{DeleteBulkAction, RowAction};
//! use papaleguas_tables::column::{BadgeColumn, ColumnBuilder, TextColumn};
//! use papaleguas_tables::filter::SelectFilter;
//! use papaleguas_tables::table::Table;
//! use papaleguas_tables::view::KanbanView;
//! use papaleguas_core::{Color, HasLabel};
//!
//! let payload = Table::make()
//!     .column(TextColumn::make("name").sortable(true).searchable(true))
//!     .column(BadgeColumn::make("status").variant("active", Color::Success))
//!     .filter(SelectFilter::make("status").option("active", "Active"))
//!     .bulk_action(DeleteBulkAction::make())
//!     .row_action(RowAction::make("edit").label("Edit").route("/users/{id}/edit"))
//!     .view(KanbanView::make("board", "Board"))
//!     .render()
//!     .unwrap();
//!
//! assert_eq!(payload.component, "PapaLeguas/Table");
//! assert_eq!(payload.props["columns"][1]["type"], "badge");
//! ```

#![warn(missing_docs)]

pub mod action;
pub mod column;
pub mod filter;
pub mod table;
pub mod view;

pub use table::{Table, TableRequest};

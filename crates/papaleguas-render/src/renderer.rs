//! Renderer traits
//!
//! Column, edit and filter renderers are implemented for plain functions
//! and closures with the matching signature, so registering one is a
//! one-liner. View renderers receive a [`ViewContext`] and are usually
//! structs.

use crate::builtin::action::row_actions;
use crate::descriptor::{ActionDescriptor, ColumnDescriptor, FilterDescriptor, ViewDescriptor};
use papaleguas_core::Record;
use std::sync::Arc;

/// Renders one cell
pub trait ColumnRenderer: Send + Sync {
	/// Returns the cell HTML for `record`
	fn render(&self, column: &ColumnDescriptor, record: &Record) -> String;
}

impl<F> ColumnRenderer for F
where
	F: Fn(&ColumnDescriptor, &Record) -> String + Send + Sync,
{
	fn render(&self, column: &ColumnDescriptor, record: &Record) -> String {
		self(column, record)
	}
}

/// Renders the inline editor of an editable cell
pub trait EditRenderer: Send + Sync {
	/// Returns the editor HTML for `record`
	fn render(&self, column: &ColumnDescriptor, record: &Record) -> String;
}

impl<F> EditRenderer for F
where
	F: Fn(&ColumnDescriptor, &Record) -> String + Send + Sync,
{
	fn render(&self, column: &ColumnDescriptor, record: &Record) -> String {
		self(column, record)
	}
}

/// Renders one filter input
pub trait FilterRenderer: Send + Sync {
	/// Returns the filter HTML
	fn render(&self, filter: &FilterDescriptor) -> String;
}

impl<F> FilterRenderer for F
where
	F: Fn(&FilterDescriptor) -> String + Send + Sync,
{
	fn render(&self, filter: &FilterDescriptor) -> String {
		self(filter)
	}
}

/// Renders the record area of a table in one display mode
pub trait ViewRenderer: Send + Sync {
	/// Returns the view HTML
	fn render(&self, context: &ViewContext<'_>) -> String;
}

/// A column paired with the renderers resolved for it
#[derive(Clone)]
pub struct BoundColumn {
	/// The column
	pub descriptor: ColumnDescriptor,
	/// Cell renderer
	pub renderer: Arc<dyn ColumnRenderer>,
	/// Inline editor, for editable columns
	pub editor: Option<Arc<dyn EditRenderer>>,
}

impl BoundColumn {
	/// Renders the cell of `record`, followed by its editor if any
	pub fn render_cell(&self, record: &Record) -> String {
		let cell = self.renderer.render(&self.descriptor, record);
		match &self.editor {
			Some(editor) => format!(
				r#"{cell}<template class="pl-editor">{}</template>"#,
				editor.render(&self.descriptor, record)
			),
			None => cell,
		}
	}
}

impl std::fmt::Debug for BoundColumn {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("BoundColumn")
			.field("key", &self.descriptor.key)
			.field("editable", &self.editor.is_some())
			.finish_non_exhaustive()
	}
}

/// Everything a view renderer needs
#[derive(Debug)]
pub struct ViewContext<'a> {
	/// The active view
	pub view: &'a ViewDescriptor,
	/// Columns in declaration order, each resolved once
	pub columns: &'a [BoundColumn],
	/// Records of the current page
	pub records: &'a [Record],
	/// Actions rendered on each record
	pub row_actions: &'a [ActionDescriptor],
	/// Whether records can be selected for bulk actions
	pub selectable: bool,
}

impl ViewContext<'_> {
	/// Columns not hidden by default
	pub fn visible_columns(&self) -> impl Iterator<Item = &BoundColumn> {
		self.columns.iter().filter(|column| !column.descriptor.hidden)
	}

	/// Finds a column by key
	pub fn column(&self, key: &str) -> Option<&BoundColumn> {
		self.columns.iter().find(|column| column.descriptor.key == key)
	}

	/// Renders the row actions of `record`
	pub fn render_row_actions(&self, record: &Record) -> String {
		row_actions(self.row_actions, record)
	}
}

//! The set of registries used to render a table

use crate::builtin::{column, edit, filter, view};
use crate::registry::RendererRegistry;
use crate::renderer::{ColumnRenderer, EditRenderer, FilterRenderer, ViewRenderer};
use crate::table::{RenderOutput, TableRenderer};
use papaleguas_conf::RenderSettings;
use papaleguas_core::TablePayload;
use std::sync::Arc;

/// Registry of cell renderers
pub type ColumnRegistry = RendererRegistry<dyn ColumnRenderer>;
/// Registry of filter inputs
pub type FilterRegistry = RendererRegistry<dyn FilterRenderer>;
/// Registry of view renderers
pub type ViewRegistry = RendererRegistry<dyn ViewRenderer>;
/// Registry of inline editors
pub type EditRegistry = RendererRegistry<dyn EditRenderer>;

/// Column, filter, view and edit registries
///
/// Populate once at startup, then share immutably (for instance behind an
/// `Arc`) across requests.
///
/// # Examples
///
/// ```
/// use papaleguas_render::Renderers;
/// use papaleguas_render::descriptor::ColumnDescriptor;
/// use papaleguas_core::Record;
///
/// let mut renderers = Renderers::with_defaults();
/// renderers.add_column_renderer("stars", |column: &ColumnDescriptor, record: &Record| {
///     let count = column.value_in(record).and_then(|v| v.as_u64()).unwrap_or(0);
///     "★".repeat(count as usize)
/// });
///
/// assert!(renderers.columns().has("stars"));
/// assert!(renderers.columns().has("text"));
/// ```
#[derive(Debug, Clone)]
pub struct Renderers {
	columns: ColumnRegistry,
	filters: FilterRegistry,
	views: ViewRegistry,
	edits: EditRegistry,
}

impl Renderers {
	/// Key of the column fallback
	pub const DEFAULT_COLUMN: &'static str = "text";
	/// Key of the filter fallback
	pub const DEFAULT_FILTER: &'static str = "default";
	/// Key of the view fallback
	pub const DEFAULT_VIEW: &'static str = "table";
	/// Key of the editor fallback
	pub const DEFAULT_EDIT: &'static str = "text";

	/// Creates registries holding only their fallback entries
	pub fn empty() -> Self {
		Self {
			columns: ColumnRegistry::new("column", Self::DEFAULT_COLUMN, Arc::new(column::text)),
			filters: FilterRegistry::new("filter", Self::DEFAULT_FILTER, Arc::new(filter::fallback)),
			views: ViewRegistry::new("view", Self::DEFAULT_VIEW, Arc::new(view::TableView)),
			edits: EditRegistry::new("edit", Self::DEFAULT_EDIT, Arc::new(edit::text)),
		}
	}

	/// Creates registries seeded with every built-in renderer
	pub fn with_defaults() -> Self {
		let mut renderers = Self::empty();
		renderers
			.add_column_renderer("badge", column::badge)
			.add_column_renderer("boolean", column::boolean)
			.add_column_renderer("date", column::date)
			.add_column_renderer("number", column::number)
			.add_column_renderer("image", column::image)
			.add_column_renderer("link", column::link)
			.add_filter_renderer("text", filter::text)
			.add_filter_renderer("select", filter::select)
			.add_filter_renderer("boolean", filter::boolean)
			.add_filter_renderer("date_range", filter::date_range)
			.add_filter_renderer("number_range", filter::number_range)
			.add_views_renderer("cards", view::CardsView)
			.add_views_renderer("kanban", view::KanbanBoard)
			.add_edit_renderer("number", edit::number)
			.add_edit_renderer("date", edit::date)
			.add_edit_renderer("boolean", edit::boolean)
			.add_edit_renderer("badge", edit::select);
		renderers
	}

	/// Creates default registries configured by `settings`
	pub fn with_settings(settings: &RenderSettings) -> Self {
		let mut renderers = Self::with_defaults();
		renderers.columns.set_warn_on_fallback(settings.warn_on_fallback);
		renderers.filters.set_warn_on_fallback(settings.warn_on_fallback);
		renderers.views.set_warn_on_fallback(settings.warn_on_fallback);
		renderers.edits.set_warn_on_fallback(settings.warn_on_fallback);
		renderers
	}

	/// Registers a cell renderer
	pub fn add_column_renderer(
		&mut self,
		type_name: impl Into<String>,
		renderer: impl ColumnRenderer + 'static,
	) -> &mut Self {
		self.columns.add(type_name, Arc::new(renderer));
		self
	}

	/// Registers a filter input
	pub fn add_filter_renderer(
		&mut self,
		type_name: impl Into<String>,
		renderer: impl FilterRenderer + 'static,
	) -> &mut Self {
		self.filters.add(type_name, Arc::new(renderer));
		self
	}

	/// Registers a view renderer
	pub fn add_views_renderer(
		&mut self,
		type_name: impl Into<String>,
		renderer: impl ViewRenderer + 'static,
	) -> &mut Self {
		self.views.add(type_name, Arc::new(renderer));
		self
	}

	/// Registers an inline editor
	pub fn add_edit_renderer(
		&mut self,
		type_name: impl Into<String>,
		renderer: impl EditRenderer + 'static,
	) -> &mut Self {
		self.edits.add(type_name, Arc::new(renderer));
		self
	}

	/// Returns the cell renderers
	pub fn columns(&self) -> &ColumnRegistry {
		&self.columns
	}

	/// Mutably borrows the cell renderers
	pub fn columns_mut(&mut self) -> &mut ColumnRegistry {
		&mut self.columns
	}

	/// Returns the filter inputs
	pub fn filters(&self) -> &FilterRegistry {
		&self.filters
	}

	/// Mutably borrows the filter inputs
	pub fn filters_mut(&mut self) -> &mut FilterRegistry {
		&mut self.filters
	}

	/// Returns the view renderers
	pub fn views(&self) -> &ViewRegistry {
		&self.views
	}

	/// Mutably borrows the view renderers
	pub fn views_mut(&mut self) -> &mut ViewRegistry {
		&mut self.views
	}

	/// Returns the inline editors
	pub fn edits(&self) -> &EditRegistry {
		&self.edits
	}

	/// Mutably borrows the inline editors
	pub fn edits_mut(&mut self) -> &mut EditRegistry {
		&mut self.edits
	}

	/// Renders a table payload to HTML
	pub fn render(&self, payload: &TablePayload) -> RenderOutput {
		TableRenderer::new(self).render_payload(payload)
	}
}

impl Default for Renderers {
	fn default() -> Self {
		Self::with_defaults()
	}
}

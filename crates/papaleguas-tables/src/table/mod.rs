//! The table aggregate
//!
//! A [`Table`] is assembled once per request from columns, filters,
//! actions and views, bound to a data origin and a [`TableRequest`], and
//! then serialized. Serialization runs the in-memory pipeline (search,
//! filters, sort, paginate) so the emitted `records` are exactly the rows
//! of the requested page.
//!
//! # Examples
//!
//! ```
//! use papaleguas_tables::column::{ColumnBuilder, TextColumn};
//! use papaleguas_tables::table::{Table, TableRequest};
//! use serde_json::json;
//!
//! let rows = json!([{ "name": "Ana" }, { "name": "Bruno" }, { "name": "Carla" }]);
//! let records = rows
//!     .as_array()
//!     .unwrap()
//!     .iter()
//!     .filter_map(|row| row.as_object().cloned())
//!     .collect();
//!
//! let props = Table::make()
//!     .column(TextColumn::make("name").searchable(true))
//!     .records(records)
//!     .with_request(TableRequest::new().search("r"))
//!     .get_props()
//!     .unwrap();
//!
//! assert_eq!(props["pagination"]["total"], 2);
//! assert_eq!(props["records"][0]["name"], "Bruno");
//! ```

mod pipeline;
mod request;
mod source;

pub use pipeline::Page;
pub use request::{SortConfig, SortOrder, TableRequest};
pub use source::{CollectionSource, DataSource, Model, ModelSource, QuerySource, TryQuerySource};

use crate::action::{BulkAction, HeaderAction, RowAction};
use crate::column::Column;
use crate::filter::Filter;
use crate::view::View;
use indexmap::IndexMap;
use papaleguas_conf::TableSettings;
use papaleguas_core::record::to_props;
use papaleguas_core::{Props, Record, Result, TablePayload};
use serde_json::{Value, json};
use std::fmt;
use uuid::Uuid;

struct Origin {
	model: Option<&'static str>,
	source: Box<dyn DataSource>,
}

/// Declarative table configuration
pub struct Table {
	id: String,
	component: String,
	origin: Option<Origin>,
	columns: IndexMap<String, Box<dyn Column>>,
	filters: IndexMap<String, Box<dyn Filter>>,
	header_actions: Vec<HeaderAction>,
	bulk_actions: Vec<BulkAction>,
	row_actions: Vec<RowAction>,
	views: Vec<View>,
	default_view: Option<String>,
	per_page: u64,
	per_page_options: Vec<u64>,
	paginated: bool,
	default_sort: Option<SortConfig>,
	searchable: bool,
	search_placeholder: Option<String>,
	request: TableRequest,
}

impl Table {
	/// Creates an empty table with default settings
	pub fn make() -> Self {
		Self::make_with(&TableSettings::default())
	}

	/// Creates an empty table seeded from `settings`
	pub fn make_with(settings: &TableSettings) -> Self {
		Self {
			id: format!("table-{}", Uuid::new_v4()),
			component: settings.component.clone(),
			origin: None,
			columns: IndexMap::new(),
			filters: IndexMap::new(),
			header_actions: Vec::new(),
			bulk_actions: Vec::new(),
			row_actions: Vec::new(),
			views: Vec::new(),
			default_view: None,
			per_page: settings.per_page,
			per_page_options: settings.per_page_options.clone(),
			paginated: true,
			default_sort: None,
			searchable: settings.searchable,
			search_placeholder: None,
			request: TableRequest::default(),
		}
	}

	/// Replaces the generated id
	pub fn with_id(mut self, id: impl Into<String>) -> Self {
		self.id = id.into();
		self
	}

	/// Sets the page component the payload is addressed to
	pub fn component(mut self, component: impl Into<String>) -> Self {
		self.component = component.into();
		self
	}

	/// Reads records from model `M`, replacing any previous origin
	pub fn model<M: Model + 'static>(mut self) -> Self {
		self.origin = Some(Origin {
			model: Some(M::NAME),
			source: Box::new(ModelSource::<M>::new()),
		});
		self
	}

	/// Reads records from `query`, replacing any previous origin
	pub fn query<F>(self, query: F) -> Self
	where
		F: Fn() -> Vec<Record> + Send + Sync + 'static,
	{
		self.source(QuerySource::new(query))
	}

	/// Reads records from a fallible `query`, replacing any previous origin
	///
	/// A failure surfaces from [`Table::get_props`] as
	/// [`papaleguas_core::PapaError::DataSource`].
	pub fn try_query<F, E>(self, query: F) -> Self
	where
		F: Fn() -> std::result::Result<Vec<Record>, E> + Send + Sync + 'static,
		E: fmt::Display,
	{
		self.source(TryQuerySource::new(query))
	}

	/// Serves a fixed list of records, replacing any previous origin
	pub fn records(self, records: Vec<Record>) -> Self {
		self.source(CollectionSource::new(records))
	}

	/// Reads records from a custom source, replacing any previous origin
	pub fn source(mut self, source: impl DataSource + 'static) -> Self {
		self.origin = Some(Origin {
			model: None,
			source: Box::new(source),
		});
		self
	}

	/// Appends a column
	///
	/// A column whose key is already declared replaces the earlier one and
	/// keeps its position.
	pub fn column(mut self, column: impl Column + 'static) -> Self {
		let key = column.key().to_string();
		if self.columns.contains_key(&key) {
			tracing::warn!(
				table = %self.id,
				column = %key,
				"Column key redefined, replacing earlier column"
			);
		}
		self.columns.insert(key, Box::new(column));
		self
	}

	/// Appends a filter, replacing one with the same key
	pub fn filter(mut self, filter: impl Filter + 'static) -> Self {
		let key = filter.key().to_string();
		if self.filters.contains_key(&key) {
			tracing::warn!(
				table = %self.id,
				filter = %key,
				"Filter key redefined, replacing earlier filter"
			);
		}
		self.filters.insert(key, Box::new(filter));
		self
	}

	/// Appends a header action
	pub fn header_action(mut self, action: HeaderAction) -> Self {
		self.header_actions.push(action);
		self
	}

	/// Appends a bulk action
	pub fn bulk_action(mut self, action: BulkAction) -> Self {
		self.bulk_actions.push(action);
		self
	}

	/// Appends a row action
	pub fn row_action(mut self, action: RowAction) -> Self {
		self.row_actions.push(action);
		self
	}

	/// Appends a view
	pub fn view(mut self, view: impl Into<View>) -> Self {
		self.views.push(view.into());
		self
	}

	/// Sets the view shown when the request names none
	pub fn default_view(mut self, id: impl Into<String>) -> Self {
		self.default_view = Some(id.into());
		self
	}

	/// Sets the default page size
	pub fn per_page(mut self, per_page: u64) -> Self {
		self.per_page = per_page;
		self
	}

	/// Sets the page sizes offered to the user
	pub fn per_page_options(mut self, options: Vec<u64>) -> Self {
		self.per_page_options = options;
		self
	}

	/// Enables or disables pagination
	pub fn paginate(mut self, paginated: bool) -> Self {
		self.paginated = paginated;
		self
	}

	/// Sets the sort used when the request carries none
	pub fn default_sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
		self.default_sort = Some(SortConfig::new(field, order));
		self
	}

	/// Enables or disables global search
	pub fn searchable(mut self, searchable: bool) -> Self {
		self.searchable = searchable;
		self
	}

	/// Sets the search input placeholder
	pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.search_placeholder = Some(placeholder.into());
		self
	}

	/// Binds the submitted request state
	pub fn with_request(mut self, request: TableRequest) -> Self {
		self.request = request;
		self
	}

	/// Returns the table id
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Returns the model name, if the records come from a model
	pub fn model_name(&self) -> Option<&'static str> {
		self.origin.as_ref().and_then(|origin| origin.model)
	}

	/// Returns the bound request
	pub fn get_request(&self) -> &TableRequest {
		&self.request
	}

	/// Runs the pipeline and returns the full table configuration
	pub fn get_props(&self) -> Result<Props> {
		let records = match &self.origin {
			Some(origin) => origin.source.fetch()?,
			None => Vec::new(),
		};

		let records = self.search(records);
		let active = pipeline::active_filters(&self.filters, &self.request.filters);
		let mut records = pipeline::apply_filters(records, &active);

		let sorting = self.effective_sort();
		if let Some(sort) = &sorting {
			pipeline::sort(&mut records, &sort.field, sort.order);
		}

		let page = self.paginate_records(records)?;

		let columns = self
			.columns
			.values()
			.map(|column| column.to_props().map(Value::Object))
			.collect::<Result<Vec<_>>>()?;

		let filters = self
			.filters
			.values()
			.map(|filter| -> Result<Value> {
				let mut props = filter.to_props()?;
				if let Some((_, value)) = active.iter().find(|(f, _)| f.key() == filter.key()) {
					props.insert("value".to_string(), (*value).clone());
				}
				Ok(Value::Object(props))
			})
			.collect::<Result<Vec<_>>>()?;

		let views = self
			.views
			.iter()
			.map(|view| view.to_props().map(Value::Object))
			.collect::<Result<Vec<_>>>()?;

		let sortable: Vec<&str> = self
			.columns
			.values()
			.filter(|column| column.base().is_sortable())
			.map(|column| column.key())
			.collect();

		let mut props = Props::new();
		props.insert("columns".to_string(), Value::Array(columns));
		props.insert("filters".to_string(), Value::Array(filters));
		props.insert("actions".to_string(), self.actions_props()?);
		props.insert(
			"pagination".to_string(),
			json!({
				"enabled": self.paginated,
				"currentPage": page.page,
				"perPage": page.per_page,
				"perPageOptions": self.per_page_options,
				"total": page.total,
				"lastPage": page.last_page,
				"from": page.first_position(),
				"to": page.last_position(),
			}),
		);
		props.insert(
			"sorting".to_string(),
			json!({
				"column": sorting.as_ref().map(|sort| sort.field.as_str()),
				"direction": sorting.as_ref().map(|sort| sort.order.as_str()),
				"sortable": sortable,
			}),
		);
		props.insert(
			"search".to_string(),
			json!({
				"enabled": self.searchable,
				"value": self.request.search.as_deref().filter(|_| self.searchable),
				"placeholder": self.search_placeholder,
			}),
		);
		props.insert("views".to_string(), Value::Array(views));
		props.insert("activeView".to_string(), json!(self.active_view()));
		props.insert(
			"records".to_string(),
			Value::Array(page.records.into_iter().map(Value::Object).collect()),
		);
		props.insert("model".to_string(), json!(self.model_name()));

		Ok(props)
	}

	/// Wraps the props with the component name
	pub fn render(&self) -> Result<TablePayload> {
		Ok(TablePayload {
			component: self.component.clone(),
			id: None,
			props: self.get_props()?,
		})
	}

	/// Returns the payload as a map, including the table id
	pub fn to_array(&self) -> Result<Props> {
		let payload = TablePayload {
			id: Some(self.id.clone()),
			..self.render()?
		};
		to_props(&payload)
	}

	fn search(&self, records: Vec<Record>) -> Vec<Record> {
		let Some(term) = self.request.search.as_deref().filter(|_| self.searchable) else {
			return records;
		};
		let keys: Vec<&str> = self
			.columns
			.values()
			.filter(|column| column.base().is_searchable())
			.map(|column| column.key())
			.collect();
		if keys.is_empty() {
			tracing::debug!(table = %self.id, "Search requested but no column is searchable");
			return records;
		}
		pipeline::search(records, term, &keys)
	}

	fn effective_sort(&self) -> Option<SortConfig> {
		if let Some(requested) = &self.request.sort {
			let sortable = self
				.columns
				.get(&requested.field)
				.is_some_and(|column| column.base().is_sortable());
			if sortable {
				return Some(requested.clone());
			}
			tracing::debug!(
				table = %self.id,
				column = %requested.field,
				"Ignoring sort on undeclared or unsortable column"
			);
		}
		self.default_sort.clone()
	}

	fn paginate_records(&self, records: Vec<Record>) -> Result<Page> {
		if self.paginated {
			let page = self.request.page.unwrap_or(1);
			let per_page = self.request.per_page.unwrap_or(self.per_page);
			return pipeline::paginate(records, page, per_page);
		}
		let total = records.len();
		Ok(Page {
			records,
			total,
			page: 1,
			per_page: total.max(1) as u64,
			last_page: 1,
		})
	}

	fn active_view(&self) -> Option<&str> {
		if let Some(requested) = self.request.view.as_deref() {
			if self.views.iter().any(|view| view.id() == requested) {
				return Some(requested);
			}
			tracing::debug!(table = %self.id, view = %requested, "Ignoring undeclared view");
		}
		self.default_view
			.as_deref()
			.or_else(|| self.views.first().map(View::id))
	}

	fn actions_props(&self) -> Result<Value> {
		let header = self
			.header_actions
			.iter()
			.map(|action| action.to_props().map(Value::Object))
			.collect::<Result<Vec<_>>>()?;
		let bulk = self
			.bulk_actions
			.iter()
			.map(|action| action.to_props().map(Value::Object))
			.collect::<Result<Vec<_>>>()?;
		let row = self
			.row_actions
			.iter()
			.map(|action| action.to_props().map(Value::Object))
			.collect::<Result<Vec<_>>>()?;
		Ok(json!({ "header": header, "bulk": bulk, "row": row }))
	}
}

impl fmt::Debug for Table {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Table")
			.field("id", &self.id)
			.field("component", &self.component)
			.field("model", &self.model_name())
			.field("columns", &self.columns.keys().collect::<Vec<_>>())
			.field("filters", &self.filters.keys().collect::<Vec<_>>())
			.field("views", &self.views.len())
			.field("request", &self.request)
			.finish_non_exhaustive()
	}
}

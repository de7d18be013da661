//! Payload to HTML
//!
//! Every column, filter and view type is resolved through the registries
//! exactly once per render. A miss never aborts rendering: the fallback
//! renderer is used, a warning is logged and a [`Diagnostic`] is added to
//! the output.

use crate::builtin::action::{bulk_actions, header_actions};
use crate::builtin::attr;
use crate::descriptor::{ActionDescriptor, ColumnDescriptor, FilterDescriptor, ViewDescriptor};
use crate::query::QueryState;
use crate::registry::ResolveError;
use crate::renderer::{BoundColumn, ViewContext};
use crate::renderers::Renderers;
use papaleguas_core::html::escape;
use papaleguas_core::{Props, Record, TablePayload, value_to_text};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

/// What a diagnostic is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticKind {
	/// A column type fell back
	Column,
	/// A filter was malformed or its type fell back
	Filter,
	/// A view type fell back
	View,
	/// An editor type fell back
	Edit,
}

impl fmt::Display for DiagnosticKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let kind = match self {
			DiagnosticKind::Column => "column",
			DiagnosticKind::Filter => "filter",
			DiagnosticKind::View => "view",
			DiagnosticKind::Edit => "edit",
		};
		f.write_str(kind)
	}
}

/// A degraded part of the rendered output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
	/// What was degraded
	pub kind: DiagnosticKind,
	/// Key or id of the degraded item, empty when unknown
	pub subject: String,
	/// Human readable reason
	pub message: String,
}

impl Diagnostic {
	fn resolve(kind: DiagnosticKind, subject: &str, error: ResolveError) -> Self {
		Self {
			kind,
			subject: subject.to_string(),
			message: error.to_string(),
		}
	}
}

/// Rendered HTML and the diagnostics collected on the way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOutput {
	/// The table markup
	pub html: String,
	/// One entry per degraded column, filter or view
	pub diagnostics: Vec<Diagnostic>,
}

/// Renders table payloads with a set of registries
#[derive(Debug, Clone, Copy)]
pub struct TableRenderer<'r> {
	renderers: &'r Renderers,
}

impl<'r> TableRenderer<'r> {
	/// Creates a renderer over `renderers`
	pub fn new(renderers: &'r Renderers) -> Self {
		Self { renderers }
	}

	/// Renders a payload produced by `Table::render`
	pub fn render_payload(&self, payload: &TablePayload) -> RenderOutput {
		let mut output = self.render_props(&payload.props);
		let id = payload
			.id
			.as_deref()
			.map(|id| attr("id", id))
			.unwrap_or_default();
		output.html = format!(
			r#"<div class="pl-table-container"{}{id}>{}</div>"#,
			attr("data-component", &payload.component),
			output.html
		);
		output
	}

	/// Renders the props of a table
	pub fn render_props(&self, props: &Props) -> RenderOutput {
		let mut diagnostics = Vec::new();

		let columns = self.bind_columns(props, &mut diagnostics);
		let filters = self.render_filters(props, &mut diagnostics);
		let records: Vec<Record> = items(props.get("records"))
			.filter_map(|record| record.as_object().cloned())
			.collect();
		let actions = props.get("actions");
		let header = descriptors::<ActionDescriptor>(actions.and_then(|a| a.get("header")));
		let bulk = descriptors::<ActionDescriptor>(actions.and_then(|a| a.get("bulk")));
		let row = descriptors::<ActionDescriptor>(actions.and_then(|a| a.get("row")));

		let (view, view_html) = self.render_view(
			props,
			&columns,
			&records,
			&row,
			!bulk.is_empty(),
			&mut diagnostics,
		);

		let state = QueryState::from_props(props);
		let mut html = String::new();
		html.push_str(r#"<div class="pl-toolbar">"#);
		html.push_str(&query_form(&state, search_box(props.get("search")), &filters));
		html.push_str(&view_switcher(props, &view, &state));
		html.push_str(&header_actions(&header));
		html.push_str("</div>");
		html.push_str(&bulk_actions(&bulk));
		html.push_str(&view_html);
		html.push_str(&pagination(props.get("pagination"), &state));

		RenderOutput { html, diagnostics }
	}

	fn bind_columns(&self, props: &Props, diagnostics: &mut Vec<Diagnostic>) -> Vec<BoundColumn> {
		let mut columns = Vec::new();
		for value in items(props.get("columns")) {
			let (descriptor, renderer) = match guard_column(value) {
				Ok(descriptor) => {
					let (renderer, error) = self
						.renderers
						.columns()
						.resolve_reporting(descriptor.renderer_type());
					if let Some(error) = error {
						diagnostics.push(Diagnostic::resolve(
							DiagnosticKind::Column,
							&descriptor.key,
							error,
						));
					}
					(descriptor, renderer)
				}
				Err((descriptor, reason)) => {
					tracing::warn!(
						column = %descriptor.key,
						"Malformed column, {reason}; rendering default column"
					);
					diagnostics.push(Diagnostic {
						kind: DiagnosticKind::Column,
						subject: descriptor.key.clone(),
						message: format!("Malformed column: {reason}"),
					});
					(descriptor, self.renderers.columns().fallback())
				}
			};

			let mut editor = None;
			if descriptor.editable {
				let (edit, error) = self
					.renderers
					.edits()
					.resolve_reporting(descriptor.column_type.as_deref());
				if let Some(error) = error {
					diagnostics.push(Diagnostic::resolve(DiagnosticKind::Edit, &descriptor.key, error));
				}
				editor = Some(edit);
			}

			columns.push(BoundColumn {
				descriptor,
				renderer,
				editor,
			});
		}
		columns
	}

	fn render_filters(&self, props: &Props, diagnostics: &mut Vec<Diagnostic>) -> String {
		let registry = self.renderers.filters();
		items(props.get("filters"))
			.map(|value| match guard_filter(value) {
				Ok(descriptor) => {
					let (renderer, error) = registry.resolve_reporting(descriptor.renderer_type());
					if let Some(error) = error {
						diagnostics.push(Diagnostic::resolve(
							DiagnosticKind::Filter,
							&descriptor.key,
							error,
						));
					}
					renderer.render(&descriptor)
				}
				Err((descriptor, reason)) => {
					tracing::warn!(
						filter = %descriptor.key,
						"Malformed filter, {reason}; rendering default filter"
					);
					diagnostics.push(Diagnostic {
						kind: DiagnosticKind::Filter,
						subject: descriptor.key.clone(),
						message: format!("Malformed filter: {reason}"),
					});
					registry.fallback().render(&descriptor)
				}
			})
			.collect()
	}

	fn render_view(
		&self,
		props: &Props,
		columns: &[BoundColumn],
		records: &[Record],
		row_actions: &[ActionDescriptor],
		selectable: bool,
		diagnostics: &mut Vec<Diagnostic>,
	) -> (ViewDescriptor, String) {
		let views = descriptors::<ViewDescriptor>(props.get("views"));
		let active = props.get("activeView").and_then(Value::as_str);
		let chosen = active
			.and_then(|id| views.iter().find(|view| view.id == id))
			.or_else(|| views.first())
			.cloned();

		let (view, renderer) = match chosen {
			Some(view) => {
				let (renderer, error) = self.renderers.views().resolve_reporting(view.renderer_type());
				if let Some(error) = error {
					diagnostics.push(Diagnostic::resolve(DiagnosticKind::View, &view.id, error));
				}
				(view, renderer)
			}
			None => (
				ViewDescriptor {
					id: Renderers::DEFAULT_VIEW.to_string(),
					view_type: Some(Renderers::DEFAULT_VIEW.to_string()),
					..ViewDescriptor::default()
				},
				self.renderers.views().fallback(),
			),
		};

		let context = ViewContext {
			view: &view,
			columns,
			records,
			row_actions,
			selectable,
		};
		let html = renderer.render(&context);
		(view, html)
	}
}

/// Reads a column entry, keeping its key and label when the rest is malformed
fn guard_column(value: &Value) -> Result<ColumnDescriptor, (ColumnDescriptor, String)> {
	let Some(object) = value.as_object() else {
		return Err((ColumnDescriptor::default(), "expected an object".to_string()));
	};
	serde_json::from_value::<ColumnDescriptor>(value.clone()).map_err(|error| {
		let fallback = ColumnDescriptor {
			key: object.get("key").map(value_to_text).unwrap_or_default(),
			label: object.get("label").map(value_to_text),
			..ColumnDescriptor::default()
		};
		(fallback, error.to_string())
	})
}

/// Validates a filter entry before it reaches a renderer
///
/// Returns the best-effort descriptor and the reason when the entry is not
/// an object or carries no type.
fn guard_filter(value: &Value) -> Result<FilterDescriptor, (FilterDescriptor, String)> {
	let Some(object) = value.as_object() else {
		return Err((FilterDescriptor::default(), "expected an object".to_string()));
	};
	let key = object.get("key").map(value_to_text).unwrap_or_default();
	let descriptor = match serde_json::from_value::<FilterDescriptor>(value.clone()) {
		Ok(descriptor) => descriptor,
		Err(error) => {
			let fallback = FilterDescriptor {
				key,
				..FilterDescriptor::default()
			};
			return Err((fallback, error.to_string()));
		}
	};
	if descriptor.renderer_type().is_none() {
		return Err((descriptor, "missing type".to_string()));
	}
	Ok(descriptor)
}

fn items(value: Option<&Value>) -> impl Iterator<Item = &Value> {
	value.and_then(Value::as_array).into_iter().flatten()
}

fn descriptors<T: DeserializeOwned>(value: Option<&Value>) -> Vec<T> {
	items(value)
		.filter_map(|item| match serde_json::from_value(item.clone()) {
			Ok(descriptor) => Some(descriptor),
			Err(error) => {
				tracing::debug!(%error, "Skipping malformed descriptor");
				None
			}
		})
		.collect()
}

fn search_box(search: Option<&Value>) -> String {
	let Some(search) = search.filter(|search| search["enabled"].as_bool().unwrap_or(false)) else {
		return String::new();
	};
	let value = search["value"].as_str().unwrap_or("");
	let placeholder = search["placeholder"].as_str().unwrap_or("Search...");
	format!(
		r#"<input class="pl-search" type="search" name="search"{}{}>"#,
		attr("value", value),
		attr("placeholder", placeholder)
	)
}

/// Wraps search and filters in one GET form
///
/// Submitting it starts again from the first page; the sort, view and page
/// size travel as hidden inputs.
fn query_form(state: &QueryState, search: String, filters: &str) -> String {
	if search.is_empty() && filters.is_empty() {
		return String::new();
	}
	let filters = if filters.is_empty() {
		String::new()
	} else {
		format!(r#"<div class="pl-filters">{filters}</div>"#)
	};
	format!(
		r#"<form class="pl-query" method="get">{}{search}{filters}<button class="pl-apply" type="submit">Apply</button></form>"#,
		state.hidden_inputs(&["sort", "direction", "view", "per_page"])
	)
}

fn view_switcher(props: &Props, active: &ViewDescriptor, state: &QueryState) -> String {
	let views = descriptors::<ViewDescriptor>(props.get("views"));
	if views.len() < 2 {
		return String::new();
	}
	let links: String = views
		.iter()
		.map(|view| {
			let current = if view.id == active.id { r#" aria-current="true""# } else { "" };
			let icon = view
				.icon
				.as_deref()
				.map(|icon| format!("<i{}></i>", attr("data-icon", icon)))
				.unwrap_or_default();
			format!(
				r#"<a class="pl-view"{}{current}>{icon}{}</a>"#,
				attr("href", &state.href_with("view", &view.id)),
				escape(view.label.as_deref().unwrap_or(&view.id))
			)
		})
		.collect();
	format!(r#"<div class="pl-view-switcher">{links}</div>"#)
}

fn pagination(pagination: Option<&Value>, state: &QueryState) -> String {
	let Some(pagination) = pagination.filter(|p| p["enabled"].as_bool().unwrap_or(false)) else {
		return String::new();
	};
	let current = pagination["currentPage"].as_u64().unwrap_or(1);
	let last = pagination["lastPage"].as_u64().unwrap_or(1);
	let total = pagination["total"].as_u64().unwrap_or(0);
	let summary = match (pagination["from"].as_u64(), pagination["to"].as_u64()) {
		(Some(from), Some(to)) => format!("Showing {from} to {to} of {total}"),
		_ => format!("Showing 0 of {total}"),
	};
	let link = |page: u64, text: &str, enabled: bool| {
		if enabled {
			format!(
				r#"<a class="pl-page"{}>{text}</a>"#,
				attr("href", &state.href_with("page", &page.to_string()))
			)
		} else {
			format!(r#"<span class="pl-page pl-disabled">{text}</span>"#)
		}
	};
	format!(
		r#"<nav class="pl-pagination" data-current="{current}" data-last="{last}"><span class="pl-summary">{summary}</span>{}{}</nav>"#,
		link(current.saturating_sub(1).max(1), "Previous", current > 1),
		link((current + 1).min(last), "Next", current < last)
	)
}

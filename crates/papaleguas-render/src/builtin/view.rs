//! Built-in view renderers

use super::attr;
use crate::renderer::{BoundColumn, ViewContext, ViewRenderer};
use indexmap::IndexMap;
use papaleguas_core::html::escape;
use papaleguas_core::record::lookup;
use papaleguas_core::{Record, value_to_text};
use serde_json::Value;

const EMPTY_MESSAGE: &str = "No records found";

fn cell_attrs(column: &BoundColumn) -> String {
	let alignment = column.descriptor.alignment.as_deref().unwrap_or("left");
	let mut attrs = format!(
		r#" class="pl-cell pl-align-{}"{}"#,
		escape(alignment),
		attr("data-key", &column.descriptor.key)
	);
	if let Some(width) = &column.descriptor.width {
		attrs.push_str(&attr("style", &format!("width: {width}")));
	}
	attrs
}

fn record_id(record: &Record) -> String {
	record.get("id").map(value_to_text).unwrap_or_default()
}

/// Rows and columns, the fallback view
#[derive(Debug, Clone, Copy, Default)]
pub struct TableView;

impl ViewRenderer for TableView {
	fn render(&self, context: &ViewContext<'_>) -> String {
		let columns: Vec<&BoundColumn> = context.visible_columns().collect();
		let has_actions = !context.row_actions.is_empty();

		let mut html = String::from(r#"<table class="pl-table"><thead><tr>"#);
		if context.selectable {
			html.push_str(r#"<th class="pl-select"><input type="checkbox" data-select-all></th>"#);
		}
		for column in &columns {
			let sortable = if column.descriptor.sortable { " data-sortable" } else { "" };
			html.push_str(&format!(
				"<th{}{sortable}>{}</th>",
				cell_attrs(column),
				escape(column.descriptor.heading())
			));
		}
		if has_actions {
			html.push_str(r#"<th class="pl-actions"></th>"#);
		}
		html.push_str("</tr></thead><tbody>");

		if context.records.is_empty() {
			let span = columns.len() + usize::from(has_actions) + usize::from(context.selectable);
			html.push_str(&format!(
				r#"<tr class="pl-empty"><td colspan="{}">{EMPTY_MESSAGE}</td></tr>"#,
				span.max(1)
			));
		}
		for record in context.records {
			html.push_str("<tr>");
			if context.selectable {
				html.push_str(&format!(
					r#"<td class="pl-select"><input type="checkbox"{}></td>"#,
					attr("value", &record_id(record))
				));
			}
			for column in &columns {
				html.push_str(&format!(
					"<td{}>{}</td>",
					cell_attrs(column),
					column.render_cell(record)
				));
			}
			if has_actions {
				html.push_str(&format!(
					r#"<td class="pl-actions">{}</td>"#,
					context.render_row_actions(record)
				));
			}
			html.push_str("</tr>");
		}
		html.push_str("</tbody></table>");
		html
	}
}

// Opens a card article with its image and title; callers close it.
fn open_card(
	context: &ViewContext<'_>,
	record: &Record,
	image: Option<String>,
	title_key: Option<&str>,
) -> String {
	let title = title_key
		.and_then(|key| context.column(key))
		.or_else(|| context.visible_columns().next());
	let title_html = title
		.map(|column| format!(r#"<h3 class="pl-card-title">{}</h3>"#, column.render_cell(record)))
		.unwrap_or_default();

	let image_html = image
		.filter(|src| !src.is_empty())
		.map(|src| format!(r#"<figure class="pl-card-image"><img{}></figure>"#, attr("src", &src)))
		.unwrap_or_default();

	format!(
		r#"<article class="pl-card"{}>{image_html}{title_html}"#,
		attr("data-id", &record_id(record))
	)
}

/// Card grid driven by `image_column`, `title_column` and
/// `description_column`
#[derive(Debug, Clone, Copy, Default)]
pub struct CardsView;

impl ViewRenderer for CardsView {
	fn render(&self, context: &ViewContext<'_>) -> String {
		let per_row = context
			.view
			.config
			.get("columns_per_row")
			.and_then(Value::as_u64)
			.unwrap_or(3);
		let image_key = context.view.config_str("image_column");
		let title_key = context.view.config_str("title_column");
		let description_key = context.view.config_str("description_column");

		let mut html = format!(r#"<div class="pl-cards" style="--pl-cards-per-row: {per_row}">"#);
		if context.records.is_empty() {
			html.push_str(&format!(r#"<p class="pl-empty">{EMPTY_MESSAGE}</p>"#));
		}
		for record in context.records {
			let image = image_key
				.and_then(|key| lookup(record, key))
				.map(value_to_text);
			html.push_str(&open_card(context, record, image, title_key));
			if let Some(column) = description_key.and_then(|key| context.column(key)) {
				html.push_str(&format!(
					r#"<p class="pl-card-description">{}</p>"#,
					column.render_cell(record)
				));
			}
			html.push_str(&context.render_row_actions(record));
			html.push_str("</article>");
		}
		html.push_str("</div>");
		html
	}
}

/// Kanban lanes grouped by the `group_by` field
///
/// Lanes come from the `columns` config; without it, one lane per distinct
/// value in order of appearance. Records matching no lane are collected in
/// a trailing unassigned lane.
#[derive(Debug, Clone, Copy, Default)]
pub struct KanbanBoard;

struct Lane {
	title: String,
	color: Option<String>,
	limit: Option<u64>,
	records: Vec<usize>,
}

impl ViewRenderer for KanbanBoard {
	fn render(&self, context: &ViewContext<'_>) -> String {
		let group_by = context.view.config_str("group_by").unwrap_or("status");
		let mut lanes: IndexMap<String, Lane> = context
			.view
			.config
			.get("columns")
			.and_then(Value::as_array)
			.map(|columns| {
				columns
					.iter()
					.filter_map(|lane| {
						let id = lane.get("id").map(value_to_text)?;
						let title = lane
							.get("title")
							.and_then(Value::as_str)
							.map(str::to_string)
							.unwrap_or_else(|| id.clone());
						Some((
							id,
							Lane {
								title,
								color: lane.get("color").and_then(Value::as_str).map(str::to_string),
								limit: lane.get("limit").and_then(Value::as_u64),
								records: Vec::new(),
							},
						))
					})
					.collect()
			})
			.unwrap_or_default();
		let derive_lanes = lanes.is_empty();
		let mut unassigned = Vec::new();

		for (index, record) in context.records.iter().enumerate() {
			let group = lookup(record, group_by).map(value_to_text).unwrap_or_default();
			if derive_lanes && !group.is_empty() && !lanes.contains_key(&group) {
				lanes.insert(
					group.clone(),
					Lane {
						title: group.clone(),
						color: None,
						limit: None,
						records: Vec::new(),
					},
				);
			}
			match lanes.get_mut(&group) {
				Some(lane) => lane.records.push(index),
				None => unassigned.push(index),
			}
		}

		let workflow = context
			.view
			.config_str("workflow_slug")
			.map(|slug| attr("data-workflow", slug))
			.unwrap_or_default();
		let mut html = format!(
			r#"<div class="pl-kanban"{}{workflow}>"#,
			attr("data-group-by", group_by)
		);
		let mut render_lane = |id: &str, lane: &Lane| {
			let over_limit = lane.limit.is_some_and(|limit| lane.records.len() as u64 > limit);
			let color = lane
				.color
				.as_deref()
				.map(|color| attr("data-color", color))
				.unwrap_or_default();
			html.push_str(&format!(
				r#"<section class="pl-kanban-lane{}"{}{color}><header>{}<span class="pl-count">{}</span></header>"#,
				if over_limit { " pl-over-limit" } else { "" },
				attr("data-lane", id),
				escape(&lane.title),
				lane.records.len()
			));
			for index in &lane.records {
				let record = &context.records[*index];
				let mut card_html = open_card(context, record, None, None);
				for column in context.visible_columns().skip(1) {
					card_html.push_str(&format!(
						r#"<div class="pl-card-field"{}>{}</div>"#,
						attr("data-key", &column.descriptor.key),
						column.render_cell(record)
					));
				}
				card_html.push_str(&context.render_row_actions(record));
				card_html.push_str("</article>");
				html.push_str(&card_html);
			}
			html.push_str("</section>");
		};

		for (id, lane) in &lanes {
			render_lane(id, lane);
		}
		if !unassigned.is_empty() {
			render_lane(
				"",
				&Lane {
					title: "Unassigned".to_string(),
					color: None,
					limit: None,
					records: unassigned,
				},
			);
		}
		html.push_str("</div>");
		html
	}
}

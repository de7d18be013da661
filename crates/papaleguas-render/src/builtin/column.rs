//! Built-in cell renderers, keyed by column type

use super::attr;
use crate::descriptor::{ColumnDescriptor, interpolate};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use papaleguas_core::html::{class_attr, escape};
use papaleguas_core::{Record, value_to_text};
use serde_json::Value;

const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
const MAX_DECIMALS: u64 = 20;

fn truthy(value: Option<&Value>) -> bool {
	match value {
		Some(Value::Bool(b)) => *b,
		Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
		Some(Value::String(s)) => matches!(
			s.trim().to_ascii_lowercase().as_str(),
			"true" | "1" | "yes" | "on"
		),
		_ => false,
	}
}

fn text_of(column: &ColumnDescriptor, record: &Record) -> String {
	column.value_in(record).map(value_to_text).unwrap_or_default()
}

/// Plain text, truncated to the `limit` option
pub fn text(column: &ColumnDescriptor, record: &Record) -> String {
	let text = text_of(column, record);
	if text.is_empty() {
		return column
			.option_str("placeholder")
			.map(|placeholder| format!(r#"<span class="pl-placeholder">{}</span>"#, escape(placeholder)))
			.unwrap_or_default();
	}
	match column.option("limit").and_then(Value::as_u64) {
		Some(limit) if text.chars().count() > limit as usize => {
			let truncated: String = text.chars().take(limit as usize).collect();
			format!(
				"<span{}>{}…</span>",
				attr("title", &text),
				escape(&truncated)
			)
		}
		_ => escape(&text).into_owned(),
	}
}

/// Colored badge chosen through the `variants` option
pub fn badge(column: &ColumnDescriptor, record: &Record) -> String {
	let value = text_of(column, record);
	if value.is_empty() {
		return String::new();
	}
	let color = column
		.option("variants")
		.and_then(|variants| variants.get(&value))
		.and_then(Value::as_str)
		.or_else(|| column.option_str("defaultColor"))
		.unwrap_or("secondary");
	let label = column
		.option("valueLabels")
		.and_then(|labels| labels.get(&value))
		.and_then(Value::as_str)
		.unwrap_or(&value);
	let color_class = format!("pl-badge-{color}");

	format!(
		"<span{}>{}</span>",
		class_attr(["pl-badge", color_class.as_str()]),
		escape(label)
	)
}

/// Yes/no indicator
pub fn boolean(column: &ColumnDescriptor, record: &Record) -> String {
	let (state, label, icon) = if truthy(column.value_in(record)) {
		(
			"true",
			column.option_str("trueLabel").unwrap_or("Yes"),
			column.option_str("trueIcon").unwrap_or("check"),
		)
	} else {
		(
			"false",
			column.option_str("falseLabel").unwrap_or("No"),
			column.option_str("falseIcon").unwrap_or("x"),
		)
	};
	let state_class = format!("pl-boolean-{state}");

	format!(
		"<span{}{}>{}</span>",
		class_attr(["pl-boolean", state_class.as_str()]),
		attr("data-icon", icon),
		escape(label)
	)
}

/// Formats `text` as a date with a strftime `format`
///
/// Accepts RFC 3339 date-times, naive date-times and plain dates. Values
/// that do not parse are returned unchanged, and an invalid format falls
/// back to `%Y-%m-%d`.
pub fn format_date(text: &str, format: &str) -> String {
	let format = if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
		DEFAULT_DATE_FORMAT
	} else {
		format
	};

	if let Ok(date_time) = DateTime::parse_from_rfc3339(text) {
		return date_time.format(format).to_string();
	}
	for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
		if let Ok(date_time) = NaiveDateTime::parse_from_str(text, pattern) {
			return date_time.format(format).to_string();
		}
	}
	if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
		return date.format(format).to_string();
	}
	text.to_string()
}

/// Date formatted through the `format` option
pub fn date(column: &ColumnDescriptor, record: &Record) -> String {
	let text = text_of(column, record);
	if text.is_empty() {
		return String::new();
	}
	let format = column.option_str("format").unwrap_or(DEFAULT_DATE_FORMAT);
	format!(
		"<time{}>{}</time>",
		attr("datetime", &text),
		escape(&format_date(&text, format))
	)
}

/// Number with fixed decimals and optional prefix and suffix
pub fn number(column: &ColumnDescriptor, record: &Record) -> String {
	let number = match column.value_in(record) {
		Some(Value::Number(n)) => n.as_f64(),
		Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
		_ => None,
	};
	let Some(number) = number else {
		return escape(&text_of(column, record)).into_owned();
	};
	let decimals = column
		.option("decimals")
		.and_then(Value::as_u64)
		.unwrap_or(0)
		.min(MAX_DECIMALS) as usize;
	let prefix = column.option_str("prefix").unwrap_or("");
	let suffix = column.option_str("suffix").unwrap_or("");

	escape(&format!("{prefix}{number:.decimals$}{suffix}")).into_owned()
}

/// Thumbnail of the URL held in the cell
pub fn image(column: &ColumnDescriptor, record: &Record) -> String {
	let src = text_of(column, record);
	if src.is_empty() {
		return String::new();
	}
	let size = column.option("size").and_then(Value::as_u64).unwrap_or(40);
	let rounded = column.option("rounded").and_then(Value::as_bool).unwrap_or(false);
	let size = size.to_string();

	format!(
		"<img{}{}{}{}{}>",
		class_attr(["pl-image", if rounded { "pl-image-rounded" } else { "" }]),
		attr("src", &src),
		attr("alt", column.heading()),
		attr("width", &size),
		attr("height", &size)
	)
}

/// Link built from the `url` template, or the cell value itself
pub fn link(column: &ColumnDescriptor, record: &Record) -> String {
	let text = text_of(column, record);
	let href = column
		.option_str("url")
		.map(|template| interpolate(template, record))
		.unwrap_or_else(|| text.clone());
	if href.is_empty() {
		return escape(&text).into_owned();
	}
	let target = column
		.option_str("target")
		.filter(|target| *target != "_self")
		.map(|target| attr("target", target))
		.unwrap_or_default();

	format!(
		r#"<a class="pl-link"{}{target}>{}</a>"#,
		attr("href", &href),
		escape(&text)
	)
}

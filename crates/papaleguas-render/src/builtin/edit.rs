//! Built-in inline editors, keyed by column type

use super::attr;
use crate::descriptor::ColumnDescriptor;
use papaleguas_core::html::escape;
use papaleguas_core::{Record, value_to_text};
use serde_json::Value;

fn input(column: &ColumnDescriptor, record: &Record, input_type: &str) -> String {
	let value = column.value_in(record).map(value_to_text).unwrap_or_default();
	format!(
		r#"<input class="pl-edit"{}{}{}>"#,
		attr("type", input_type),
		attr("name", &column.key),
		attr("value", &value)
	)
}

/// Text input
pub fn text(column: &ColumnDescriptor, record: &Record) -> String {
	input(column, record, "text")
}

/// Number input
pub fn number(column: &ColumnDescriptor, record: &Record) -> String {
	input(column, record, "number")
}

/// Date input
pub fn date(column: &ColumnDescriptor, record: &Record) -> String {
	let value = column
		.value_in(record)
		.and_then(Value::as_str)
		.map(|text| text.get(..10).unwrap_or(text))
		.unwrap_or("");
	format!(
		r#"<input class="pl-edit" type="date"{}{}>"#,
		attr("name", &column.key),
		attr("value", value)
	)
}

/// Checkbox
pub fn boolean(column: &ColumnDescriptor, record: &Record) -> String {
	let checked = matches!(column.value_in(record), Some(Value::Bool(true)));
	format!(
		r#"<input class="pl-edit" type="checkbox"{}{}>"#,
		attr("name", &column.key),
		if checked { " checked" } else { "" }
	)
}

/// Select over the badge variants
pub fn select(column: &ColumnDescriptor, record: &Record) -> String {
	let current = column.value_in(record).map(value_to_text).unwrap_or_default();
	let options: String = column
		.option("variants")
		.and_then(Value::as_object)
		.map(|variants| {
			variants
				.keys()
				.map(|value| {
					let selected = if *value == current { " selected" } else { "" };
					format!(
						"<option{}{selected}>{}</option>",
						attr("value", value),
						escape(value)
					)
				})
				.collect()
		})
		.unwrap_or_default();
	format!(
		r#"<select class="pl-edit"{}>{options}</select>"#,
		attr("name", &column.key)
	)
}

//! Built-in filter inputs, keyed by filter type

use super::attr;
use crate::descriptor::FilterDescriptor;
use papaleguas_core::html::escape;
use papaleguas_core::value_to_text;
use serde_json::Value;

fn wrap(filter: &FilterDescriptor, kind: &str, control: String) -> String {
	format!(
		r#"<div class="pl-filter pl-filter-{kind}"{}><label>{}</label>{control}</div>"#,
		attr("data-key", &filter.key),
		escape(filter.heading())
	)
}

fn field_name(filter: &FilterDescriptor, bound: Option<&str>) -> String {
	match bound {
		Some(bound) => format!("filters[{}][{bound}]", filter.key),
		None => format!("filters[{}]", filter.key),
	}
}

fn text_input(filter: &FilterDescriptor, input_type: &str) -> String {
	let value = filter.current_value().map(value_to_text).unwrap_or_default();
	let placeholder = filter
		.placeholder
		.as_deref()
		.map(|placeholder| attr("placeholder", placeholder))
		.unwrap_or_default();
	format!(
		"<input{}{}{}{placeholder}>",
		attr("type", input_type),
		attr("name", &field_name(filter, None)),
		attr("value", &value)
	)
}

/// Plain text input, also used for malformed or unknown filters
pub fn fallback(filter: &FilterDescriptor) -> String {
	wrap(filter, "default", text_input(filter, "text"))
}

/// Text input
pub fn text(filter: &FilterDescriptor) -> String {
	wrap(filter, "text", text_input(filter, "search"))
}

/// Select over the `options` list
pub fn select(filter: &FilterDescriptor) -> String {
	let selected: Vec<String> = match filter.current_value() {
		Some(Value::Array(values)) => values.iter().map(value_to_text).collect(),
		Some(value) => vec![value_to_text(value)],
		None => Vec::new(),
	};
	let multiple = filter
		.options
		.get("multiple")
		.and_then(Value::as_bool)
		.unwrap_or(false);
	let options: String = filter
		.options
		.get("options")
		.and_then(Value::as_array)
		.map(|options| {
			options
				.iter()
				.map(|option| {
					let value = option.get("value").map(value_to_text).unwrap_or_default();
					let label = option.get("label").and_then(Value::as_str).unwrap_or(&value);
					let is_selected = if selected.contains(&value) { " selected" } else { "" };
					format!(
						"<option{}{is_selected}>{}</option>",
						attr("value", &value),
						escape(label)
					)
				})
				.collect()
		})
		.unwrap_or_default();
	let name = if multiple {
		format!("{}[]", field_name(filter, None))
	} else {
		field_name(filter, None)
	};
	let control = format!(
		r#"<select{}{}><option value=""></option>{options}</select>"#,
		attr("name", &name),
		if multiple { " multiple" } else { "" }
	);
	wrap(filter, "select", control)
}

/// Yes/no select
pub fn boolean(filter: &FilterDescriptor) -> String {
	let current = filter.current_value().map(value_to_text).unwrap_or_default();
	let true_label = filter.options.get("trueLabel").and_then(Value::as_str).unwrap_or("Yes");
	let false_label = filter.options.get("falseLabel").and_then(Value::as_str).unwrap_or("No");
	let option = |value: &str, label: &str| {
		let selected = if current == value { " selected" } else { "" };
		format!(r#"<option value="{value}"{selected}>{}</option>"#, escape(label))
	};
	let control = format!(
		r#"<select{}><option value=""></option>{}{}</select>"#,
		attr("name", &field_name(filter, None)),
		option("1", true_label),
		option("0", false_label)
	);
	wrap(filter, "boolean", control)
}

fn range(filter: &FilterDescriptor, kind: &str, input_type: &str, bounds: [&str; 2]) -> String {
	let control: String = bounds
		.into_iter()
		.map(|bound| {
			let value = filter
				.current_value()
				.and_then(|value| value.get(bound))
				.map(value_to_text)
				.unwrap_or_default();
			format!(
				"<input{}{}{}>",
				attr("type", input_type),
				attr("name", &field_name(filter, Some(bound))),
				attr("value", &value)
			)
		})
		.collect();
	wrap(filter, kind, control)
}

/// Pair of date inputs
pub fn date_range(filter: &FilterDescriptor) -> String {
	range(filter, "date_range", "date", ["from", "to"])
}

/// Pair of number inputs
pub fn number_range(filter: &FilterDescriptor) -> String {
	range(filter, "number_range", "number", ["min", "max"])
}

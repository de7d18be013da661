use super::attr;
use crate::descriptor::ActionDescriptor;
use papaleguas_core::Record;
use papaleguas_core::html::{class_attr, escape};

fn button(action: &ActionDescriptor, href: &str) -> String {
	let color = action.color.as_deref().unwrap_or("secondary");
	let color_class = format!("pl-action-{color}");
	let mut attributes = class_attr(["pl-action", color_class.as_str()]);
	attributes.push_str(&attr("href", href));
	attributes.push_str(&attr("data-action", &action.name));
	if let Some(target) = &action.target {
		attributes.push_str(&attr("target", target));
	}
	if action.confirmation {
		attributes.push_str(&attr(
			"data-confirm-title",
			action.confirmation_title.as_deref().unwrap_or(""),
		));
		attributes.push_str(&attr(
			"data-confirm-description",
			action.confirmation_description.as_deref().unwrap_or(""),
		));
	}

	let icon = action
		.icon
		.as_deref()
		.map(|icon| format!(r#"<i{}></i>"#, attr("data-icon", icon)))
		.unwrap_or_default();
	let label_class = if action.hidden_label { " class=\"pl-sr-only\"" } else { "" };

	format!(
		"<a{attributes}>{icon}<span{label_class}>{}</span></a>",
		escape(action.heading())
	)
}

/// Renders header actions
pub(crate) fn header_actions(actions: &[ActionDescriptor]) -> String {
	if actions.is_empty() {
		return String::new();
	}
	let buttons: String = actions
		.iter()
		.map(|action| button(action, &action.route))
		.collect();
	format!(r#"<div class="pl-header-actions">{buttons}</div>"#)
}

/// Renders the bulk toolbar, shown once records are selected
pub(crate) fn bulk_actions(actions: &[ActionDescriptor]) -> String {
	if actions.is_empty() {
		return String::new();
	}
	let buttons: String = actions
		.iter()
		.map(|action| button(action, &action.route))
		.collect();
	format!(r#"<div class="pl-bulk-actions" hidden>{buttons}</div>"#)
}

/// Renders the actions of one record, filling route placeholders
pub(crate) fn row_actions(actions: &[ActionDescriptor], record: &Record) -> String {
	if actions.is_empty() {
		return String::new();
	}
	let buttons: String = actions
		.iter()
		.map(|action| button(action, &action.route_for(record)))
		.collect();
	format!(r#"<div class="pl-row-actions">{buttons}</div>"#)
}

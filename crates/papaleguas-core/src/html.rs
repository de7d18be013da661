//! HTML helpers used by the built-in renderers

use std::borrow::Cow;

/// Escapes HTML special characters in a string.
///
/// Returns a borrowed reference if no escaping is needed,
/// or an owned string if any characters were escaped.
///
/// # Examples
///
/// ```
/// use papaleguas_core::html::escape;
///
/// assert_eq!(escape("a < b"), "a &lt; b");
/// assert_eq!(escape("plain"), "plain");
/// ```
pub fn escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// Builds a `class="..."` attribute from non-empty class names
pub fn class_attr<'a>(classes: impl IntoIterator<Item = &'a str>) -> String {
	let joined = classes
		.into_iter()
		.filter(|class| !class.is_empty())
		.collect::<Vec<_>>()
		.join(" ");
	if joined.is_empty() {
		String::new()
	} else {
		format!(r#" class="{}""#, escape(&joined))
	}
}

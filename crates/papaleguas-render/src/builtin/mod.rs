//! Renderers registered by [`Renderers::with_defaults`](crate::Renderers::with_defaults)
//!
//! All output is plain HTML with `pl-` prefixed classes. Record values and
//! labels are always escaped.

pub(crate) mod action;
pub mod column;
pub mod edit;
pub mod filter;
pub mod view;

use papaleguas_core::html::escape;

/// Builds ` name="value"` with the value escaped
pub(crate) fn attr(name: &str, value: &str) -> String {
	format!(r#" {name}="{}""#, escape(value))
}

//! Wire format exchanged between the table builder and the renderer

use crate::record::Props;
use serde::{Deserialize, Serialize};

/// A rendered table addressed to a page component
///
/// `id` is only present in the array form of a table; the plain render
/// output carries the component name and props.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TablePayload {
	/// Page component that consumes the props
	pub component: String,
	/// Table identifier
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// Full table configuration and records
	pub props: Props,
}

impl TablePayload {
	/// Returns the props entry for `key`, if present
	pub fn prop(&self, key: &str) -> Option<&serde_json::Value> {
		self.props.get(key)
	}
}

use super::ColumnBase;
use crate::action::Target;
use serde::Serialize;

/// Column rendered as a link
///
/// `url` may contain `{field}` placeholders filled from the row, e.g.
/// `/users/{id}`. Without a url the cell value itself is the href.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkColumn {
	#[serde(flatten)]
	base: ColumnBase,
	#[serde(skip_serializing_if = "Option::is_none")]
	url: Option<String>,
	target: Target,
}

impl LinkColumn {
	/// Type string emitted by this column
	pub const TYPE: &'static str = "link";

	/// Creates a link column for `key`
	pub fn make(key: impl Into<String>) -> Self {
		Self {
			base: ColumnBase::new(key, Self::TYPE),
			url: None,
			target: Target::default(),
		}
	}

	/// Sets the url template
	pub fn url(mut self, url: impl Into<String>) -> Self {
		self.url = Some(url.into());
		self
	}

	/// Sets the link target
	pub fn target(mut self, target: Target) -> Self {
		self.target = target;
		self
	}
}

super::impl_column!(LinkColumn);

use super::View;
use papaleguas_core::{Color, PapaError, Props, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One lane of a kanban board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KanbanColumn {
	/// Value of the grouping field collected by this lane
	pub id: String,
	/// Lane heading
	pub title: String,
	/// Lane accent color
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub color: Option<Color>,
	/// Maximum number of cards, unlimited when absent
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub limit: Option<u32>,
}

impl KanbanColumn {
	/// Creates a lane collecting records whose grouping field equals `id`
	pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			title: title.into(),
			color: None,
			limit: None,
		}
	}

	/// Sets the accent color
	pub fn color(mut self, color: impl Into<Color>) -> Self {
		self.color = Some(color.into());
		self
	}

	/// Caps the number of cards in the lane
	pub fn limit(mut self, limit: u32) -> Self {
		self.limit = Some(limit);
		self
	}
}

/// Kanban board view
///
/// Records are grouped into lanes by the `group_by` field. Config keys:
/// `columns`, `workflow_slug`, `workflow_name` and `group_by`.
///
/// # Examples
///
/// ```
/// use papaleguas_tables::view::{KanbanColumn, KanbanView};
///
/// let board = KanbanView::make("board", "Board")
///     .workflow("sales", "Sales pipeline")
///     .columns(vec![KanbanColumn::new("lead", "Lead"), KanbanColumn::new("won", "Won")]);
///
/// assert_eq!(board.workflow_slug().unwrap(), "sales");
/// assert_eq!(board.board_columns().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct KanbanView {
	view: View,
}

impl KanbanView {
	/// Renderer type of kanban views
	pub const TYPE: &'static str = "kanban";

	/// Field used for grouping unless [`KanbanView::group_by`] is called
	pub const DEFAULT_GROUP_BY: &'static str = "status";

	/// Creates a kanban view
	pub fn make(id: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			view: View::of_type(id, label, Self::TYPE).set("group_by", Self::DEFAULT_GROUP_BY),
		}
	}

	/// Sets the board lanes
	pub fn columns(mut self, columns: Vec<KanbanColumn>) -> Self {
		let lanes: Vec<Value> = columns
			.into_iter()
			.map(|column| serde_json::json!(column))
			.collect();
		self.view = self.view.set("columns", lanes);
		self
	}

	/// Binds the board to a workflow
	pub fn workflow(mut self, slug: impl Into<String>, name: impl Into<String>) -> Self {
		self.view = self
			.view
			.set("workflow_slug", slug.into())
			.set("workflow_name", name.into());
		self
	}

	/// Sets the record field that decides a card's lane
	pub fn group_by(mut self, field: impl Into<String>) -> Self {
		self.view = self.view.set("group_by", field.into());
		self
	}

	/// Replaces the whole config map
	///
	/// Lanes, workflow and grouping set earlier are discarded.
	pub fn config(mut self, config: Props) -> Self {
		self.view = self.view.config(config);
		self
	}

	/// Returns the config map
	pub fn get_config(&self) -> &Props {
		self.view.get_config()
	}

	/// Returns the workflow slug
	pub fn workflow_slug(&self) -> Result<&str> {
		self.string_config("workflow_slug")
	}

	/// Returns the workflow display name
	pub fn workflow_name(&self) -> Result<&str> {
		self.string_config("workflow_name")
	}

	/// Returns the configured lanes
	pub fn board_columns(&self) -> Result<Vec<KanbanColumn>> {
		let lanes = self.require("columns")?;
		Ok(serde_json::from_value(lanes.clone())?)
	}

	/// Returns the grouping field, if one is configured
	pub fn grouping_field(&self) -> Option<&str> {
		self.get_config().get("group_by").and_then(Value::as_str)
	}

	/// Serializes the view
	pub fn to_props(&self) -> Result<Props> {
		self.view.to_props()
	}

	fn require(&self, key: &str) -> Result<&Value> {
		self.get_config()
			.get(key)
			.ok_or_else(|| PapaError::MissingViewConfig {
				view: self.view.id().to_string(),
				key: key.to_string(),
			})
	}

	fn string_config(&self, key: &str) -> Result<&str> {
		self.require(key)?
			.as_str()
			.ok_or_else(|| PapaError::MissingViewConfig {
				view: self.view.id().to_string(),
				key: key.to_string(),
			})
	}
}

super::forward_view_attributes!(KanbanView);

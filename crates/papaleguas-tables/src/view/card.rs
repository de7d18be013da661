use super::View;
use papaleguas_core::{Props, Result};

/// Card grid view
///
/// Each record becomes a card; the config names which columns feed the
/// card's image, title and description.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
	view: View,
}

impl CardView {
	/// Renderer type of card views
	pub const TYPE: &'static str = "cards";

	/// Creates a card view
	pub fn make(id: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			view: View::of_type(id, label, Self::TYPE).set("columns_per_row", 3),
		}
	}

	/// Sets how many cards share a row
	pub fn columns_per_row(mut self, count: u32) -> Self {
		self.view = self.view.set("columns_per_row", count);
		self
	}

	/// Column holding the card image URL
	pub fn image_column(mut self, key: impl Into<String>) -> Self {
		self.view = self.view.set("image_column", key.into());
		self
	}

	/// Column used as the card title
	pub fn title_column(mut self, key: impl Into<String>) -> Self {
		self.view = self.view.set("title_column", key.into());
		self
	}

	/// Column used as the card body
	pub fn description_column(mut self, key: impl Into<String>) -> Self {
		self.view = self.view.set("description_column", key.into());
		self
	}

	/// Replaces the whole config map
	pub fn config(mut self, config: Props) -> Self {
		self.view = self.view.config(config);
		self
	}

	/// Returns the config map
	pub fn get_config(&self) -> &Props {
		self.view.get_config()
	}

	/// Serializes the view
	pub fn to_props(&self) -> Result<Props> {
		self.view.to_props()
	}
}

super::forward_view_attributes!(CardView);

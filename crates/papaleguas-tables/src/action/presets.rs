//! Pre-configured actions
//!
//! Presets are fixed configurations of [`BulkAction`] and [`HeaderAction`].
//! Their texts are exposed as constants so applications and tests can refer
//! to them, and each `make()` returns an ordinary builder that can still be
//! customized further.

use super::{BulkAction, HeaderAction};
use papaleguas_core::{Color, HasColor, HasDescription, HasIcon, HasLabel};

/// Marks the selected records as active
pub struct ActivateBulkAction;

impl ActivateBulkAction {
	/// Action name
	pub const NAME: &'static str = "activate";
	/// Button label
	pub const LABEL: &'static str = "Activate";
	/// Icon name
	pub const ICON: &'static str = "check-circle";
	/// Button color
	pub const COLOR: Color = Color::Success;
	/// Confirmation dialog title
	pub const CONFIRMATION_TITLE: &'static str = "Activate selected records";
	/// Confirmation dialog text
	pub const CONFIRMATION_DESCRIPTION: &'static str =
		"Are you sure you want to activate the selected records?";

	/// Builds the preset
	pub fn make() -> BulkAction {
		BulkAction::make(Self::NAME)
			.label(Self::LABEL)
			.icon(Self::ICON)
			.color(Self::COLOR)
			.confirm(Self::CONFIRMATION_TITLE, Self::CONFIRMATION_DESCRIPTION)
	}
}

/// Marks the selected records as inactive
pub struct DeactivateBulkAction;

impl DeactivateBulkAction {
	/// Action name
	pub const NAME: &'static str = "deactivate";
	/// Button label
	pub const LABEL: &'static str = "Deactivate";
	/// Icon name
	pub const ICON: &'static str = "x-circle";
	/// Button color
	pub const COLOR: Color = Color::Warning;
	/// Confirmation dialog title
	pub const CONFIRMATION_TITLE: &'static str = "Deactivate selected records";
	/// Confirmation dialog text
	pub const CONFIRMATION_DESCRIPTION: &'static str =
		"Are you sure you want to deactivate the selected records?";

	/// Builds the preset
	pub fn make() -> BulkAction {
		BulkAction::make(Self::NAME)
			.label(Self::LABEL)
			.icon(Self::ICON)
			.color(Self::COLOR)
			.confirm(Self::CONFIRMATION_TITLE, Self::CONFIRMATION_DESCRIPTION)
	}
}

/// Deletes the selected records
pub struct DeleteBulkAction;

impl DeleteBulkAction {
	/// Action name
	pub const NAME: &'static str = "delete";
	/// Button label
	pub const LABEL: &'static str = "Delete";
	/// Icon name
	pub const ICON: &'static str = "trash";
	/// Button color
	pub const COLOR: Color = Color::Danger;
	/// Confirmation dialog title
	pub const CONFIRMATION_TITLE: &'static str = "Delete selected records";
	/// Confirmation dialog text
	pub const CONFIRMATION_DESCRIPTION: &'static str =
		"Are you sure you want to delete the selected records? This action cannot be undone.";

	/// Builds the preset
	pub fn make() -> BulkAction {
		BulkAction::make(Self::NAME)
			.label(Self::LABEL)
			.icon(Self::ICON)
			.color(Self::COLOR)
			.confirm(Self::CONFIRMATION_TITLE, Self::CONFIRMATION_DESCRIPTION)
	}
}

/// Navigates to the create form
pub struct CreateHeaderAction;

impl CreateHeaderAction {
	/// Action name
	pub const NAME: &'static str = "create";
	/// Button label
	pub const LABEL: &'static str = "Create";
	/// Icon name
	pub const ICON: &'static str = "plus";
	/// Button color
	pub const COLOR: Color = Color::Primary;

	/// Builds the preset pointing at `route`
	pub fn make(route: impl Into<String>) -> HeaderAction {
		HeaderAction::make(Self::NAME)
			.label(Self::LABEL)
			.icon(Self::ICON)
			.color(Self::COLOR)
			.route(route)
	}
}

/// Downloads the current result set
pub struct ExportHeaderAction;

impl ExportHeaderAction {
	/// Action name
	pub const NAME: &'static str = "export";
	/// Button label
	pub const LABEL: &'static str = "Export";
	/// Icon name
	pub const ICON: &'static str = "download";
	/// Button color
	pub const COLOR: Color = Color::Secondary;
	/// Tooltip text
	pub const DESCRIPTION: &'static str = "Export the filtered records";

	/// Builds the preset pointing at `route`
	pub fn make(route: impl Into<String>) -> HeaderAction {
		HeaderAction::make(Self::NAME)
			.label(Self::LABEL)
			.icon(Self::ICON)
			.color(Self::COLOR)
			.description(Self::DESCRIPTION)
			.route(route)
	}
}

/// Reloads the table
pub struct RefreshHeaderAction;

impl RefreshHeaderAction {
	/// Action name
	pub const NAME: &'static str = "refresh";
	/// Button label
	pub const LABEL: &'static str = "Refresh";
	/// Icon name
	pub const ICON: &'static str = "refresh-cw";
	/// Button color
	pub const COLOR: Color = Color::Secondary;

	/// Builds the preset
	pub fn make() -> HeaderAction {
		HeaderAction::make(Self::NAME)
			.label(Self::LABEL)
			.icon(Self::ICON)
			.color(Self::COLOR)
			.hidden_label(true)
	}
}

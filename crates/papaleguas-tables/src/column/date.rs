use super::ColumnBase;
use serde::Serialize;

/// Date or date-time column formatted by the renderer
///
/// `format` uses strftime syntax and is applied to ISO-8601 cell values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateColumn {
	#[serde(flatten)]
	base: ColumnBase,
	format: String,
}

impl DateColumn {
	/// Type string emitted by this column
	pub const TYPE: &'static str = "date";

	/// Default format for dates
	pub const DATE_FORMAT: &'static str = "%Y-%m-%d";

	/// Default format for date-times
	pub const DATE_TIME_FORMAT: &'static str = "%Y-%m-%d %H:%M";

	/// Creates a date column for `key`
	pub fn make(key: impl Into<String>) -> Self {
		Self {
			base: ColumnBase::new(key, Self::TYPE),
			format: Self::DATE_FORMAT.to_string(),
		}
	}

	/// Sets a strftime format
	pub fn format(mut self, format: impl Into<String>) -> Self {
		self.format = format.into();
		self
	}

	/// Shows the time of day as well
	pub fn date_time(self) -> Self {
		self.format(Self::DATE_TIME_FORMAT)
	}
}

super::impl_column!(DateColumn);

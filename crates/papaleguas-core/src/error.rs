//! Error types for table configuration and data loading

use thiserror::Error;

/// Errors raised while building or evaluating a table
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PapaError {
	/// A view accessor read a config key that was never set
	#[error("View '{view}' is missing config key '{key}'")]
	MissingViewConfig {
		/// View id
		view: String,
		/// Missing config key
		key: String,
	},

	/// Requested page is out of range
	#[error("Invalid page: {0} (pages start at 1)")]
	InvalidPage(u64),

	/// Requested page size is not usable
	#[error("Invalid page size: {0}")]
	InvalidPerPage(u64),

	/// Query-string state could not be interpreted
	#[error("Invalid request: {0}")]
	InvalidRequest(String),

	/// A data source failed to produce records
	#[error("Data source error: {0}")]
	DataSource(String),

	/// A builder serialized to something other than a JSON object
	#[error("Expected a JSON object, got {0}")]
	NotAnObject(&'static str),

	/// A builder could not be turned into props
	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, PapaError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_error_display() {
		let err = PapaError::MissingViewConfig {
			view: "board".to_string(),
			key: "workflow_slug".to_string(),
		};
		assert_eq!(
			err.to_string(),
			"View 'board' is missing config key 'workflow_slug'"
		);

		let err = PapaError::InvalidPage(0);
		assert_eq!(err.to_string(), "Invalid page: 0 (pages start at 1)");
	}
}

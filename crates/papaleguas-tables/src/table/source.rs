//! Where a table's records come from

use papaleguas_core::record::to_props;
use papaleguas_core::{Record, Result};
use serde::Serialize;
use papaleguas_core::PapaError;
use std::fmt;
use std::marker::PhantomData;

/// Produces the base records of a table before search, filters, sorting
/// and pagination are applied
pub trait DataSource: Send + Sync {
	/// Fetches every record
	fn fetch(&self) -> Result<Vec<Record>>;
}

/// A record type that can list all of its rows
///
/// # Examples
///
/// ```
/// use papaleguas_tables::table::{Model, Table};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct User {
///     id: u32,
///     name: String,
/// }
///
/// impl Model for User {
///     const NAME: &'static str = "User";
///
///     fn all() -> Vec<Self> {
///         vec![User { id: 1, name: "Ana".into() }]
///     }
/// }
///
/// let props = Table::make().model::<User>().get_props().unwrap();
/// assert_eq!(props["model"], "User");
/// assert_eq!(props["records"][0]["name"], "Ana");
/// ```
pub trait Model: Serialize + Sized {
	/// Name reported in the table props
	const NAME: &'static str;

	/// Returns every row
	fn all() -> Vec<Self>;
}

/// Reads records from a [`Model`]
pub struct ModelSource<M> {
	model: PhantomData<fn() -> M>,
}

impl<M: Model> ModelSource<M> {
	/// Creates a source for `M`
	pub fn new() -> Self {
		Self { model: PhantomData }
	}
}

impl<M: Model> Default for ModelSource<M> {
	fn default() -> Self {
		Self::new()
	}
}

impl<M: Model> DataSource for ModelSource<M> {
	fn fetch(&self) -> Result<Vec<Record>> {
		M::all().iter().map(to_props).collect()
	}
}

/// Reads records from a closure called on every fetch
pub struct QuerySource<F> {
	query: F,
}

impl<F> QuerySource<F>
where
	F: Fn() -> Vec<Record> + Send + Sync,
{
	/// Wraps `query`
	pub fn new(query: F) -> Self {
		Self { query }
	}
}

impl<F> DataSource for QuerySource<F>
where
	F: Fn() -> Vec<Record> + Send + Sync,
{
	fn fetch(&self) -> Result<Vec<Record>> {
		Ok((self.query)())
	}
}

/// Reads records from a closure that may fail
///
/// The closure's error is reported as [`PapaError::DataSource`].
pub struct TryQuerySource<F> {
	query: F,
}

impl<F, E> TryQuerySource<F>
where
	F: Fn() -> std::result::Result<Vec<Record>, E> + Send + Sync,
	E: fmt::Display,
{
	/// Wraps `query`
	pub fn new(query: F) -> Self {
		Self { query }
	}
}

impl<F, E> DataSource for TryQuerySource<F>
where
	F: Fn() -> std::result::Result<Vec<Record>, E> + Send + Sync,
	E: fmt::Display,
{
	fn fetch(&self) -> Result<Vec<Record>> {
		(self.query)().map_err(|error| PapaError::DataSource(error.to_string()))
	}
}

/// Serves a fixed list of records
#[derive(Debug, Clone, Default)]
pub struct CollectionSource {
	records: Vec<Record>,
}

impl CollectionSource {
	/// Wraps `records`
	pub fn new(records: Vec<Record>) -> Self {
		Self { records }
	}
}

impl DataSource for CollectionSource {
	fn fetch(&self) -> Result<Vec<Record>> {
		Ok(self.records.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[derive(Serialize)]
	struct Tag {
		slug: &'static str,
	}

	impl Model for Tag {
		const NAME: &'static str = "Tag";

		fn all() -> Vec<Self> {
			vec![Tag { slug: "rust" }, Tag { slug: "web" }]
		}
	}

	#[derive(Serialize)]
	struct Scalar(u8);

	impl Model for Scalar {
		const NAME: &'static str = "Scalar";

		fn all() -> Vec<Self> {
			vec![Scalar(1)]
		}
	}

	#[rstest]
	fn test_model_source_serializes_rows() {
		let records = ModelSource::<Tag>::new().fetch().unwrap();

		assert_eq!(records.len(), 2);
		assert_eq!(records[1]["slug"], "web");
	}

	#[rstest]
	fn test_model_rows_must_be_objects() {
		let result = ModelSource::<Scalar>::new().fetch();

		assert!(matches!(result, Err(PapaError::NotAnObject("a number"))));
	}

	#[rstest]
	fn test_query_source_runs_closure() {
		let source = QuerySource::new(|| {
			vec![json!({ "id": 1 }).as_object().cloned().unwrap_or_default()]
		});

		assert_eq!(source.fetch().unwrap()[0]["id"], 1);
	}

	#[rstest]
	fn test_try_query_source_reports_failure() {
		let source = TryQuerySource::new(|| Err::<Vec<Record>, _>("connection refused"));

		let err = source.fetch().unwrap_err();

		assert!(matches!(err, PapaError::DataSource(_)));
		assert_eq!(err.to_string(), "Data source error: connection refused");
	}
}

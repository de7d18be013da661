use super::{Alignment, ColumnBase};
use serde::Serialize;

/// Numeric column with fixed decimals and optional affixes
///
/// # Examples
///
/// ```
/// use papaleguas_tables::column::{Column, NumberColumn};
///
/// let props = NumberColumn::make("price").currency("R$").to_props().unwrap();
/// assert_eq!(props["prefix"], "R$ ");
/// assert_eq!(props["decimals"], 2);
/// assert_eq!(props["alignment"], "right");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberColumn {
	#[serde(flatten)]
	base: ColumnBase,
	decimals: u8,
	#[serde(skip_serializing_if = "Option::is_none")]
	prefix: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	suffix: Option<String>,
}

impl NumberColumn {
	/// Type string emitted by this column
	pub const TYPE: &'static str = "number";

	/// Creates a right-aligned number column for `key`
	pub fn make(key: impl Into<String>) -> Self {
		let mut base = ColumnBase::new(key, Self::TYPE);
		base.alignment = Alignment::Right;
		Self {
			base,
			decimals: 0,
			prefix: None,
			suffix: None,
		}
	}

	/// Sets the number of decimal places
	pub fn decimals(mut self, decimals: u8) -> Self {
		self.decimals = decimals;
		self
	}

	/// Text placed before the number
	pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	/// Text placed after the number
	pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
		self.suffix = Some(suffix.into());
		self
	}

	/// Formats as money with the given symbol and two decimals
	pub fn currency(self, symbol: impl Into<String>) -> Self {
		let symbol = symbol.into();
		self.prefix(format!("{symbol} ")).decimals(2)
	}

	/// Formats as a percentage
	pub fn percentage(self) -> Self {
		self.suffix("%")
	}
}

super::impl_column!(NumberColumn);

//! Shared building blocks for Papa Leguas
//!
//! Every builder in the workspace (actions, columns, filters, views) is made of
//! the same few capabilities: a name, a label, an icon, a color and a
//! description. Instead of mixing those in, each builder embeds one
//! [`Attributes`] value and opts into the setters it supports by implementing
//! the matching capability trait.
//!
//! ```rust
//! use papaleguas_core::{Attributes, HasAttributes, HasLabel, HasIcon};
//!
//! #[derive(Debug, Default)]
//! struct Button {
//!     attributes: Attributes,
//! }
//!
//! impl HasAttributes for Button {
//!     fn attributes(&self) -> &Attributes {
//!         &self.attributes
//!     }
//!
//!     fn attributes_mut(&mut self) -> &mut Attributes {
//!         &mut self.attributes
//!     }
//! }
//!
//! impl HasLabel for Button {}
//! impl HasIcon for Button {}
//!
//! let button = Button::default().label("Save").icon("check");
//! assert_eq!(button.attributes().label(), Some("Save"));
//! assert_eq!(button.attributes().icon(), Some("check"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod attributes;
pub mod color;
pub mod error;
pub mod html;
pub mod payload;
pub mod record;

pub use attributes::{
	Attributes, HasAttributes, HasColor, HasDescription, HasIcon, HasLabel, HasName,
};
pub use color::Color;
pub use error::{PapaError, Result};
pub use payload::TablePayload;
pub use record::{Props, Record, value_to_text};

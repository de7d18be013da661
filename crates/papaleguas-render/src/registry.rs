//! Type-keyed renderer registries
//!
//! A registry maps a type string to a renderer and always holds a fallback
//! entry. Lookups come in two flavors: [`RendererRegistry::resolve`]
//! reports why a type could not be resolved, while
//! [`RendererRegistry::resolve_or_default`] logs the miss and hands back the
//! fallback so rendering can continue.
//!
//! Type names are trimmed on every entry point, so `" badge "` and `"badge"`
//! name the same entry.

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Why a type string did not resolve to a registered renderer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
	/// The descriptor carried no type, or an empty one
	#[error("{kind} descriptor has no type")]
	MissingType {
		/// Registry kind, e.g. `column`
		kind: &'static str,
	},

	/// No renderer is registered for the type
	#[error("No {kind} renderer registered for type '{type_name}'")]
	Unregistered {
		/// Registry kind, e.g. `column`
		kind: &'static str,
		/// The unresolved type
		type_name: String,
	},
}

/// Map from type string to renderer with a fallback entry
pub struct RendererRegistry<R: ?Sized> {
	kind: &'static str,
	entries: IndexMap<String, Arc<R>>,
	fallback_key: String,
	fallback: Arc<R>,
	warn_on_fallback: bool,
}

impl<R: ?Sized> RendererRegistry<R> {
	/// Creates a registry holding only the fallback entry
	pub fn new(kind: &'static str, fallback_key: impl Into<String>, fallback: Arc<R>) -> Self {
		let fallback_key = fallback_key.into().trim().to_string();
		let mut entries = IndexMap::new();
		entries.insert(fallback_key.clone(), Arc::clone(&fallback));
		Self {
			kind,
			entries,
			fallback_key,
			fallback,
			warn_on_fallback: true,
		}
	}

	/// Logs fallbacks at `warn` when true, at `debug` otherwise
	pub fn set_warn_on_fallback(&mut self, warn: bool) {
		self.warn_on_fallback = warn;
	}

	/// Returns the registry kind
	pub fn kind(&self) -> &'static str {
		self.kind
	}

	/// Returns the key of the fallback entry
	pub fn fallback_key(&self) -> &str {
		&self.fallback_key
	}

	/// Registers `renderer` for `type_name`, returning the one it replaced
	///
	/// Overwriting the fallback key replaces the fallback renderer.
	pub fn add(&mut self, type_name: impl Into<String>, renderer: Arc<R>) -> Option<Arc<R>> {
		let type_name = type_name.into().trim().to_string();
		if type_name == self.fallback_key {
			self.fallback = Arc::clone(&renderer);
		}
		self.entries.insert(type_name, renderer)
	}

	/// Unregisters `type_name`, returning the removed renderer
	///
	/// The fallback entry cannot be removed; the call is ignored with a
	/// warning and returns `None`.
	pub fn remove(&mut self, type_name: &str) -> Option<Arc<R>> {
		let type_name = type_name.trim();
		if type_name == self.fallback_key {
			tracing::warn!(
				kind = self.kind,
				type_name,
				"Refusing to remove the fallback renderer"
			);
			return None;
		}
		self.entries.shift_remove(type_name)
	}

	/// Returns the renderer registered for `type_name`
	pub fn get(&self, type_name: &str) -> Option<Arc<R>> {
		self.entries.get(type_name.trim()).cloned()
	}

	/// Returns a shallow copy of every entry, in registration order
	pub fn all(&self) -> IndexMap<String, Arc<R>> {
		self.entries.clone()
	}

	/// Returns whether `type_name` is registered
	pub fn has(&self, type_name: &str) -> bool {
		self.entries.contains_key(type_name.trim())
	}

	/// Returns the fallback renderer
	pub fn fallback(&self) -> Arc<R> {
		Arc::clone(&self.fallback)
	}

	/// Looks up the renderer for an optional type string
	pub fn resolve(&self, type_name: Option<&str>) -> Result<Arc<R>, ResolveError> {
		let type_name = type_name
			.map(str::trim)
			.filter(|name| !name.is_empty())
			.ok_or(ResolveError::MissingType { kind: self.kind })?;
		self.get(type_name).ok_or_else(|| ResolveError::Unregistered {
			kind: self.kind,
			type_name: type_name.to_string(),
		})
	}

	/// Looks up the renderer, falling back to the default entry on a miss
	pub fn resolve_or_default(&self, type_name: Option<&str>) -> Arc<R> {
		self.resolve_reporting(type_name).0
	}

	/// Like [`RendererRegistry::resolve_or_default`], also returning the
	/// error that caused a fallback
	pub fn resolve_reporting(&self, type_name: Option<&str>) -> (Arc<R>, Option<ResolveError>) {
		match self.resolve(type_name) {
			Ok(renderer) => (renderer, None),
			Err(error) => {
				if self.warn_on_fallback {
					tracing::warn!(
						kind = self.kind,
						fallback = %self.fallback_key,
						"{error}, using fallback renderer"
					);
				} else {
					tracing::debug!(
						kind = self.kind,
						fallback = %self.fallback_key,
						"{error}, using fallback renderer"
					);
				}
				(self.fallback(), Some(error))
			}
		}
	}
}

impl<R: ?Sized> Clone for RendererRegistry<R> {
	fn clone(&self) -> Self {
		Self {
			kind: self.kind,
			entries: self.entries.clone(),
			fallback_key: self.fallback_key.clone(),
			fallback: Arc::clone(&self.fallback),
			warn_on_fallback: self.warn_on_fallback,
		}
	}
}

impl<R: ?Sized> fmt::Debug for RendererRegistry<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RendererRegistry")
			.field("kind", &self.kind)
			.field("types", &self.entries.keys().collect::<Vec<_>>())
			.field("fallback_key", &self.fallback_key)
			.finish()
	}
}

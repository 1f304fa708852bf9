//! Seams between the controller and the page environment.
//!
//! All methods take `&self`: the browser objects behind the real
//! implementations are shared handles, and the controller only ever runs
//! on the single event loop thread of the page.

use crate::error::Result;

/// Durable per-origin key-value store.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// The document root element and its style-scoping marker classes.
pub trait ThemeView {
    fn has_marker(&self, class: &str) -> Result<bool>;
    fn apply_marker(&self, class: &str) -> Result<()>;
    fn remove_marker(&self, class: &str) -> Result<()>;
}

/// Read-only system color scheme query.
pub trait ColorSchemeHint {
    fn prefers_dark(&self) -> Result<bool>;
}

//! Night mode preference handling for web pages.
//!
//! [`NightMode`] keeps a persisted two-valued preference and a marker class
//! on the document root in agreement. The page environment is reached
//! through the traits in [`ports`], so the same logic drives a browser page
//! and the in-memory adapters in [`memory`].

mod controller;
mod error;
pub mod memory;
pub mod ports;
mod types;

pub use controller::NightMode;
pub use error::{Error, Result};
pub use ports::{ColorSchemeHint, PreferenceStore, ThemeView};
pub use types::{Preference, Settings, UnrecognizedPreference};

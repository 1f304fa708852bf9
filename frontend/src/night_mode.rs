use gloo_console::error;
use nightmode::{
    ColorSchemeHint, Error, NightMode, Preference, PreferenceStore, Result, Settings, ThemeView,
};
use wasm_bindgen::JsValue;
use web_sys::{DomTokenList, Storage};

pub type BrowserNightMode = NightMode<LocalStorage, DocumentRoot, MediaQuery>;

fn describe(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// `window.localStorage`
pub struct LocalStorage;

impl LocalStorage {
    fn storage(&self) -> Result<Storage> {
        web_sys::window()
            .ok_or_else(|| Error::StorageUnavailable("no window".to_owned()))?
            .local_storage()
            .map_err(|e| Error::StorageUnavailable(describe(e)))?
            .ok_or_else(|| Error::StorageUnavailable("local storage disabled".to_owned()))
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| Error::StorageUnavailable(describe(e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| Error::StorageUnavailable(describe(e)))
    }
}

/// class list of the `<html>` element
pub struct DocumentRoot;

impl DocumentRoot {
    fn class_list(&self) -> Result<DomTokenList> {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .ok_or_else(|| Error::DocumentUnavailable("no document root element".to_owned()))?;

        Ok(root.class_list())
    }
}

impl ThemeView for DocumentRoot {
    fn has_marker(&self, class: &str) -> Result<bool> {
        Ok(self.class_list()?.contains(class))
    }

    fn apply_marker(&self, class: &str) -> Result<()> {
        self.class_list()?
            .add_1(class)
            .map_err(|e| Error::DocumentUnavailable(describe(e)))
    }

    fn remove_marker(&self, class: &str) -> Result<()> {
        self.class_list()?
            .remove_1(class)
            .map_err(|e| Error::DocumentUnavailable(describe(e)))
    }
}

/// `window.matchMedia(query).matches`
pub struct MediaQuery {
    query: String,
}

impl ColorSchemeHint for MediaQuery {
    fn prefers_dark(&self) -> Result<bool> {
        let list = web_sys::window()
            .ok_or_else(|| Error::HintUnavailable("no window".to_owned()))?
            .match_media(&self.query)
            .map_err(|e| Error::HintUnavailable(describe(e)))?
            .ok_or_else(|| Error::HintUnavailable(format!("cannot evaluate {}", self.query)))?;

        Ok(list.matches())
    }
}

pub fn browser_night_mode(settings: Settings) -> BrowserNightMode {
    let query = settings.dark_scheme_query.clone();

    NightMode::new(settings, LocalStorage, DocumentRoot, MediaQuery { query })
}

/// seed and apply the stored preference, `None` when the page lacks a
/// capability the preference needs
pub fn init_night_mode(settings: Settings) -> Option<Preference> {
    match browser_night_mode(settings).initialize() {
        Ok(preference) => Some(preference),
        Err(e) => {
            error!(format!("Could not initialize night mode: {e}"));
            None
        }
    }
}

pub fn toggle_night_mode(settings: Settings) -> Option<Preference> {
    match browser_night_mode(settings).toggle() {
        Ok(preference) => Some(preference),
        Err(e) => {
            error!(format!("Could not toggle night mode: {e}"));
            None
        }
    }
}

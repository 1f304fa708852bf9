//! Ports backed by plain memory, for running the controller outside a
//! browser.

use std::{
    cell::{Cell, RefCell},
    collections::{BTreeSet, HashMap},
};

use crate::{
    error::Result,
    ports::{ColorSchemeHint, PreferenceStore, ThemeView},
};

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = MemoryStore::default();
        store
            .entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());

        store
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// drop a key, the way an external party clearing site data would
    pub fn clear(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryView {
    classes: RefCell<BTreeSet<String>>,
}

impl MemoryView {
    pub fn contains(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }
}

impl ThemeView for MemoryView {
    fn has_marker(&self, class: &str) -> Result<bool> {
        Ok(self.contains(class))
    }

    fn apply_marker(&self, class: &str) -> Result<()> {
        self.classes.borrow_mut().insert(class.to_owned());
        Ok(())
    }

    fn remove_marker(&self, class: &str) -> Result<()> {
        self.classes.borrow_mut().remove(class);
        Ok(())
    }
}

/// Hint with a fixed answer that counts how often it was asked.
#[derive(Debug, Default)]
pub struct FixedHint {
    dark: bool,
    queries: Cell<usize>,
}

impl FixedHint {
    pub fn new(dark: bool) -> Self {
        FixedHint {
            dark,
            queries: Cell::new(0),
        }
    }

    pub fn queries(&self) -> usize {
        self.queries.get()
    }
}

impl ColorSchemeHint for FixedHint {
    fn prefers_dark(&self) -> Result<bool> {
        self.queries.set(self.queries.get() + 1);
        Ok(self.dark)
    }
}

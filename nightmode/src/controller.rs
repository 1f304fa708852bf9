use tracing::{debug, info, warn};

use crate::{
    error::Result,
    ports::{ColorSchemeHint, PreferenceStore, ThemeView},
    types::{Preference, Settings, UnrecognizedPreference},
};

/// Keeps the stored preference and the document root marker in agreement.
pub struct NightMode<S, V, H> {
    settings: Settings,
    store: S,
    view: V,
    hint: H,
}

impl<S, V, H> NightMode<S, V, H>
where
    S: PreferenceStore,
    V: ThemeView,
    H: ColorSchemeHint,
{
    pub fn new(settings: Settings, store: S, view: V, hint: H) -> Self {
        NightMode {
            settings,
            store,
            view,
            hint,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn hint(&self) -> &H {
        &self.hint
    }

    /// Seed the preference from the system color scheme when nothing usable
    /// is stored yet, then show the stored preference on the document root.
    pub fn initialize(&self) -> Result<Preference> {
        let preference = match self.stored()? {
            Some(Ok(preference)) => preference,
            stored => {
                if let Some(Err(unrecognized)) = stored {
                    warn!("{unrecognized}, reseeding from the system color scheme");
                }

                let seeded = Preference::from(self.hint.prefers_dark()?);
                self.store
                    .set(&self.settings.storage_key, seeded.as_str())?;
                info!("night mode preference seeded as {seeded:?}");

                seeded
            }
        };

        self.show(preference)?;

        Ok(preference)
    }

    /// Flip the preference, store it and update the document root.
    ///
    /// The stored value is the previous state; when the store lost it the
    /// marker currently on the page stands in.
    ///
    /// The marker is updated before the store is written. When the write
    /// fails the marker is put back, so a failed toggle leaves the page as
    /// it was.
    pub fn toggle(&self) -> Result<Preference> {
        let previous = match self.stored()? {
            Some(Ok(preference)) => preference,
            _ => Preference::from(self.view.has_marker(&self.settings.marker_class)?),
        };
        let next = !previous;

        self.show(next)?;
        if let Err(e) = self.store.set(&self.settings.storage_key, next.as_str()) {
            if let Err(restore) = self.show(previous) {
                warn!("could not restore night mode marker: {restore}");
            }
            return Err(e);
        }
        debug!("night mode toggled to {next:?}");

        Ok(next)
    }

    fn stored(&self) -> Result<Option<std::result::Result<Preference, UnrecognizedPreference>>> {
        Ok(self
            .store
            .get(&self.settings.storage_key)?
            .map(|value| value.parse()))
    }

    fn show(&self, preference: Preference) -> Result<()> {
        let class = &self.settings.marker_class;

        if preference.is_enabled() {
            self.view.apply_marker(class)
        } else {
            self.view.remove_marker(class)
        }
    }
}

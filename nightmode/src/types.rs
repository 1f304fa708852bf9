use std::{fmt, ops::Not, str::FromStr};

const ENABLED: &str = "yes";
const DISABLED: &str = "no";

/// The persisted night mode choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preference {
    Enabled,
    Disabled,
}

impl Preference {
    /// literal stored in the key-value store, compatible with earlier
    /// versions of the page
    pub fn as_str(self) -> &'static str {
        match self {
            Preference::Enabled => ENABLED,
            Preference::Disabled => DISABLED,
        }
    }

    pub fn is_enabled(self) -> bool {
        self == Preference::Enabled
    }
}

impl From<bool> for Preference {
    fn from(enabled: bool) -> Self {
        if enabled {
            Preference::Enabled
        } else {
            Preference::Disabled
        }
    }
}

impl Not for Preference {
    type Output = Preference;

    fn not(self) -> Self::Output {
        match self {
            Preference::Enabled => Preference::Disabled,
            Preference::Disabled => Preference::Enabled,
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored value that is neither of the two known literals.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized night mode preference {0:?}")]
pub struct UnrecognizedPreference(pub String);

impl FromStr for Preference {
    type Err = UnrecognizedPreference;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            ENABLED => Ok(Preference::Enabled),
            DISABLED => Ok(Preference::Disabled),
            other => Err(UnrecognizedPreference(other.to_owned())),
        }
    }
}

/// Names shared between the controller, the page markup and the style sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// key of the preference in the persistent store
    pub storage_key: String,
    /// class put on the document root while night mode is active
    pub marker_class: String,
    /// class of the control element that toggles night mode
    pub control_class: String,
    /// media query reporting a dark system color scheme
    pub dark_scheme_query: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            storage_key: "night-mode".to_owned(),
            marker_class: "night-mode".to_owned(),
            control_class: "night-button".to_owned(),
            dark_scheme_query: "(prefers-color-scheme: dark)".to_owned(),
        }
    }
}

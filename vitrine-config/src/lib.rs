//! Preference loading and persistence for Vitrine.
//!
//! Preferences live in a single JSON document under the platform config
//! directory. Reads degrade silently: a missing directory, an unreadable
//! file, or malformed JSON all yield [`Preferences::default`], never an
//! error. Writes report failures so callers can log and drop them.
#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Directory name under the platform config dir.
const APP_DIR: &str = "vitrine";

/// File name of the preference document.
const PREFERENCES_FILE: &str = "preferences.json";

/// Failures while persisting preferences.
///
/// Load paths never surface these; they fall back to defaults instead.
#[derive(Debug, thiserror::Error)]
pub enum PreferencesError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("no config directory available on this platform")]
    NoConfigDir,
}

/// User preferences persisted across launches.
///
/// `theme` holds the raw stored string; interpretation (and fallback for
/// unknown values) is the application's concern, so whatever was written is
/// read back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: "blue".to_string(),
        }
    }
}

impl Preferences {
    /// Load preferences from the platform config directory.
    pub fn load() -> Self {
        match dirs::config_dir() {
            Some(config_dir) => Self::load_from(&config_dir.join(APP_DIR)),
            None => {
                log::debug!("no config directory; using default preferences");
                Self::default()
            }
        }
    }

    /// Load preferences from `dir`, falling back to defaults on any failure.
    pub fn load_from(dir: &Path) -> Self {
        let path = Self::path_in(dir);
        if path.exists() {
            if let Ok(content) = std::fs::read_to_string(&path) {
                if let Ok(preferences) = serde_json::from_str(&content) {
                    return preferences;
                }
                log::debug!("malformed preference file at {}", path.display());
            }
        }
        Self::default()
    }

    /// Persist preferences to the platform config directory.
    pub fn save(&self) -> Result<(), PreferencesError> {
        let config_dir = dirs::config_dir().ok_or(PreferencesError::NoConfigDir)?;
        self.save_to(&config_dir.join(APP_DIR))
    }

    /// Persist preferences under `dir`, creating it if needed.
    pub fn save_to(&self, dir: &Path) -> Result<(), PreferencesError> {
        std::fs::create_dir_all(dir)?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(Self::path_in(dir), content)?;
        Ok(())
    }

    fn path_in(dir: &Path) -> PathBuf {
        dir.join(PREFERENCES_FILE)
    }
}

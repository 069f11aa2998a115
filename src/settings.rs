//! Player preferences
//!
//! Persisted separately from high scores: LocalStorage on web, a JSON file on
//! native.

use serde::{Deserialize, Serialize};

use crate::content::Level;
use crate::highscores::GameMode;

/// Player settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Accessibility ===
    /// Reduced motion (no drag tilt)
    pub reduced_motion: bool,

    // === Satz-Splitter ===
    /// Show the grammar hint under the English prompt
    pub show_hints: bool,

    // === Hub ===
    /// Mode and level picked last, preselected on the next visit
    pub last_mode: Option<GameMode>,
    pub last_level: Option<Level>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            show_hints: true,
            last_mode: None,
            last_level: None,
        }
    }
}

impl Settings {
    /// Whether falling words tilt with the pointer
    pub fn tilt_enabled(&self) -> bool {
        !self.reduced_motion
    }

    /// Remember the last game picked in the hub
    pub fn remember(&mut self, mode: GameMode, level: Level) {
        self.last_mode = Some(mode);
        self.last_level = Some(level);
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "lernen_hub_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Load from a JSON file; a missing or unreadable file gives defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<(), crate::persistence::StoreError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved");
        Ok(())
    }
}

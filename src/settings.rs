//! Runtime settings
//!
//! Optional `breakout.json` next to the binary's working directory. Nothing
//! here changes the rules of the game; a missing file is the normal case.

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "breakout.json";

/// Game settings/preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed brick field seed (random when unset)
    pub seed: Option<u64>,
    /// TTF font for the HUD (built-in font when unset)
    pub font_path: Option<String>,
    /// Show FPS counter
    pub show_fps: bool,
}

impl Settings {
    /// Parse settings from JSON; absent fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from [`SETTINGS_FILE`]
    pub fn load() -> Self {
        Self::load_from(Path::new(SETTINGS_FILE))
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("Using default settings");
                return Self::default();
            }
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Seed for this run: the configured one, or a fresh random seed
    pub fn run_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Icon location used when the config does not name one.
pub const DEFAULT_ICON_PATH: &str = "assets/icon.png";

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
/// Persisted window settings for Fiora.
pub struct AppConfig {
    pub window_width: Option<f32>,
    pub window_height: Option<f32>,
    pub icon_path: Option<PathBuf>,
}

impl AppConfig {
    /// Returns the user config file path, if a config directory is available.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("fiora").join("config.toml"))
    }

    /// Loads config from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        toml::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!("ignoring malformed config {}: {}", path.display(), err);
            Self::default()
        })
    }

    /// Writes config to the default location, ignoring filesystem/serialization errors.
    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            self.save_to(&path);
        }
    }

    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(s) = toml::to_string_pretty(self) {
            if let Err(err) = std::fs::write(path, s) {
                tracing::warn!("could not write config {}: {}", path.display(), err);
            }
        }
    }

    pub fn icon_path(&self) -> PathBuf {
        self.icon_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ICON_PATH))
    }
}

use std::fs;
use std::path::Path;

use log::debug;

use crate::application::Settings;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("cannot access settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings format - {0}")]
    Json(#[from] serde_json::Error),
}

pub struct SettingsRepository;

impl SettingsRepository {
    pub fn save_settings(settings: &Settings, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(path.as_ref(), json)?;
        debug!("saved settings to {}", path.as_ref().display());
        Ok(())
    }

    pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings, SettingsError> {
        let content = fs::read_to_string(path.as_ref())?;
        let settings = serde_json::from_str::<Settings>(&content)?;
        debug!("loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Settings, SettingsError> {
        match path {
            Some(path) => Self::load_settings(path),
            None => Ok(Settings::default()),
        }
    }
}

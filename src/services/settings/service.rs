use crate::models::settings::OverlaySettings;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Invalid settings: {0}")]
    Invalid(String),
    #[error("Failed to access settings file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse settings file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to serialize settings")]
    Serialize(#[from] toml::ser::Error),
}

/// Loads and stores [`OverlaySettings`] as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service bound to the per-user config directory, if the platform has one
    pub fn for_user() -> Option<Self> {
        let dirs = ProjectDirs::from("com", "RustCalendar", "DragOverlay")?;
        let path = dirs.config_dir().join(SETTINGS_FILE);
        log::debug!("Settings path: {:?}", path);
        Some(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, returning defaults when the file does not exist yet
    pub fn load(&self) -> Result<OverlaySettings, SettingsError> {
        Self::load_from(&self.path)
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load_or_default(&self) -> OverlaySettings {
        match self.load() {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Using default overlay settings: {}", err);
                OverlaySettings::default()
            }
        }
    }

    pub fn save(&self, settings: &OverlaySettings) -> Result<(), SettingsError> {
        Self::save_to(&self.path, settings)
    }

    pub fn load_from(path: &Path) -> Result<OverlaySettings, SettingsError> {
        if !path.exists() {
            log::debug!("No settings file at {:?}, using defaults", path);
            return Ok(OverlaySettings::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: OverlaySettings =
            toml::from_str(&contents).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate().map_err(SettingsError::Invalid)?;

        Ok(settings)
    }

    pub fn save_to(path: &Path, settings: &OverlaySettings) -> Result<(), SettingsError> {
        settings.validate().map_err(SettingsError::Invalid)?;

        let io_err = |source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let contents = toml::to_string_pretty(settings)?;
        std::fs::write(path, contents).map_err(io_err)?;

        log::debug!("Saved overlay settings to {:?}", path);
        Ok(())
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::LayoutSettings;

const SETTINGS_FILE_NAME: &str = "layout.toml";

/// Per-user location of the settings file, if the platform has one.
pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "WeekViewLayout", "WeekViewLayout")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
}

/// TOML-backed store for [`LayoutSettings`].
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at [`default_settings_path`].
    pub fn with_default_path() -> Result<Self> {
        let path = default_settings_path().context("No configuration directory available")?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse settings from TOML. Missing keys take their default values.
    pub fn parse(content: &str) -> Result<LayoutSettings> {
        let settings: LayoutSettings =
            toml::from_str(content).context("Failed to parse layout settings")?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;
        Ok(settings)
    }

    /// Get the current settings; defaults when no file has been written yet.
    pub fn get(&self) -> Result<LayoutSettings> {
        if !self.path.exists() {
            log::debug!("No settings at {}, using defaults", self.path.display());
            return Ok(LayoutSettings::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("failed to load settings from {}", self.path.display()))
    }

    /// Update settings
    pub fn update(&self, settings: &LayoutSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(settings).context("Failed to serialise settings")?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        log::info!("Saved layout settings to {}", self.path.display());
        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        self.update(&LayoutSettings::default())
    }
}

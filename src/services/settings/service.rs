use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::AppConfig;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Loads and saves [`AppConfig`] as TOML.
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Config file in the platform config directory.
    pub fn at_default_path() -> Self {
        Self::new(Self::default_path())
    }

    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "BabyCountdown", "BabyCountdown") {
            dirs.config_dir().join(CONFIG_FILE_NAME)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for config");
            PathBuf::from(CONFIG_FILE_NAME)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the config file. A missing file yields the defaults.
    pub fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::debug!("No config at {}; using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read config from {}", self.path.display()))?;
        let config = toml::from_str(&data)
            .with_context(|| format!("failed to parse config from {}", self.path.display()))?;
        Ok(config)
    }

    /// Like [`ConfigService::load`], but logs failures and falls back to defaults.
    pub fn load_or_default(&self) -> AppConfig {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config: {:#}, using defaults", e);
                AppConfig::default()
            }
        }
    }

    /// Loads the config, writing the defaults out first when no file exists
    /// yet so there is something on disk to edit.
    pub fn load_or_create(&self) -> AppConfig {
        if self.path.exists() {
            return self.load_or_default();
        }

        let config = AppConfig::default();
        match self.save(&config) {
            Ok(()) => log::info!("Wrote default config to {}", self.path.display()),
            Err(e) => log::warn!("Failed to write default config: {:#}", e),
        }
        config
    }

    pub fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(config).context("Failed to serialize config")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write config to {}", self.path.display()))?;
        Ok(())
    }
}

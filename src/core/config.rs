use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::log_view::EXPORT_FILE_NAME;

/// Source read when neither the command line nor the config names one
pub const DEFAULT_LOG_PATH: &str = "log.csv";

pub const DEFAULT_REFRESH_MS: u64 = 2000;

/// Shortest refresh interval the dashboard accepts
pub const MIN_REFRESH_MS: u64 = 250;

/// User preferences. Dashboard state is never stored here.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub log_path: Option<String>,
    #[serde(default)]
    pub refresh_ms: Option<u64>,
    #[serde(default)]
    pub export_file_name: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        // If the file is empty or corrupted, return default config
        if data.is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_json::from_slice(&data).unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable config {:?}: {}", config_path, e);
            Config::default()
        }))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data = serde_json::to_vec_pretty(self).with_context(|| "Failed to serialize config")?;

        fs::write(config_path, data)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("sysdash").join("config.json"))
    }

    /// Pick the log source: command line first, then config, then `log.csv`.
    pub fn resolve_source(&self, cli_override: Option<&str>) -> PathBuf {
        cli_override
            .or(self.log_path.as_deref())
            .unwrap_or(DEFAULT_LOG_PATH)
            .into()
    }

    pub fn resolve_refresh_ms(&self, cli_override: Option<u64>) -> u64 {
        cli_override
            .or(self.refresh_ms)
            .unwrap_or(DEFAULT_REFRESH_MS)
            .max(MIN_REFRESH_MS)
    }

    pub fn export_file_name(&self) -> &str {
        self.export_file_name.as_deref().unwrap_or(EXPORT_FILE_NAME)
    }

    pub fn set_log_path(&mut self, path: String) {
        self.log_path = Some(path);
    }

    pub fn set_refresh_ms(&mut self, ms: u64) {
        self.refresh_ms = Some(ms);
    }

    pub fn set_export_file_name(&mut self, name: String) {
        self.export_file_name = Some(name);
    }

    pub fn reset(&mut self) {
        *self = Config::default();
    }
}

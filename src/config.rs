use crate::error::{Result, StudioError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UploadProvider {
    #[default]
    Simulated,
    Cloudinary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub upload_provider: UploadProvider,
    #[serde(default)]
    pub upload_url: Option<String>,
    #[serde(default)]
    pub upload_preset: Option<String>,
    #[serde(default = "default_upload_tick_ms")]
    pub upload_tick_ms: u64,
    #[serde(default = "default_upload_step_percent")]
    pub upload_step_percent: u8,
    #[serde(default = "default_upload_timeout_secs")]
    pub upload_timeout_secs: u64,
    #[serde(default = "default_language")]
    pub default_language: String,
}

fn default_upload_tick_ms() -> u64 {
    200
}

fn default_upload_step_percent() -> u8 {
    10
}

fn default_upload_timeout_secs() -> u64 {
    300
}

fn default_language() -> String {
    "English".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            upload_provider: UploadProvider::Simulated,
            upload_url: None,
            upload_preset: None,
            upload_tick_ms: default_upload_tick_ms(),
            upload_step_percent: default_upload_step_percent(),
            upload_timeout_secs: default_upload_timeout_secs(),
            default_language: default_language(),
        }
    }
}

impl Config {
    /// Repairs values the uploader cannot work with. Returns true when
    /// anything changed.
    fn normalize(&mut self) -> bool {
        let mut changed = false;
        if self.upload_tick_ms == 0 {
            self.upload_tick_ms = default_upload_tick_ms();
            changed = true;
        }
        if self.upload_step_percent == 0 || self.upload_step_percent > 100 {
            self.upload_step_percent = default_upload_step_percent();
            changed = true;
        }
        if self.upload_timeout_secs == 0 {
            self.upload_timeout_secs = default_upload_timeout_secs();
            changed = true;
        }
        if self.default_language.trim().is_empty() {
            self.default_language = default_language();
            changed = true;
        }
        changed
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let mut path = dirs::config_dir()
        .ok_or_else(|| StudioError::Config("Failed to get config directory".to_string()))?;

    path.push("course-studio");
    fs::create_dir_all(&path)?;

    path.push("config.json");
    Ok(path)
}

/// Parses config file content, returning the config and whether it needs to
/// be written back.
pub fn parse_config(content: &str) -> Result<(Config, bool)> {
    let value: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| StudioError::Config(format!("Failed to parse config: {}", e)))?;
    let mut config: Config = serde_json::from_value(value.clone())
        .map_err(|e| StudioError::Config(format!("Failed to parse config: {}", e)))?;

    let changed = config.normalize();

    // Older files predate the upload section; persist the defaults once.
    let needs_backfill = value
        .as_object()
        .map(|obj| !obj.contains_key("upload_provider") || !obj.contains_key("upload_tick_ms"))
        .unwrap_or(false);

    Ok((config, changed || needs_backfill))
}

pub fn load_config() -> Result<Config> {
    let config_path = get_config_path()?;

    if !config_path.exists() {
        let default_config = Config::default();
        save_config(&default_config)?;
        return Ok(default_config);
    }

    let content = fs::read_to_string(&config_path)?;
    let (config, needs_save) = parse_config(&content)?;
    if needs_save {
        tracing::info!("Rewriting normalized config at {:?}", config_path);
        save_config(&config)?;
    }

    Ok(config)
}

pub fn save_config(config: &Config) -> Result<()> {
    let config_path = get_config_path()?;

    let content = serde_json::to_string_pretty(config)
        .map_err(|e| StudioError::Config(format!("Failed to serialize config: {}", e)))?;

    fs::write(&config_path, content)?;

    Ok(())
}

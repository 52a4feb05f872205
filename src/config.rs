use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Upload endpoint the multipart POST is sent to.
    pub endpoint: String,
    pub request_timeout_secs: u64,
    pub show_upload_notifications: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "https://httpbin.org/post".to_string(),
            request_timeout_secs: 120,
            show_upload_notifications: true,
            log_level: "info".to_string(),
        }
    }
}

fn get_config_path() -> AppResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| AppError::config("Could not find config directory"))?
        .join("image-upload-queue");

    fs::create_dir_all(&config_dir)?;
    Ok(config_dir.join("config.json"))
}

pub fn load_config() -> AppResult<Config> {
    let config_path = get_config_path()?;

    if config_path.exists() {
        let config_str = fs::read_to_string(&config_path)?;
        let config: Config = serde_json::from_str(&config_str).unwrap_or_else(|e| {
            log::warn!("Failed to parse config file: {}. Using defaults.", e);
            Config::default()
        });

        validate_config(&config)?;

        Ok(config)
    } else {
        let default_config = Config::default();
        save_config_internal(&default_config)?;
        Ok(default_config)
    }
}

pub fn save_config(config: &Config) -> AppResult<()> {
    validate_config(config)?;
    save_config_internal(config)
}

fn save_config_internal(config: &Config) -> AppResult<()> {
    let config_path = get_config_path()?;

    // Keep a backup of the previous config
    if config_path.exists() {
        let backup_path = config_path.with_extension("json.bak");
        if let Err(e) = fs::copy(&config_path, &backup_path) {
            log::warn!("Failed to create config backup: {}", e);
        }
    }

    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(&config_path, config_str)?;

    log::info!("Configuration saved successfully");
    Ok(())
}

pub fn validate_config(config: &Config) -> AppResult<()> {
    if config.endpoint.trim().is_empty() {
        return Err(AppError::config("endpoint: must not be empty"));
    }

    if !config.endpoint.starts_with("http://") && !config.endpoint.starts_with("https://") {
        return Err(AppError::config("endpoint: must be an http(s) URL"));
    }

    if config.request_timeout_secs == 0 {
        return Err(AppError::config("request_timeout_secs: must be at least 1"));
    }

    let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
    if !valid_log_levels.contains(&config.log_level.as_str()) {
        return Err(AppError::config("log_level: must be a valid log level"));
    }

    Ok(())
}

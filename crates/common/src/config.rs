//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::WipekitResult;

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Widget tunables shared by both comparison widgets.
    pub widgets: WidgetDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Default widget parameters.
///
/// These are the knobs both widgets read at bind/open time; hosts that
/// want the stock behavior can pass `WidgetDefaults::default()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetDefaults {
    /// Initial before-panel reveal, percent of container width.
    pub initial_reveal_percent: f64,

    /// Margin near each container edge where pointer moves are
    /// ignored, in pixels. Keeps the drag handle from fully
    /// disappearing.
    pub edge_dead_zone_px: f64,

    /// Initial normalized split position for video comparisons.
    pub initial_split: f64,

    /// Id suffix pairing a comparison canvas with its video element
    /// (canvas id = video id + suffix).
    pub canvas_id_suffix: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "wipekit=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            widgets: WidgetDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for WidgetDefaults {
    fn default() -> Self {
        Self {
            initial_reveal_percent: 50.0,
            edge_dead_zone_px: 10.0,
            initial_split: 0.75,
            canvas_id_suffix: "Merge".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> WipekitResult<()> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, json)?;
        Ok(())
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("wipekit").join("config.json")
}

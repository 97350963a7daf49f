use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use unfurl::WidgetError;

/// Demo settings, optionally loaded from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DemoConfig {
    /// Viewport width at start (desktop).
    pub wide_width: u16,
    /// Viewport width used for the mobile part of the script.
    pub compact_width: u16,
    /// Interval between page clock ticks.
    pub frame_ms: u64,
    pub reduced_motion: bool,
    pub log_file: String,
    /// Print the element outline after each step.
    pub outlines: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            wide_width: 1280,
            compact_width: 480,
            frame_ms: 16,
            reduced_motion: false,
            log_file: "unfurl-demo.log".to_string(),
            outlines: false,
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error(transparent)]
    Widget(#[from] WidgetError),

    #[error("Widget registry is poisoned")]
    Registry,
}

use anyhow::{anyhow, Context, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

use crate::file_utils::FileManager;

/// Application configuration module
/// This module handles loading and validating the optional configuration file.
/// Nothing here is ever written back to disk.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Output naming settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings for synthesized output file names
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Stands in for the nickname when none was given
    #[serde(default = "default_unknown_nickname_placeholder")]
    pub unknown_nickname_placeholder: String,

    /// chrono format string for the timestamp part of the name
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            unknown_nickname_placeholder: default_unknown_nickname_placeholder(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_unknown_nickname_placeholder() -> String {
    "unknown".to_string()
}

fn default_timestamp_format() -> String {
    "%Y-%m-%d_%H-%M-%S".to_string()
}

fn contains_separator(value: &str) -> bool {
    value.contains('/') || value.contains('\\')
}

impl Config {
    /// Load a configuration file; missing fields fall back to defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = FileManager::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let placeholder = &self.output.unknown_nickname_placeholder;
        if placeholder.trim().is_empty() {
            return Err(anyhow!("unknown_nickname_placeholder must not be empty"));
        }
        if contains_separator(placeholder) {
            return Err(anyhow!("unknown_nickname_placeholder must not contain path separators: {}", placeholder));
        }

        let format = &self.output.timestamp_format;
        if format.trim().is_empty() {
            return Err(anyhow!("timestamp_format must not be empty"));
        }
        if contains_separator(format) {
            return Err(anyhow!("timestamp_format must not contain path separators: {}", format));
        }
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(anyhow!("timestamp_format is not a valid strftime pattern: {}", format));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            output: OutputConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

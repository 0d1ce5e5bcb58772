use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::storage::CorruptPolicy;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where and how the form documents are stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding `forms.json` and `formData.json`.
    /// Defaults to the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Handling of malformed documents on startup (default: reset).
    #[serde(default)]
    pub on_corrupt: CorruptPolicy,
}

impl StorageConfig {
    /// Configured data directory, or `<data_dir>/formsmith` from `dirs`.
    /// Falls back to the current directory if the platform has none.
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("formsmith")
}

/// Diagnostic log output. Off unless a log file is configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file. A relative path is taken inside the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// `EnvFilter` directives, overridden by `RUST_LOG`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

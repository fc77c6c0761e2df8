use std::fs;
use std::io;
use std::path::Path;

use downloads_logging::LogDestination;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid settings: {0}")]
    Parse(String),
}

/// Host-supplied knobs for a sync session, read from RON. Missing fields take
/// their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncSettings {
    pub notification_capacity: usize,
    pub log_level: String,
    pub refresh_downloaded_on_start: bool,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            notification_capacity: 50,
            log_level: "info".to_string(),
            refresh_downloaded_on_start: true,
        }
    }
}

impl SyncSettings {
    pub fn from_ron_str(text: &str) -> Result<Self, SettingsError> {
        ron::from_str(text).map_err(|err| SettingsError::Parse(err.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    pub fn level_filter(&self) -> LevelFilter {
        downloads_logging::parse_level(&self.log_level)
    }

    /// Installs the process logger at `log_level`. Only the first logger
    /// installed in a process takes effect.
    pub fn install_logger(&self, destination: LogDestination) {
        downloads_logging::initialize(destination, self.level_filter());
    }
}

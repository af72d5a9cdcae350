//! Application configuration
//!
//! Read from `config.json` in the app config directory. Every field has a
//! default, so a missing file or a partial one both work.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "config.json";

fn default_database_file() -> String {
    "gestion_pro.db".to_string()
}

fn default_reminder_interval_secs() -> u64 {
    60 * 60
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Database file name inside the app data directory
    #[serde(default = "default_database_file")]
    pub database_file: String,
    /// Seconds between reminder checks
    #[serde(default = "default_reminder_interval_secs")]
    pub reminder_interval_secs: u64,
    #[serde(default = "default_true")]
    pub notifications_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_file: default_database_file(),
            reminder_interval_secs: default_reminder_interval_secs(),
            notifications_enabled: true,
        }
    }
}

impl AppConfig {
    /// Load `config.json` from `config_dir`, falling back to defaults
    pub fn load(config_dir: &Path) -> Self {
        let path = config_dir.join(CONFIG_FILE);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No {} found, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Failed to read {}: {}; using defaults", path.display(), e);
                return Self::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Invalid {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn database_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.database_file)
    }

    pub fn reminder_interval(&self) -> Duration {
        Duration::from_secs(self.reminder_interval_secs.max(1))
    }
}

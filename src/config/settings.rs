//! User settings
//!
//! Display preferences persisted as JSON. One currency symbol is used for
//! every amount the application prints.

use serde::{Deserialize, Serialize};

use crate::error::TrackerResult;
use crate::models::TimeWindow;
use crate::storage::file_io::{load_json, save_json_atomic};

use super::paths::AppPaths;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used for all displayed amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Default time window for trend reports
    #[serde(default)]
    pub default_window: TimeWindow,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "Rs".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_window: TimeWindow::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if missing
    pub fn load_or_create(paths: &AppPaths) -> TrackerResult<Self> {
        let path = paths.settings_file();
        if !path.exists() {
            let settings = Self::default();
            save_json_atomic(&path, &settings)?;
            return Ok(settings);
        }
        load_json(&path)
    }

    /// Persist the settings
    pub fn save(&self, paths: &AppPaths) -> TrackerResult<()> {
        save_json_atomic(paths.settings_file(), self)
    }
}

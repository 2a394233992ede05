//! User settings for the expense ledger
//!
//! Manages display preferences: the currency symbol and the format used to
//! render transaction dates (which is also the text the search matches).

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown in front of every amount
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date-time format for rendered dates (strftime format)
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_datetime_format() -> String {
    // en-US locale string, e.g. "1/2/2024, 9:05:00 AM"
    "%-m/%-d/%Y, %-I:%M:%S %p".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            datetime_format: default_datetime_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist.
    /// Settings are edited by hand; the ledger never writes this file.
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))
    }
}

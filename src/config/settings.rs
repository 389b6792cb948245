//! User settings for barber-cli
//!
//! Holds the backend location, transport and logging preferences, and
//! display formatting. Every field has a default so older config files keep
//! loading after new fields are added.

use serde::{Deserialize, Serialize};

use super::paths::BarberPaths;
use crate::error::BarberError;

/// Environment variable that overrides the configured API base URL
pub const API_URL_ENV: &str = "BARBER_API_URL";

/// User settings for barber-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the booking backend, including the `/api` prefix
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout; unset means the transport default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Currency symbol for prices
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// OAuth client id shown to users obtaining a Google identity token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_client_id: Option<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%A, %d %B %Y".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: default_api_base_url(),
            request_timeout_secs: None,
            log_level: default_log_level(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            google_client_id: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BarberPaths) -> Result<Self, BarberError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BarberError::Io(format!("Failed to read settings file: {}", e))
            })?;

            serde_json::from_str(&contents).map_err(|e| {
                BarberError::Config(format!("Failed to parse settings file: {}", e))
            })
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BarberPaths) -> Result<(), BarberError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BarberError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BarberError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Resolve the API base URL: explicit override, then environment, then file
    pub fn resolve_api_url(&self, cli_override: Option<&str>) -> String {
        let url = cli_override
            .map(str::to_string)
            .or_else(|| std::env::var(API_URL_ENV).ok().filter(|v| !v.is_empty()))
            .unwrap_or_else(|| self.api_base_url.clone());
        url.trim_end_matches('/').to_string()
    }
}

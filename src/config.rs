//! Configuration management for the Sphone dialer.
//!
//! This module loads the backing file locations and log level from
//! environment variables, reading a `.env` file first if one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the Sphone dialer.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file holding the call history (default: call_history_db.json)
    pub call_history_file: PathBuf,

    /// JSON file holding the contact list (default: contact_list.json)
    pub contacts_file: PathBuf,

    /// Text file written by contact export (default: exported_contacts.txt)
    pub export_file: PathBuf,

    /// Whether contact export is available (default: true)
    pub export_enabled: bool,

    /// Log level used when RUST_LOG is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `SPHONE_CALL_HISTORY_FILE`: Call history JSON file
    /// - `SPHONE_CONTACTS_FILE`: Contact list JSON file
    /// - `SPHONE_EXPORT_FILE`: Export target text file
    /// - `SPHONE_EXPORT_ENABLED`: `true`/`false` (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        Ok(Config {
            call_history_file: Self::parse_env_path(
                "SPHONE_CALL_HISTORY_FILE",
                defaults.call_history_file,
            )?,
            contacts_file: Self::parse_env_path("SPHONE_CONTACTS_FILE", defaults.contacts_file)?,
            export_file: Self::parse_env_path("SPHONE_EXPORT_FILE", defaults.export_file)?,
            export_enabled: Self::parse_env_bool("SPHONE_EXPORT_ENABLED", defaults.export_enabled)?,
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }

    /// Parse an environment variable as a non-empty path with a default value.
    fn parse_env_path(var_name: &str, default: PathBuf) -> ConfigResult<PathBuf> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            }),
            Ok(val) => Ok(PathBuf::from(val)),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            call_history_file: PathBuf::from("call_history_db.json"),
            contacts_file: PathBuf::from("contact_list.json"),
            export_file: PathBuf::from("exported_contacts.txt"),
            export_enabled: true,
            log_level: "warn".to_string(),
        }
    }
}

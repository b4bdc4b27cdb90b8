//! Configuration schema types
//!
//! This module defines the configuration structure that maps to the TOML file.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Upper bound on messages per dispatch batch imposed by the messaging service
pub const MAX_MESSAGE_BATCH_COUNT: usize = 500;

/// Main covid-alerts configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AlertsConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Statistics API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// What to report on
    #[serde(default)]
    pub report: ReportConfig,

    /// Push messaging settings
    #[serde(default)]
    pub messaging: MessagingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AlertsConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.api.validate()?;
        self.report.validate()?;
        self.messaging.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Build messages without dispatching them
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// COVID-19 statistics API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL; `/regions`, `/provinces/{iso}` and `/reports` are appended
    #[serde(default = "default_api_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ApiConfig {
    fn validate(&self) -> Result<(), String> {
        validate_http_url("api.base_url", &self.base_url)?;

        if self.timeout_seconds == 0 {
            return Err("api.timeout_seconds must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

/// Report selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Country to report on, matched case-insensitively against region names
    #[serde(default)]
    pub country: String,

    /// Days subtracted from today to pick the report date
    #[serde(default = "default_date_offset")]
    pub date_offset: i64,

    /// Also send one message per city listed in a province report
    #[serde(default = "default_true")]
    pub include_cities: bool,
}

impl ReportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.country.trim().is_empty() {
            return Err("report.country cannot be empty".to_string());
        }

        if self.date_offset < 0 {
            return Err(format!(
                "report.date_offset must be >= 0, got {}",
                self.date_offset
            ));
        }

        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            country: String::new(),
            date_offset: default_date_offset(),
            include_cities: true,
        }
    }
}

/// Push messaging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagingConfig {
    /// Service account credentials: a file path or the inline JSON document
    /// (`GOOGLE_APPLICATION_CREDENTIALS`)
    #[serde(default)]
    pub credentials: Option<SecretString>,

    /// OAuth2 bearer token used for send requests
    #[serde(default)]
    pub access_token: Option<SecretString>,

    /// Overrides the `project_id` found in the credentials
    #[serde(default)]
    pub project_id: Option<String>,

    /// Messaging endpoint root
    #[serde(default = "default_messaging_endpoint")]
    pub endpoint: String,

    /// Send in batches (`true`) or one message per request (`false`)
    #[serde(default = "default_true")]
    pub send_in_batches: bool,

    /// Maximum messages per batch
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl MessagingConfig {
    /// Credentials are not checked here; a missing service account surfaces
    /// as a delivery failure when the first batch is sent.
    fn validate(&self) -> Result<(), String> {
        validate_http_url("messaging.endpoint", &self.endpoint)?;

        if self.max_batch_size == 0 || self.max_batch_size > MAX_MESSAGE_BATCH_COUNT {
            return Err(format!(
                "messaging.max_batch_size must be between 1 and {}, got {}",
                MAX_MESSAGE_BATCH_COUNT, self.max_batch_size
            ));
        }

        if self.timeout_seconds == 0 {
            return Err("messaging.timeout_seconds must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            access_token: None,
            project_id: None,
            endpoint: default_messaging_endpoint(),
            send_in_batches: true,
            max_batch_size: default_max_batch_size(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn validate_http_url(field: &str, value: &str) -> Result<(), String> {
    let parsed = url::Url::parse(value).map_err(|e| format!("{field} is not a valid URL: {e}"))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(format!("{field} must start with http:// or https://"));
    }
    Ok(())
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_api_base_url() -> String {
    "https://covid-api.com/api".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("covid-alerts/{}", env!("CARGO_PKG_VERSION"))
}

fn default_date_offset() -> i64 {
    1
}

fn default_messaging_endpoint() -> String {
    "https://fcm.googleapis.com".to_string()
}

fn default_max_batch_size() -> usize {
    MAX_MESSAGE_BATCH_COUNT
}

fn default_local_path() -> String {
    "/var/log/covid-alerts".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

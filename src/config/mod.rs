//! Configuration management for covid-alerts.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! covid-alerts uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `COVID_ALERTS_<SECTION>_<KEY>` environment overrides
//! - Invocation parameters (`GOOGLE_APPLICATION_CREDENTIALS`, `COUNTRY`,
//!   `DATE_OFFSET`, `FCM_ACCESS_TOKEN`)
//! - Default values for optional settings
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use covid_alerts::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("covid-alerts.toml")?;
//!
//! println!("Country: {}", config.report.country);
//! println!("Batch size: {}", config.messaging.max_batch_size);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level and dry run
//! - [`ApiConfig`] - Statistics API connection
//! - [`ReportConfig`] - Country, date offset, city expansion
//! - [`MessagingConfig`] - Push messaging credentials and batching
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [report]
//! country = "Brazil"
//! date_offset = 1
//!
//! [messaging]
//! credentials = "${GOOGLE_APPLICATION_CREDENTIALS}"
//! access_token = "${FCM_ACCESS_TOKEN}"
//! ```

pub mod invocation;
pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use invocation::Invocation;
pub use loader::{load_config, load_config_or_defaults, load_config_unvalidated};
pub use schema::{
    AlertsConfig, ApiConfig, ApplicationConfig, LoggingConfig, MessagingConfig, ReportConfig,
    MAX_MESSAGE_BATCH_COUNT,
};
pub use secret::{secret_string, secret_string_opt, SecretString, SecretValue};

//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output with an `EnvFilter` (`RUST_LOG` or the configured level)
//! - JSON-formatted local file logs with rotation
//!
//! # Example
//!
//! ```no_run
//! use covid_alerts::logging::init_logging;
//! use covid_alerts::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(country = "Brazil", "Starting notification run");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use covid_alerts::log_error_with_context;
/// use covid_alerts::domain::AlertsError;
///
/// let error = AlertsError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

/// Log that a dispatch unit is about to be sent
///
/// # Example
///
/// ```no_run
/// use covid_alerts::log_batch_dispatch;
///
/// log_batch_dispatch!(1, 3, 500);
/// ```
#[macro_export]
macro_rules! log_batch_dispatch {
    ($current:expr, $total:expr, $size:expr) => {
        tracing::info!(
            batch = $current,
            total_batches = $total,
            batch_size = $size,
            "Sending messages"
        );
    };
}

//! Domain error types
//!
//! This module defines the error hierarchy for covid-alerts.
//! Errors are domain-specific and don't expose third-party HTTP types.

use thiserror::Error;

/// Main covid-alerts error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum AlertsError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Statistics API errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// The configured country is not part of the region list
    #[error("Region not found: {0}")]
    RegionNotFound(String),

    /// A listing came back empty where the pipeline needs data
    #[error("{0}")]
    EmptyResult(#[from] EmptyResult),

    /// Push notification delivery errors
    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Local I/O errors, such as unreadable invocation parameters
    #[error("I/O error: {0}")]
    Io(String),
}

/// Statistics API errors
///
/// Errors that occur while talking to the COVID-19 statistics API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Failed to reach the API
    #[error("Failed to connect to statistics API: {0}")]
    ConnectionFailed(String),

    /// Non-success status returned by the API
    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Body was not the expected JSON document
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),
}

/// Empty listings that end a run early
///
/// The `Display` text is the exact error string reported to the invoker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmptyResult {
    #[error("No regions found")]
    NoRegions,

    #[error("No states found")]
    NoStates,

    #[error("No reports found")]
    NoReports,
}

/// Push notification delivery errors
///
/// These are recorded per batch (or per message) and never fail a run.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Messaging client could not be set up from the supplied credentials
    #[error("Failed to initialize messaging client: {0}")]
    ClientInitialization(String),

    /// Failed to reach the messaging endpoint
    #[error("Failed to connect to messaging service: {0}")]
    ConnectionFailed(String),

    /// The messaging service refused the request
    #[error("Message rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// Response could not be interpreted
    #[error("Invalid response from messaging service: {0}")]
    InvalidResponse(String),
}

impl DeliveryError {
    /// Whether the error applies to every message sent with the same session
    ///
    /// Authentication failures and a broken client abort a whole batch rather
    /// than being counted against a single message.
    pub fn is_session_fatal(&self) -> bool {
        match self {
            DeliveryError::ClientInitialization(_) => true,
            DeliveryError::Rejected { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }
}

impl From<serde_json::Error> for AlertsError {
    fn from(err: serde_json::Error) -> Self {
        AlertsError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alerts_error_display() {
        let err = AlertsError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_empty_result_display_is_bare_message() {
        assert_eq!(
            AlertsError::from(EmptyResult::NoRegions).to_string(),
            "No regions found"
        );
        assert_eq!(EmptyResult::NoStates.to_string(), "No states found");
        assert_eq!(EmptyResult::NoReports.to_string(), "No reports found");
    }

    #[test]
    fn test_fetch_error_conversion() {
        let fetch_err = FetchError::ConnectionFailed("Network error".to_string());
        let err: AlertsError = fetch_err.into();
        assert!(matches!(err, AlertsError::Fetch(_)));
    }

    #[test]
    fn test_delivery_error_session_fatal() {
        assert!(DeliveryError::ClientInitialization("bad".into()).is_session_fatal());
        assert!(DeliveryError::Rejected {
            status: 401,
            message: "unauthenticated".into()
        }
        .is_session_fatal());
        assert!(!DeliveryError::Rejected {
            status: 404,
            message: "unregistered".into()
        }
        .is_session_fatal());
        assert!(!DeliveryError::ConnectionFailed("reset".into()).is_session_fatal());
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: AlertsError = json_err.into();
        assert!(matches!(err, AlertsError::Serialization(_)));
    }
}

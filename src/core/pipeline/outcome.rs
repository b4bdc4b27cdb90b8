//! Pipeline outcome

use crate::domain::{AlertsError, Message};
use serde::{Deserialize, Serialize};

/// Prefix for errors that are not one of the empty-result cases
pub const LOAD_ERROR_PREFIX: &str = "Error loading reports";

/// Result of a run as seen by the invoker
///
/// Serializes to either `{"messages": [...]}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PipelineOutcome {
    Messages { messages: Vec<Message> },
    Error { error: String },
}

impl PipelineOutcome {
    pub fn messages(messages: Vec<Message>) -> Self {
        PipelineOutcome::Messages { messages }
    }

    pub fn error(error: impl Into<String>) -> Self {
        PipelineOutcome::Error {
            error: error.into(),
        }
    }

    /// Map a run failure to the text reported to the invoker
    ///
    /// Empty listings report their bare message; everything else is prefixed.
    pub fn from_error(err: &AlertsError) -> Self {
        match err {
            AlertsError::EmptyResult(empty) => Self::error(empty.to_string()),
            other => Self::error(format!("{LOAD_ERROR_PREFIX}: {other}")),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, PipelineOutcome::Error { .. })
    }

    pub fn message_list(&self) -> Option<&[Message]> {
        match self {
            PipelineOutcome::Messages { messages } => Some(messages),
            PipelineOutcome::Error { .. } => None,
        }
    }

    pub fn error_text(&self) -> Option<&str> {
        match self {
            PipelineOutcome::Error { error } => Some(error),
            PipelineOutcome::Messages { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmptyResult, FetchError};

    #[test]
    fn test_empty_results_are_bare() {
        let outcome = PipelineOutcome::from_error(&EmptyResult::NoStates.into());
        assert_eq!(outcome.error_text(), Some("No states found"));
    }

    #[test]
    fn test_other_errors_are_prefixed() {
        let outcome = PipelineOutcome::from_error(&AlertsError::RegionNotFound("Atlantis".into()));
        assert_eq!(
            outcome.error_text(),
            Some("Error loading reports: Region not found: Atlantis")
        );

        let fetch: AlertsError = FetchError::ConnectionFailed("timed out".into()).into();
        let outcome = PipelineOutcome::from_error(&fetch);
        assert!(outcome
            .error_text()
            .unwrap()
            .starts_with("Error loading reports: "));
    }

    #[test]
    fn test_serialized_shapes() {
        let error = serde_json::to_value(PipelineOutcome::error("No reports found")).unwrap();
        assert_eq!(error, serde_json::json!({"error": "No reports found"}));

        let messages = serde_json::to_value(PipelineOutcome::messages(Vec::new())).unwrap();
        assert_eq!(messages, serde_json::json!({"messages": []}));
    }
}

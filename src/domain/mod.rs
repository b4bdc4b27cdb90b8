//! Domain models and types for covid-alerts.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **API records** ([`Region`], [`State`], [`Report`], [`CityReport`])
//! - **Notification payloads** ([`Message`], [`Notification`], [`MessageData`])
//! - **Topic naming** ([`generate_topic`])
//! - **Error types** ([`AlertsError`], [`FetchError`], [`DeliveryError`], [`EmptyResult`])
//! - **Result type alias** ([`Result`])
//!
//! Every value here is immutable once built and recomputed on each run.
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, AlertsError>`]:
//!
//! ```rust
//! use covid_alerts::domain::{AlertsError, EmptyResult, Result};
//!
//! fn first_state(states: &[String]) -> Result<&String> {
//!     states.first().ok_or(AlertsError::EmptyResult(EmptyResult::NoStates))
//! }
//! ```

pub mod errors;
pub mod message;
pub mod region;
pub mod report;
pub mod result;
pub mod topic;

// Re-export commonly used types for convenience
pub use errors::{AlertsError, DeliveryError, EmptyResult, FetchError};
pub use message::{Message, MessageData, Notification};
pub use region::{find_region, Region, State};
pub use report::{CityReport, Report, ReportRegion};
pub use result::Result;
pub use topic::generate_topic;

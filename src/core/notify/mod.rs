//! Notification building and dispatch
//!
//! - [`formatter`] - Report to [`Message`](crate::domain::Message) conversion
//! - [`batch`] - Order-preserving partitioning into bounded batches
//! - [`dispatcher`] - Sends batches (or single messages) and records outcomes

pub mod batch;
pub mod dispatcher;
pub mod formatter;

pub use batch::partition_batches;
pub use dispatcher::{
    BatchOutcome, DeliveryReceipt, DeliveryStatus, DispatchConfig, DispatchReport,
    NotificationDispatcher,
};
pub use formatter::{generate_city_message, generate_state_message};

//! Notification dispatch
//!
//! Messages are sent once each, either in bounded batches or one request per
//! message. A failed unit is logged and recorded; it never stops the units
//! after it and is never retried.

use super::batch::partition_batches;
use crate::adapters::messaging::{BatchResponse, MessagingClient};
use crate::config::{MessagingConfig, MAX_MESSAGE_BATCH_COUNT};
use crate::domain::Message;
use crate::{log_batch_dispatch, log_error_with_context};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Configuration for dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Send through `send_all` in batches (`true`) or one `send` per message
    pub send_in_batches: bool,
    /// Batch size (1-500)
    pub max_batch_size: usize,
}

impl DispatchConfig {
    pub fn new(send_in_batches: bool, max_batch_size: usize) -> Self {
        Self {
            send_in_batches,
            max_batch_size: max_batch_size.clamp(1, MAX_MESSAGE_BATCH_COUNT),
        }
    }

    /// Create from the `[messaging]` section
    pub fn from_config(config: &MessagingConfig) -> Self {
        Self::new(config.send_in_batches, config.max_batch_size)
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self::new(true, MAX_MESSAGE_BATCH_COUNT)
    }
}

/// Successful response for one dispatch unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeliveryReceipt {
    /// Counts reported for a batch
    Batch(BatchResponse),
    /// Id assigned to a single message
    Single { message_id: String },
}

/// What happened to one dispatch unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum DeliveryStatus {
    Delivered(DeliveryReceipt),
    Failed(String),
}

/// Outcome of a single batch (or single message when batching is off)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    /// Zero-based position in dispatch order
    pub index: usize,
    pub message_count: usize,
    pub status: DeliveryStatus,
}

impl BatchOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self.status, DeliveryStatus::Delivered(_))
    }
}

/// Result of dispatching a message list
#[derive(Debug, Clone, Default, Serialize)]
pub struct DispatchReport {
    pub outcomes: Vec<BatchOutcome>,

    #[serde(skip)]
    pub duration: Duration,
}

impl DispatchReport {
    /// Receipts of the units that were delivered, in dispatch order
    pub fn responses(&self) -> Vec<&DeliveryReceipt> {
        self.outcomes
            .iter()
            .filter_map(|o| match &o.status {
                DeliveryStatus::Delivered(receipt) => Some(receipt),
                DeliveryStatus::Failed(_) => None,
            })
            .collect()
    }

    pub fn delivered_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_delivered()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.delivered_count()
    }

    /// Total messages handed to the messaging client
    pub fn messages_attempted(&self) -> usize {
        self.outcomes.iter().map(|o| o.message_count).sum()
    }

    pub fn is_successful(&self) -> bool {
        self.failed_count() == 0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            units = self.outcomes.len(),
            messages = self.messages_attempted(),
            delivered = self.delivered_count(),
            failed = self.failed_count(),
            duration_ms = self.duration.as_millis() as u64,
            "Dispatch completed"
        );

        for outcome in &self.outcomes {
            if let DeliveryStatus::Failed(ref error) = outcome.status {
                tracing::warn!(
                    index = outcome.index,
                    message_count = outcome.message_count,
                    error = %error,
                    "Dispatch unit failed"
                );
            }
        }
    }
}

/// Sends messages through an injected messaging client
pub struct NotificationDispatcher {
    client: Arc<dyn MessagingClient>,
    config: DispatchConfig,
}

impl NotificationDispatcher {
    pub fn new(client: Arc<dyn MessagingClient>, config: DispatchConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> DispatchConfig {
        self.config
    }

    /// Send every message exactly once
    ///
    /// Never fails: per-unit errors are recorded in the returned report.
    pub async fn send_messages(&self, messages: &[Message]) -> DispatchReport {
        let start_time = Instant::now();

        let outcomes = if messages.is_empty() {
            Vec::new()
        } else if self.config.send_in_batches {
            self.send_batched(messages).await
        } else {
            self.send_individually(messages).await
        };

        DispatchReport {
            outcomes,
            duration: start_time.elapsed(),
        }
    }

    async fn send_batched(&self, messages: &[Message]) -> Vec<BatchOutcome> {
        let batches = partition_batches(messages, self.config.max_batch_size);
        let total = batches.len();
        let mut outcomes = Vec::with_capacity(total);

        for (index, batch) in batches.into_iter().enumerate() {
            log_batch_dispatch!(index + 1, total, batch.len());

            let status = match self.client.send_all(batch).await {
                Ok(response) => {
                    tracing::info!(
                        batch = index + 1,
                        success_count = response.success_count,
                        failure_count = response.failure_count,
                        "Successfully sent messages"
                    );
                    DeliveryStatus::Delivered(DeliveryReceipt::Batch(response))
                }
                Err(e) => {
                    log_error_with_context!(&e, "Error sending messages");
                    DeliveryStatus::Failed(e.to_string())
                }
            };

            outcomes.push(BatchOutcome {
                index,
                message_count: batch.len(),
                status,
            });
        }

        outcomes
    }

    async fn send_individually(&self, messages: &[Message]) -> Vec<BatchOutcome> {
        let total = messages.len();
        let mut outcomes = Vec::with_capacity(total);

        for (index, message) in messages.iter().enumerate() {
            log_batch_dispatch!(index + 1, total, 1);

            let status = match self.client.send(message).await {
                Ok(message_id) => {
                    tracing::info!(
                        topic = %message.topic,
                        message_id = %message_id,
                        "Successfully sent message"
                    );
                    DeliveryStatus::Delivered(DeliveryReceipt::Single { message_id })
                }
                Err(e) => {
                    log_error_with_context!(&e, "Error sending message");
                    DeliveryStatus::Failed(e.to_string())
                }
            };

            outcomes.push(BatchOutcome {
                index,
                message_count: 1,
                status,
            });
        }

        outcomes
    }
}

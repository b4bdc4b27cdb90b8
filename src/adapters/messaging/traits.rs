//! Messaging client trait definition

use crate::domain::{DeliveryError, Message};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Outcome of a batch send as reported by the messaging service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResponse {
    pub success_count: usize,
    pub failure_count: usize,
}

impl BatchResponse {
    pub fn new(success_count: usize, failure_count: usize) -> Self {
        Self {
            success_count,
            failure_count,
        }
    }

    pub fn total(&self) -> usize {
        self.success_count + self.failure_count
    }
}

/// Topic-based push messaging
///
/// Implementations are constructed by the caller and shared behind an
/// `Arc<dyn MessagingClient>`. Each method makes a single attempt.
#[async_trait]
pub trait MessagingClient: Send + Sync {
    /// Send a batch of messages
    ///
    /// Per-message rejections are counted in the response. An `Err` means the
    /// batch as a whole could not be sent.
    async fn send_all(&self, messages: &[Message]) -> Result<BatchResponse, DeliveryError>;

    /// Send a single message, returning the service-assigned message id
    async fn send(&self, message: &Message) -> Result<String, DeliveryError>;
}

//! Push messaging adapter
//!
//! The [`MessagingClient`] trait is what the dispatcher sends through;
//! [`FcmClient`] implements it against the FCM HTTP v1 API.

pub mod fcm;
mod traits;

pub use fcm::FcmClient;
pub use traits::{BatchResponse, MessagingClient};

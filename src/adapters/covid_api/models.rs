//! Statistics API response models

use serde::{Deserialize, Serialize};

/// Every endpoint wraps its records in `{"data": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: Vec<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}

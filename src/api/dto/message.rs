//! Plain confirmation body.

use serde::Serialize;

/// `{"message": "..."}` returned by delete and restore endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

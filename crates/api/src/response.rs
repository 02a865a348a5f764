//! Shared response payloads.

use serde::Serialize;

/// Simple informational message payload.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}

impl Message {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

//! Shared response types for API handlers.
//!
//! Entity payloads are serialized bare (the site's admin dashboard consumes
//! plain arrays and records); the only shared shape is the
//! `{"success": true}` body returned by deletes.

use serde::Serialize;

/// `{"success": true}` response body for delete operations.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

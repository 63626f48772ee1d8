//! Visitor enquiry entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use reelcraft_core::types::{RecordId, Timestamp};

/// Status assigned to every newly created enquiry. Free text thereafter;
/// no lifecycle transitions are enforced.
pub const NEW_STATUS: &str = "new";

/// A row from the `enquiries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enquiry {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub contact: String,
    pub comment: String,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for creating an enquiry. Email syntax is validated in the handler
/// before this ever reaches the repository.
#[derive(Debug, Deserialize)]
pub struct CreateEnquiry {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub comment: String,
}

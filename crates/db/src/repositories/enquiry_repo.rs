//! Repository for the `enquiries` table.

use sqlx::PgPool;

use reelcraft_core::limits::ENQUIRY_LIST_LIMIT;
use reelcraft_core::types::{new_record_id, now};

use crate::models::enquiry::{CreateEnquiry, Enquiry, NEW_STATUS};

/// Column list for enquiries queries.
const COLUMNS: &str = "id, name, email, contact, comment, status, created_at";

/// Provides list/create operations for visitor enquiries. Enquiries are
/// never updated or deleted through the API.
pub struct EnquiryRepo;

impl EnquiryRepo {
    /// List newest first, capped at the fixed list limit.
    pub async fn list(pool: &PgPool) -> Result<Vec<Enquiry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enquiries ORDER BY created_at DESC LIMIT $1");
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(ENQUIRY_LIST_LIMIT)
            .fetch_all(pool)
            .await
    }

    /// Insert a new enquiry, assigning id, created_at, and the initial
    /// `"new"` status.
    pub async fn create(pool: &PgPool, input: &CreateEnquiry) -> Result<Enquiry, sqlx::Error> {
        let query = format!(
            "INSERT INTO enquiries (id, name, email, contact, comment, status, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(new_record_id())
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.contact)
            .bind(&input.comment)
            .bind(NEW_STATUS)
            .bind(now())
            .fetch_one(pool)
            .await
    }
}

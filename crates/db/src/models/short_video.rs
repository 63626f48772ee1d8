//! Short-form video entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use reelcraft_core::types::{RecordId, Timestamp};

/// A row from the `short_videos` table.
///
/// `sort_order` is serialized as `order` on the wire; the column is renamed
/// only because `order` is an SQL keyword.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShortVideo {
    pub id: RecordId,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: Timestamp,
}

/// DTO for creating a short video. `thumbnail_url` defaults to empty and
/// `order` to 0 when absent.
#[derive(Debug, Deserialize)]
pub struct CreateShortVideo {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default, rename = "order")]
    pub sort_order: i32,
}

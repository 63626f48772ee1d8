//! Long-form video entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use reelcraft_core::types::{RecordId, Timestamp};

/// A row from the `long_videos` table.
///
/// `youtube_id` holds either a bare video id or a full URL; no
/// normalization is performed server-side.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LongVideo {
    pub id: RecordId,
    pub title: String,
    pub youtube_id: String,
    pub thumbnail_url: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: Timestamp,
}

/// DTO for creating a long video.
#[derive(Debug, Deserialize)]
pub struct CreateLongVideo {
    pub title: String,
    pub youtube_id: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default, rename = "order")]
    pub sort_order: i32,
}

//! Repository for the `long_videos` table.
//!
//! Same shape as [`crate::repositories::ShortVideoRepo`]; the two video
//! collections are independent and deliberately kept separate.

use sqlx::PgPool;

use reelcraft_core::limits::LONG_VIDEO_CAP;
use reelcraft_core::types::{new_record_id, now, RecordId};

use crate::models::long_video::{CreateLongVideo, LongVideo};

/// Column list for long_videos queries.
const COLUMNS: &str = "id, title, youtube_id, thumbnail_url, sort_order, created_at";

/// Provides CRUD operations for long videos.
pub struct LongVideoRepo;

impl LongVideoRepo {
    /// List up to the collection cap, ascending by display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<LongVideo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM long_videos ORDER BY sort_order ASC LIMIT $1");
        sqlx::query_as::<_, LongVideo>(&query)
            .bind(LONG_VIDEO_CAP)
            .fetch_all(pool)
            .await
    }

    /// Current number of stored long videos.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM long_videos")
            .fetch_one(pool)
            .await
    }

    /// Insert a new long video, assigning id and created_at. The
    /// `youtube_id` is stored verbatim whether a bare id or a full URL.
    pub async fn create(pool: &PgPool, input: &CreateLongVideo) -> Result<LongVideo, sqlx::Error> {
        let query = format!(
            "INSERT INTO long_videos (id, title, youtube_id, thumbnail_url, sort_order, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LongVideo>(&query)
            .bind(new_record_id())
            .bind(&input.title)
            .bind(&input.youtube_id)
            .bind(&input.thumbnail_url)
            .bind(input.sort_order)
            .bind(now())
            .fetch_one(pool)
            .await
    }

    /// Delete by id, returning the number of rows removed (0 or 1).
    pub async fn delete(pool: &PgPool, id: &RecordId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM long_videos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

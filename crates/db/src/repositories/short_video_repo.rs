//! Repository for the `short_videos` table.

use sqlx::PgPool;

use reelcraft_core::limits::SHORT_VIDEO_CAP;
use reelcraft_core::types::{new_record_id, now, RecordId};

use crate::models::short_video::{CreateShortVideo, ShortVideo};

/// Column list for short_videos queries.
const COLUMNS: &str = "id, title, url, thumbnail_url, sort_order, created_at";

/// Provides CRUD operations for short videos.
pub struct ShortVideoRepo;

impl ShortVideoRepo {
    /// List up to the collection cap, ascending by display order. Ties fall
    /// back to the store's natural retrieval order.
    pub async fn list(pool: &PgPool) -> Result<Vec<ShortVideo>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM short_videos ORDER BY sort_order ASC LIMIT $1");
        sqlx::query_as::<_, ShortVideo>(&query)
            .bind(SHORT_VIDEO_CAP)
            .fetch_all(pool)
            .await
    }

    /// Current number of stored short videos.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM short_videos")
            .fetch_one(pool)
            .await
    }

    /// Insert a new short video, assigning id and created_at.
    pub async fn create(
        pool: &PgPool,
        input: &CreateShortVideo,
    ) -> Result<ShortVideo, sqlx::Error> {
        let query = format!(
            "INSERT INTO short_videos (id, title, url, thumbnail_url, sort_order, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShortVideo>(&query)
            .bind(new_record_id())
            .bind(&input.title)
            .bind(&input.url)
            .bind(&input.thumbnail_url)
            .bind(input.sort_order)
            .bind(now())
            .fetch_one(pool)
            .await
    }

    /// Delete by id, returning the number of rows removed (0 or 1).
    pub async fn delete(pool: &PgPool, id: &RecordId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM short_videos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

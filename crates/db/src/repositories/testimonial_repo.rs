//! Repository for the `testimonials` table.

use sqlx::PgPool;

use reelcraft_core::limits::TESTIMONIAL_LIST_LIMIT;
use reelcraft_core::types::{new_record_id, now, RecordId};

use crate::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};

/// Column list for testimonials queries.
const COLUMNS: &str = "id, name, role, content, rating, avatar_url, created_at";

/// Provides CRUD operations for testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    /// List newest first, capped at the fixed list limit.
    pub async fn list(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM testimonials ORDER BY created_at DESC LIMIT $1");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(TESTIMONIAL_LIST_LIMIT)
            .fetch_all(pool)
            .await
    }

    /// Insert a new testimonial, assigning id and created_at. There is no
    /// cap on this collection.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials (id, name, role, content, rating, avatar_url, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(new_record_id())
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.content)
            .bind(input.rating)
            .bind(&input.avatar_url)
            .bind(now())
            .fetch_one(pool)
            .await
    }

    /// Partially update a testimonial. Fields absent from the input are
    /// left at their stored values (per-field `COALESCE` merge). Returns
    /// `None` when no row matched the id.
    pub async fn update(
        pool: &PgPool,
        id: &RecordId,
        input: &UpdateTestimonial,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!(
            "UPDATE testimonials SET
                name = COALESCE($1, name),
                role = COALESCE($2, role),
                content = COALESCE($3, content),
                rating = COALESCE($4, rating),
                avatar_url = COALESCE($5, avatar_url)
             WHERE id = $6
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.content)
            .bind(input.rating)
            .bind(&input.avatar_url)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete by id, returning the number of rows removed (0 or 1).
    pub async fn delete(pool: &PgPool, id: &RecordId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

//! Testimonial entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use reelcraft_core::types::{RecordId, Timestamp};

/// A row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: RecordId,
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: i32,
    pub avatar_url: String,
    pub created_at: Timestamp,
}

fn default_rating() -> i32 {
    5
}

/// DTO for creating a testimonial. `role` and `avatar_url` default to empty
/// strings, `rating` to 5. The rating range is not validated.
#[derive(Debug, Deserialize)]
pub struct CreateTestimonial {
    pub name: String,
    #[serde(default)]
    pub role: String,
    pub content: String,
    #[serde(default = "default_rating")]
    pub rating: i32,
    #[serde(default)]
    pub avatar_url: String,
}

/// DTO for partially updating a testimonial.
///
/// Fields left absent (or explicitly null) are not touched; the merge is
/// per-field via `COALESCE` in the repository.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTestimonial {
    pub name: Option<String>,
    pub role: Option<String>,
    pub content: Option<String>,
    pub rating: Option<i32>,
    pub avatar_url: Option<String>,
}

//! Handlers for the `/testimonials` resource.

use axum::extract::{Path, State};
use axum::Json;

use reelcraft_core::error::CoreError;
use reelcraft_core::types::RecordId;
use reelcraft_db::models::{CreateTestimonial, Testimonial, UpdateTestimonial};
use reelcraft_db::repositories::TestimonialRepo;

use crate::error::AppResult;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// GET /api/testimonials
///
/// Up to 100 testimonials, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Testimonial>>> {
    let testimonials = TestimonialRepo::list(&state.pool).await?;
    Ok(Json(testimonials))
}

/// POST /api/testimonials
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTestimonial>,
) -> AppResult<Json<Testimonial>> {
    let testimonial = TestimonialRepo::create(&state.pool, &input).await?;
    tracing::info!(testimonial_id = %testimonial.id, "Testimonial created");
    Ok(Json(testimonial))
}

/// PUT /api/testimonials/{id}
///
/// Field-level merge: only fields present (and non-null) in the body are
/// applied. Returns the post-update record.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    Json(input): Json<UpdateTestimonial>,
) -> AppResult<Json<Testimonial>> {
    let testimonial = TestimonialRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Testimonial", id))?;

    tracing::info!(testimonial_id = %testimonial.id, "Testimonial updated");
    Ok(Json(testimonial))
}

/// DELETE /api/testimonials/{id}
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<Json<SuccessResponse>> {
    let removed = TestimonialRepo::delete(&state.pool, &id).await?;
    if removed == 0 {
        return Err(CoreError::not_found("Testimonial", id).into());
    }

    tracing::info!(testimonial_id = %id, "Testimonial deleted");
    Ok(Json(SuccessResponse::ok()))
}

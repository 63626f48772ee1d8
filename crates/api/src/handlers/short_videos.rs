//! Handlers for the `/short-videos` resource.

use axum::extract::{Path, State};
use axum::Json;

use reelcraft_core::error::CoreError;
use reelcraft_core::limits::SHORT_VIDEO_CAP;
use reelcraft_core::types::RecordId;
use reelcraft_db::models::{CreateShortVideo, ShortVideo};
use reelcraft_db::repositories::ShortVideoRepo;

use crate::error::AppResult;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// GET /api/short-videos
///
/// Up to 10 videos, ascending by display order.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ShortVideo>>> {
    let videos = ShortVideoRepo::list(&state.pool).await?;
    Ok(Json(videos))
}

/// POST /api/short-videos
///
/// Rejects with 400 once the collection already holds 10 videos. The
/// count/insert pair is not atomic: two concurrent creates at count 9 can
/// both pass the check and leave 11 rows. Known limitation.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateShortVideo>,
) -> AppResult<Json<ShortVideo>> {
    let count = ShortVideoRepo::count(&state.pool).await?;
    if count >= SHORT_VIDEO_CAP {
        return Err(CoreError::CapacityExceeded {
            entity: "short videos",
            cap: SHORT_VIDEO_CAP,
        }
        .into());
    }

    let video = ShortVideoRepo::create(&state.pool, &input).await?;
    tracing::info!(video_id = %video.id, title = %video.title, "Short video created");
    Ok(Json(video))
}

/// DELETE /api/short-videos/{id}
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<Json<SuccessResponse>> {
    let removed = ShortVideoRepo::delete(&state.pool, &id).await?;
    if removed == 0 {
        return Err(CoreError::not_found("Video", id).into());
    }

    tracing::info!(video_id = %id, "Short video deleted");
    Ok(Json(SuccessResponse::ok()))
}

//! Handlers for the `/long-videos` resource. Mirrors `/short-videos` over
//! its own table and cap.

use axum::extract::{Path, State};
use axum::Json;

use reelcraft_core::error::CoreError;
use reelcraft_core::limits::LONG_VIDEO_CAP;
use reelcraft_core::types::RecordId;
use reelcraft_db::models::{CreateLongVideo, LongVideo};
use reelcraft_db::repositories::LongVideoRepo;

use crate::error::AppResult;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// GET /api/long-videos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<LongVideo>>> {
    let videos = LongVideoRepo::list(&state.pool).await?;
    Ok(Json(videos))
}

/// POST /api/long-videos
///
/// Same non-atomic cap check as short videos; see that handler.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLongVideo>,
) -> AppResult<Json<LongVideo>> {
    let count = LongVideoRepo::count(&state.pool).await?;
    if count >= LONG_VIDEO_CAP {
        return Err(CoreError::CapacityExceeded {
            entity: "long videos",
            cap: LONG_VIDEO_CAP,
        }
        .into());
    }

    let video = LongVideoRepo::create(&state.pool, &input).await?;
    tracing::info!(video_id = %video.id, title = %video.title, "Long video created");
    Ok(Json(video))
}

/// DELETE /api/long-videos/{id}
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<Json<SuccessResponse>> {
    let removed = LongVideoRepo::delete(&state.pool, &id).await?;
    if removed == 0 {
        return Err(CoreError::not_found("Video", id).into());
    }

    tracing::info!(video_id = %id, "Long video deleted");
    Ok(Json(SuccessResponse::ok()))
}

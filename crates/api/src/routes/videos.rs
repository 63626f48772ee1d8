//! Video routes: two independent collections with identical shape.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::{long_videos, short_videos};
use crate::state::AppState;

/// ```text
/// GET    /short-videos        -> list
/// POST   /short-videos        -> create (400 once 10 stored)
/// DELETE /short-videos/{id}   -> remove
/// GET    /long-videos         -> list
/// POST   /long-videos         -> create (400 once 10 stored)
/// DELETE /long-videos/{id}    -> remove
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/short-videos",
            get(short_videos::list).post(short_videos::create),
        )
        .route("/short-videos/{id}", delete(short_videos::remove))
        .route(
            "/long-videos",
            get(long_videos::list).post(long_videos::create),
        )
        .route("/long-videos/{id}", delete(long_videos::remove))
}

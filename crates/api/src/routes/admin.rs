//! Admin gate route.

use axum::routing::post;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// ```text
/// POST /admin/login -> login
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/admin/login", post(admin::login))
}

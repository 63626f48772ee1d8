//! Enquiry routes.

use axum::routing::get;
use axum::Router;

use crate::handlers::enquiries;
use crate::state::AppState;

/// ```text
/// GET  /enquiries  -> list
/// POST /enquiries  -> create (422 on malformed email)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/enquiries", get(enquiries::list).post(enquiries::create))
}

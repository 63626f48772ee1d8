//! Testimonial routes.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::testimonials;
use crate::state::AppState;

/// ```text
/// GET    /testimonials        -> list
/// POST   /testimonials        -> create
/// PUT    /testimonials/{id}   -> update (partial merge)
/// DELETE /testimonials/{id}   -> remove
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/testimonials",
            get(testimonials::list).post(testimonials::create),
        )
        .route(
            "/testimonials/{id}",
            put(testimonials::update).delete(testimonials::remove),
        )
}

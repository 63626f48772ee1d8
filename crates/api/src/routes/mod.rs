pub mod admin;
pub mod enquiries;
pub mod health;
pub mod testimonials;
pub mod videos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /admin/login           login (password gate)
///
/// /short-videos          list, create
/// /short-videos/{id}     delete
/// /long-videos           list, create
/// /long-videos/{id}      delete
///
/// /testimonials          list, create
/// /testimonials/{id}     update (partial), delete
///
/// /enquiries             list, create (triggers notification)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(admin::router())
        .merge(videos::router())
        .merge(testimonials::router())
        .merge(enquiries::router())
}

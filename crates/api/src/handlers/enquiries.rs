//! Handlers for the `/enquiries` resource.
//!
//! Enquiry creation is the one write with a side effect: after the row is
//! durably persisted, a notification email is dispatched fire-and-forget.
//! The dispatch outcome never changes the HTTP response.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use reelcraft_core::validation::validate_email;
use reelcraft_db::models::{CreateEnquiry, Enquiry};
use reelcraft_db::repositories::EnquiryRepo;
use reelcraft_notify::spawn_delivery;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/enquiries
///
/// Up to 1000 enquiries, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Enquiry>>> {
    let enquiries = EnquiryRepo::list(&state.pool).await?;
    Ok(Json(enquiries))
}

/// POST /api/enquiries
///
/// Validates the email syntax (422 on failure, nothing persisted), inserts
/// the enquiry with `status = "new"`, then detaches the operator
/// notification. Returns the persisted record regardless of notification
/// outcome.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEnquiry>,
) -> AppResult<Json<Enquiry>> {
    validate_email(&input.email)?;

    let enquiry = EnquiryRepo::create(&state.pool, &input).await?;
    tracing::info!(enquiry_id = %enquiry.id, "Enquiry created");

    // Runs only after the insert committed; skipped entirely when SMTP is
    // not configured.
    if let Some(mailer) = &state.mailer {
        spawn_delivery(Arc::clone(mailer), enquiry.clone());
    }

    Ok(Json(enquiry))
}

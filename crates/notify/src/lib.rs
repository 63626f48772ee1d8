//! Enquiry notification dispatch.
//!
//! On every successful enquiry creation the API fires a single, best-effort
//! HTML email to the configured operator mailbox. Delivery failures are
//! logged and swallowed; they never affect the enquiry-create outcome, and
//! no retry or durable queue exists. If the process dies between the insert
//! and the dispatch, the email is lost while the enquiry survives.

pub mod email;

pub use email::{EnquiryMailer, NotifyConfig, NotifyError};

use std::sync::Arc;

use reelcraft_db::models::Enquiry;

/// Fire-and-forget delivery of an enquiry notification.
///
/// Detaches the SMTP call onto its own task so the HTTP handler can return
/// without waiting on the provider. The task may complete before or after
/// the client sees the response; no ordering is guaranteed.
pub fn spawn_delivery(mailer: Arc<EnquiryMailer>, enquiry: Enquiry) {
    tokio::spawn(async move {
        if let Err(err) = mailer.deliver(&enquiry).await {
            tracing::warn!(
                enquiry_id = %enquiry.id,
                error = %err,
                "Enquiry notification delivery failed"
            );
        }
    });
}

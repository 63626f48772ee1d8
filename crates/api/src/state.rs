use std::sync::Arc;

use reelcraft_notify::EnquiryMailer;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: reelcraft_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Enquiry notification mailer; `None` when SMTP is not configured,
    /// in which case enquiry creation skips the notification entirely.
    pub mailer: Option<Arc<EnquiryMailer>>,
}

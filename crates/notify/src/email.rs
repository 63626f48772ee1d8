//! Enquiry email composition and SMTP delivery via `lettre`.
//!
//! Configuration is loaded from environment variables; if `SMTP_HOST` is
//! not set, [`NotifyConfig::from_env`] returns `None` and no mailer should
//! be constructed (enquiry creation still works, nothing is sent).

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use reelcraft_db::models::Enquiry;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for notification delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// NotifyConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@reelcraft.local";

/// Default operator mailbox when `NOTIFY_EMAIL` is not set.
const DEFAULT_NOTIFY_ADDRESS: &str = "enquiries@reelcraft.local";

/// Configuration for the enquiry notification mailer.
#[derive(Debug, Clone)]
pub struct NotifyConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Operator mailbox that receives every enquiry notification.
    pub notify_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password. Hosted providers that authenticate with an
    /// API key take it here.
    pub smtp_password: Option<String>,
}

impl NotifyConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that enquiry
    /// notifications are not configured and should be skipped.
    ///
    /// | Variable        | Required | Default                      |
    /// |-----------------|----------|------------------------------|
    /// | `SMTP_HOST`     | yes      | —                            |
    /// | `SMTP_PORT`     | no       | `587`                        |
    /// | `SMTP_FROM`     | no       | `noreply@reelcraft.local`    |
    /// | `NOTIFY_EMAIL`  | no       | `enquiries@reelcraft.local`  |
    /// | `SMTP_USER`     | no       | —                            |
    /// | `SMTP_PASSWORD` | no       | —                            |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            notify_address: std::env::var("NOTIFY_EMAIL")
                .unwrap_or_else(|_| DEFAULT_NOTIFY_ADDRESS.to_string()),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

// ---------------------------------------------------------------------------
// EnquiryMailer
// ---------------------------------------------------------------------------

/// Sends enquiry notification emails to the operator mailbox via SMTP.
pub struct EnquiryMailer {
    config: NotifyConfig,
}

impl EnquiryMailer {
    /// Create a new mailer with the given configuration.
    pub fn new(config: NotifyConfig) -> Self {
        Self { config }
    }

    /// Subject line for an enquiry notification.
    fn subject(enquiry: &Enquiry) -> String {
        format!("New Enquiry from {}", enquiry.name)
    }

    /// HTML body carrying the enquiry details and a human-readable UTC
    /// receipt timestamp. All visitor-supplied fields are escaped.
    fn html_body(enquiry: &Enquiry) -> String {
        format!(
            "<h2>New Enquiry Received</h2>\
             <p><strong>Name:</strong> {}</p>\
             <p><strong>Email:</strong> {}</p>\
             <p><strong>Contact:</strong> {}</p>\
             <p><strong>Comment:</strong> {}</p>\
             <p><strong>Received:</strong> {} UTC</p>",
            escape_html(&enquiry.name),
            escape_html(&enquiry.email),
            escape_html(&enquiry.contact),
            escape_html(&enquiry.comment),
            enquiry.created_at.format("%Y-%m-%d %H:%M:%S"),
        )
    }

    /// Send the notification email for an enquiry. Single attempt, no retry.
    pub async fn deliver(&self, enquiry: &Enquiry) -> Result<(), NotifyError> {
        let email = Message::builder()
            .from(self.config.from_address.parse()?)
            .to(self.config.notify_address.parse()?)
            .subject(Self::subject(enquiry))
            .header(ContentType::TEXT_HTML)
            .body(Self::html_body(enquiry))
            .map_err(|e| NotifyError::Build(e.to_string()))?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);

        if let (Some(user), Some(pass)) = (&self.config.smtp_user, &self.config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;

        tracing::info!(
            enquiry_id = %enquiry.id,
            to = %self.config.notify_address,
            "Enquiry notification email sent"
        );
        Ok(())
    }
}

/// Escape `&`, `<`, and `>` so visitor-supplied text renders as text, not
/// markup, in the operator's mail client.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Input validation helpers for enquiry submissions.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Validate that an enquiry email address is syntactically well-formed.
///
/// Syntax only; no deliverability or MX checks.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.validate_email() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn accepts_plain_address() {
        assert!(validate_email("visitor@example.com").is_ok());
    }

    #[test]
    fn accepts_subaddressed_address() {
        assert!(validate_email("visitor+tag@mail.example.co.uk").is_ok());
    }

    #[test]
    fn rejects_missing_at_sign() {
        assert_matches!(validate_email("not-an-email"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_missing_domain() {
        assert_matches!(validate_email("visitor@"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_empty() {
        assert_matches!(validate_email(""), Err(CoreError::Validation(_)));
    }
}

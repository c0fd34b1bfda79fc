//! Contact form validation.
//!
//! Two checks, in order: every field non-empty, then a loose
//! `local@domain.tld` email shape. Nothing is sent anywhere.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::FormError;
use crate::types::FormValues;

/// Shown after a successful submit.
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Whether `email` looks like `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate a submission.
pub fn validate(values: &FormValues) -> Result<(), FormError> {
    if values.name.is_empty() || values.email.is_empty() || values.message.is_empty() {
        return Err(FormError::MissingFields);
    }
    if !is_valid_email(&values.email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_simple() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
    }

    #[test]
    fn test_email_rejects_malformed() {
        for bad in ["", "a@b", "a.b", "@b.co", "a b@c.d", "a@@b.co", "a@b.co "] {
            assert!(!is_valid_email(bad), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_missing_field_wins_over_bad_email() {
        let values = FormValues::new("", "nope", "Hi");
        assert_eq!(validate(&values), Err(FormError::MissingFields));
    }

    #[test]
    fn test_each_empty_field_fails() {
        for values in [
            FormValues::new("", "jane@example.com", "Hi"),
            FormValues::new("Jane", "", "Hi"),
            FormValues::new("Jane", "jane@example.com", ""),
        ] {
            assert_eq!(validate(&values), Err(FormError::MissingFields));
        }
    }

    #[test]
    fn test_invalid_email() {
        let values = FormValues::new("Jane", "jane@example", "Hi");
        assert_eq!(validate(&values), Err(FormError::InvalidEmail));
    }

    #[test]
    fn test_valid_submission() {
        let values = FormValues::new("Jane", "jane@example.com", "Hi");
        assert_eq!(validate(&values), Ok(()));
    }
}

//! Error types.
//!
//! Form validation failures double as user-facing notification text: the
//! `Display` output of [`FormError`] is exactly what the toast shows.

use thiserror::Error;

/// Contact form validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Invalid [`PageConfig`](crate::config::PageConfig).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("typing animation needs at least one phrase")]
    EmptyPhraseList,
    #[error("phrase {0} is empty")]
    EmptyPhrase(usize),
    #[error("fade-in threshold {0} is outside 0.0..=1.0")]
    InvalidThreshold(f64),
}

/// Failure while attaching to the document.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("required element not found: {0}")]
    MissingElement(&'static str),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_error_messages() {
        assert_eq!(FormError::MissingFields.to_string(), "Please fill in all fields");
        assert_eq!(
            FormError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_mount_error_wraps_config() {
        let err: MountError = ConfigError::EmptyPhrase(2).into();
        assert_eq!(err.to_string(), "phrase 2 is empty");
    }
}

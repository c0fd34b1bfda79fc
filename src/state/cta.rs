//! Call-to-action buttons.

/// Label that marks `.btn-outline` as the CV download trigger.
pub const CV_LABEL: &str = "Download CV";

/// Shown instead of a real download.
pub const CV_MESSAGE: &str = "CV download started! (Demo)";

/// Whether a `.btn-outline` with this text content is the CV button.
pub fn is_cv_button(text: &str) -> bool {
    text.contains(CV_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cv_button_detection() {
        assert!(is_cv_button("  Download CV "));
        assert!(is_cv_button("Download CV (PDF)"));
        assert!(!is_cv_button("Contact Me"));
        assert!(!is_cv_button("download cv"));
    }
}

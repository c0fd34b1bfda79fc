//! Footer year stamp.

/// Replace the first `placeholder` in `html` with `year`.
///
/// Returns `None` when the placeholder is absent, so the caller can skip the
/// write entirely. Only the first occurrence is replaced.
pub fn stamp_year(html: &str, placeholder: &str, year: i32) -> Option<String> {
    if placeholder.is_empty() || !html.contains(placeholder) {
        return None;
    }
    Some(html.replacen(placeholder, &year.to_string(), 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_placeholder() {
        assert_eq!(
            stamp_year("&copy; 2026 Jane Doe", "2026", 2027).as_deref(),
            Some("&copy; 2027 Jane Doe")
        );
    }

    #[test]
    fn test_replaces_first_only() {
        assert_eq!(
            stamp_year("2026 - 2026", "2026", 2031).as_deref(),
            Some("2031 - 2026")
        );
    }

    #[test]
    fn test_missing_placeholder() {
        assert_eq!(stamp_year("&copy; Jane Doe", "2026", 2027), None);
        assert_eq!(stamp_year("2026", "", 2027), None);
    }
}

//! Core types for portfolio-fx.
//!
//! These types describe what the page looks like to the reactors: the markup
//! found at mount time, per-event measurements, and per-element state bits.
//! They flow from the DOM adapter into the pure state modules and never hold
//! references to live DOM nodes.

use bitflags::bitflags;

// =============================================================================
// Notification Kind
// =============================================================================

/// Visual kind of a notification toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// CSS class name for this kind (`success` / `error`).
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

// =============================================================================
// Element Flags
// =============================================================================

bitflags! {
    /// One-way state bits tracked per element.
    ///
    /// Once set, a bit is never cleared by a reactor. This is what makes the
    /// progress reveal and the fade-in idempotent under repeated events.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ElementFlags: u8 {
        /// Progress bar width has been set to its target.
        const ANIMATED = 1 << 0;
        /// Section has intersected the viewport at least once.
        const FADED_IN = 1 << 1;
    }
}

// =============================================================================
// Page Markup
// =============================================================================

/// What the adapter found in the document at mount time.
///
/// Indices into these lists are the same indices used by
/// [`Target`](crate::renderer::Target) variants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMarkup {
    /// `href` attribute of every `.nav-links a`, in document order.
    pub nav_hrefs: Vec<String>,
    /// `id` of every `section`, in document order (`None` if absent).
    pub section_ids: Vec<Option<String>>,
    /// `data-width` of every `.progress` bar, in document order.
    pub progress_widths: Vec<String>,
    /// Number of `.project-card` elements.
    pub project_cards: usize,
    /// Inner HTML of `.copyright`, if present.
    pub copyright_html: Option<String>,
    /// Whether `#contactForm` exists.
    pub has_contact_form: bool,
    /// Whether a `.btn-outline` labelled "Download CV" exists.
    pub has_cv_button: bool,
}

// =============================================================================
// Measurements
// =============================================================================

/// Layout measurements taken on a scroll event.
///
/// `section_tops` are document offsets (`offsetTop`), `progress_tops` are
/// viewport-relative (`getBoundingClientRect().top`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub header_height: f64,
    pub section_tops: Vec<f64>,
    pub progress_tops: Vec<f64>,
}

/// One intersection-observer entry, reduced to what the fade-in reactor needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionEntry {
    /// Index into [`PageMarkup::section_ids`].
    pub section: usize,
    pub is_intersecting: bool,
}

// =============================================================================
// Form Values
// =============================================================================

/// Raw contact form values as read from `#name`, `#email`, `#message`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormValues {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_kind_classes() {
        assert_eq!(NotificationKind::Success.as_class(), "success");
        assert_eq!(NotificationKind::Error.as_class(), "error");
    }

    #[test]
    fn test_element_flags_are_independent() {
        let mut flags = ElementFlags::default();
        flags.insert(ElementFlags::ANIMATED);
        assert!(flags.contains(ElementFlags::ANIMATED));
        assert!(!flags.contains(ElementFlags::FADED_IN));
    }
}

//! Theme - the page's injected CSS and inline style values.
//!
//! The stylesheet itself belongs to the page. This module only owns the
//! pieces the script adds at runtime:
//!
//! - Two `<style>` blocks injected at startup (active nav link, fade-in)
//! - Inline styles and palette for notification toasts
//! - Header and project card transforms
//!
//! Values are kept as CSS strings so the DOM adapter can pass them through
//! untouched.

use crate::types::NotificationKind;

// =============================================================================
// Injected stylesheets
// =============================================================================

/// Highlight for the nav link matching the section in view.
pub const ACTIVE_NAV_CSS: &str = "
.nav-links a.active {
    color: var(--accent-cyan) !important;
}
.nav-links a.active::after {
    width: 100% !important;
}
";

/// Sections start hidden and fade in once observed. The hero is exempt.
pub const FADE_IN_CSS: &str = "
section {
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}
section.fade-in {
    opacity: 1;
    transform: translateY(0);
}
.hero {
    opacity: 1;
    transform: none;
}
";

// =============================================================================
// Class names
// =============================================================================

pub const ACTIVE_CLASS: &str = "active";
pub const ANIMATED_CLASS: &str = "animated";
pub const FADE_IN_CLASS: &str = "fade-in";
pub const ICON_BARS: &str = "fa-bars";
pub const ICON_TIMES: &str = "fa-times";

// =============================================================================
// Header
// =============================================================================

pub const HEADER_SHADOW: &str = "0 4px 20px rgba(0, 0, 0, 0.2)";
pub const HEADER_NO_SHADOW: &str = "none";
pub const HEADER_HIDDEN: &str = "translateY(-100%)";
pub const HEADER_SHOWN: &str = "translateY(0)";

// =============================================================================
// Project cards
// =============================================================================

pub const CARD_HOVER_TRANSFORM: &str = "translateY(-10px) rotate(1deg)";
pub const CARD_REST_TRANSFORM: &str = "translateY(0) rotate(0deg)";

// =============================================================================
// Notifications
// =============================================================================

/// Off-screen position a toast starts from and leaves to.
pub const NOTIFICATION_OFFSCREEN: &str = "translateX(120%)";
pub const NOTIFICATION_ONSCREEN: &str = "translateX(0)";

/// Background gradient for a toast kind.
pub const fn notification_background(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "linear-gradient(135deg, #00b894, #00d9ff)",
        NotificationKind::Error => "linear-gradient(135deg, #e74c3c, #ff7675)",
    }
}

/// Inline styles applied to a freshly created toast, in order.
pub fn notification_styles(kind: NotificationKind) -> [(&'static str, &'static str); 12] {
    [
        ("position", "fixed"),
        ("top", "20px"),
        ("right", "20px"),
        ("padding", "15px 25px"),
        ("border-radius", "8px"),
        ("color", "white"),
        ("font-weight", "500"),
        ("z-index", "9999"),
        ("box-shadow", "0 4px 12px rgba(0, 0, 0, 0.2)"),
        ("transition", "all 0.3s ease"),
        ("transform", NOTIFICATION_OFFSCREEN),
        ("background", notification_background(kind)),
    ]
}

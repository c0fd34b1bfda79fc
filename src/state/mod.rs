//! State Module - Page behavior and reactive state
//!
//! Every behavior on the page lives here as plain logic, independent of the
//! DOM:
//!
//! - **Typing** - Phrase type/delete animator, `typed_text` signal
//! - **Scroll** - Progress reveal, active nav link, sticky header, fade-in
//! - **Menu** - Mobile menu `menu_open` signal
//! - **Form** - Contact form validation
//! - **Notify** - Toast creation and timelines
//! - **Cards** - Project card hover and details stub
//! - **Cta** - CV download stub
//! - **Footer** - Copyright year stamp

pub mod cards;
pub mod cta;
pub mod footer;
pub mod form;
pub mod menu;
pub mod notify;
pub mod scroll;
pub mod typing;

pub use form::{is_valid_email, validate};
pub use menu::{close_menu, is_menu_open, reset_menu_state, toggle_menu};
pub use notify::NotificationEmitter;
pub use scroll::{
    active_section, reset_scroll_state, scroll_top, FadeInTracker, HeaderFrame, HeaderTracker,
    ProgressTracker,
};
pub use typing::{
    reset_typing_state, start_typing, typed_text, TypingAnimator, TypingFrame, TypingHandle,
    TypingMode,
};

/// Reset all thread-local page signals (for testing).
pub fn reset_page_state() {
    reset_typing_state();
    reset_scroll_state();
    reset_menu_state();
}

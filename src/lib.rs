//! # portfolio-fx
//!
//! Reactive interactivity for a static portfolio page, compiled to
//! WebAssembly.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! Page behavior is plain Rust that never touches the DOM. Handlers take
//! measurements, update signals and trackers, and produce [`Instruction`]s.
//! A [`Surface`] applies them: [`RecordingSurface`] in tests, `DomSurface`
//! in the browser.
//!
//! ```text
//! DOM event → Page handler → signals / trackers → Instruction → Surface
//! ```
//!
//! Time is abstracted the same way: the typing loop and toast timelines run
//! on a [`Scheduler`], either `setTimeout` or the virtual clock of
//! [`ManualScheduler`].
//!
//! ## Modules
//!
//! - [`types`] - Page markup, measurements, form values
//! - [`config`] - Tunable timings and thresholds (serde)
//! - [`error`] - Form, config and mount errors
//! - [`state`] - Page behaviors and reactive state
//! - [`pipeline`] - The [`Page`] controller, schedulers, browser mount
//! - [`renderer`] - Output instructions and surfaces
//! - [`theme`] - Class names, inline styles, injected CSS
//! - [`logging`] - Console backend for the `log` facade

pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod renderer;
pub mod state;
pub mod theme;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::{FadeInConfig, NotificationConfig, PageConfig, ScrollConfig, TypingConfig};
pub use error::{ConfigError, FormError, MountError};

pub use pipeline::{ManualScheduler, Page, Scheduler, Task};
#[cfg(target_arch = "wasm32")]
pub use pipeline::{mount, MountHandle, TimeoutScheduler};

pub use renderer::{Instruction, RecordingSurface, Surface, Target};
#[cfg(target_arch = "wasm32")]
pub use renderer::DomSurface;

pub use state::{
    // Typing
    typed_text, start_typing, reset_typing_state,
    TypingAnimator, TypingFrame, TypingHandle, TypingMode,
    // Scroll
    scroll_top, active_section, reset_scroll_state,
    FadeInTracker, HeaderFrame, HeaderTracker, ProgressTracker,
    // Menu
    is_menu_open, toggle_menu, close_menu, reset_menu_state,
    // Form
    is_valid_email, validate,
    // Notifications
    NotificationEmitter,
    reset_page_state,
};

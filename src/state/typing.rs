//! Typing Animator - cyclic type/pause/delete loop over a fixed phrase list
//!
//! A two-mode state machine:
//!
//! - **Typing**: reveal one more character; on full length switch to
//!   Deleting and pause.
//! - **Deleting**: hide one character; on empty advance to the next phrase
//!   (wrapping) and pause.
//!
//! The animator never touches the page. Each [`TypingAnimator::tick`] returns a
//! [`TypingFrame`] carrying the text to show and the delay before the next
//! tick. [`start_typing`] drives it on a [`Scheduler`], writing each frame
//! into the `typed_text` signal.
//!
//! # Example
//!
//! ```
//! use portfolio_fx::config::TypingConfig;
//! use portfolio_fx::state::typing::TypingAnimator;
//!
//! let config = TypingConfig {
//!     phrases: vec!["Hi".into()],
//!     ..Default::default()
//! };
//! let mut animator = TypingAnimator::new(&config).unwrap();
//!
//! let texts: Vec<String> = animator.by_ref().take(4).map(|f| f.text).collect();
//! assert_eq!(texts, ["H", "Hi", "H", ""]);
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::{signal, Signal};

use crate::config::TypingConfig;
use crate::error::ConfigError;
use crate::pipeline::scheduler::Scheduler;

// =============================================================================
// TYPES
// =============================================================================

/// Animator mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypingMode {
    #[default]
    Typing,
    Deleting,
}

/// Result of one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    /// Text to display after this tick.
    pub text: String,
    /// Delay before the next tick.
    pub delay_ms: u32,
    /// Mode the next tick will run in.
    pub mode: TypingMode,
    /// Phrase the next tick will work on.
    pub phrase_index: usize,
    /// Characters visible after this tick.
    pub char_index: usize,
}

/// Delays copied out of [`TypingConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Delays {
    typing: u32,
    pause_at_end: u32,
    deleting: u32,
    pause_before_next: u32,
}

// =============================================================================
// ANIMATOR
// =============================================================================

/// Explicit animator state.
///
/// `char_index` counts characters, not bytes, and never exceeds the current
/// phrase's character length.
#[derive(Debug, Clone)]
pub struct TypingAnimator {
    phrases: Vec<Vec<char>>,
    phrase_index: usize,
    char_index: usize,
    mode: TypingMode,
    delays: Delays,
}

impl TypingAnimator {
    /// Build an animator in its initial state (Typing, phrase 0, char 0).
    ///
    /// Fails on an empty phrase list or an empty phrase, either of which would
    /// break the `char_index <= len` invariant.
    pub fn new(config: &TypingConfig) -> Result<Self, ConfigError> {
        if config.phrases.is_empty() {
            return Err(ConfigError::EmptyPhraseList);
        }
        if let Some(index) = config.phrases.iter().position(|p| p.is_empty()) {
            return Err(ConfigError::EmptyPhrase(index));
        }

        Ok(Self {
            phrases: config.phrases.iter().map(|p| p.chars().collect()).collect(),
            phrase_index: 0,
            char_index: 0,
            mode: TypingMode::Typing,
            delays: Delays {
                typing: config.type_delay_ms,
                pause_at_end: config.pause_at_end_ms,
                deleting: config.delete_delay_ms,
                pause_before_next: config.pause_before_next_ms,
            },
        })
    }

    pub fn mode(&self) -> TypingMode {
        self.mode
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// Character length of the current phrase.
    pub fn current_len(&self) -> usize {
        self.phrases[self.phrase_index].len()
    }

    /// Run one transition.
    pub fn tick(&mut self) -> TypingFrame {
        let len = self.current_len();
        let text: String;
        let delay_ms;

        match self.mode {
            TypingMode::Typing => {
                self.char_index += 1;
                text = self.visible_text();
                if self.char_index == len {
                    self.mode = TypingMode::Deleting;
                    delay_ms = self.delays.pause_at_end;
                } else {
                    delay_ms = self.delays.typing;
                }
            }
            TypingMode::Deleting => {
                self.char_index -= 1;
                text = self.visible_text();
                if self.char_index == 0 {
                    self.mode = TypingMode::Typing;
                    self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                    delay_ms = self.delays.pause_before_next;
                } else {
                    delay_ms = self.delays.deleting;
                }
            }
        }

        TypingFrame {
            text,
            delay_ms,
            mode: self.mode,
            phrase_index: self.phrase_index,
            char_index: self.char_index,
        }
    }

    fn visible_text(&self) -> String {
        self.phrases[self.phrase_index][..self.char_index]
            .iter()
            .collect()
    }
}

/// Infinite sequence of frames.
impl Iterator for TypingAnimator {
    type Item = TypingFrame;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.tick())
    }
}

// =============================================================================
// REACTIVE STATE
// =============================================================================

thread_local! {
    static TYPED_TEXT: Signal<String> = signal(String::new());
}

/// Text currently shown in `.typing-text`.
pub fn typed_text() -> String {
    TYPED_TEXT.with(|s| s.get())
}

/// Write the typed text.
pub fn set_typed_text(text: String) {
    TYPED_TEXT.with(|s| s.set(text));
}

/// Reset typing state (for testing).
pub fn reset_typing_state() {
    TYPED_TEXT.with(|s| s.set(String::new()));
}

// =============================================================================
// SCHEDULING
// =============================================================================

/// Handle to a running animation loop.
///
/// The loop re-arms itself forever; dropping the handle does not stop it.
/// Call [`TypingHandle::stop`] to let the next pending tick become a no-op.
#[derive(Clone)]
pub struct TypingHandle {
    animator: Rc<RefCell<TypingAnimator>>,
    running: Rc<Cell<bool>>,
}

impl TypingHandle {
    pub fn stop(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Snapshot of the animator state.
    pub fn animator(&self) -> TypingAnimator {
        self.animator.borrow().clone()
    }
}

/// Start the loop: first tick after `start_delay_ms`, then each frame's delay.
pub fn start_typing(
    animator: TypingAnimator,
    start_delay_ms: u32,
    scheduler: Rc<dyn Scheduler>,
) -> TypingHandle {
    let handle = TypingHandle {
        animator: Rc::new(RefCell::new(animator)),
        running: Rc::new(Cell::new(true)),
    };
    arm(handle.clone(), scheduler, start_delay_ms);
    handle
}

fn arm(handle: TypingHandle, scheduler: Rc<dyn Scheduler>, delay_ms: u32) {
    let next_scheduler = scheduler.clone();
    scheduler.schedule(
        delay_ms,
        Box::new(move || {
            if !handle.is_running() {
                return;
            }
            let frame = handle.animator.borrow_mut().tick();
            log::trace!("typing tick: {:?} next in {}ms", frame.text, frame.delay_ms);
            set_typed_text(frame.text);
            arm(handle, next_scheduler, frame.delay_ms);
        }),
    );
}

// =============================================================================
// TESTS
// =============================================================================

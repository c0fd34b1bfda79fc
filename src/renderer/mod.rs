//! Page renderer - the "blind" output layer.
//!
//! The renderer knows only about instructions. It doesn't understand scroll
//! positions, animation timing, or form validation. It simply takes an
//! [`Instruction`] addressed to a [`Target`] and applies it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Reactors / Handlers                           │
//! │   typing · scroll · fade-in · menu · form · notifications       │
//! └─────────────────────────────────────────────────────────────────┘
//!                                   │
//!                                   ▼
//!                          ┌───────────────┐
//!                          │  Instruction  │  ← one presentation change
//!                          └───────────────┘
//!                                   │
//!                                   ▼
//!                          ┌───────────────┐
//!                          │    Surface    │  ← This module
//!                          └───────────────┘
//!                                   │
//!                                   ▼
//!                        DOM (wasm32) / recorder
//! ```
//!
//! # Surfaces
//!
//! - **[`RecordingSurface`]**: Keeps every applied instruction in order.
//!   Used by tests and by hosts that want to inspect output.
//! - **`DomSurface`** (wasm32 only): Applies instructions to live elements
//!   through `web-sys`.

use std::cell::RefCell;

use crate::types::NotificationKind;

#[cfg(target_arch = "wasm32")]
pub mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::DomSurface;

// =============================================================================
// Target
// =============================================================================

/// Addressable element on the page.
///
/// Indexed variants refer to positions in
/// [`PageMarkup`](crate::types::PageMarkup) lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// `header`
    Header,
    /// `.nav-links`
    NavMenu,
    /// `.mobile-menu-btn i`
    MenuIcon,
    /// `.nav-links a` by index
    NavLink(usize),
    /// `section` by index
    Section(usize),
    /// `.progress` by index
    ProgressBar(usize),
    /// `.typing-text`
    TypingText,
    /// `.project-card` by index
    ProjectCard(usize),
    /// `.copyright`
    Copyright,
    /// Toast created by [`Instruction::CreateNotification`]
    Notification(u32),
}

// =============================================================================
// Instruction
// =============================================================================

/// A single presentation change.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Replace text content.
    SetText { target: Target, text: String },
    /// Replace inner HTML.
    SetHtml { target: Target, html: String },
    /// Set one inline style property.
    SetStyle {
        target: Target,
        property: &'static str,
        value: String,
    },
    AddClass { target: Target, class: &'static str },
    RemoveClass { target: Target, class: &'static str },
    /// Append a `<style>` block to `<head>`.
    InjectStyle { css: &'static str },
    /// Append a toast `div` to `<body>`.
    CreateNotification {
        id: u32,
        kind: NotificationKind,
        text: String,
    },
    /// Detach an element from the document.
    Remove { target: Target },
    /// Reset `#contactForm`.
    ResetForm,
    /// Scroll the window.
    ScrollTo { top: f64, smooth: bool },
}

impl Instruction {
    /// Shorthand for [`Instruction::SetStyle`].
    pub fn style(target: Target, property: &'static str, value: impl Into<String>) -> Self {
        Self::SetStyle {
            target,
            property,
            value: value.into(),
        }
    }

    /// Element this instruction touches, if any.
    pub fn target(&self) -> Option<Target> {
        match self {
            Self::SetText { target, .. }
            | Self::SetHtml { target, .. }
            | Self::SetStyle { target, .. }
            | Self::AddClass { target, .. }
            | Self::RemoveClass { target, .. }
            | Self::Remove { target } => Some(*target),
            Self::CreateNotification { id, .. } => Some(Target::Notification(*id)),
            Self::InjectStyle { .. } | Self::ResetForm | Self::ScrollTo { .. } => None,
        }
    }
}

// =============================================================================
// Surface
// =============================================================================

/// Something that applies instructions.
///
/// Takes `&self`: surfaces are shared between the page controller, render
/// effects, and scheduled timer callbacks on a single thread.
pub trait Surface {
    fn apply(&self, instruction: Instruction);

    /// Apply a batch in order.
    fn apply_all(&self, instructions: Vec<Instruction>) {
        for instruction in instructions {
            self.apply(instruction);
        }
    }
}

/// Surface that records instructions instead of touching a document.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    log: RefCell<Vec<Instruction>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything applied so far.
    pub fn instructions(&self) -> Vec<Instruction> {
        self.log.borrow().clone()
    }

    /// Remove and return everything applied so far.
    pub fn take(&self) -> Vec<Instruction> {
        std::mem::take(&mut *self.log.borrow_mut())
    }

    /// Instructions addressed to `target`.
    pub fn for_target(&self, target: Target) -> Vec<Instruction> {
        self.log
            .borrow()
            .iter()
            .filter(|i| i.target() == Some(target))
            .cloned()
            .collect()
    }

    /// Last value written to `property` on `target`.
    pub fn last_style(&self, target: Target, property: &str) -> Option<String> {
        self.log.borrow().iter().rev().find_map(|i| match i {
            Instruction::SetStyle {
                target: t,
                property: p,
                value,
            } if *t == target && *p == property => Some(value.clone()),
            _ => None,
        })
    }

    /// Whether `class` is currently on `target`, replaying add/remove in order.
    pub fn has_class(&self, target: Target, class: &str) -> bool {
        self.log
            .borrow()
            .iter()
            .fold(false, |present, i| match i {
                Instruction::AddClass { target: t, class: c } if *t == target && *c == class => {
                    true
                }
                Instruction::RemoveClass { target: t, class: c }
                    if *t == target && *c == class =>
                {
                    false
                }
                _ => present,
            })
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

impl Surface for RecordingSurface {
    fn apply(&self, instruction: Instruction) {
        self.log.borrow_mut().push(instruction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_surface_keeps_order() {
        let surface = RecordingSurface::new();
        surface.apply(Instruction::ResetForm);
        surface.apply(Instruction::ScrollTo {
            top: 10.0,
            smooth: true,
        });

        let log = surface.instructions();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0], Instruction::ResetForm);
    }

    #[test]
    fn test_has_class_replays_add_remove() {
        let surface = RecordingSurface::new();
        let link = Target::NavLink(1);

        surface.apply(Instruction::AddClass {
            target: link,
            class: "active",
        });
        assert!(surface.has_class(link, "active"));

        surface.apply(Instruction::RemoveClass {
            target: link,
            class: "active",
        });
        assert!(!surface.has_class(link, "active"));
        assert!(!surface.has_class(Target::NavLink(0), "active"));
    }

    #[test]
    fn test_last_style_picks_latest() {
        let surface = RecordingSurface::new();
        surface.apply(Instruction::style(Target::Header, "transform", "translateY(0)"));
        surface.apply(Instruction::style(
            Target::Header,
            "transform",
            "translateY(-100%)",
        ));

        assert_eq!(
            surface.last_style(Target::Header, "transform").as_deref(),
            Some("translateY(-100%)")
        );
        assert_eq!(surface.last_style(Target::Header, "box-shadow"), None);
    }

    #[test]
    fn test_notification_target() {
        let create = Instruction::CreateNotification {
            id: 7,
            kind: NotificationKind::Error,
            text: "x".into(),
        };
        assert_eq!(create.target(), Some(Target::Notification(7)));
        assert_eq!(Instruction::ResetForm.target(), None);
    }
}

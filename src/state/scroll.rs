//! Scroll Reactors - presentation driven by scroll position and intersection
//!
//! Each reactor is a pure function from measurements plus its own tracker to a
//! list of [`Instruction`]s:
//!
//! - **Progress bars** - width set to `data-width%` once the bar's top edge
//!   is within the viewport minus a margin; never re-triggers
//! - **Active nav link** - link for the last section whose offset (minus
//!   header height and look-ahead) is at or above the scroll position
//! - **Sticky header** - shadow past a threshold; hidden while scrolling down
//!   past a second threshold, shown otherwise
//! - **Fade-in** - sections marked once they intersect; one-way
//!
//! All reactors are O(number of elements) and idempotent: replaying the same
//! measurements produces the same visual state.

use spark_signals::{signal, Signal};

use crate::config::ScrollConfig;
use crate::renderer::{Instruction, Target};
use crate::theme;
use crate::types::{ElementFlags, IntersectionEntry};

// =============================================================================
// REACTIVE STATE
// =============================================================================

thread_local! {
    static SCROLL_TOP: Signal<f64> = signal(0.0);
    static ACTIVE_SECTION: Signal<Option<String>> = signal(None);
}

/// Last observed vertical scroll offset.
pub fn scroll_top() -> f64 {
    SCROLL_TOP.with(|s| s.get())
}

/// Id of the section currently highlighted in the nav.
pub fn active_section() -> Option<String> {
    ACTIVE_SECTION.with(|s| s.get())
}

pub(crate) fn set_scroll_top(value: f64) {
    SCROLL_TOP.with(|s| s.set(value));
}

pub(crate) fn set_active_section(value: Option<String>) {
    ACTIVE_SECTION.with(|s| s.set(value));
}

/// Reset scroll state (for testing).
pub fn reset_scroll_state() {
    SCROLL_TOP.with(|s| s.set(0.0));
    ACTIVE_SECTION.with(|s| s.set(None));
}

// =============================================================================
// PROGRESS BARS
// =============================================================================

/// Per-bar target width and reveal flag.
#[derive(Debug, Clone, Default)]
pub struct ProgressTracker {
    widths: Vec<String>,
    flags: Vec<ElementFlags>,
}

impl ProgressTracker {
    /// `widths` are raw `data-width` values (`"80"`, not `"80%"`).
    pub fn new(widths: Vec<String>) -> Self {
        let flags = vec![ElementFlags::empty(); widths.len()];
        Self { widths, flags }
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    pub fn is_animated(&self, index: usize) -> bool {
        self.flags
            .get(index)
            .is_some_and(|f| f.contains(ElementFlags::ANIMATED))
    }

    /// Reveal every bar whose top edge is within `viewport_height - margin`.
    ///
    /// `tops` are viewport-relative, one per bar. Bars already revealed are
    /// skipped, so each bar yields instructions at most once.
    pub fn reveal(&mut self, tops: &[f64], viewport_height: f64, margin: f64) -> Vec<Instruction> {
        let limit = viewport_height - margin;
        let mut out = Vec::new();

        for (index, &top) in tops.iter().enumerate().take(self.widths.len()) {
            if top > limit || self.flags[index].contains(ElementFlags::ANIMATED) {
                continue;
            }
            let target = Target::ProgressBar(index);
            out.push(Instruction::style(
                target,
                "width",
                format!("{}%", self.widths[index]),
            ));
            out.push(Instruction::AddClass {
                target,
                class: theme::ANIMATED_CLASS,
            });
            self.flags[index].insert(ElementFlags::ANIMATED);
        }

        out
    }
}

// =============================================================================
// ACTIVE NAV LINK
// =============================================================================

/// Index of the last section (document order) whose
/// `top - header_height - look_ahead` is at or above `scroll_top`.
pub fn current_section(
    section_tops: &[f64],
    scroll_top: f64,
    header_height: f64,
    look_ahead: f64,
) -> Option<usize> {
    section_tops
        .iter()
        .rposition(|&top| scroll_top >= top - header_height - look_ahead)
}

/// Class changes marking only the link whose `href` is `#<active_id>`.
///
/// With no active id every link loses the class.
pub fn nav_link_instructions(nav_hrefs: &[String], active_id: Option<&str>) -> Vec<Instruction> {
    nav_hrefs
        .iter()
        .enumerate()
        .map(|(index, href)| {
            let target = Target::NavLink(index);
            let is_active = active_id.is_some_and(|id| href.strip_prefix('#') == Some(id));
            if is_active {
                Instruction::AddClass {
                    target,
                    class: theme::ACTIVE_CLASS,
                }
            } else {
                Instruction::RemoveClass {
                    target,
                    class: theme::ACTIVE_CLASS,
                }
            }
        })
        .collect()
}

// =============================================================================
// STICKY HEADER
// =============================================================================

/// Header presentation for one scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderFrame {
    pub shadow: bool,
    pub hidden: bool,
}

impl HeaderFrame {
    pub fn instructions(self) -> Vec<Instruction> {
        vec![
            Instruction::style(
                Target::Header,
                "box-shadow",
                if self.shadow {
                    theme::HEADER_SHADOW
                } else {
                    theme::HEADER_NO_SHADOW
                },
            ),
            Instruction::style(
                Target::Header,
                "transform",
                if self.hidden {
                    theme::HEADER_HIDDEN
                } else {
                    theme::HEADER_SHOWN
                },
            ),
        ]
    }
}

/// Tracks the previous scroll offset to derive direction.
#[derive(Debug, Clone, Default)]
pub struct HeaderTracker {
    last_scroll_top: f64,
}

impl HeaderTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_scroll_top(&self) -> f64 {
        self.last_scroll_top
    }

    /// Compute the header frame and record `scroll_top` as the new baseline.
    pub fn update(&mut self, scroll_top: f64, config: &ScrollConfig) -> HeaderFrame {
        let frame = HeaderFrame {
            shadow: scroll_top > config.shadow_threshold,
            hidden: scroll_top > self.last_scroll_top && scroll_top > config.hide_threshold,
        };
        self.last_scroll_top = scroll_top;
        frame
    }
}

// =============================================================================
// FADE-IN
// =============================================================================

/// One-way fade-in marks per section.
#[derive(Debug, Clone, Default)]
pub struct FadeInTracker {
    flags: Vec<ElementFlags>,
}

impl FadeInTracker {
    pub fn new(sections: usize) -> Self {
        Self {
            flags: vec![ElementFlags::empty(); sections],
        }
    }

    pub fn is_faded_in(&self, section: usize) -> bool {
        self.flags
            .get(section)
            .is_some_and(|f| f.contains(ElementFlags::FADED_IN))
    }

    /// Mark intersecting sections. Entries for already-faded or unknown
    /// sections, and non-intersecting entries, produce nothing.
    pub fn observe(&mut self, entries: &[IntersectionEntry]) -> Vec<Instruction> {
        let mut out = Vec::new();
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            let Some(flags) = self.flags.get_mut(entry.section) else {
                continue;
            };
            if flags.contains(ElementFlags::FADED_IN) {
                continue;
            }
            flags.insert(ElementFlags::FADED_IN);
            out.push(Instruction::AddClass {
                target: Target::Section(entry.section),
                class: theme::FADE_IN_CLASS,
            });
        }
        out
    }
}

// =============================================================================
// SMOOTH SCROLL
// =============================================================================

/// Element id an in-page anchor points at. `"#"` and non-fragment hrefs
/// point nowhere.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll offset that puts a section's top just under the fixed header.
pub fn smooth_scroll_top(section_top: f64, header_height: f64) -> f64 {
    section_top - header_height
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reveals_once() {
        let mut tracker = ProgressTracker::new(vec!["80".into()]);

        // Below the fold
        assert!(tracker.reveal(&[900.0], 800.0, 50.0).is_empty());

        let first = tracker.reveal(&[700.0], 800.0, 50.0);
        assert_eq!(
            first[0],
            Instruction::style(Target::ProgressBar(0), "width", "80%")
        );
        assert!(tracker.is_animated(0));

        // Repeated scroll events change nothing
        assert!(tracker.reveal(&[700.0], 800.0, 50.0).is_empty());
        assert!(tracker.reveal(&[100.0], 800.0, 50.0).is_empty());
    }

    #[test]
    fn test_progress_margin_boundary() {
        let mut tracker = ProgressTracker::new(vec!["40".into(), "60".into()]);
        let out = tracker.reveal(&[750.0, 750.1], 800.0, 50.0);

        assert!(tracker.is_animated(0));
        assert!(!tracker.is_animated(1));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_current_section_picks_last_qualifying() {
        let tops = [0.0, 600.0, 1200.0];
        // header 80 + look-ahead 100 => section 1 qualifies from 420
        assert_eq!(current_section(&tops, 0.0, 80.0, 100.0), Some(0));
        assert_eq!(current_section(&tops, 419.0, 80.0, 100.0), Some(0));
        assert_eq!(current_section(&tops, 420.0, 80.0, 100.0), Some(1));
        assert_eq!(current_section(&tops, 5000.0, 80.0, 100.0), Some(2));
    }

    #[test]
    fn test_current_section_none_above_first() {
        assert_eq!(current_section(&[500.0], 0.0, 80.0, 100.0), None);
        assert_eq!(current_section(&[], 100.0, 80.0, 100.0), None);
    }

    #[test]
    fn test_nav_links_single_active() {
        let hrefs = vec!["#home".to_string(), "#about".to_string(), "#".to_string()];
        let out = nav_link_instructions(&hrefs, Some("about"));

        assert_eq!(
            out,
            vec![
                Instruction::RemoveClass {
                    target: Target::NavLink(0),
                    class: "active"
                },
                Instruction::AddClass {
                    target: Target::NavLink(1),
                    class: "active"
                },
                Instruction::RemoveClass {
                    target: Target::NavLink(2),
                    class: "active"
                },
            ]
        );
    }

    #[test]
    fn test_nav_links_none_active() {
        let hrefs = vec!["#".to_string(), "#home".to_string()];
        let out = nav_link_instructions(&hrefs, None);
        assert!(out
            .iter()
            .all(|i| matches!(i, Instruction::RemoveClass { .. })));
    }

    #[test]
    fn test_header_shadow_and_direction() {
        let config = ScrollConfig::default();
        let mut tracker = HeaderTracker::new();

        let f = tracker.update(30.0, &config);
        assert_eq!(f, HeaderFrame { shadow: false, hidden: false });

        // Down past 50: shadow, still shown (below 200)
        let f = tracker.update(150.0, &config);
        assert_eq!(f, HeaderFrame { shadow: true, hidden: false });

        // Down past 200: hidden
        let f = tracker.update(400.0, &config);
        assert_eq!(f, HeaderFrame { shadow: true, hidden: true });

        // Up: shown again
        let f = tracker.update(350.0, &config);
        assert_eq!(f, HeaderFrame { shadow: true, hidden: false });

        // Same offset is not "down"
        let f = tracker.update(350.0, &config);
        assert!(!f.hidden);
        assert_eq!(tracker.last_scroll_top(), 350.0);
    }

    #[test]
    fn test_header_frame_instructions() {
        let out = HeaderFrame { shadow: true, hidden: true }.instructions();
        assert_eq!(
            out,
            vec![
                Instruction::style(Target::Header, "box-shadow", theme::HEADER_SHADOW),
                Instruction::style(Target::Header, "transform", "translateY(-100%)"),
            ]
        );
    }

    #[test]
    fn test_fade_in_is_one_way() {
        let mut tracker = FadeInTracker::new(2);
        let enter = IntersectionEntry { section: 1, is_intersecting: true };
        let leave = IntersectionEntry { section: 1, is_intersecting: false };

        assert!(tracker.observe(&[leave]).is_empty());
        assert_eq!(tracker.observe(&[enter]).len(), 1);
        assert!(tracker.is_faded_in(1));

        assert!(tracker.observe(&[leave]).is_empty());
        assert!(tracker.is_faded_in(1));
        assert!(tracker.observe(&[enter]).is_empty());
    }

    #[test]
    fn test_fade_in_ignores_unknown_sections() {
        let mut tracker = FadeInTracker::new(1);
        let entry = IntersectionEntry { section: 9, is_intersecting: true };
        assert!(tracker.observe(&[entry]).is_empty());
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#about"), Some("about"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/cv.pdf"), None);
        assert_eq!(smooth_scroll_top(900.0, 80.0), 820.0);
    }

    #[test]
    fn test_scroll_signals() {
        reset_scroll_state();
        set_scroll_top(120.0);
        set_active_section(Some("about".into()));
        assert_eq!(scroll_top(), 120.0);
        assert_eq!(active_section().as_deref(), Some("about"));

        reset_scroll_state();
        assert_eq!(active_section(), None);
    }
}

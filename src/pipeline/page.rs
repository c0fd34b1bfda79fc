//! Page controller - handlers and render effects.
//!
//! The [`Page`] owns one tracker per reactor and exposes one handler per
//! page event. Handlers take plain measurements or values, so they can be
//! driven by the DOM adapter or called directly in tests.
//!
//! Reactive page state (typed text, active section, menu open) lives in
//! thread-local signals. The page binds each one to the surface with a render
//! effect: handlers write signals, effects emit instructions.
//!
//! ```text
//! DOM event → handler → signal.set() → render effect → Surface::apply
//!                    └─────────── direct instructions ────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use portfolio_fx::config::PageConfig;
//! use portfolio_fx::pipeline::page::Page;
//! use portfolio_fx::pipeline::scheduler::ManualScheduler;
//! use portfolio_fx::renderer::RecordingSurface;
//! use portfolio_fx::types::PageMarkup;
//!
//! let surface = Rc::new(RecordingSurface::new());
//! let scheduler = Rc::new(ManualScheduler::new());
//! let page = Page::new(PageConfig::default(), PageMarkup::default(), surface.clone(), scheduler.clone())
//!     .unwrap();
//!
//! page.start(2027);
//! scheduler.advance(1000);
//! assert_eq!(portfolio_fx::state::typed_text(), "C");
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::effect;

use crate::config::PageConfig;
use crate::error::{ConfigError, FormError};
use crate::renderer::{Instruction, Surface, Target};
use crate::state::{cards, cta, footer, form, menu, scroll, typing};
use crate::state::{
    FadeInTracker, HeaderTracker, NotificationEmitter, ProgressTracker, TypingAnimator,
    TypingHandle,
};
use crate::theme;
use crate::types::{FormValues, IntersectionEntry, PageMarkup, ScrollSnapshot};

use super::scheduler::Scheduler;

// =============================================================================
// Page
// =============================================================================

/// Controller for one mounted page.
pub struct Page {
    config: PageConfig,
    markup: PageMarkup,
    surface: Rc<dyn Surface>,
    scheduler: Rc<dyn Scheduler>,
    notifications: NotificationEmitter,
    progress: RefCell<ProgressTracker>,
    header: RefCell<HeaderTracker>,
    fade_in: RefCell<FadeInTracker>,
    typing: RefCell<Option<TypingHandle>>,
    year_stamped: Cell<bool>,
    running: Rc<Cell<bool>>,
    stop_effects: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl Page {
    /// Build the controller and its render effects.
    ///
    /// Effects skip their first run: the markup already shows the initial
    /// state, and only later signal changes are rendered.
    pub fn new(
        config: PageConfig,
        markup: PageMarkup,
        surface: Rc<dyn Surface>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let running = Rc::new(Cell::new(true));
        let nav_hrefs = markup.nav_hrefs.clone();

        let stop_effects = vec![
            bind(surface.clone(), running.clone(), typing::typed_text, |text| {
                vec![Instruction::SetText {
                    target: Target::TypingText,
                    text,
                }]
            }),
            bind(
                surface.clone(),
                running.clone(),
                scroll::active_section,
                move |id| scroll::nav_link_instructions(&nav_hrefs, id.as_deref()),
            ),
            bind(
                surface.clone(),
                running.clone(),
                menu::is_menu_open,
                menu::menu_instructions,
            ),
        ];

        Ok(Self {
            notifications: NotificationEmitter::new(
                config.notification.clone(),
                surface.clone(),
                scheduler.clone(),
            ),
            progress: RefCell::new(ProgressTracker::new(markup.progress_widths.clone())),
            header: RefCell::new(HeaderTracker::new()),
            fade_in: RefCell::new(FadeInTracker::new(markup.section_ids.len())),
            typing: RefCell::new(None),
            year_stamped: Cell::new(false),
            running,
            stop_effects: RefCell::new(stop_effects),
            config,
            markup,
            surface,
            scheduler,
        })
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn markup(&self) -> &PageMarkup {
        &self.markup
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn notifications(&self) -> &NotificationEmitter {
        &self.notifications
    }

    /// Typing loop handle, once started.
    pub fn typing(&self) -> Option<TypingHandle> {
        self.typing.borrow().clone()
    }

    // =========================================================================
    // Startup
    // =========================================================================

    /// One-time startup: inject styles, stamp the footer year, arm the typing
    /// loop. Calling it again does nothing.
    pub fn start(&self, current_year: i32) {
        if self.typing.borrow().is_some() {
            log::warn!("page already started");
            return;
        }

        self.surface.apply(Instruction::InjectStyle {
            css: theme::ACTIVE_NAV_CSS,
        });
        self.surface.apply(Instruction::InjectStyle {
            css: theme::FADE_IN_CSS,
        });

        self.stamp_year(current_year);

        match TypingAnimator::new(&self.config.typing) {
            Ok(animator) => {
                let handle = typing::start_typing(
                    animator,
                    self.config.typing.start_delay_ms,
                    self.scheduler.clone(),
                );
                *self.typing.borrow_mut() = Some(handle);
            }
            // validate() already rejects these.
            Err(err) => log::error!("typing animation disabled: {}", err),
        }

        log::info!("Portfolio initialized successfully!");
    }

    fn stamp_year(&self, year: i32) {
        if self.year_stamped.replace(true) {
            return;
        }
        let Some(html) = self.markup.copyright_html.as_deref() else {
            return;
        };
        if let Some(html) = footer::stamp_year(html, &self.config.copyright_placeholder, year) {
            self.surface.apply(Instruction::SetHtml {
                target: Target::Copyright,
                html,
            });
        }
    }

    /// Stop the typing loop and render effects. Toasts already shown finish
    /// their own timeline.
    pub fn stop(&self) {
        self.running.set(false);
        if let Some(handle) = self.typing.borrow().as_ref() {
            handle.stop();
        }
        for stop in self.stop_effects.borrow_mut().drain(..) {
            stop();
        }
    }

    // =========================================================================
    // Scroll & intersection
    // =========================================================================

    /// Reveal progress bars now in view. Also run once at startup for bars
    /// already visible.
    pub fn reveal_progress(&self, progress_tops: &[f64], viewport_height: f64) {
        let out = self.progress.borrow_mut().reveal(
            progress_tops,
            viewport_height,
            self.config.scroll.progress_margin,
        );
        self.surface.apply_all(out);
    }

    /// Window scroll: progress bars, active nav link, sticky header.
    pub fn on_scroll(&self, snapshot: &ScrollSnapshot) {
        if !self.is_running() {
            return;
        }
        self.reveal_progress(&snapshot.progress_tops, snapshot.viewport_height);

        scroll::set_scroll_top(snapshot.scroll_top);

        let current = scroll::current_section(
            &snapshot.section_tops,
            snapshot.scroll_top,
            snapshot.header_height,
            self.config.scroll.nav_look_ahead,
        );
        let id = current.and_then(|i| self.markup.section_ids.get(i).cloned().flatten());
        scroll::set_active_section(id);

        let frame = self
            .header
            .borrow_mut()
            .update(snapshot.scroll_top, &self.config.scroll);
        self.surface.apply_all(frame.instructions());
    }

    /// Intersection observer callback: fade sections in.
    pub fn on_intersection(&self, entries: &[IntersectionEntry]) {
        if !self.is_running() {
            return;
        }
        let out = self.fade_in.borrow_mut().observe(entries);
        self.surface.apply_all(out);
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// `.mobile-menu-btn` click.
    pub fn on_menu_toggle(&self) {
        let open = menu::toggle_menu();
        log::debug!("mobile menu {}", if open { "opened" } else { "closed" });
    }

    /// `.nav-links a` click.
    pub fn on_nav_link_click(&self) {
        menu::close_menu();
    }

    /// `a[href^="#"]` click.
    ///
    /// `resolve` maps an element id to its `offsetTop`. Returns the scroll
    /// offset applied, or `None` for `"#"` and unknown targets.
    pub fn on_anchor_click<F>(&self, href: &str, header_height: f64, resolve: F) -> Option<f64>
    where
        F: FnOnce(&str) -> Option<f64>,
    {
        let id = scroll::anchor_target(href)?;
        let section_top = resolve(id)?;
        let top = scroll::smooth_scroll_top(section_top, header_height);
        self.surface.apply(Instruction::ScrollTo { top, smooth: true });
        Some(top)
    }

    // =========================================================================
    // Form & buttons
    // =========================================================================

    /// `#contactForm` submit.
    ///
    /// On failure shows an error toast and leaves the fields alone. On
    /// success shows a success toast and resets the form. Ignored when the
    /// page has no contact form.
    pub fn on_submit(&self, values: &FormValues) -> Result<(), FormError> {
        if !self.markup.has_contact_form {
            return Ok(());
        }
        if let Err(err) = form::validate(values) {
            log::debug!("contact form rejected: {}", err);
            self.notifications.error(&err.to_string());
            return Err(err);
        }

        self.notifications.success(form::SUCCESS_MESSAGE);
        self.surface.apply(Instruction::ResetForm);
        log::debug!(
            "Form submitted: name={:?} email={:?} message={:?}",
            values.name,
            values.email,
            values.message
        );
        Ok(())
    }

    /// CV button click. Ignored when the page has no CV button.
    pub fn on_cv_click(&self) {
        if self.markup.has_cv_button {
            self.notifications.success(cta::CV_MESSAGE);
        }
    }

    pub fn on_card_enter(&self, index: usize) {
        if index < self.markup.project_cards {
            self.surface.apply(cards::card_enter(index));
        }
    }

    pub fn on_card_leave(&self, index: usize) {
        if index < self.markup.project_cards {
            self.surface.apply(cards::card_leave(index));
        }
    }

    /// `.project-card .btn` click with the enclosing card's `h3` text.
    pub fn on_details_click(&self, title: &str) {
        self.notifications.success(&cards::details_message(title));
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.stop();
    }
}

// =============================================================================
// Render effects
// =============================================================================

/// Bind a signal read to the surface. The returned closure stops the effect.
fn bind<T, R, F>(
    surface: Rc<dyn Surface>,
    running: Rc<Cell<bool>>,
    read: R,
    render: F,
) -> Box<dyn FnOnce()>
where
    T: 'static,
    R: Fn() -> T + 'static,
    F: Fn(T) -> Vec<Instruction> + 'static,
{
    let mut primed = false;
    let stop = effect(move || {
        // Read first so the dependency is tracked on every run.
        let value = read();
        if !primed {
            primed = true;
            return;
        }
        if !running.get() {
            return;
        }
        surface.apply_all(render(value));
    });
    Box::new(stop)
}

// =============================================================================
// Tests
// =============================================================================

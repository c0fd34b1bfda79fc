//! Mount API - wires the page controller to the browser.
//!
//! `mount` looks up the page elements, builds a [`Page`] over a
//! [`DomSurface`] and [`TimeoutScheduler`], and registers every listener.
//! The returned [`MountHandle`] removes them again.
//!
//! From JavaScript:
//!
//! ```text
//! import init, { mountPortfolio, unmountPortfolio } from "./portfolio_fx.js";
//! await init();
//! mountPortfolio();                          // defaults
//! mountPortfolio({ typing: { phrases: ["Rustacean"] } });
//! unmountPortfolio();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config::PageConfig;
use crate::error::MountError;
use crate::logging;
use crate::renderer::dom::{js_err, query_all};
use crate::renderer::DomSurface;
use crate::types::IntersectionEntry;

use super::page::Page;
use super::scheduler::{Scheduler, TimeoutScheduler};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by [`mount`]. Unmounting removes listeners, disconnects
/// the observer and stops the page.
pub struct MountHandle {
    page: Rc<Page>,
    cleanups: Vec<Box<dyn FnOnce()>>,
    observer: Option<(IntersectionObserver, ObserverCallback)>,
}

impl MountHandle {
    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn unmount(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        for cleanup in self.cleanups.drain(..) {
            cleanup();
        }
        if let Some((observer, _callback)) = self.observer.take() {
            observer.disconnect();
        }
        self.page.stop();
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

// =============================================================================
// Listeners
// =============================================================================

/// Add an event listener. The returned closure removes it.
fn listen<F>(
    target: &EventTarget,
    event: &'static str,
    handler: F,
) -> Result<Box<dyn FnOnce()>, MountError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_err)?;

    let target = target.clone();
    Ok(Box::new(move || {
        if let Err(err) =
            target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {} listener: {:?}", event, err);
        }
    }))
}

fn observe_sections(
    page: &Rc<Page>,
    dom: &Rc<DomSurface>,
) -> Result<(IntersectionObserver, ObserverCallback), MountError> {
    let callback: ObserverCallback = {
        let page = page.clone();
        let dom = dom.clone();
        Closure::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let entries: Vec<IntersectionEntry> = entries
                .iter()
                .filter_map(|v| v.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    Some(IntersectionEntry {
                        section: dom.section_index(&entry.target())?,
                        is_intersecting: entry.is_intersecting(),
                    })
                })
                .collect();
            page.on_intersection(&entries);
        })
    };

    let fade_in = &page.config().fade_in;
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(fade_in.threshold));
    options.set_root_margin(&fade_in.root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(js_err)?;
    for section in dom.sections() {
        observer.observe(section);
    }
    Ok((observer, callback))
}

// =============================================================================
// Mount
// =============================================================================

/// Mount the page script on the current document.
pub fn mount(config: PageConfig) -> Result<MountHandle, MountError> {
    config.validate()?;

    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;

    let dom = Rc::new(DomSurface::from_document(window.clone(), document.clone())?);
    let scheduler: Rc<dyn Scheduler> = Rc::new(TimeoutScheduler::new(window.clone()));
    let page = Rc::new(Page::new(config, dom.markup(), dom.clone(), scheduler)?);

    let mut cleanups = Vec::new();

    {
        let page = page.clone();
        cleanups.push(listen(dom.menu_button(), "click", move |_| {
            page.on_menu_toggle()
        })?);
    }

    for link in dom.nav_links() {
        let page = page.clone();
        cleanups.push(listen(link, "click", move |_| page.on_nav_link_click())?);
    }

    for anchor in query_all::<Element>(&document, "a[href^=\"#\"]")? {
        let page = page.clone();
        let dom = dom.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        cleanups.push(listen(&anchor, "click", move |event| {
            event.prevent_default();
            page.on_anchor_click(&href, dom.header_height(), |id| dom.offset_top_of(id));
        })?);
    }

    {
        let page = page.clone();
        let dom_ref = dom.clone();
        cleanups.push(listen(&window, "scroll", move |_| {
            page.on_scroll(&dom_ref.measure())
        })?);
    }

    if let Some(form) = dom.contact_form() {
        let page = page.clone();
        let dom_ref = dom.clone();
        cleanups.push(listen(form, "submit", move |event| {
            event.prevent_default();
            if let Err(err) = page.on_submit(&dom_ref.form_values()) {
                log::debug!("submit rejected: {}", err);
            }
        })?);
    }

    for (index, card) in dom.project_cards().iter().enumerate() {
        let enter = page.clone();
        cleanups.push(listen(card, "mouseenter", move |_| enter.on_card_enter(index))?);
        let leave = page.clone();
        cleanups.push(listen(card, "mouseleave", move |_| leave.on_card_leave(index))?);
    }

    for button in query_all::<Element>(&document, ".project-card .btn")? {
        let page = page.clone();
        let title_source = button.clone();
        cleanups.push(listen(&button, "click", move |event| {
            event.prevent_default();
            if let Some(title) = DomSurface::card_title(&title_source) {
                page.on_details_click(&title);
            }
        })?);
    }

    if let Some(button) = dom.cv_button() {
        let page = page.clone();
        cleanups.push(listen(button, "click", move |event| {
            event.prevent_default();
            page.on_cv_click();
        })?);
    }

    let observer = observe_sections(&page, &dom)?;

    let snapshot = dom.measure();
    page.reveal_progress(&snapshot.progress_tops, snapshot.viewport_height);
    page.start(js_sys::Date::new_0().get_full_year() as i32);

    Ok(MountHandle {
        page,
        cleanups,
        observer: Some(observer),
    })
}

// =============================================================================
// JS exports
// =============================================================================

thread_local! {
    static MOUNTED: RefCell<Option<MountHandle>> = const { RefCell::new(None) };
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn mount_and_store(config: PageConfig) -> Result<(), MountError> {
    unmount_portfolio();
    let handle = mount(config)?;
    MOUNTED.with(|mounted| *mounted.borrow_mut() = Some(handle));
    Ok(())
}

/// Mount with an optional config object. Waits for `DOMContentLoaded` when
/// the document is still loading.
#[wasm_bindgen(js_name = mountPortfolio)]
pub fn mount_portfolio(config: JsValue) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config: PageConfig = if config.is_undefined() || config.is_null() {
        PageConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(to_js)?
    };
    logging::init(config.log_level);
    config.validate().map_err(to_js)?;

    let document = web_sys::window()
        .ok_or(MountError::NoWindow)
        .and_then(|w| w.document().ok_or(MountError::NoDocument))
        .map_err(to_js)?;

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(move |_: Event| {
            if let Err(err) = mount_and_store(config) {
                log::error!("mount failed: {}", err);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        return Ok(());
    }

    mount_and_store(config).map_err(to_js)
}

/// Unmount the page mounted by `mountPortfolio`, if any.
#[wasm_bindgen(js_name = unmountPortfolio)]
pub fn unmount_portfolio() {
    let handle = MOUNTED.with(|mounted| mounted.borrow_mut().take());
    if let Some(handle) = handle {
        handle.unmount();
    }
}

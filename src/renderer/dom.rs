//! DOM surface - applies instructions to live elements (wasm32 only).
//!
//! Elements are looked up once at mount time and addressed by [`Target`].
//! The surface also does the reading side of the adapter: it reports what
//! markup exists ([`PageMarkup`]), measures layout on scroll
//! ([`ScrollSnapshot`]), and reads form values.
//!
//! JS exceptions raised while applying an instruction are logged and
//! swallowed; a broken element never takes the page down.

use std::cell::RefCell;
use std::collections::HashMap;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, ScrollBehavior, ScrollToOptions, Window,
};

use crate::error::MountError;
use crate::state::cta;
use crate::types::{FormValues, PageMarkup, ScrollSnapshot};

use super::{Instruction, Surface, Target};

// =============================================================================
// Lookup helpers
// =============================================================================

pub(crate) fn js_err(err: JsValue) -> MountError {
    MountError::Js(format!("{:?}", err))
}

fn query(document: &Document, selector: &'static str) -> Result<Option<Element>, MountError> {
    document.query_selector(selector).map_err(js_err)
}

fn required(document: &Document, selector: &'static str) -> Result<Element, MountError> {
    query(document, selector)?.ok_or(MountError::MissingElement(selector))
}

/// All matches for `selector` that cast to `T`, in document order.
pub(crate) fn query_all<T: JsCast>(
    document: &Document,
    selector: &'static str,
) -> Result<Vec<T>, MountError> {
    let list = document.query_selector_all(selector).map_err(js_err)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

// =============================================================================
// DomSurface
// =============================================================================

/// Elements the page script works with.
pub struct DomSurface {
    window: Window,
    document: Document,
    header: HtmlElement,
    nav_menu: Element,
    menu_button: Element,
    menu_icon: Option<Element>,
    nav_links: Vec<Element>,
    sections: Vec<HtmlElement>,
    progress_bars: Vec<HtmlElement>,
    typing_text: Element,
    project_cards: Vec<HtmlElement>,
    contact_form: Option<HtmlFormElement>,
    cv_button: Option<Element>,
    copyright: Option<Element>,
    notifications: RefCell<HashMap<u32, HtmlElement>>,
}

impl DomSurface {
    /// Look up every element. Fails only when a required element is missing.
    pub fn from_document(window: Window, document: Document) -> Result<Self, MountError> {
        let header = required(&document, "header")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| MountError::MissingElement("header"))?;
        let nav_menu = required(&document, ".nav-links")?;
        let menu_button = required(&document, ".mobile-menu-btn")?;
        let menu_icon = menu_button.query_selector("i").map_err(js_err)?;
        let typing_text = required(&document, ".typing-text")?;

        let contact_form = document
            .get_element_by_id("contactForm")
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());

        let cv_button = query(&document, ".btn-outline")?.filter(|btn| {
            btn.text_content()
                .is_some_and(|text| cta::is_cv_button(&text))
        });

        Ok(Self {
            nav_links: query_all(&document, ".nav-links a")?,
            sections: query_all(&document, "section")?,
            progress_bars: query_all(&document, ".progress")?,
            project_cards: query_all(&document, ".project-card")?,
            copyright: query(&document, ".copyright")?,
            notifications: RefCell::new(HashMap::new()),
            window,
            document,
            header,
            nav_menu,
            menu_button,
            menu_icon,
            typing_text,
            contact_form,
            cv_button,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn menu_button(&self) -> &Element {
        &self.menu_button
    }

    pub fn nav_links(&self) -> &[Element] {
        &self.nav_links
    }

    pub fn sections(&self) -> &[HtmlElement] {
        &self.sections
    }

    pub fn project_cards(&self) -> &[HtmlElement] {
        &self.project_cards
    }

    pub fn contact_form(&self) -> Option<&HtmlFormElement> {
        self.contact_form.as_ref()
    }

    pub fn cv_button(&self) -> Option<&Element> {
        self.cv_button.as_ref()
    }

    // =========================================================================
    // Reading
    // =========================================================================

    /// Snapshot of the markup for [`Page::new`](crate::pipeline::Page::new).
    pub fn markup(&self) -> PageMarkup {
        PageMarkup {
            nav_hrefs: self
                .nav_links
                .iter()
                .map(|a| a.get_attribute("href").unwrap_or_default())
                .collect(),
            section_ids: self
                .sections
                .iter()
                .map(|s| s.get_attribute("id").filter(|id| !id.is_empty()))
                .collect(),
            progress_widths: self
                .progress_bars
                .iter()
                .map(|b| b.get_attribute("data-width").unwrap_or_default())
                .collect(),
            project_cards: self.project_cards.len(),
            copyright_html: self.copyright.as_ref().map(|c| c.inner_html()),
            has_contact_form: self.contact_form.is_some(),
            has_cv_button: self.cv_button.is_some(),
        }
    }

    pub fn header_height(&self) -> f64 {
        f64::from(self.header.offset_height())
    }

    /// `window.pageYOffset || documentElement.scrollTop`
    pub fn scroll_top(&self) -> f64 {
        self.window
            .page_y_offset()
            .ok()
            .filter(|y| *y > 0.0)
            .or_else(|| {
                self.document
                    .document_element()
                    .map(|el| f64::from(el.scroll_top()))
            })
            .unwrap_or(0.0)
    }

    pub fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    /// Measure everything the scroll reactors need.
    pub fn measure(&self) -> ScrollSnapshot {
        ScrollSnapshot {
            scroll_top: self.scroll_top(),
            viewport_height: self.viewport_height(),
            header_height: self.header_height(),
            section_tops: self
                .sections
                .iter()
                .map(|s| f64::from(s.offset_top()))
                .collect(),
            progress_tops: self
                .progress_bars
                .iter()
                .map(|b| b.get_bounding_client_rect().top())
                .collect(),
        }
    }

    /// `offsetTop` of the element with `id`.
    pub fn offset_top_of(&self, id: &str) -> Option<f64> {
        self.document
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
            .map(|el| f64::from(el.offset_top()))
    }

    fn field_value(&self, id: &str) -> String {
        self.document
            .get_element_by_id(id)
            .and_then(|el| js_sys::Reflect::get(&el, &JsValue::from_str("value")).ok())
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    }

    pub fn form_values(&self) -> FormValues {
        FormValues {
            name: self.field_value("name"),
            email: self.field_value("email"),
            message: self.field_value("message"),
        }
    }

    /// Index of `element` among observed sections.
    pub fn section_index(&self, element: &Element) -> Option<usize> {
        self.sections
            .iter()
            .position(|s| s.is_same_node(Some(element.as_ref())))
    }

    /// Title (`h3`) of the `.project-content` enclosing `button`.
    pub fn card_title(button: &Element) -> Option<String> {
        button
            .closest(".project-content")
            .ok()
            .flatten()?
            .query_selector("h3")
            .ok()
            .flatten()?
            .text_content()
    }

    // =========================================================================
    // Writing
    // =========================================================================

    fn element(&self, target: Target) -> Option<Element> {
        match target {
            Target::Header => Some(self.header.clone().into()),
            Target::NavMenu => Some(self.nav_menu.clone()),
            Target::MenuIcon => self.menu_icon.clone(),
            Target::NavLink(i) => self.nav_links.get(i).cloned(),
            Target::Section(i) => self.sections.get(i).map(|e| e.clone().into()),
            Target::ProgressBar(i) => self.progress_bars.get(i).map(|e| e.clone().into()),
            Target::TypingText => Some(self.typing_text.clone()),
            Target::ProjectCard(i) => self.project_cards.get(i).map(|e| e.clone().into()),
            Target::Copyright => self.copyright.clone(),
            Target::Notification(id) => self
                .notifications
                .borrow()
                .get(&id)
                .map(|e| e.clone().into()),
        }
    }

    fn html_element(&self, target: Target) -> Option<HtmlElement> {
        self.element(target)?.dyn_into::<HtmlElement>().ok()
    }

    fn try_apply(&self, instruction: Instruction) -> Result<(), JsValue> {
        match instruction {
            Instruction::SetText { target, text } => {
                if let Some(el) = self.element(target) {
                    el.set_text_content(Some(&text));
                }
            }
            Instruction::SetHtml { target, html } => {
                if let Some(el) = self.element(target) {
                    el.set_inner_html(&html);
                }
            }
            Instruction::SetStyle {
                target,
                property,
                value,
            } => {
                if let Some(el) = self.html_element(target) {
                    el.style().set_property(property, &value)?;
                }
            }
            Instruction::AddClass { target, class } => {
                if let Some(el) = self.element(target) {
                    el.class_list().add_1(class)?;
                }
            }
            Instruction::RemoveClass { target, class } => {
                if let Some(el) = self.element(target) {
                    el.class_list().remove_1(class)?;
                }
            }
            Instruction::InjectStyle { css } => {
                let style = self.document.create_element("style")?;
                style.set_text_content(Some(css));
                if let Some(head) = self.document.head() {
                    head.append_child(&style)?;
                }
            }
            Instruction::CreateNotification { id, kind, text } => {
                let toast = self
                    .document
                    .create_element("div")?
                    .dyn_into::<HtmlElement>()?;
                toast.set_class_name(&format!("notification {}", kind.as_class()));
                toast.set_text_content(Some(&text));
                if let Some(body) = self.document.body() {
                    body.append_child(&toast)?;
                }
                self.notifications.borrow_mut().insert(id, toast);
            }
            Instruction::Remove { target } => {
                let el = match target {
                    Target::Notification(id) => self
                        .notifications
                        .borrow_mut()
                        .remove(&id)
                        .map(Element::from),
                    other => self.element(other),
                };
                if let Some(el) = el {
                    el.remove();
                }
            }
            Instruction::ResetForm => {
                if let Some(form) = &self.contact_form {
                    form.reset();
                }
            }
            Instruction::ScrollTo { top, smooth } => {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(if smooth {
                    ScrollBehavior::Smooth
                } else {
                    ScrollBehavior::Auto
                });
                self.window.scroll_to_with_scroll_to_options(&options);
            }
        }
        Ok(())
    }
}

impl Surface for DomSurface {
    fn apply(&self, instruction: Instruction) {
        if let Err(err) = self.try_apply(instruction) {
            log::warn!("failed to apply instruction: {:?}", err);
        }
    }
}

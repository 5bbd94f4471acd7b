//! Browser bindings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submodule binds one component to the already-rendered page: it reads
//! the markup contract, owns a per-instance state machine from the parent
//! crate, and mirrors that machine's output into classes, attributes and
//! inline styles. Listeners live for the whole page, so their closures are
//! leaked with `Closure::forget`.
//!
//! Compiled only with the `browser` feature.

mod accordion;
mod carousel;
mod contact;
mod cursor;
mod nav;
mod reveal;
mod tilt;

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::config::SiteConfig;
use crate::consts;
use crate::error::{MarqueeError, Result};

type Binder = fn(&Page) -> Result<()>;

const BINDERS: [(&str, Binder); 7] = [
    ("mobile menu", nav::bind),
    ("cursor follower", cursor::bind),
    ("scroll reveal", reveal::bind),
    ("card tilt", tilt::bind),
    ("testimonial carousel", carousel::bind),
    ("accordion", accordion::bind),
    ("contact form", contact::bind),
];

/// Handles shared by every binder.
#[derive(Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub config: Rc<SiteConfig>,
}

impl Page {
    pub fn new(config: SiteConfig) -> Result<Self> {
        let window = web_sys::window().ok_or(MarqueeError::MissingElement("window"))?;
        let document = window.document().ok_or(MarqueeError::MissingElement("document"))?;
        Ok(Self { window, document, config: Rc::new(config) })
    }

    /// Layout viewport width in CSS pixels; 0 if the browser refuses.
    pub fn viewport_width(&self) -> f64 {
        match self.window.inner_width() {
            Ok(value) => value.as_f64().unwrap_or(0.0),
            Err(_) => 0.0,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.config.is_mobile(self.viewport_width())
    }

    /// Monotonic milliseconds since page load.
    pub fn now_ms(&self) -> f64 {
        self.window.performance().map_or(0.0, |p| p.now())
    }

    /// First match for `selector`, cast to `T`.
    pub fn find<T: JsCast>(&self, selector: &str) -> Result<Option<T>> {
        Ok(self.document.query_selector(selector)?.and_then(cast))
    }

    pub fn find_all<T: JsCast>(&self, selector: &str) -> Result<Vec<T>> {
        Ok(cast_all(&self.document.query_selector_all(selector)?))
    }

    pub fn by_id<T: JsCast>(&self, id: &str) -> Option<T> {
        self.document.get_element_by_id(id).and_then(cast)
    }
}

/// Run every binder. Never fails: absent components are skipped quietly and
/// broken ones are reported without stopping the rest.
pub fn boot(page: &Page) {
    let mut active = 0;
    for (name, bind) in BINDERS {
        match bind(page) {
            Ok(()) => active += 1,
            Err(err) if err.is_absent() => log::debug!("{name} skipped: {err}"),
            Err(err) => log::warn!("{name} failed: {}: {err}", err.error_code()),
        }
    }
    log::info!("marquee ready: {active}/{} components active", BINDERS.len());
}

/// Read the page's `#marquee-config` override, if any.
pub fn read_config() -> Result<SiteConfig> {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(consts::ID_CONFIG))
        .and_then(|el| el.text_content());
    match text {
        Some(text) => SiteConfig::from_json(&text),
        None => Ok(SiteConfig::default()),
    }
}

pub(crate) fn find_in<T: JsCast>(root: &Element, selector: &str) -> Result<Option<T>> {
    Ok(root.query_selector(selector)?.and_then(cast))
}

pub(crate) fn find_all_in<T: JsCast>(root: &Element, selector: &str) -> Result<Vec<T>> {
    Ok(cast_all(&root.query_selector_all(selector)?))
}

/// Elements of the wrong type are skipped rather than reported.
fn cast<T: JsCast, N: JsCast>(node: N) -> Option<T> {
    node.dyn_into::<T>().ok()
}

fn cast_all<T: JsCast>(list: &NodeList) -> Vec<T> {
    (0..list.length()).filter_map(|i| list.get(i).and_then(cast)).collect()
}

/// Set an inline style property; an empty value removes it.
pub(crate) fn set_style(el: &HtmlElement, property: &str, value: &str) -> Result<()> {
    let style = el.style();
    if value.is_empty() {
        style.remove_property(property)?;
    } else {
        style.set_property(property, value)?;
    }
    Ok(())
}

/// Add or remove `class` according to `on`.
pub(crate) fn set_class(el: &Element, class: &str, on: bool) -> Result<()> {
    el.class_list().toggle_with_force(class, on)?;
    Ok(())
}

/// Attach a page-lifetime listener. Handler errors are logged, not thrown.
pub fn listen(
    target: &EventTarget,
    event: &str,
    mut handler: impl FnMut(Event) -> Result<()> + 'static,
) -> Result<()> {
    let name = event.to_owned();
    let cb = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        if let Err(err) = handler(ev) {
            log::warn!("{name} handler: {}: {err}", err.error_code());
        }
    });
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

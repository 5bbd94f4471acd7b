//! Intersection-driven reveals, count-ups and dial fills.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, SvgCircleElement,
};

use super::{Page, find_in};
use crate::consts::*;
use crate::error::{MarqueeError, Result};
use crate::reveal::{CountUp, Counter, Reveal, RevealEngine, RevealTarget, dial_offset, int_attr, parse_int};

type FrameCallback = Closure<dyn FnMut(f64)>;

fn int_data(el: &Element, name: &'static str) -> i64 {
    let value = el.get_attribute(name);
    if let Some(text) = &value
        && parse_int(text).is_none()
    {
        log::debug!("{}", MarqueeError::InvalidAttribute { name, value: text.clone() });
    }
    int_attr(value.as_deref())
}

fn describe(el: &Element) -> RevealTarget {
    let classes = el.class_list();
    let mut target = RevealTarget::plain();
    if classes.contains(CLASS_STAT_COUNTER) {
        target = target.with_counter(Counter {
            target: int_data(el, "data-value"),
            suffix: el.get_attribute("data-suffix").unwrap_or_default(),
        });
    }
    if classes.contains(CLASS_RADIAL_DIAL) {
        target = target.with_dial(int_data(el, "data-percentage"));
    }
    target
}

fn apply(page: &Page, el: &Element, reveal: &Reveal) -> Result<()> {
    el.class_list().add_1(CLASS_IN_VIEW)?;

    if let Some(counter) = &reveal.counter
        && let Some(value_el) = find_in::<Element>(el, SEL_STAT_VALUE)?
        && !value_el.has_attribute("data-animated")
    {
        let count = CountUp::start(counter, page.config.count_up_ms, page.now_ms());
        run_count_up(page, value_el.clone(), count)?;
        value_el.set_attribute("data-animated", "true")?;
    }

    if let Some(percentage) = reveal.dial_percentage
        && let Some(circle) = find_in::<SvgCircleElement>(el, SEL_DIAL_PROGRESS)?
    {
        let radius = f64::from(circle.r().base_val().value()?);
        let offset = dial_offset(radius, percentage);
        circle.style().set_property("stroke-dashoffset", &offset.to_string())?;
    }
    Ok(())
}

/// Drive `count` from animation frames until it finishes, or until `node`
/// leaves the document.
fn run_count_up(page: &Page, node: Element, mut count: CountUp) -> Result<()> {
    let holder: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window = page.window.clone();

    let cb = Closure::wrap(Box::new(move |ts: f64| {
        if !node.is_connected() {
            count.cancel();
            log::debug!("count-up cancelled: element detached");
        }
        if let Some(text) = count.frame(ts) {
            node.set_text_content(Some(&text));
        }
        if count.is_running()
            && let Some(next) = holder_for_cb.borrow().as_ref()
            && let Err(err) = window.request_animation_frame(next.as_ref().unchecked_ref())
        {
            log::warn!("count-up stalled: {}", MarqueeError::from(err));
            count.cancel();
        }
        if !count.is_running() {
            holder_for_cb.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>);

    page.window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    *holder.borrow_mut() = Some(cb);
    Ok(())
}

pub(super) fn bind(page: &Page) -> Result<()> {
    let elements: Vec<Element> = page.find_all(SEL_REVEAL)?;
    if elements.is_empty() {
        return Err(MarqueeError::MissingElement(SEL_REVEAL));
    }

    let mut engine = RevealEngine::new();
    for el in &elements {
        engine.observe(describe(el));
    }
    let engine = Rc::new(RefCell::new(engine));
    let tracked = Rc::new(elements);

    let cb = {
        let (engine, tracked, page) = (Rc::clone(&engine), Rc::clone(&tracked), page.clone());
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let el = entry.target();
                let Some(handle) = tracked.iter().position(|t| *t == el) else {
                    continue;
                };
                let Some(reveal) = engine.borrow_mut().notify(handle, entry.is_intersecting()) else {
                    continue;
                };
                observer.unobserve(&el);
                if let Err(err) = apply(&page, &el, &reveal) {
                    log::warn!("reveal failed: {}: {err}", err.error_code());
                }
            }
        })
    };

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&page.config.reveal_root_margin());
    init.set_threshold(&JsValue::from_f64(page.config.reveal_threshold));
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
    cb.forget();

    for el in tracked.iter() {
        observer.observe(el);
    }
    log::debug!("scroll reveal observing {} elements", engine.borrow().pending());
    Ok(())
}

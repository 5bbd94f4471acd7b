//! Testimonial carousels: layout mirroring, indicator clicks, auto-advance
//! and breakpoint-aware relayout.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement, ResizeObserver};

use super::{Page, find_all_in, listen, set_class, set_style};
use crate::carousel::{Carousel, CarouselEvent, LayoutMode};
use crate::consts::*;
use crate::error::{MarqueeError, Result};
use crate::reveal::int_attr;

struct Instance {
    page: Page,
    cards: Vec<HtmlElement>,
    dots: Vec<Element>,
    machine: RefCell<Carousel>,
    timer: RefCell<Option<Timeout>>,
}

impl Instance {
    fn dispatch(self: &Rc<Self>, event: CarouselEvent) {
        let Some(transition) = self.machine.borrow_mut().handle(event) else {
            return;
        };
        if let Err(err) = self.render() {
            log::warn!("carousel render failed: {}: {err}", err.error_code());
        }
        let this = Rc::clone(self);
        let tick = CarouselEvent::Tick { generation: transition.generation };
        // Dropping the previous handle clears its countdown.
        *self.timer.borrow_mut() = Some(Timeout::new(transition.delay_ms, move || this.dispatch(tick)));
    }

    fn render(&self) -> Result<()> {
        let mode = LayoutMode::for_width(self.page.viewport_width(), self.page.config.mobile_breakpoint_px);
        let machine = self.machine.borrow();
        for (card, style) in self.cards.iter().zip(machine.layout(mode)) {
            set_class(card, CLASS_ACTIVE, style.active)?;
            set_style(card, "transform", style.transform)?;
            set_style(card, "opacity", style.opacity)?;
            set_style(card, "z-index", &style.z_index.to_string())?;
            set_style(card, "position", style.position)?;
            set_style(card, "display", style.display)?;
        }
        for (i, dot) in self.dots.iter().enumerate() {
            set_class(dot, CLASS_ACTIVE, machine.indicator_active(i))?;
        }
        Ok(())
    }
}

fn bind_one(page: &Page, container: &Element) -> Result<bool> {
    let cards: Vec<HtmlElement> = find_all_in(container, SEL_CAROUSEL_CARD)?;
    let Some(machine) = Carousel::new(cards.len(), page.config.carousel_interval_ms) else {
        return Ok(false);
    };
    let instance = Rc::new(Instance {
        page: page.clone(),
        cards,
        dots: find_all_in(container, SEL_CAROUSEL_DOT)?,
        machine: RefCell::new(machine),
        timer: RefCell::new(None),
    });

    for dot in &instance.dots {
        let this = Rc::clone(&instance);
        let index = int_attr(dot.get_attribute("data-slide-index").as_deref());
        listen(dot, "click", move |_| {
            this.dispatch(CarouselEvent::Select(index));
            Ok(())
        })?;
    }

    if let Some(body) = page.document.body() {
        let this = Rc::clone(&instance);
        let cb = Closure::<dyn FnMut(Array, ResizeObserver)>::new(move |_: Array, _: ResizeObserver| {
            this.dispatch(CarouselEvent::Resize);
        });
        let observer = ResizeObserver::new(cb.as_ref().unchecked_ref())?;
        cb.forget();
        observer.observe(&body);
    }

    instance.dispatch(CarouselEvent::Start);
    Ok(true)
}

pub(super) fn bind(page: &Page) -> Result<()> {
    let containers: Vec<Element> = page.find_all(SEL_CAROUSEL)?;
    let mut bound = 0;
    for container in &containers {
        if bind_one(page, container)? {
            bound += 1;
        }
    }
    if bound == 0 {
        return Err(MarqueeError::MissingElement(SEL_CAROUSEL));
    }
    log::debug!("carousel bound to {bound}/{} containers", containers.len());
    Ok(())
}

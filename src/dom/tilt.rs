use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use super::{Page, find_in, listen, set_style};
use crate::consts::{SEL_TILT_CARD, SEL_TILT_INNER};
use crate::error::{MarqueeError, Result};
use crate::geometry::{Point, Rect};
use crate::tilt::{TiltParams, TiltTransform};

fn apply(card: &HtmlElement, transform: &TiltTransform) -> Result<()> {
    set_style(card, "transform", &transform.card_css())?;
    if let Some(inner) = find_in::<HtmlElement>(card, SEL_TILT_INNER)? {
        set_style(&inner, "transform", &transform.inner_css())?;
    }
    Ok(())
}

pub(super) fn bind(page: &Page) -> Result<()> {
    let cards: Vec<HtmlElement> = page.find_all(SEL_TILT_CARD)?;
    if cards.is_empty() {
        return Err(MarqueeError::MissingElement(SEL_TILT_CARD));
    }
    let params = TiltParams::from(page.config.as_ref());

    for card in &cards {
        let hovered = card.clone();
        listen(card, "mousemove", move |ev| {
            let Some(mouse) = ev.dyn_ref::<MouseEvent>() else {
                return Ok(());
            };
            let r = hovered.get_bounding_client_rect();
            let rect = Rect::new(r.left(), r.top(), r.width(), r.height());
            let pointer = Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
            apply(&hovered, &TiltTransform::hover(rect, pointer, &params))
        })?;

        let left = card.clone();
        listen(card, "mouseleave", move |_| apply(&left, &TiltTransform::neutral(&params)))?;
    }

    log::debug!("card tilt bound to {} cards", cards.len());
    Ok(())
}

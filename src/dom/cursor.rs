use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use super::{Page, listen, set_style};
use crate::consts::ID_MOUSE_FOLLOWER;
use crate::cursor::follower_transform;
use crate::error::{MarqueeError, Result};
use crate::geometry::Point;

pub(super) fn bind(page: &Page) -> Result<()> {
    let follower: HtmlElement =
        page.by_id(ID_MOUSE_FOLLOWER).ok_or(MarqueeError::MissingElement(ID_MOUSE_FOLLOWER))?;

    listen(&page.window, "mousemove", move |ev| {
        let Some(mouse) = ev.dyn_ref::<MouseEvent>() else {
            return Ok(());
        };
        let pointer = Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
        set_style(&follower, "transform", &follower_transform(pointer))
    })
}

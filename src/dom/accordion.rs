use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Element, HtmlElement};

use super::{Page, find_in, listen, set_class, set_style};
use crate::accordion::AccordionItem;
use crate::consts::{CLASS_OPEN, SEL_ACCORDION_CONTENT, SEL_ACCORDION_ITEM, SEL_ACCORDION_TITLE};
use crate::error::{MarqueeError, Result};

pub(super) fn bind(page: &Page) -> Result<()> {
    let items: Vec<Element> = page.find_all(SEL_ACCORDION_ITEM)?;
    let mut bound = 0;

    for item in items {
        let (Some(title), Some(content)) = (
            find_in::<Element>(&item, SEL_ACCORDION_TITLE)?,
            find_in::<HtmlElement>(&item, SEL_ACCORDION_CONTENT)?,
        ) else {
            continue;
        };

        let state = Rc::new(Cell::new(AccordionItem::new(item.class_list().contains(CLASS_OPEN))));
        set_style(&content, "max-height", &state.get().max_height(content.scroll_height()))?;

        listen(&title, "click", move |_| {
            let mut next = state.get();
            let open = next.toggle();
            state.set(next);
            set_class(&item, CLASS_OPEN, open)?;
            set_style(&content, "max-height", &next.max_height(content.scroll_height()))
        })?;
        bound += 1;
    }

    if bound == 0 {
        return Err(MarqueeError::MissingElement(SEL_ACCORDION_ITEM));
    }
    log::debug!("accordion bound to {bound} items");
    Ok(())
}

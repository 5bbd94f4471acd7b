//! Mobile menu toggle and exclusive dropdowns.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Element, HtmlElement};

use super::{Page, find_all_in, listen, set_class};
use crate::consts::*;
use crate::error::{MarqueeError, Result};
use crate::nav::{LinkKind, LinkOutcome, NavigationState};

struct MenuView {
    nav: Element,
    body: Option<HtmlElement>,
    toggle: Element,
    lines: Vec<Element>,
    dropdowns: Vec<Element>,
}

impl MenuView {
    fn render_menu(&self, state: &NavigationState) -> Result<()> {
        let open = state.is_menu_open();
        set_class(&self.nav, CLASS_NAV_OPEN, open)?;
        if let Some(body) = &self.body {
            set_class(body, CLASS_MENU_OPEN, open)?;
        }
        self.toggle.set_attribute("aria-expanded", state.aria_expanded())?;
        for line in &self.lines {
            set_class(line, CLASS_OPEN, open)?;
        }
        Ok(())
    }

    fn render_dropdowns(&self, state: &NavigationState) -> Result<()> {
        for (i, dropdown) in self.dropdowns.iter().enumerate() {
            set_class(dropdown, CLASS_DROPDOWN_OPEN, state.is_dropdown_open(i))?;
        }
        Ok(())
    }

    fn link_kind(&self, link: &Element) -> Result<LinkKind> {
        if !link.class_list().contains(CLASS_DROPDOWN_TRIGGER) {
            return Ok(LinkKind::Plain);
        }
        let Some(parent) = link.closest(SEL_DROPDOWN)? else {
            return Ok(LinkKind::Plain);
        };
        Ok(self.dropdowns.iter().position(|d| *d == parent).map_or(LinkKind::Plain, LinkKind::DropdownTrigger))
    }
}

pub(super) fn bind(page: &Page) -> Result<()> {
    let toggle: Element = page.find(SEL_MENU_TOGGLE)?.ok_or(MarqueeError::MissingElement(SEL_MENU_TOGGLE))?;
    let nav: Element = page.find(SEL_NAV)?.ok_or(MarqueeError::MissingElement(SEL_NAV))?;

    let view = Rc::new(MenuView {
        nav,
        body: page.document.body(),
        lines: find_all_in(&toggle, SEL_MENU_LINE)?,
        dropdowns: page.find_all(SEL_DROPDOWN)?,
        toggle: toggle.clone(),
    });
    let state = Rc::new(RefCell::new(NavigationState::from_markup(
        view.nav.class_list().contains(CLASS_NAV_OPEN),
        view.dropdowns.iter().position(|d| d.class_list().contains(CLASS_DROPDOWN_OPEN)),
    )));

    {
        let (view, state) = (Rc::clone(&view), Rc::clone(&state));
        listen(&toggle, "click", move |_| {
            state.borrow_mut().toggle_menu();
            view.render_menu(&state.borrow())
        })?;
    }

    let links: Vec<Element> = page.find_all(SEL_NAV_LINKS)?;
    for link in &links {
        let kind = view.link_kind(link)?;
        let (view, state, page) = (Rc::clone(&view), Rc::clone(&state), page.clone());
        listen(link, "click", move |ev| {
            let outcome = state.borrow_mut().activate_link(kind, page.is_mobile());
            if outcome.prevents_navigation() {
                ev.prevent_default();
            }
            match outcome {
                LinkOutcome::Ignored => Ok(()),
                LinkOutcome::DropdownToggled { .. } => view.render_dropdowns(&state.borrow()),
                LinkOutcome::MenuClosed => view.render_menu(&state.borrow()),
            }
        })?;
    }

    log::debug!("mobile menu bound: {} links, {} dropdowns", links.len(), view.dropdowns.len());
    Ok(())
}

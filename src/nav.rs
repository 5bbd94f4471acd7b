//! Mobile navigation state machine.
//!
//! The menu is either open or closed; at most one dropdown is expanded at a
//! time. Dropdowns are identified by their position among the page's
//! `.dropdown` elements. Link handling only applies on mobile viewports;
//! on wider screens links navigate normally and nothing changes here.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// What kind of navigation link was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// An ordinary link; on mobile it closes the menu.
    Plain,
    /// A `.nav-link-button` inside the dropdown with this index.
    DropdownTrigger(usize),
}

/// Effect of a link activation, for the host to mirror into the DOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Desktop viewport: let the browser handle the click.
    Ignored,
    /// Dropdown state changed; navigation must be suppressed.
    DropdownToggled { open: Option<usize> },
    /// The whole menu was closed.
    MenuClosed,
}

impl LinkOutcome {
    #[must_use]
    pub fn prevents_navigation(self) -> bool {
        matches!(self, Self::DropdownToggled { .. })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    menu_open: bool,
    open_dropdown: Option<usize>,
}

impl NavigationState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State as rendered by the server: whether the menu starts open and
    /// which dropdown, if any, starts expanded.
    #[must_use]
    pub fn from_markup(menu_open: bool, open_dropdown: Option<usize>) -> Self {
        Self { menu_open, open_dropdown }
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn open_dropdown(&self) -> Option<usize> {
        self.open_dropdown
    }

    #[must_use]
    pub fn is_dropdown_open(&self, index: usize) -> bool {
        self.open_dropdown == Some(index)
    }

    /// Value for the toggle's `aria-expanded` attribute.
    #[must_use]
    pub fn aria_expanded(&self) -> &'static str {
        if self.menu_open { "true" } else { "false" }
    }

    /// Flip the menu and return the new state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Close the menu. Dropdown state is left as is.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Handle a click on a navigation link.
    pub fn activate_link(&mut self, kind: LinkKind, mobile: bool) -> LinkOutcome {
        if !mobile {
            return LinkOutcome::Ignored;
        }
        match kind {
            LinkKind::DropdownTrigger(index) => {
                self.open_dropdown = if self.open_dropdown == Some(index) { None } else { Some(index) };
                LinkOutcome::DropdownToggled { open: self.open_dropdown }
            }
            LinkKind::Plain => {
                self.close_menu();
                LinkOutcome::MenuClosed
            }
        }
    }
}

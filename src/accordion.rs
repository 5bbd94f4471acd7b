//! Collapsible accordion panels.
//!
//! Each item animates its content through a CSS `max-height` transition: the
//! open height is the content's natural `scrollHeight`, the closed height is
//! zero. Items are independent; several may be open at once.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccordionItem {
    open: bool,
}

impl AccordionItem {
    /// Item in its initial state, `open` as flagged by the markup.
    #[must_use]
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the open flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Inline `max-height` for the content panel.
    #[must_use]
    pub fn max_height(&self, scroll_height: i32) -> String {
        if self.open { format!("{}px", scroll_height.max(0)) } else { "0px".to_owned() }
    }
}

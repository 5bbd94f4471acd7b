//! Testimonial carousel state machine.
//!
//! DESIGN
//! ======
//! A carousel cycles `len` cards through positional slots. The slot of a
//! card depends only on its offset from the current card,
//! `(card - current) mod len`, so layout is a pure function of
//! `(current, len, mode)` and can be checked without a DOM.
//!
//! TIMER
//! =====
//! Every transition (start, manual selection, automatic advance, resize)
//! re-arms the auto-advance countdown from zero. Each arming gets a fresh
//! generation number; the host schedules a `Tick` carrying that generation
//! and the machine ignores ticks from any older arming, so a superseded
//! timer can never advance the carousel early.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Wide-viewport stacking slot for a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Offset 0: front and fully visible.
    Active,
    /// Offset 1: visible, one step back.
    NextBehind,
    /// Offset 2: visible, two steps back.
    SecondBehind,
    /// Offset `len - 1`: invisible, parked above, ready to drop in.
    Incoming,
    /// Everything else.
    Hidden,
}

impl Slot {
    /// Slot for `offset` in a carousel of `len` cards. Earlier rows of the
    /// table win, so in small carousels offset 1 or 2 beats `len - 1`.
    #[must_use]
    pub fn for_offset(offset: usize, len: usize) -> Self {
        match offset {
            0 => Self::Active,
            1 => Self::NextBehind,
            2 => Self::SecondBehind,
            o if o + 1 == len => Self::Incoming,
            _ => Self::Hidden,
        }
    }

    #[must_use]
    pub fn transform(self) -> &'static str {
        match self {
            Self::Active => "translateY(0) scale(1) translateZ(0)",
            Self::NextBehind => "translateY(-40px) scale(0.9) translateZ(-80px)",
            Self::SecondBehind => "translateY(-80px) scale(0.8) translateZ(-160px)",
            Self::Incoming => "translateY(-200%) scale(1) translateZ(0)",
            Self::Hidden => "translateY(-120px) scale(0.7) translateZ(-240px)",
        }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Active | Self::NextBehind | Self::SecondBehind)
    }

    #[must_use]
    pub fn z_index(self) -> i32 {
        match self {
            Self::Active => 3,
            Self::NextBehind | Self::Incoming => 2,
            Self::SecondBehind => 1,
            Self::Hidden => 0,
        }
    }
}

/// Offset of `card` from `current`, modulo `len`.
#[must_use]
pub fn offset(card: usize, current: usize, len: usize) -> usize {
    (card + len - current % len) % len
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// 3D stack of up to three visible cards.
    Stacked,
    /// One card shown flat, the rest removed from flow.
    Flat,
}

impl LayoutMode {
    #[must_use]
    pub fn for_width(width: f64, breakpoint: f64) -> Self {
        if width <= breakpoint { Self::Flat } else { Self::Stacked }
    }
}

/// Inline styles for one card. An empty string clears the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStyle {
    pub transform: &'static str,
    pub opacity: &'static str,
    pub z_index: i32,
    pub position: &'static str,
    pub display: &'static str,
    pub active: bool,
}

impl CardStyle {
    #[must_use]
    pub fn for_slot(slot: Slot, mode: LayoutMode) -> Self {
        let active = slot == Slot::Active;
        match mode {
            LayoutMode::Stacked => Self {
                transform: slot.transform(),
                opacity: if slot.is_visible() { "1" } else { "0" },
                z_index: slot.z_index(),
                position: "",
                display: "",
                active,
            },
            LayoutMode::Flat => Self {
                transform: "none",
                opacity: if active { "1" } else { "0" },
                z_index: slot.z_index(),
                position: if active { "relative" } else { "absolute" },
                display: if active { "flex" } else { "none" },
                active,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// First layout after binding.
    Start,
    /// The auto-advance timer armed with `generation` fired.
    Tick { generation: u64 },
    /// An indicator was clicked; carries its raw `data-slide-index`.
    Select(i64),
    /// The observed page body changed size.
    Resize,
}

/// Instruction for the host: re-apply the layout and arm a timer that
/// delivers `Tick { generation }` after `delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub generation: u64,
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    current: usize,
    interval_ms: u32,
    generation: u64,
}

impl Carousel {
    /// `None` when there are no cards; such a carousel does nothing.
    #[must_use]
    pub fn new(len: usize, interval_ms: u32) -> Option<Self> {
        (len > 0).then_some(Self { len, current: 0, interval_ms, generation: 0 })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.len;
    }

    /// Jump to `index`, reduced into `[0, len)`.
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn select(&mut self, index: i64) {
        self.current = index.rem_euclid(self.len as i64) as usize;
    }

    #[must_use]
    pub fn slot(&self, card: usize) -> Slot {
        Slot::for_offset(offset(card, self.current, self.len), self.len)
    }

    #[must_use]
    pub fn layout(&self, mode: LayoutMode) -> Vec<CardStyle> {
        (0..self.len).map(|card| CardStyle::for_slot(self.slot(card), mode)).collect()
    }

    #[must_use]
    pub fn indicator_active(&self, index: usize) -> bool {
        index == self.current
    }

    /// Apply an event. `None` means the event was stale and nothing changes.
    pub fn handle(&mut self, event: CarouselEvent) -> Option<Transition> {
        match event {
            CarouselEvent::Start | CarouselEvent::Resize => {}
            CarouselEvent::Tick { generation } => {
                // Generation 0 is never armed.
                if generation == 0 || generation != self.generation {
                    return None;
                }
                self.advance();
            }
            CarouselEvent::Select(index) => self.select(index),
        }
        Some(self.arm())
    }

    fn arm(&mut self) -> Transition {
        self.generation += 1;
        Transition { generation: self.generation, delay_ms: self.interval_ms }
    }
}

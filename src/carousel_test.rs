use super::*;

const INTERVAL: u32 = 5000;

fn carousel(len: usize) -> Carousel {
    Carousel::new(len, INTERVAL).unwrap()
}

/// Minimal host: one pending timer, replaced on every transition.
struct Host {
    carousel: Carousel,
    timer: Option<(f64, u64)>,
    advances: Vec<f64>,
}

impl Host {
    fn start(len: usize) -> Self {
        let mut host = Self { carousel: carousel(len), timer: None, advances: Vec::new() };
        host.send(CarouselEvent::Start, 0.0);
        host
    }

    fn send(&mut self, event: CarouselEvent, now: f64) {
        if let Some(t) = self.carousel.handle(event) {
            self.timer = Some((now + f64::from(t.delay_ms), t.generation));
        }
    }

    /// Run until `until`, firing the pending timer whenever it is due.
    fn run_until(&mut self, until: f64) {
        while let Some((at, generation)) = self.timer {
            if at > until {
                break;
            }
            self.timer = None;
            let before = self.carousel.current();
            self.send(CarouselEvent::Tick { generation }, at);
            if self.carousel.current() != before {
                self.advances.push(at);
            }
        }
    }
}

// =============================================================
// Slots and offsets
// =============================================================

#[test]
fn offset_wraps() {
    assert_eq!(offset(0, 0, 5), 0);
    assert_eq!(offset(1, 0, 5), 1);
    assert_eq!(offset(0, 1, 5), 4);
    assert_eq!(offset(2, 4, 5), 3);
}

#[test]
fn slot_table_for_five_cards() {
    let slots: Vec<Slot> = (0..5).map(|o| Slot::for_offset(o, 5)).collect();
    assert_eq!(
        slots,
        vec![Slot::Active, Slot::NextBehind, Slot::SecondBehind, Slot::Hidden, Slot::Incoming]
    );
}

#[test]
fn small_carousels_prefer_earlier_rows() {
    assert_eq!(Slot::for_offset(1, 2), Slot::NextBehind);
    assert_eq!(Slot::for_offset(2, 3), Slot::SecondBehind);
    assert_eq!(Slot::for_offset(3, 4), Slot::Incoming);
}

#[test]
fn stacked_styles_match_slot_table() {
    let active = CardStyle::for_slot(Slot::Active, LayoutMode::Stacked);
    assert_eq!(active.transform, "translateY(0) scale(1) translateZ(0)");
    assert_eq!(active.opacity, "1");
    assert_eq!(active.z_index, 3);
    assert!(active.active);

    let incoming = CardStyle::for_slot(Slot::Incoming, LayoutMode::Stacked);
    assert_eq!(incoming.opacity, "0");
    assert_eq!(incoming.z_index, 2);
    assert!(!incoming.active);

    let hidden = CardStyle::for_slot(Slot::Hidden, LayoutMode::Stacked);
    assert_eq!(hidden.transform, "translateY(-120px) scale(0.7) translateZ(-240px)");
    assert_eq!(hidden.z_index, 0);
    assert_eq!(hidden.position, "");
    assert_eq!(hidden.display, "");
}

#[test]
fn flat_styles_show_only_active() {
    let active = CardStyle::for_slot(Slot::Active, LayoutMode::Flat);
    assert_eq!(active.transform, "none");
    assert_eq!((active.opacity, active.position, active.display), ("1", "relative", "flex"));

    let behind = CardStyle::for_slot(Slot::NextBehind, LayoutMode::Flat);
    assert_eq!(behind.transform, "none");
    assert_eq!((behind.opacity, behind.position, behind.display), ("0", "absolute", "none"));
}

#[test]
fn layout_mode_breakpoint() {
    assert_eq!(LayoutMode::for_width(768.0, 768.0), LayoutMode::Flat);
    assert_eq!(LayoutMode::for_width(1024.0, 768.0), LayoutMode::Stacked);
}

// =============================================================
// Invariants
// =============================================================

#[test]
fn empty_carousel_is_none() {
    assert!(Carousel::new(0, INTERVAL).is_none());
}

#[test]
fn exactly_one_active_card_and_indicator() {
    for len in 3..8 {
        let mut c = carousel(len);
        for step in 0..(2 * len) {
            for mode in [LayoutMode::Stacked, LayoutMode::Flat] {
                let layout = c.layout(mode);
                assert_eq!(layout.iter().filter(|s| s.active).count(), 1, "len {len} step {step}");
                assert!(layout[c.current()].active);
            }
            let lit: Vec<usize> = (0..len).filter(|&i| c.indicator_active(i)).collect();
            assert_eq!(lit, vec![c.current()]);
            c.advance();
        }
    }
}

#[test]
fn advancing_len_times_is_cyclic() {
    for len in 1..7 {
        let mut c = carousel(len);
        c.select(2);
        let start = c.current();
        for _ in 0..len {
            c.advance();
        }
        assert_eq!(c.current(), start);
    }
}

#[test]
fn select_reduces_out_of_range_indices() {
    let mut c = carousel(4);
    c.select(6);
    assert_eq!(c.current(), 2);
    c.select(-1);
    assert_eq!(c.current(), 3);
}

#[test]
fn single_card_is_always_active() {
    let mut c = carousel(1);
    c.advance();
    assert_eq!(c.current(), 0);
    assert_eq!(c.slot(0), Slot::Active);
}

#[test]
fn mode_switch_keeps_current() {
    let mut c = carousel(5);
    c.select(3);
    let wide = c.layout(LayoutMode::Stacked);
    let narrow = c.layout(LayoutMode::Flat);
    c.handle(CarouselEvent::Resize);
    assert_eq!(c.current(), 3);
    assert!(wide[3].active && narrow[3].active);
    assert_eq!(narrow.iter().filter(|s| s.display == "flex").count(), 1);
}

// =============================================================
// Timer
// =============================================================

#[test]
fn every_transition_rearms() {
    let mut c = carousel(3);
    let t1 = c.handle(CarouselEvent::Start).unwrap();
    let t2 = c.handle(CarouselEvent::Resize).unwrap();
    assert_eq!(t1.delay_ms, INTERVAL);
    assert!(t2.generation > t1.generation);
    assert_eq!(c.generation(), t2.generation);
}

#[test]
fn stale_tick_is_ignored() {
    let mut c = carousel(3);
    let first = c.handle(CarouselEvent::Start).unwrap();
    c.handle(CarouselEvent::Select(1));
    assert_eq!(c.handle(CarouselEvent::Tick { generation: first.generation }), None);
    assert_eq!(c.current(), 1);
}

#[test]
fn tick_before_start_is_ignored() {
    let mut c = carousel(3);
    assert_eq!(c.handle(CarouselEvent::Tick { generation: 0 }), None);
    assert_eq!(c.current(), 0);
}

#[test]
fn auto_advance_every_interval() {
    let mut host = Host::start(4);
    host.run_until(20_000.0);
    assert_eq!(host.advances, vec![5000.0, 10_000.0, 15_000.0, 20_000.0]);
    assert_eq!(host.carousel.current(), 0);
}

#[test]
fn manual_selection_restarts_countdown() {
    let mut host = Host::start(4);
    host.run_until(3000.0);
    host.send(CarouselEvent::Select(2), 3000.0);
    assert_eq!(host.carousel.current(), 2);

    host.run_until(7999.0);
    assert!(host.advances.is_empty(), "advanced before 5000ms of quiet");

    host.run_until(8000.0);
    assert_eq!(host.advances, vec![8000.0]);
    assert_eq!(host.carousel.current(), 3);
}

#[test]
fn resize_also_restarts_countdown() {
    let mut host = Host::start(3);
    host.send(CarouselEvent::Resize, 4000.0);
    host.run_until(8999.0);
    assert!(host.advances.is_empty());
    host.run_until(9000.0);
    assert_eq!(host.advances, vec![9000.0]);
}

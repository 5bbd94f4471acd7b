//! Scroll-triggered entrance animations.
//!
//! DESIGN
//! ======
//! Every observed element becomes a [`RevealTarget`] that starts armed and
//! fires at most once: the first intersection disarms it and yields the
//! effects to apply (the `in-view` class, plus an optional count-up and an
//! optional dial fill). Later intersections are ignored, so the host does
//! not need to unregister anything from a live observer for correctness.
//!
//! Count-ups are driven by the host's animation-frame clock through
//! [`CountUp::frame`]; a count-up can be cancelled (the host does this when
//! its element leaves the document) and never writes again afterwards.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::f64::consts::PI;

/// Parse leading integer text the way the page markup is authored:
/// optional whitespace and sign, then decimal digits up to the first
/// non-digit. `None` when there are no leading digits.
#[must_use]
pub fn parse_int(text: &str) -> Option<i64> {
    let s = text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits.bytes().position(|b| !b.is_ascii_digit()).unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end]
        .bytes()
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));
    Some(if negative { -magnitude } else { magnitude })
}

/// Integer data attribute with a default of 0 when absent or unparsable.
#[must_use]
pub fn int_attr(value: Option<&str>) -> i64 {
    value.and_then(parse_int).unwrap_or(0)
}

/// Stroke-dash offset that shows `percentage` of a circle of `radius`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn dial_offset(radius: f64, percentage: i64) -> f64 {
    let circumference = 2.0 * PI * radius;
    circumference - (percentage as f64 / 100.0) * circumference
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    pub target: i64,
    pub suffix: String,
}

/// Effects to apply on an element's first intersection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    pub counter: Option<Counter>,
    pub dial_percentage: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTarget {
    armed: bool,
    counter: Option<Counter>,
    dial_percentage: Option<i64>,
}

impl RevealTarget {
    /// A plain `.scroll-animate` element.
    #[must_use]
    pub fn plain() -> Self {
        Self { armed: true, counter: None, dial_percentage: None }
    }

    #[must_use]
    pub fn with_counter(mut self, counter: Counter) -> Self {
        self.counter = Some(counter);
        self
    }

    #[must_use]
    pub fn with_dial(mut self, percentage: i64) -> Self {
        self.dial_percentage = Some(percentage);
        self
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Feed an intersection notification. Returns the effects exactly once.
    pub fn on_intersection(&mut self, intersecting: bool) -> Option<Reveal> {
        if !intersecting || !self.armed {
            return None;
        }
        self.armed = false;
        Some(Reveal { counter: self.counter.clone(), dial_percentage: self.dial_percentage })
    }
}

/// All reveal targets of a page, addressed by registration order.
#[derive(Debug, Default)]
pub struct RevealEngine {
    targets: Vec<RevealTarget>,
}

impl RevealEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target and return its handle.
    pub fn observe(&mut self, target: RevealTarget) -> usize {
        self.targets.push(target);
        self.targets.len() - 1
    }

    pub fn notify(&mut self, handle: usize, intersecting: bool) -> Option<Reveal> {
        self.targets.get_mut(handle)?.on_intersection(intersecting)
    }

    /// Number of targets that have not fired yet.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.targets.iter().filter(|t| t.armed).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountUpState {
    Running,
    Finished,
    Cancelled,
}

/// A 0 → target count-up sampled once per animation frame.
#[derive(Debug, Clone)]
pub struct CountUp {
    target: i64,
    suffix: String,
    duration_ms: f64,
    started_ms: f64,
    state: CountUpState,
}

impl CountUp {
    #[must_use]
    pub fn start(counter: &Counter, duration_ms: f64, now_ms: f64) -> Self {
        Self {
            target: counter.target,
            suffix: counter.suffix.clone(),
            duration_ms,
            started_ms: now_ms,
            state: CountUpState::Running,
        }
    }

    #[must_use]
    pub fn state(&self) -> CountUpState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == CountUpState::Running
    }

    pub fn cancel(&mut self) {
        if self.is_running() {
            self.state = CountUpState::Cancelled;
        }
    }

    /// Text to display at `now_ms`, or `None` once finished or cancelled.
    ///
    /// The frame that reaches full progress writes exactly `target` and
    /// finishes the animation.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn frame(&mut self, now_ms: f64) -> Option<String> {
        if !self.is_running() {
            return None;
        }
        let elapsed = (now_ms - self.started_ms).max(0.0);
        let progress = if self.duration_ms > 0.0 { (elapsed / self.duration_ms).min(1.0) } else { 1.0 };
        if progress < 1.0 {
            let current = (progress * self.target as f64).floor() as i64;
            Some(format!("{current}{}", self.suffix))
        } else {
            self.state = CountUpState::Finished;
            Some(format!("{}{}", self.target, self.suffix))
        }
    }
}

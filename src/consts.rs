//! Shared constants: default tunables and the DOM contract (selectors,
//! classes, status copy).

// ── Layout ──────────────────────────────────────────────────────

/// Viewports at or below this width (CSS pixels) use the mobile layout.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// ── Timing ──────────────────────────────────────────────────────

/// Carousel auto-advance period.
pub const CAROUSEL_INTERVAL_MS: u32 = 5000;

/// Duration of the count-up animation on stat counters.
pub const COUNT_UP_MS: f64 = 1500.0;

/// Simulated network latency for the contact form.
pub const SUBMIT_LATENCY_MS: u32 = 1500;

/// How long the contact form success message stays visible.
pub const STATUS_CLEAR_MS: u32 = 5000;

// ── Scroll reveal ───────────────────────────────────────────────

/// Fraction of an element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// The trigger line sits this many pixels above the viewport bottom.
pub const REVEAL_BOTTOM_INSET_PX: f64 = 50.0;

// ── Card tilt ───────────────────────────────────────────────────

/// Rotation at the card edge, in degrees.
pub const TILT_MAX_DEG: f64 = 10.0;

/// Uniform scale applied while hovering.
pub const TILT_SCALE: f64 = 1.05;

/// Forward translation of the inner layer while hovering.
pub const TILT_DEPTH_PX: f64 = 20.0;

/// CSS perspective distance for the tilt transform.
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;

// ── Selectors ───────────────────────────────────────────────────

pub const SEL_MENU_TOGGLE: &str = ".mobile-menu-toggle";
pub const SEL_NAV: &str = "header nav";
pub const SEL_NAV_LINKS: &str = ".nav-links a, .nav-links button";
pub const SEL_MENU_LINE: &str = ".line";
pub const SEL_DROPDOWN: &str = ".dropdown";
pub const ID_MOUSE_FOLLOWER: &str = "mouse-follower";
pub const SEL_REVEAL: &str = ".scroll-animate, .stat-counter, .radial-dial";
pub const SEL_STAT_VALUE: &str = ".stat-value";
pub const SEL_DIAL_PROGRESS: &str = ".dial-progress";
pub const SEL_TILT_CARD: &str = ".service-card";
pub const SEL_TILT_INNER: &str = ".service-card-inner";
pub const SEL_ACCORDION_ITEM: &str = ".accordion-item";
pub const SEL_ACCORDION_TITLE: &str = ".accordion-title";
pub const SEL_ACCORDION_CONTENT: &str = ".accordion-content";
pub const SEL_CAROUSEL: &str = ".testimonial-carousel-container";
pub const SEL_CAROUSEL_CARD: &str = ".testimonial-card";
pub const SEL_CAROUSEL_DOT: &str = ".dot";
pub const ID_CONTACT_FORM: &str = "contact-form";
pub const ID_FORM_STATUS: &str = "form-status";
pub const SEL_SUBMIT: &str = "button[type=\"submit\"]";
pub const SEL_FIELD_NAME: &str = "#name";
pub const SEL_FIELD_EMAIL: &str = "#email";
pub const SEL_FIELD_MESSAGE: &str = "#message";
pub const ID_CONFIG: &str = "marquee-config";

// ── Classes ─────────────────────────────────────────────────────

pub const CLASS_NAV_OPEN: &str = "nav-open";
pub const CLASS_MENU_OPEN: &str = "menu-open";
pub const CLASS_OPEN: &str = "open";
pub const CLASS_DROPDOWN_TRIGGER: &str = "nav-link-button";
pub const CLASS_DROPDOWN_OPEN: &str = "dropdown-open";
pub const CLASS_IN_VIEW: &str = "in-view";
pub const CLASS_STAT_COUNTER: &str = "stat-counter";
pub const CLASS_RADIAL_DIAL: &str = "radial-dial";
pub const CLASS_ACTIVE: &str = "active";

// ── Contact form copy ───────────────────────────────────────────

pub const MSG_REQUIRED: &str = "Please fill out all required fields.";
pub const MSG_SENT: &str = "Thank you! Your message has been sent.";
pub const MSG_FAILED: &str = "Something went wrong. Please try again.";
pub const LABEL_SENDING: &str = "Sending...";
pub const LABEL_SEND: &str = "Send Message";

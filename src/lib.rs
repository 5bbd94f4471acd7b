//! # marquee
//!
//! Client-side interactivity for the marketing site, compiled to
//! WebAssembly and loaded once per page. The page markup and stylesheet are
//! rendered elsewhere; this crate only binds behavior to what is already in
//! the document.
//!
//! Every component is split in two: a browser-free state machine in the
//! modules below (unit-tested natively), and a thin binder under [`dom`]
//! (behind the `browser` feature) that feeds DOM events in and writes the
//! machine's output back as classes, attributes and inline styles.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`nav`] | Mobile menu open state and exclusive dropdowns |
//! | [`cursor`] | Mouse follower transform |
//! | [`reveal`] | One-shot scroll reveals, count-ups, radial dials |
//! | [`tilt`] | Pointer-relative 3D card tilt |
//! | [`accordion`] | Collapsible panels |
//! | [`carousel`] | Testimonial carousel slots and auto-advance |
//! | [`contact`] | Contact form validation and submission flow |
//! | [`geometry`] | Points and bounding boxes |
//! | [`config`] | Runtime tunables and page overrides |
//! | [`consts`] | Defaults and the markup contract |
//! | [`error`] | Crate error type |

pub mod accordion;
pub mod carousel;
pub mod config;
pub mod consts;
pub mod contact;
pub mod cursor;
#[cfg(feature = "browser")]
pub mod dom;
pub mod error;
pub mod geometry;
pub mod nav;
pub mod reveal;
pub mod tilt;

pub use config::SiteConfig;
pub use error::MarqueeError;

#[cfg(feature = "browser")]
use wasm_bindgen::prelude::*;

/// Module entry point: install logging, then bind every component once the
/// document has been parsed.
#[cfg(feature = "browser")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = dom::read_config();
    let level = config.as_ref().map_or(log::Level::Info, SiteConfig::level);
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("marquee: {err}").into());
    }
    let config = config.unwrap_or_else(|err| {
        log::warn!("{}: {err}; using defaults", err.error_code());
        SiteConfig::default()
    });

    let page = match dom::Page::new(config) {
        Ok(page) => page,
        Err(err) => {
            log::warn!("{}: {err}", err.error_code());
            return;
        }
    };

    if page.document.ready_state() == "loading" {
        let document = page.document.clone();
        let ready = dom::listen(&document, "DOMContentLoaded", move |_: web_sys::Event| {
            dom::boot(&page);
            Ok(())
        });
        if let Err(err) = ready {
            log::warn!("{}: {err}", err.error_code());
        }
    } else {
        dom::boot(&page);
    }
}

//! Runtime tunables.
//!
//! Defaults come from [`crate::consts`]. A page may override any subset by
//! embedding `<script type="application/json" id="marquee-config">` with a
//! JSON object; unknown keys are rejected so typos surface in the console.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub mobile_breakpoint_px: f64,
    pub carousel_interval_ms: u32,
    pub count_up_ms: f64,
    pub reveal_threshold: f64,
    pub reveal_bottom_inset_px: f64,
    pub tilt_max_deg: f64,
    pub tilt_scale: f64,
    pub tilt_depth_px: f64,
    pub tilt_perspective_px: f64,
    pub submit_latency_ms: u32,
    pub status_clear_ms: u32,
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: consts::MOBILE_BREAKPOINT_PX,
            carousel_interval_ms: consts::CAROUSEL_INTERVAL_MS,
            count_up_ms: consts::COUNT_UP_MS,
            reveal_threshold: consts::REVEAL_THRESHOLD,
            reveal_bottom_inset_px: consts::REVEAL_BOTTOM_INSET_PX,
            tilt_max_deg: consts::TILT_MAX_DEG,
            tilt_scale: consts::TILT_SCALE,
            tilt_depth_px: consts::TILT_DEPTH_PX,
            tilt_perspective_px: consts::TILT_PERSPECTIVE_PX,
            submit_latency_ms: consts::SUBMIT_LATENCY_MS,
            status_clear_ms: consts::STATUS_CLEAR_MS,
            log_level: "info".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse an override document. Missing keys keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Whether `width` falls in the mobile layout.
    #[must_use]
    pub fn is_mobile(&self, width: f64) -> bool {
        width <= self.mobile_breakpoint_px
    }

    /// Parsed log level; unknown names fall back to `Info`.
    #[must_use]
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Intersection observer `rootMargin` string.
    #[must_use]
    pub fn reveal_root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.reveal_bottom_inset_px)
    }
}

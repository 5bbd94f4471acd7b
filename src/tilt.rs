//! 3D hover tilt for service cards.
//!
//! Pointer position relative to the card center drives a rotation about
//! both axes (up to `max_deg` at the edges), a uniform scale-up, and a
//! forward translation of the inner layer. Leaving the card restores the
//! neutral transform. Stateless: every event computes from scratch.

#[cfg(test)]
#[path = "tilt_test.rs"]
mod tilt_test;

use crate::config::SiteConfig;
use crate::geometry::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltParams {
    pub max_deg: f64,
    pub scale: f64,
    pub depth_px: f64,
    pub perspective_px: f64,
}

impl From<&SiteConfig> for TiltParams {
    fn from(cfg: &SiteConfig) -> Self {
        Self {
            max_deg: cfg.tilt_max_deg,
            scale: cfg.tilt_scale,
            depth_px: cfg.tilt_depth_px,
            perspective_px: cfg.tilt_perspective_px,
        }
    }
}

impl Default for TiltParams {
    fn default() -> Self {
        Self::from(&SiteConfig::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltTransform {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub scale: f64,
    pub depth_px: f64,
    pub perspective_px: f64,
}

impl TiltTransform {
    #[must_use]
    pub fn neutral(params: &TiltParams) -> Self {
        Self {
            rotate_x_deg: 0.0,
            rotate_y_deg: 0.0,
            scale: 1.0,
            depth_px: 0.0,
            perspective_px: params.perspective_px,
        }
    }

    /// Hover transform for a pointer at `pointer` over a card at `rect`.
    #[must_use]
    pub fn hover(rect: Rect, pointer: Point, params: &TiltParams) -> Self {
        let Some(off) = rect.normalized_offset(pointer) else {
            return Self::neutral(params);
        };
        let x = off.x.clamp(-1.0, 1.0);
        let y = off.y.clamp(-1.0, 1.0);
        Self {
            rotate_x_deg: -y * params.max_deg,
            rotate_y_deg: x * params.max_deg,
            scale: params.scale,
            depth_px: params.depth_px,
            perspective_px: params.perspective_px,
        }
    }

    /// Inline `transform` for the card itself.
    #[must_use]
    pub fn card_css(&self) -> String {
        format!(
            "perspective({}px) rotateY({}deg) rotateX({}deg) scale({})",
            css_num(self.perspective_px),
            css_num(self.rotate_y_deg),
            css_num(self.rotate_x_deg),
            css_num(self.scale),
        )
    }

    /// Inline `transform` for the `.service-card-inner` depth layer.
    #[must_use]
    pub fn inner_css(&self) -> String {
        format!("translateZ({}px)", css_num(self.depth_px))
    }
}

// Folds -0 into 0 so the CSS never reads "-0deg".
fn css_num(v: f64) -> f64 {
    v + 0.0
}

//! Unit/scale model: zoom factors, device pixels, and millimeter conversion.
//!
//! All snap decisions happen in document-pixel space; this module owns the
//! conversions in and out of that space. `zoom` is a percentage everywhere in
//! this crate (100 = 1:1).

#[cfg(test)]
#[path = "scale_test.rs"]
mod scale_test;

use crate::consts::{MIN_EDITOR_SCALE, MM_PER_PX, PX_PER_MM};

/// Display facts injected by the host instead of being read from globals.
///
/// Keeps the engine testable without a simulated display environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayContext {
    /// Physical device pixels per logical pixel.
    pub device_pixel_ratio: f64,
    /// Width of the hosting viewport in logical pixels.
    pub viewport_width: f64,
}

impl Default for DisplayContext {
    fn default() -> Self {
        Self { device_pixel_ratio: 1.0, viewport_width: 0.0 }
    }
}

/// Convert a zoom percentage into a scale factor, floored at
/// [`MIN_EDITOR_SCALE`].
///
/// Non-finite zoom clamps to the floor rather than propagating.
#[must_use]
pub fn editor_scale(zoom: f64) -> f64 {
    if !zoom.is_finite() {
        return MIN_EDITOR_SCALE;
    }
    (zoom / 100.0).max(MIN_EDITOR_SCALE)
}

/// Snap a document-pixel value to the nearest physical device pixel when
/// rendered at `scale` and `dpr`, expressed back in document pixels.
///
/// Rendering-only: snap decisions operate in document space before any DPR
/// rounding.
#[must_use]
pub fn device_pixel_snap(value: f64, scale: f64, dpr: f64) -> f64 {
    (value * scale * dpr).round() / dpr / scale
}

/// Convert document pixels to millimeters.
#[must_use]
pub fn px_to_mm(px: f64) -> f64 {
    px * MM_PER_PX
}

/// Convert millimeters to document pixels.
#[must_use]
pub fn mm_to_px(mm: f64) -> f64 {
    mm * PX_PER_MM
}

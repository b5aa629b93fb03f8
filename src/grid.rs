//! Grid generator: millimeter grid line positions and zoom gating.
//!
//! The page grid has minor lines every 1 mm and major lines every 5 mm. At
//! low zoom the minor lines would sit closer together than two physical
//! device pixels and alias into noise, so they are suppressed entirely; the
//! same visibility rule decides which grid step the snap resolver aligns to.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::consts::{
    GRID_MAJOR_STEP_PX, GRID_MINOR_STEP_PX, MINOR_GRID_MIN_DEVICE_PX, PX_PER_MM,
};
use crate::scale::{editor_scale, px_to_mm};

/// Grid line positions as millimeter offsets from the page origin.
///
/// Minor and major sets are disjoint: a millimeter that carries a major line
/// never also carries a minor one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridLines {
    /// Vertical minor lines (x offsets in mm).
    pub minor_x: Vec<f64>,
    /// Horizontal minor lines (y offsets in mm).
    pub minor_y: Vec<f64>,
    /// Vertical major lines (x offsets in mm).
    pub major_x: Vec<f64>,
    /// Horizontal major lines (y offsets in mm).
    pub major_y: Vec<f64>,
}

/// On-screen spacing of the 1 mm minor grid in logical pixels.
#[must_use]
pub fn minor_spacing_px(zoom: f64) -> f64 {
    PX_PER_MM * editor_scale(zoom)
}

/// Whether minor gridlines are legible at this zoom and device pixel ratio.
#[must_use]
pub fn minor_grid_visible(zoom: f64, dpr: f64) -> bool {
    minor_spacing_px(zoom) * dpr >= MINOR_GRID_MIN_DEVICE_PX
}

/// The grid step the snap resolver aligns to, in document pixels: 1 mm while
/// the minor grid is visible, 5 mm once it is suppressed.
#[must_use]
pub fn active_grid_step_px(zoom: f64, dpr: f64) -> f64 {
    if minor_grid_visible(zoom, dpr) {
        GRID_MINOR_STEP_PX
    } else {
        GRID_MAJOR_STEP_PX
    }
}

/// Compute all grid line positions for a page.
///
/// Page extents round up to whole millimeters so the last partial cell still
/// draws. Majors land on every 5 mm up to the page edge; minors on every
/// other whole millimeter, and only while the minor grid is visible. A page
/// of zero width or height yields empty arrays.
#[must_use]
pub fn compute_grid_lines(page_w_px: f64, page_h_px: f64, zoom: f64, dpr: f64) -> GridLines {
    build_grid_lines(ceil_mm(page_w_px), ceil_mm(page_h_px), minor_grid_visible(zoom, dpr))
}

/// Memo for derived grid-line arrays.
///
/// Keyed on `(width_mm, height_mm, show_minor)`; rebuilt only when a key
/// component changes. Pure caching — correctness never depends on it.
#[derive(Debug, Default)]
pub struct GridCache {
    key: Option<(u32, u32, bool)>,
    lines: GridLines,
}

impl GridCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The grid lines for this page, zoom, and device pixel ratio.
    pub fn lines(&mut self, page_w_px: f64, page_h_px: f64, zoom: f64, dpr: f64) -> &GridLines {
        let key = (ceil_mm(page_w_px), ceil_mm(page_h_px), minor_grid_visible(zoom, dpr));
        if self.key != Some(key) {
            tracing::debug!(
                width_mm = key.0,
                height_mm = key.1,
                show_minor = key.2,
                "rebuilding grid lines"
            );
            self.lines = build_grid_lines(key.0, key.1, key.2);
            self.key = Some(key);
        }
        &self.lines
    }
}

// Page extents are non-negative after the guard and far below u32::MAX.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn ceil_mm(px: f64) -> u32 {
    if !px.is_finite() || px <= 0.0 {
        return 0;
    }
    px_to_mm(px).ceil() as u32
}

fn build_grid_lines(width_mm: u32, height_mm: u32, show_minor: bool) -> GridLines {
    let mut lines = GridLines::default();
    fill_axis(width_mm, show_minor, &mut lines.minor_x, &mut lines.major_x);
    fill_axis(height_mm, show_minor, &mut lines.minor_y, &mut lines.major_y);
    lines
}

fn fill_axis(extent_mm: u32, show_minor: bool, minor: &mut Vec<f64>, major: &mut Vec<f64>) {
    if extent_mm == 0 {
        return;
    }
    for mm in 0..=extent_mm {
        if mm % 5 == 0 {
            major.push(f64::from(mm));
        } else if show_minor {
            minor.push(f64::from(mm));
        }
    }
}

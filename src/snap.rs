//! Snap resolver: element and grid alignment for dragged elements.
//!
//! On every pointer-move during a drag the host calls
//! [`SnapContext::resolve`] with the element's proposed top-left position in
//! document pixels. The resolver evaluates edge/center alignment against
//! every other visible element plus alignment to the active grid step, and
//! returns the adjusted position together with the transient guide lines
//! that explain it. It never mutates elements and holds no state between
//! calls; cancelling a drag is simply "stop calling it".
//!
//! The resolver is total over finite numeric input: an empty element list, a
//! zero-sized mover, or disabled feature flags all degrade to the identity
//! result with no guides.

#[cfg(test)]
#[path = "snap_test.rs"]
mod snap_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SNAP_THRESHOLD_PX, GUIDE_DEDUP_EPSILON_PX};
use crate::element::{PartialElement, Positioned};
use crate::grid::active_grid_step_px;
use crate::scale::{DisplayContext, editor_scale};

/// Snapping configuration, supplied by the host on every drag frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Hard grid lock: snap to the active grid step regardless of distance.
    pub snap_to_grid: bool,
    /// Enable edge/center alignment against sibling elements.
    pub snap_to_elements: bool,
    /// Snap sensitivity in screen pixels, pre-zoom, so snapping feels equally
    /// sensitive at any magnification.
    pub snap_threshold: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            snap_to_grid: false,
            snap_to_elements: true,
            snap_threshold: DEFAULT_SNAP_THRESHOLD_PX,
        }
    }
}

/// Orientation of an alignment guide line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideKind {
    /// Spans the page left-to-right; explains a Y-axis snap.
    Horizontal,
    /// Spans the page top-to-bottom; explains an X-axis snap.
    Vertical,
}

/// Visual weight of a guide. Affects rendering only, never snap decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideStrength {
    /// Element edge/center alignment.
    Element,
    /// Major grid line.
    Grid,
    /// Minor grid line.
    Minor,
}

/// A transient alignment guide, valid for the current drag frame only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentGuide {
    /// Line orientation.
    pub kind: GuideKind,
    /// Document-pixel coordinate along the axis perpendicular to the line.
    pub position: f64,
    /// Visual weight.
    pub strength: GuideStrength,
}

/// Outcome of one snap resolution: the adjusted top-left position plus the
/// guides that explain it.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapResult {
    /// Resolved left edge in document pixels.
    pub x: f64,
    /// Resolved top edge in document pixels.
    pub y: f64,
    /// Guides for the current frame, in insertion order.
    pub guides: Vec<AlignmentGuide>,
}

impl SnapResult {
    /// The sparse update the host applies to the dragged element.
    #[must_use]
    pub fn to_partial(&self) -> PartialElement {
        PartialElement { x: Some(self.x), y: Some(self.y), ..Default::default() }
    }
}

/// Everything the resolver needs for one drag frame. Built fresh per frame;
/// nothing here outlives the drag.
#[derive(Debug, Clone, Copy)]
pub struct SnapContext {
    /// Feature flags and sensitivity.
    pub config: SnapConfig,
    /// Zoom percentage (100 = 1:1).
    pub zoom: f64,
    /// Whether the page grid overlay is currently shown.
    pub grid_visible: bool,
    /// Injected display facts (device pixel ratio).
    pub display: DisplayContext,
}

impl SnapContext {
    /// Resolve a proposed position against sibling elements and the grid.
    ///
    /// `target_x`/`target_y` are the moving element's proposed top-left in
    /// document pixels; `all` may include the moving element itself, which is
    /// excluded along with invisible and locked elements.
    #[must_use]
    pub fn resolve<E: Positioned>(
        &self,
        moving: &E,
        target_x: f64,
        target_y: f64,
        all: &[E],
    ) -> SnapResult {
        let scale = editor_scale(self.zoom);
        let threshold = self.config.snap_threshold / scale;

        let mut x = target_x;
        let mut y = target_y;
        let mut guides = Vec::new();
        let mut x_snapped = false;
        let mut y_snapped = false;

        if self.config.snap_to_elements {
            let (best_x, best_y) = best_element_candidates(moving, target_x, target_y, all, threshold);
            if let Some(best) = best_x {
                x = best.snapped;
                x_snapped = true;
                tracing::trace!(delta = best.delta, x, "x axis snapped to element");
                push_guide(&mut guides, AlignmentGuide {
                    kind: GuideKind::Vertical,
                    position: best.guide_at,
                    strength: GuideStrength::Element,
                });
            }
            if let Some(best) = best_y {
                y = best.snapped;
                y_snapped = true;
                tracing::trace!(delta = best.delta, y, "y axis snapped to element");
                push_guide(&mut guides, AlignmentGuide {
                    kind: GuideKind::Horizontal,
                    position: best.guide_at,
                    strength: GuideStrength::Element,
                });
            }
        }

        if self.config.snap_to_grid || self.grid_visible {
            let step = active_grid_step_px(self.zoom, self.display.device_pixel_ratio);
            if !x_snapped {
                if let Some(value) = grid_snap(target_x, step, self.config.snap_to_grid, threshold) {
                    x = value;
                }
            }
            if !y_snapped {
                if let Some(value) = grid_snap(target_y, step, self.config.snap_to_grid, threshold) {
                    y = value;
                }
            }
        }

        SnapResult { x, y, guides }
    }
}

/// Best candidate so far for one axis.
struct AxisBest {
    delta: f64,
    /// Resolved top/left coordinate for the moving element.
    snapped: f64,
    /// Coordinate of the matched edge/center, where the guide is drawn.
    guide_at: f64,
}

fn best_element_candidates<E: Positioned>(
    moving: &E,
    target_x: f64,
    target_y: f64,
    all: &[E],
    threshold: f64,
) -> (Option<AxisBest>, Option<AxisBest>) {
    let width = moving.width();
    let height = moving.height();
    let left = target_x;
    let right = target_x + width;
    let center_x = target_x + width / 2.0;
    let top = target_y;
    let bottom = target_y + height;
    let center_y = target_y + height / 2.0;

    let mut best_x: Option<AxisBest> = None;
    let mut best_y: Option<AxisBest> = None;

    for other in all {
        if other.id() == moving.id() || !other.visible() || other.locked() {
            continue;
        }

        // X: left-left, right-right, left-right, right-left, center-center.
        let x_candidates = [
            (left, other.left(), other.left()),
            (right, other.right(), other.right() - width),
            (left, other.right(), other.right()),
            (right, other.left(), other.left() - width),
            (center_x, other.center_x(), other.center_x() - width / 2.0),
        ];
        for (edge, target, snapped) in x_candidates {
            consider(&mut best_x, edge, target, snapped, threshold);
        }

        // Y: top-top, bottom-bottom, top-bottom, bottom-top, center-center.
        let y_candidates = [
            (top, other.top(), other.top()),
            (bottom, other.bottom(), other.bottom() - height),
            (top, other.bottom(), other.bottom()),
            (bottom, other.top(), other.top() - height),
            (center_y, other.center_y(), other.center_y() - height / 2.0),
        ];
        for (edge, target, snapped) in y_candidates {
            consider(&mut best_y, edge, target, snapped, threshold);
        }
    }

    (best_x, best_y)
}

/// Keep the candidate with the strictly smallest delta; elements are scanned
/// in list order, so the first-encountered minimum wins ties.
fn consider(best: &mut Option<AxisBest>, edge: f64, target: f64, snapped: f64, threshold: f64) {
    let delta = (edge - target).abs();
    if delta > threshold {
        return;
    }
    if best.as_ref().is_none_or(|b| delta < b.delta) {
        *best = Some(AxisBest { delta, snapped, guide_at: target });
    }
}

/// Nearest grid coordinate under the hard/soft snapping policy.
///
/// Hard mode ignores the threshold; soft mode (grid merely visible) only
/// snaps within it. Grid snapping emits no guide — the grid itself is
/// already on screen whenever this path is active.
fn grid_snap(target: f64, step: f64, hard: bool, threshold: f64) -> Option<f64> {
    let value = (target / step).round() * step;
    if hard || (target - value).abs() <= threshold {
        tracing::trace!(target, value, step, "axis snapped to grid");
        Some(value)
    } else {
        None
    }
}

/// Append a guide unless an equivalent one already exists.
///
/// Two guides of the same orientation within half a document pixel would
/// render as a doubled line; the first one wins.
pub(crate) fn push_guide(guides: &mut Vec<AlignmentGuide>, guide: AlignmentGuide) {
    let duplicate = guides
        .iter()
        .any(|g| g.kind == guide.kind && (g.position - guide.position).abs() <= GUIDE_DEDUP_EPSILON_PX);
    if !duplicate {
        guides.push(guide);
    }
}

//! Guide renderer: converts abstract guides into device-pixel line rects.
//!
//! Presentation only — this module makes no snapping decisions. It receives
//! the guide list produced for the current frame and the generated grid
//! lines, and yields axis-aligned rectangles in document-pixel units whose
//! edges land on physical device pixels, so the lines render crisp at any
//! zoom and device pixel ratio.

#[cfg(test)]
#[path = "guide_test.rs"]
mod guide_test;

use crate::consts::{GUIDE_PRIMARY_COLOR, GUIDE_SECONDARY_COLOR};
use crate::grid::GridLines;
use crate::scale::{DisplayContext, device_pixel_snap, editor_scale, mm_to_px};
use crate::snap::{AlignmentGuide, GuideKind, GuideStrength, push_guide};

/// A drawable guide line: an axis-aligned rectangle in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideLine {
    /// Left edge in document pixels.
    pub x: f64,
    /// Top edge in document pixels.
    pub y: f64,
    /// Width in document pixels.
    pub width: f64,
    /// Height in document pixels.
    pub height: f64,
    /// CSS color, chosen by guide strength.
    pub color: &'static str,
}

/// Map guides to pixel-snapped hairlines spanning the page.
///
/// A vertical guide becomes a full-height line one physical device pixel
/// wide. The `1 / dpr` width is deliberately not divided by the zoom scale:
/// the line must render as a true hairline at any magnification.
#[must_use]
pub fn guide_lines(
    guides: &[AlignmentGuide],
    page_w_px: f64,
    page_h_px: f64,
    zoom: f64,
    display: DisplayContext,
) -> Vec<GuideLine> {
    let scale = editor_scale(zoom);
    let dpr = display.device_pixel_ratio;
    let hairline = 1.0 / dpr;

    guides
        .iter()
        .map(|guide| {
            let position = device_pixel_snap(guide.position, scale, dpr);
            let color = color_for(guide.strength);
            match guide.kind {
                GuideKind::Vertical => GuideLine {
                    x: position,
                    y: 0.0,
                    width: hairline,
                    height: page_h_px,
                    color,
                },
                GuideKind::Horizontal => GuideLine {
                    x: 0.0,
                    y: position,
                    width: page_w_px,
                    height: hairline,
                    color,
                },
            }
        })
        .collect()
}

/// Adapt generated grid lines into guides so the grid overlay renders
/// through the same pixel-snapped path as alignment guides.
#[must_use]
pub fn grid_guides(lines: &GridLines) -> Vec<AlignmentGuide> {
    let count =
        lines.major_x.len() + lines.major_y.len() + lines.minor_x.len() + lines.minor_y.len();
    let mut guides = Vec::with_capacity(count);
    append_axis(&mut guides, &lines.major_x, GuideKind::Vertical, GuideStrength::Grid);
    append_axis(&mut guides, &lines.major_y, GuideKind::Horizontal, GuideStrength::Grid);
    append_axis(&mut guides, &lines.minor_x, GuideKind::Vertical, GuideStrength::Minor);
    append_axis(&mut guides, &lines.minor_y, GuideKind::Horizontal, GuideStrength::Minor);
    guides
}

fn append_axis(
    guides: &mut Vec<AlignmentGuide>,
    offsets_mm: &[f64],
    kind: GuideKind,
    strength: GuideStrength,
) {
    for &mm in offsets_mm {
        push_guide(guides, AlignmentGuide { kind, position: mm_to_px(mm), strength });
    }
}

fn color_for(strength: GuideStrength) -> &'static str {
    match strength {
        GuideStrength::Minor => GUIDE_SECONDARY_COLOR,
        GuideStrength::Element | GuideStrength::Grid => GUIDE_PRIMARY_COLOR,
    }
}

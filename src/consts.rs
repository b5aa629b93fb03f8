//! Shared numeric constants for the draftgrid engine.

// ── Units ───────────────────────────────────────────────────────

/// Logical pixels per inch (CSS reference pixel density).
pub const PX_PER_INCH: f64 = 96.0;

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Document pixels per millimeter (≈ 3.7795).
pub const PX_PER_MM: f64 = PX_PER_INCH / MM_PER_INCH;

/// Millimeters per document pixel.
pub const MM_PER_PX: f64 = MM_PER_INCH / PX_PER_INCH;

// ── Grid ────────────────────────────────────────────────────────

/// Minor grid step in millimeters.
pub const GRID_MINOR_STEP_MM: f64 = 1.0;

/// Major grid step in millimeters.
pub const GRID_MAJOR_STEP_MM: f64 = 5.0;

/// Minor grid step in document pixels.
pub const GRID_MINOR_STEP_PX: f64 = GRID_MINOR_STEP_MM * PX_PER_MM;

/// Major grid step in document pixels.
pub const GRID_MAJOR_STEP_PX: f64 = GRID_MAJOR_STEP_MM * PX_PER_MM;

/// Minimum on-screen spacing, in physical device pixels, below which minor
/// gridlines alias into noise and are suppressed entirely.
pub const MINOR_GRID_MIN_DEVICE_PX: f64 = 2.0;

// ── Zoom ────────────────────────────────────────────────────────

/// Floor for the editor scale factor; guards against zero or negative scale
/// at extreme zoom-out.
pub const MIN_EDITOR_SCALE: f64 = 0.01;

// ── Snapping ────────────────────────────────────────────────────

/// Default snap sensitivity in screen pixels, pre-zoom.
pub const DEFAULT_SNAP_THRESHOLD_PX: f64 = 6.0;

/// Two guides of the same orientation within this many document pixels are
/// considered the same line.
pub const GUIDE_DEDUP_EPSILON_PX: f64 = 0.5;

// ── Guide colors ────────────────────────────────────────────────

/// CSS color for element-alignment and major-grid guide lines.
pub const GUIDE_PRIMARY_COLOR: &str = "#D94B4B";

/// CSS color for minor-grid guide lines.
pub const GUIDE_SECONDARY_COLOR: &str = "#B8B2A7";

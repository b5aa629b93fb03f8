//! Document model: page elements, their geometry, and sparse updates.
//!
//! This module defines the generic movable unit shared by every editor
//! surface (`Element`, `ElementKind`), a sparse-update type the host applies
//! after a drag resolves (`PartialElement`), a typed accessor for the
//! open-ended `props` JSON bag (`Props`), and the `Positioned` capability the
//! snap resolver is generic over.
//!
//! The element collection itself is owned by the host's document state; this
//! crate only reads geometry from it.

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a page element.
pub type ElementId = Uuid;

/// The kind of a page element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Free-form text block.
    Text,
    /// Tabular block (quantity rows, schedules).
    Table,
    /// Axis-aligned rectangle.
    Rect,
    /// Circle inscribed within the bounding box.
    Circle,
    /// Straight line segment across the bounding box.
    Line,
    /// Raster or vector image.
    Image,
    /// Signature field.
    Signature,
}

/// A page element as stored in the document and on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier for this element.
    pub id: ElementId,
    /// Shape or block type.
    pub kind: ElementKind,
    /// Left edge in document pixels; page origin is top-left.
    pub x: f64,
    /// Top edge in document pixels.
    pub y: f64,
    /// Width of the bounding box in document pixels; never negative.
    pub width: f64,
    /// Height of the bounding box in document pixels; never negative.
    pub height: f64,
    /// Hidden elements are not rendered, cannot be dragged, and are never
    /// snap targets.
    pub visible: bool,
    /// Locked elements cannot be dragged and are never snap targets.
    pub locked: bool,
    /// Stacking order; lower values are drawn beneath higher values.
    pub z_index: i64,
    /// Open-ended per-kind properties (fill, stroke, text, image source, ...).
    pub props: serde_json::Value,
}

impl Element {
    /// Apply a sparse update in place. Props keys merge; `null` values delete
    /// keys. Returns false when `props` is present but not a JSON object.
    pub fn apply_partial(&mut self, partial: &PartialElement) -> bool {
        if let Some(x) = partial.x {
            self.x = x;
        }
        if let Some(y) = partial.y {
            self.y = y;
        }
        if let Some(w) = partial.width {
            self.width = w;
        }
        if let Some(h) = partial.height {
            self.height = h;
        }
        if let Some(v) = partial.visible {
            self.visible = v;
        }
        if let Some(l) = partial.locked {
            self.locked = l;
        }
        if let Some(z) = partial.z_index {
            self.z_index = z;
        }
        if let Some(ref props) = partial.props {
            let Some(incoming) = props.as_object() else {
                return false;
            };

            if !self.props.is_object() {
                self.props = serde_json::json!({});
            }

            if let Some(existing) = self.props.as_object_mut() {
                for (k, v) in incoming {
                    if v.is_null() {
                        existing.remove(k);
                    } else {
                        existing.insert(k.clone(), v.clone());
                    }
                }
            }
        }
        true
    }
}

/// Sparse update for an element. Only present fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialElement {
    /// New x position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// New y position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// New width, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// New height, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// New visibility flag, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// New lock flag, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    /// New z-index, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i64>,
    /// Props keys to merge or remove (null values delete keys).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<serde_json::Value>,
}

/// Typed access to common props fields from an `Element.props` JSON value.
pub struct Props<'a> {
    value: &'a serde_json::Value,
}

impl<'a> Props<'a> {
    /// Wrap a reference to a `props` JSON value for typed access.
    #[must_use]
    pub fn new(value: &'a serde_json::Value) -> Self {
        Self { value }
    }

    /// Fill color as a CSS color string. Defaults to `"#D94B4B"` when absent.
    #[must_use]
    pub fn fill(&self) -> &str {
        self.value
            .get("fill")
            .and_then(|v| v.as_str())
            .unwrap_or("#D94B4B")
    }

    /// Stroke color as a CSS color string. Defaults to `"#1F1A17"` when absent.
    #[must_use]
    pub fn stroke(&self) -> &str {
        self.value
            .get("stroke")
            .and_then(|v| v.as_str())
            .unwrap_or("#1F1A17")
    }

    /// Stroke width in document pixels. Defaults to `1.0` when absent.
    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.value
            .get("stroke_width")
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(1.0)
    }

    /// Label or body text displayed on the element. Empty string when absent.
    #[must_use]
    pub fn text(&self) -> &str {
        self.value
            .get("text")
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }
}

/// Capability of anything with a position, size, and visibility.
///
/// The snap resolver is generic over this trait so hosts can feed their own
/// element types without converting to [`Element`] first.
pub trait Positioned {
    /// Identity, used to exclude the moving element from its own targets.
    fn id(&self) -> ElementId;
    /// Left edge in document pixels.
    fn x(&self) -> f64;
    /// Top edge in document pixels.
    fn y(&self) -> f64;
    /// Bounding-box width in document pixels.
    fn width(&self) -> f64;
    /// Bounding-box height in document pixels.
    fn height(&self) -> f64;
    /// Whether the element is currently shown.
    fn visible(&self) -> bool;
    /// Whether the element is locked against editing.
    fn locked(&self) -> bool;

    /// Left edge.
    fn left(&self) -> f64 {
        self.x()
    }

    /// Right edge.
    fn right(&self) -> f64 {
        self.x() + self.width()
    }

    /// Horizontal center.
    fn center_x(&self) -> f64 {
        self.x() + self.width() / 2.0
    }

    /// Top edge.
    fn top(&self) -> f64 {
        self.y()
    }

    /// Bottom edge.
    fn bottom(&self) -> f64 {
        self.y() + self.height()
    }

    /// Vertical center.
    fn center_y(&self) -> f64 {
        self.y() + self.height() / 2.0
    }
}

impl Positioned for Element {
    fn id(&self) -> ElementId {
        self.id
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn locked(&self) -> bool {
        self.locked
    }
}

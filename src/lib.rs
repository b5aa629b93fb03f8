//! Geometric snapping and alignment engine for the draft editor surfaces.
//!
//! Every editor surface in the application (drawing canvas, proposal document
//! canvas, quantity-grid layout views) shares one page coordinate system:
//! document pixels at 96 dpi over a millimeter grid. This crate owns the math
//! that makes dragging feel right on those pages — converting between
//! millimeters, zoom-scaled pixels and physical device pixels, generating the
//! visible grid, deciding where a dragged element lands, and describing the
//! transient guide lines that explain the snap.
//!
//! The host owns all document state. Every entry point here is a pure
//! function over the inputs of a single drag frame: the resolver never
//! mutates elements, guides live for one rendered frame, and nothing is
//! retained between calls.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`scale`] | Zoom/scale model and device-pixel snapping |
//! | [`element`] | Page element types and the [`element::Positioned`] capability |
//! | [`grid`] | Millimeter grid generation and zoom gating |
//! | [`snap`] | The snap resolver: element and grid alignment |
//! | [`guide`] | Rendering guides as device-pixel hairlines |
//! | [`consts`] | Shared numeric constants (units, steps, thresholds) |

pub mod consts;
pub mod element;
pub mod grid;
pub mod guide;
pub mod scale;
pub mod snap;

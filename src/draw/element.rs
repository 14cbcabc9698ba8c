//! Brush element model.

use super::bounds::{Bounds, Point};
use super::color::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle to an element owned by an [`ElementStore`](super::ElementStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(u64);

impl ElementId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "brush-{}", self.0)
    }
}

/// Appearance chosen before a drag begins; fixed for the stroke's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke thickness; also pads the element bounds
    pub line_width: f64,
}

/// A persisted freehand stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrushElement {
    pub id: ElementId,
    /// Box in logical canvas coordinates
    pub bounds: Bounds,
    /// Path in draw order, relative to the stroke's top-left anchor
    pub points: Vec<Point>,
    pub style: StrokeStyle,
}

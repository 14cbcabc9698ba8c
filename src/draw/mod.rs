//! Stroke geometry, the brush element model, and the canvas surface.
//!
//! This module defines the drawing-side types used by stroke capture:
//! - [`Point`] / [`Bounds`]: path vertices and element boxes, plus [`brush_bounds`]
//! - [`Color`] / [`StrokeStyle`]: stroke appearance
//! - [`BrushElement`]: a persisted freehand stroke
//! - [`ElementStore`] / [`Surface`]: where elements live
//! - [`RenderInvalidation`]: the "surface updated" broadcast

pub mod bounds;
pub mod color;
pub mod element;
pub mod invalidation;
pub mod surface;

// Re-export commonly used types at module level
pub use bounds::{Bounds, Extent, Point, brush_bounds};
pub use color::{Color, DEFAULT_SELECTED_COLOR};
pub use element::{BrushElement, ElementId, StrokeStyle};
pub use invalidation::{RenderInvalidation, SubscriptionId};
pub use surface::{ElementStore, StoreError, Surface};

// Re-export the palette for public API
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};

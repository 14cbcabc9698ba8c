//! Pointer events delivered to mode controllers.

use crate::draw::Point;
use serde::{Deserialize, Serialize};

/// Pointer callback a mode controller can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointerEventKind {
    /// Pointer pressed and started moving
    DragStart,
    /// Pointer moved while pressed
    DragMove,
    /// Pointer released after a drag
    DragEnd,
    /// Single click on the container
    Click,
    /// Double click on the container
    DblClick,
    /// Triple click on the container
    TripleClick,
    /// Secondary-button click
    ContextMenu,
    /// Pointer moved without a button held
    Hover,
    /// Pointer left the container
    HoverExit,
}

/// A pointer event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, x: f64, y: f64) -> Self {
        Self { kind, x, y }
    }

    /// Screen position of the event.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

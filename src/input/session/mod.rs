//! Drag-session stroke capture.
//!
//! A [`StrokeSession`] turns one pointer drag into one brush element. Path
//! points are kept relative to a top-left anchor that only ever moves toward
//! smaller coordinates; whenever it moves, every accumulated point is
//! re-based so the path and the anchor stay in sync. The element's bounds are
//! recomputed from the full path on every sample and written straight to the
//! store.

use super::flags::ENABLE_SURFACE;
use super::mode::ModeContext;
use crate::draw::{Bounds, ElementId, Point, StoreError, StrokeStyle, brush_bounds};
use thiserror::Error;

/// Errors raised while capturing a stroke.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrokeError {
    /// The store no longer holds the element this session is drawing.
    #[error("brush element {id} vanished mid-drag: {source}")]
    ElementMissing {
        id: ElementId,
        #[source]
        source: StoreError,
    },
}

/// Stroke capture state machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// No drag in progress (initial and terminal state)
    #[default]
    Idle,
    /// Pointer held down; one element is being authored
    Dragging {
        /// Element receiving the stroke
        element: ElementId,
        /// Top-left of the path in logical coordinates
        anchor: Point,
        /// Path relative to `anchor`, in draw order
        points: Vec<Point>,
        /// Appearance fixed at drag start
        style: StrokeStyle,
    },
}

/// Bounds written to the store for a path anchored at `anchor`.
///
/// The box is shifted by half the line width because the renderer centers
/// stroke thickness on the path.
pub fn stroke_bounds(anchor: Point, points: &[Point], line_width: f64) -> Bounds {
    let extent = brush_bounds(points, line_width);
    let half = line_width / 2.0;
    Bounds::new(anchor.x - half, anchor.y - half, extent.w, extent.h)
}

/// Owns the working state of at most one in-flight stroke.
#[derive(Debug, Default)]
pub struct StrokeSession {
    state: SessionState,
}

impl StrokeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SessionState::Dragging { .. })
    }

    /// Element currently being drawn, if any.
    pub fn element(&self) -> Option<ElementId> {
        match &self.state {
            SessionState::Dragging { element, .. } => Some(*element),
            SessionState::Idle => None,
        }
    }

    /// Top-left of the in-flight path in logical coordinates.
    pub fn anchor(&self) -> Option<Point> {
        match &self.state {
            SessionState::Dragging { anchor, .. } => Some(*anchor),
            SessionState::Idle => None,
        }
    }

    /// In-flight path relative to [`anchor`](Self::anchor); empty while idle.
    pub fn points(&self) -> &[Point] {
        match &self.state {
            SessionState::Dragging { points, .. } => points,
            SessionState::Idle => &[],
        }
    }

    /// Begins a stroke at `screen` and creates its element.
    ///
    /// Returns `None` without touching anything when surface editing is
    /// disabled. A start that arrives mid-drag finishes the previous stroke
    /// first.
    pub fn start(
        &mut self,
        cx: &mut ModeContext<'_>,
        screen: Point,
        style: StrokeStyle,
    ) -> Option<ElementId> {
        if !cx.flags.is_enabled(ENABLE_SURFACE) {
            return None;
        }

        if self.is_dragging() {
            log::warn!("Drag started while a stroke was still open; finishing it first");
            self.end(cx);
        }

        cx.history.open();

        let anchor = cx.viewport.to_logical(screen);
        let points = vec![Point::ORIGIN];
        let element = cx.store.create(
            Bounds::square(anchor, style.line_width),
            points.clone(),
            style,
        );

        log::info!(
            "Started stroke {element} at ({:.1}, {:.1}), line width {}",
            anchor.x,
            anchor.y,
            style.line_width
        );

        self.state = SessionState::Dragging {
            element,
            anchor,
            points,
            style,
        };
        cx.surface_updated.signal();
        Some(element)
    }

    /// Extends the stroke to `screen`.
    ///
    /// No-op while idle or when surface editing is disabled. If the store
    /// rejects the update the session is abandoned and the error returned;
    /// it never keeps drawing into an element it cannot see.
    pub fn move_to(&mut self, cx: &mut ModeContext<'_>, screen: Point) -> Result<(), StrokeError> {
        if !cx.flags.is_enabled(ENABLE_SURFACE) {
            return Ok(());
        }
        let SessionState::Dragging {
            element,
            anchor,
            points,
            style,
        } = &mut self.state
        else {
            return Ok(());
        };

        let id = *element;
        let line_width = style.line_width;
        let logical = cx.viewport.to_logical(screen);

        let origin = *anchor;
        points.push(logical - origin);

        let new_anchor = origin.min(logical);
        let delta = new_anchor - origin;
        if delta != Point::ORIGIN {
            for point in points.iter_mut() {
                *point = *point - delta;
            }
        }
        *anchor = new_anchor;

        let bounds = stroke_bounds(new_anchor, points, line_width);
        log::debug!(
            "Stroke {id}: {} points, bounds ({:.1}, {:.1}, {:.1}x{:.1})",
            points.len(),
            bounds.x,
            bounds.y,
            bounds.w,
            bounds.h
        );

        let result = cx.store.update(id, bounds, points.clone());
        if let Err(source) = result {
            log::error!("Abandoning stroke {id}: {source}");
            self.state = SessionState::Idle;
            cx.history.close();
            return Err(StrokeError::ElementMissing { id, source });
        }

        cx.surface_updated.signal();
        Ok(())
    }

    /// Finishes the stroke. The element stays in the store; only the
    /// session's working state is dropped. No-op while idle.
    pub fn end(&mut self, cx: &mut ModeContext<'_>) {
        let Some(element) = self.element() else {
            return;
        };

        log::info!(
            "Finished stroke {element} with {} points",
            self.points().len()
        );
        self.state = SessionState::Idle;
        cx.history.close();
        cx.surface_updated.signal();
    }
}

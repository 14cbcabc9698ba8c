//! Brush mode: freehand strokes from pointer drags.

use super::events::PointerEvent;
use super::mode::{ModeContext, ModeController};
use super::session::{StrokeError, StrokeSession};
use crate::draw::{Color, DEFAULT_SELECTED_COLOR, ElementId, StrokeStyle};

/// Default brush thickness in logical units.
pub const DEFAULT_LINE_WIDTH: f64 = 4.0;

/// Brush settings picked in the toolbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushMode {
    pub color: Color,
    pub line_width: f64,
}

impl Default for BrushMode {
    fn default() -> Self {
        Self {
            color: DEFAULT_SELECTED_COLOR,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl BrushMode {
    fn style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.color,
            line_width: self.line_width,
        }
    }
}

/// Mode controller that draws one brush element per drag.
///
/// Only drags do anything; clicks, hovers and the context menu are ignored
/// because the brush has no other interactions.
#[derive(Debug, Default)]
pub struct BrushModeController {
    mode: BrushMode,
    session: StrokeSession,
    last_started: Option<ElementId>,
}

impl BrushModeController {
    pub fn new(mode: BrushMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> &BrushMode {
        &self.mode
    }

    /// Changes the brush settings. An in-flight stroke keeps the style it
    /// started with.
    pub fn set_mode(&mut self, mode: BrushMode) {
        self.mode = mode;
    }

    pub fn session(&self) -> &StrokeSession {
        &self.session
    }

    /// Element created by the most recent successful drag start.
    pub fn last_started(&self) -> Option<ElementId> {
        self.last_started
    }
}

impl ModeController for BrushModeController {
    fn on_drag_start(&mut self, cx: &mut ModeContext<'_>, event: &PointerEvent) {
        if let Some(id) = self.session.start(cx, event.position(), self.mode.style()) {
            self.last_started = Some(id);
        }
    }

    fn on_drag_move(
        &mut self,
        cx: &mut ModeContext<'_>,
        event: &PointerEvent,
    ) -> Result<(), StrokeError> {
        self.session.move_to(cx, event.position())
    }

    fn on_drag_end(&mut self, cx: &mut ModeContext<'_>, _event: &PointerEvent) {
        self.session.end(cx);
    }

    fn on_click(&mut self, _cx: &mut ModeContext<'_>, _event: &PointerEvent) {}

    fn on_dbl_click(&mut self, _cx: &mut ModeContext<'_>, _event: &PointerEvent) {}

    fn on_triple_click(&mut self, _cx: &mut ModeContext<'_>, _event: &PointerEvent) {}

    fn on_context_menu(&mut self, _cx: &mut ModeContext<'_>, _event: &PointerEvent) {}

    fn on_hover(&mut self, _cx: &mut ModeContext<'_>, _event: &PointerEvent) {}

    fn on_hover_exit(&mut self, _cx: &mut ModeContext<'_>, _event: &PointerEvent) {}

    fn clear_selection(&mut self, _cx: &mut ModeContext<'_>) {}
}

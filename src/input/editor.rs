//! Editor: owns the document collaborators and dispatches pointer events
//! to the active mode controller.

use super::brush::{BrushMode, BrushModeController};
use super::events::{PointerEvent, PointerEventKind};
use super::flags::{ENABLE_SURFACE, FlagSet};
use super::history::History;
use super::mode::{ModeContext, ModeController};
use super::session::StrokeError;
use super::viewport::Viewport;
use crate::config::Config;
use crate::draw::{RenderInvalidation, Surface};

/// Canvas document state plus the active tool.
pub struct Editor<M: ModeController = BrushModeController> {
    /// Pan/zoom used to map pointer positions
    pub viewport: Viewport,
    /// Elements drawn so far
    pub surface: Surface,
    /// Document feature flags
    pub flags: FlagSet,
    /// Undo transaction tracking
    pub history: History,
    /// Fired after every surface mutation
    pub surface_updated: RenderInvalidation,
    controller: M,
}

impl Editor<BrushModeController> {
    /// Builds a brush editor from validated configuration.
    pub fn from_config(config: &Config) -> Self {
        let mode = BrushMode {
            color: config.brush.default_color.to_color(),
            line_width: config.brush.line_width,
        };
        let enable_surface = config.features.enable_surface;
        let flags = FlagSet::new().with(ENABLE_SURFACE, enable_surface);
        Self::new(
            BrushModeController::new(mode),
            Viewport::from_config(&config.viewport),
            flags,
        )
    }
}

impl<M: ModeController> Editor<M> {
    pub fn new(controller: M, viewport: Viewport, flags: FlagSet) -> Self {
        Self {
            viewport,
            surface: Surface::new(),
            flags,
            history: History::new(),
            surface_updated: RenderInvalidation::new(),
            controller,
        }
    }

    pub fn controller(&self) -> &M {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut M {
        &mut self.controller
    }

    /// Routes one pointer event to the matching controller callback.
    pub fn dispatch(&mut self, event: &PointerEvent) -> Result<(), StrokeError> {
        let Self {
            viewport,
            surface,
            flags,
            history,
            surface_updated,
            controller,
        } = self;
        let mut cx = ModeContext {
            viewport: &*viewport,
            store: surface,
            flags: &*flags,
            history,
            surface_updated,
        };

        match event.kind {
            PointerEventKind::DragStart => controller.on_drag_start(&mut cx, event),
            PointerEventKind::DragMove => return controller.on_drag_move(&mut cx, event),
            PointerEventKind::DragEnd => controller.on_drag_end(&mut cx, event),
            PointerEventKind::Click => controller.on_click(&mut cx, event),
            PointerEventKind::DblClick => controller.on_dbl_click(&mut cx, event),
            PointerEventKind::TripleClick => controller.on_triple_click(&mut cx, event),
            PointerEventKind::ContextMenu => controller.on_context_menu(&mut cx, event),
            PointerEventKind::Hover => controller.on_hover(&mut cx, event),
            PointerEventKind::HoverExit => controller.on_hover_exit(&mut cx, event),
        }
        Ok(())
    }

    /// Asks the active controller to drop its selection.
    pub fn clear_selection(&mut self) {
        let mut cx = ModeContext {
            viewport: &self.viewport,
            store: &mut self.surface,
            flags: &self.flags,
            history: &mut self.history,
            surface_updated: &mut self.surface_updated,
        };
        self.controller.clear_selection(&mut cx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Bounds, ElementStore, Point};
    use crate::input::events::PointerEventKind::*;
    use crate::input::flags::FeatureFlags;
    use crate::input::session::SessionState;
    use std::cell::Cell;
    use std::rc::Rc;

    fn brush_editor(enable_surface: bool) -> Editor {
        Editor::new(
            BrushModeController::new(BrushMode::default()),
            Viewport::new(),
            FlagSet::new().with(ENABLE_SURFACE, enable_surface),
        )
    }

    fn event(kind: PointerEventKind, x: f64, y: f64) -> PointerEvent {
        PointerEvent::new(kind, x, y)
    }

    #[test]
    fn drag_lifecycle_produces_one_element() {
        let mut editor = brush_editor(true);
        let repaints = Rc::new(Cell::new(0));
        let counter = Rc::clone(&repaints);
        editor
            .surface_updated
            .subscribe(move || counter.set(counter.get() + 1));

        editor.dispatch(&event(DragStart, 10.0, 10.0)).unwrap();
        editor.dispatch(&event(DragMove, 20.0, 10.0)).unwrap();
        editor.dispatch(&event(DragEnd, 20.0, 10.0)).unwrap();

        assert_eq!(editor.surface.len(), 1);
        let id = editor.controller().last_started().unwrap();
        let element = editor.surface.get(id).unwrap();
        assert_eq!(element.bounds, Bounds::new(8.0, 8.0, 14.0, 4.0));
        assert_eq!(
            element.points,
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]
        );
        assert_eq!(repaints.get(), 3);
        assert_eq!(editor.history.committed(), 1);
        assert_eq!(editor.controller().session().state(), &SessionState::Idle);
    }

    #[test]
    fn non_drag_callbacks_are_no_ops() {
        for drag_open in [false, true] {
            let mut editor = brush_editor(true);
            if drag_open {
                editor.dispatch(&event(DragStart, 1.0, 1.0)).unwrap();
            }
            let surface = editor.surface.elements().to_vec();
            let history = editor.history.clone();
            let emitted = editor.surface_updated.emitted();
            let state = editor.controller().session().state().clone();

            for kind in [Click, DblClick, TripleClick, ContextMenu, Hover, HoverExit] {
                editor.dispatch(&event(kind, 42.0, -7.0)).unwrap();
            }
            editor.clear_selection();

            assert_eq!(editor.surface.elements(), surface.as_slice());
            assert_eq!(editor.history, history);
            assert_eq!(editor.surface_updated.emitted(), emitted);
            assert_eq!(editor.controller().session().state(), &state);
        }
    }

    #[test]
    fn out_of_order_move_and_end_are_ignored() {
        let mut editor = brush_editor(true);

        editor.dispatch(&event(DragMove, 5.0, 5.0)).unwrap();
        editor.dispatch(&event(DragEnd, 5.0, 5.0)).unwrap();

        assert!(editor.surface.is_empty());
        assert_eq!(editor.surface_updated.emitted(), 0);
        assert_eq!(editor.history, History::new());
    }

    #[test]
    fn disabled_surface_ignores_every_drag() {
        let mut editor = brush_editor(false);

        for _ in 0..3 {
            editor.dispatch(&event(DragStart, 0.0, 0.0)).unwrap();
            editor.dispatch(&event(DragMove, 9.0, 9.0)).unwrap();
        }

        assert!(editor.surface.is_empty());
        assert!(!editor.controller().session().is_dragging());
        assert_eq!(editor.controller().last_started(), None);
        assert_eq!(editor.surface_updated.emitted(), 0);
    }

    #[test]
    fn style_change_applies_to_next_stroke_only() {
        let mut editor = brush_editor(true);
        editor.dispatch(&event(DragStart, 0.0, 0.0)).unwrap();
        let first = editor.controller().last_started().unwrap();

        editor.controller_mut().set_mode(BrushMode {
            color: crate::draw::RED,
            line_width: 10.0,
        });
        editor.dispatch(&event(DragMove, 10.0, 0.0)).unwrap();
        editor.dispatch(&event(DragEnd, 10.0, 0.0)).unwrap();
        assert_eq!(editor.surface.get(first).unwrap().style.line_width, 4.0);
        assert_eq!(editor.surface.get(first).unwrap().bounds.w, 14.0);

        editor.dispatch(&event(DragStart, 0.0, 0.0)).unwrap();
        let second = editor.controller().last_started().unwrap();
        let style = editor.surface.get(second).unwrap().style;
        assert_eq!(style.line_width, 10.0);
        assert_eq!(style.color, crate::draw::RED);
    }

    #[test]
    fn from_config_applies_brush_and_features() {
        let mut config = Config::default();
        config.brush.line_width = 8.0;
        config.features.enable_surface = false;

        let editor = Editor::from_config(&config);
        assert_eq!(editor.controller().mode().line_width, 8.0);
        assert!(!editor.flags.is_enabled(ENABLE_SURFACE));
    }
}

//! Mode controller capability interface.
//!
//! Each canvas tool (brush, selection, shape, connector, ...) implements
//! [`ModeController`] and owns only its own interaction state. The editor
//! lends it the document collaborators through a [`ModeContext`] for the
//! duration of one callback.

use super::events::PointerEvent;
use super::flags::FeatureFlags;
use super::history::TransactionBoundary;
use super::session::StrokeError;
use super::viewport::CoordinateTransformer;
use crate::draw::{ElementStore, RenderInvalidation};

/// Document collaborators available to a controller during one callback.
pub struct ModeContext<'a> {
    /// Screen to logical conversion
    pub viewport: &'a dyn CoordinateTransformer,
    /// Element storage
    pub store: &'a mut dyn ElementStore,
    /// Feature gates
    pub flags: &'a dyn FeatureFlags,
    /// Undo transaction boundaries
    pub history: &'a mut dyn TransactionBoundary,
    /// "Surface updated" broadcast
    pub surface_updated: &'a mut RenderInvalidation,
}

/// Pointer callbacks a canvas tool responds to.
///
/// Every callback is required so each tool states its policy explicitly,
/// even when that policy is to ignore the event.
pub trait ModeController {
    fn on_drag_start(&mut self, cx: &mut ModeContext<'_>, event: &PointerEvent);
    fn on_drag_move(
        &mut self,
        cx: &mut ModeContext<'_>,
        event: &PointerEvent,
    ) -> Result<(), StrokeError>;
    fn on_drag_end(&mut self, cx: &mut ModeContext<'_>, event: &PointerEvent);
    fn on_click(&mut self, cx: &mut ModeContext<'_>, event: &PointerEvent);
    fn on_dbl_click(&mut self, cx: &mut ModeContext<'_>, event: &PointerEvent);
    fn on_triple_click(&mut self, cx: &mut ModeContext<'_>, event: &PointerEvent);
    fn on_context_menu(&mut self, cx: &mut ModeContext<'_>, event: &PointerEvent);
    fn on_hover(&mut self, cx: &mut ModeContext<'_>, event: &PointerEvent);
    fn on_hover_exit(&mut self, cx: &mut ModeContext<'_>, event: &PointerEvent);
    fn clear_selection(&mut self, cx: &mut ModeContext<'_>);
}

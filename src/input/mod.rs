//! Pointer input handling and stroke capture.
//!
//! This module translates pointer events into brush elements. It defines the
//! collaborator seams stroke capture depends on (coordinate transform, feature
//! flags, undo transactions), the [`StrokeSession`] state machine, and the
//! [`ModeController`] interface the [`Editor`] dispatches through.

pub mod brush;
pub mod editor;
pub mod events;
pub mod flags;
pub mod history;
pub mod mode;
pub mod session;
pub mod viewport;

// Re-export commonly used types at module level
pub use brush::{BrushMode, BrushModeController, DEFAULT_LINE_WIDTH};
pub use editor::Editor;
pub use events::{PointerEvent, PointerEventKind};
pub use flags::{ENABLE_SURFACE, FeatureFlags, FlagSet};
pub use history::{History, TransactionBoundary};
pub use mode::{ModeContext, ModeController};
pub use session::{SessionState, StrokeError, StrokeSession, stroke_bounds};
pub use viewport::{CoordinateTransformer, Viewport};

//! Library exports for surface-brush.
//!
//! Exposes the stroke capture state machine, the brush mode controller, and
//! the canvas element model so hosts can drive brush strokes from their own
//! pointer plumbing and persist the resulting elements however they like.

pub mod config;
pub mod draw;
pub mod input;

pub use config::Config;

//! Host-facing input vocabulary.
//!
//! The controller does not listen to an event source. The host translates its
//! own pointer, keyboard and resize notifications into calls on
//! [`crate::sheet::Sheet`], using the types here to carry the bits of an
//! event that matter for sheet motion.

pub mod keyboard;
pub mod pointer;

pub use keyboard::Key;
pub use pointer::{DragTarget, PointerId, SheetSurface};

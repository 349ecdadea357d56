//! Bottom-sheet motion controller.
//!
//! A bottom sheet is a surface that slides up from the bottom of a viewport
//! and rests at one of several snap points. This crate implements the motion
//! logic only: tracking a pointer drag 1:1, picking the nearest snap point on
//! release, and settling onto it with a discrete spring. Painting the surface
//! and wiring up real input events is the host's job.
//!
//! The design hinges on one decision: the current offset lives in a single
//! owned slot, [`sheet::SheetOffset`], which is either static, animating, or
//! controlled by a drag. Everything the sheet must guarantee falls out of
//! that:
//!
//! 1. At most one animation is ever scheduled, because there is only one slot
//!    to put it in. Starting a new one replaces (and thereby cancels) the old.
//! 2. An active drag has exclusive write access to the offset until release;
//!    a drag taking over the slot cancels any in-flight animation, and snap
//!    requests are refused while a drag holds it.
//! 3. Teardown cannot leak a scheduled callback, because nothing is
//!    registered anywhere; dropping the [`sheet::Sheet`] drops the slot.
//!
//! The host drives frames cooperatively: call
//! [`sheet::Sheet::advance_animations`] once per display refresh for as long
//! as [`sheet::Sheet::are_animations_ongoing`] returns `true`, and read
//! [`sheet::Sheet::offset`] on every repaint. Closing is reported through
//! [`sheet::Dismiss`] return values rather than a stored callback, so a
//! panicking dismissal handler unwinds in the host's own frame.

pub mod animation;
pub mod input;
pub mod sheet;

pub use self::animation::Animation;
pub use self::input::{DragTarget, Key, PointerId, SheetSurface};
pub use self::sheet::{Dismiss, GeometryError, Sheet, SnapLayout};

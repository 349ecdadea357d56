//! Pointer drag tracking.
//!
//! A drag session is the bounded interval between pointer-down and
//! pointer-up during which the sheet follows the pointer 1:1 (no animation,
//! direct manipulation). On release the sheet settles onto the snap point
//! nearest the released offset.

use tracing::trace;

use super::offset::SheetOffset;
use super::{Dismiss, Sheet};
use crate::input::{DragTarget, PointerId};

/// Transient state of an active drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// The captured pointer driving this drag.
    pointer: PointerId,
    /// Vertical pointer position at pointer-down.
    anchor_pointer_y: f64,
    /// Sheet offset at pointer-down.
    anchor_offset: f64,
    /// Live offset written by the latest pointer-move.
    current_offset: f64,
}

impl DragSession {
    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    pub fn current_offset(&self) -> f64 {
        self.current_offset
    }

    pub(super) fn clamp_offset(&mut self, min: f64, max: f64) {
        self.current_offset = self.current_offset.clamp(min, max);
    }
}

impl Sheet {
    // =========================================================================
    // Drag begin
    // =========================================================================

    /// Begins a drag session, capturing the pointer.
    ///
    /// No session starts if one is already active, or if the target is an
    /// interactive element or lies in a control region; in the latter case
    /// the click should go through to the control. Returns whether a session
    /// began.
    pub fn pointer_down<T: DragTarget>(&mut self, pointer: PointerId, y: f64, target: &T) -> bool {
        if self.offset.is_drag() {
            // Another pointer already owns the sheet.
            return false;
        }

        if target.is_interactive() || target.in_control_region() {
            return false;
        }

        let offset = self.offset.current();
        trace!(pointer = pointer.0, y, offset, "drag begin");

        // Taking over the slot cancels any in-flight animation.
        self.offset = SheetOffset::Drag(DragSession {
            pointer,
            anchor_pointer_y: y,
            anchor_offset: offset,
            current_offset: offset,
        });
        true
    }

    // =========================================================================
    // Drag update
    // =========================================================================

    /// Tracks the pointer 1:1, clamped to the snap range.
    ///
    /// Returns whether the offset changed, so the host knows to repaint.
    pub fn pointer_move(&mut self, pointer: PointerId, y: f64) -> bool {
        let (open, closed) = (self.snaps.open(), self.snaps.closed());

        let SheetOffset::Drag(drag) = &mut self.offset else {
            return false;
        };
        if drag.pointer != pointer {
            return false;
        }

        let delta = y - drag.anchor_pointer_y;
        let position = (drag.anchor_offset + delta).clamp(open, closed);
        if position == drag.current_offset {
            return false;
        }

        drag.current_offset = position;
        true
    }

    // =========================================================================
    // Drag end
    // =========================================================================

    /// Ends the session and settles onto the nearest snap point.
    ///
    /// A release with no active session, or from a pointer that does not own
    /// the session, is a no-op.
    pub fn pointer_up(&mut self, pointer: PointerId) -> Dismiss {
        let SheetOffset::Drag(drag) = &self.offset else {
            return Dismiss::None;
        };
        if drag.pointer() != pointer {
            return Dismiss::None;
        }

        let released_at = drag.current_offset();
        let index = self.snaps.nearest_index(released_at);
        trace!(released_at, index, "drag release");

        self.settle_at(index)
    }

    /// A cancelled pointer ends the session like a release.
    ///
    /// Freezing mid-air would leave the sheet resting between snap points.
    pub fn pointer_cancel(&mut self, pointer: PointerId) -> Dismiss {
        self.pointer_up(pointer)
    }
}

//! The bottom-sheet motion controller.
//!
//! [`Sheet`] owns the full motion state: snap geometry for the current
//! viewport, the offset slot, spring tuning, and the once-per-close dismissal
//! latch. The host feeds it pointer, keyboard and resize events, steps it
//! once per display refresh while an animation is ongoing, and reads the
//! offset on every repaint.

mod drag;
mod geometry;
mod offset;
#[cfg(test)]
mod snapshot;

use sheet_config::{Config, Spring};
use tracing::trace;

pub use self::drag::DragSession;
pub use self::geometry::{GeometryError, SnapLayout};
pub use self::offset::SheetOffset;
use crate::animation::Animation;
use crate::input::Key;

/// Whether an operation closed the sheet.
///
/// The sheet does not store a dismissal callback; it reports closes through
/// this return value and the host invokes its own notifier. Each close event
/// is reported at most once across all triggers (drag release, snap request,
/// keyboard).
#[must_use = "a Notify result must reach the host's dismissal notifier"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismiss {
    /// The sheet did not close.
    None,
    /// The sheet closed; the host should run its dismissal notifier.
    Notify,
}

impl Dismiss {
    pub fn should_notify(self) -> bool {
        matches!(self, Dismiss::Notify)
    }
}

/// A draggable bottom sheet resting on a set of snap points.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// Snap geometry for the current viewport.
    snaps: SnapLayout,

    /// The single owned offset slot.
    ///
    /// All motion state lives here; see the crate docs for why there is
    /// exactly one.
    offset: SheetOffset,

    /// Spring tuning for snap animations.
    spring: Spring,

    /// Whether the current close was already reported.
    ///
    /// Set when a close trigger fires, cleared whenever the sheet settles
    /// toward a non-closed snap again.
    dismissed: bool,
}

impl Sheet {
    /// Creates a sheet resting at the configured initial snap.
    ///
    /// Malformed snap configurations are rejected here rather than clamped
    /// into silent nonsense later.
    pub fn new(config: &Config, viewport_height: f64) -> Result<Self, GeometryError> {
        let snaps = SnapLayout::new(&config.snap_points.points, viewport_height)?;

        let initial = config.initial_snap;
        if initial >= snaps.len() {
            return Err(GeometryError::InitialSnapOutOfRange {
                index: initial,
                len: snaps.len(),
            });
        }

        Ok(Self {
            offset: SheetOffset::Static(snaps.offset(initial)),
            // A sheet created already closed has no close event to report.
            dismissed: initial == snaps.closed_index(),
            snaps,
            spring: config.spring,
        })
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The current offset in pixels from the fully-open position.
    ///
    /// The host applies this as a vertical translation on every repaint.
    pub fn offset(&self) -> f64 {
        self.offset.current()
    }

    pub fn snaps(&self) -> &SnapLayout {
        &self.snaps
    }

    pub fn snap_offsets(&self) -> &[f64] {
        self.snaps.offsets()
    }

    pub fn is_dragging(&self) -> bool {
        self.offset.is_drag()
    }

    /// Index of the snap point nearest the current offset.
    pub fn nearest_snap_index(&self) -> usize {
        self.snaps.nearest_index(self.offset.current())
    }

    /// How open the sheet is: 1.0 fully open, 0.0 fully closed.
    ///
    /// Presentation-side derivations (shadow depth, backdrop opacity) hang
    /// off this.
    pub fn openness(&self) -> f64 {
        let open = self.snaps.open();
        let closed = self.snaps.closed();
        if closed <= open {
            return 0.;
        }
        1. - ((self.offset.current() - open) / (closed - open)).clamp(0., 1.)
    }

    // =========================================================================
    // Frame loop
    // =========================================================================

    /// Advances the spring by one step; the host calls this once per display
    /// refresh while [`are_animations_ongoing`](Self::are_animations_ongoing)
    /// holds.
    pub fn advance_animations(&mut self) {
        let (open, closed) = (self.snaps.open(), self.snaps.closed());
        if let SheetOffset::Animation(anim) = &mut self.offset {
            anim.tick(open, closed);
            if anim.is_done() {
                let settled = anim.to();
                self.offset = SheetOffset::Static(settled);
            }
        }
    }

    /// Whether the host needs to schedule another frame.
    pub fn are_animations_ongoing(&self) -> bool {
        self.offset.is_animation_ongoing()
    }

    // =========================================================================
    // External triggers
    // =========================================================================

    /// Animates to the snap point at `index` (a "Full/Half/Close" button).
    ///
    /// Refused while a drag owns the offset. Settling onto the last snap
    /// point is a close and reports dismissal like a drag-triggered close.
    ///
    /// Panics if `index` is out of range.
    pub fn snap_to(&mut self, index: usize) -> Dismiss {
        if self.offset.is_drag() {
            // The drag has exclusive control until release.
            return Dismiss::None;
        }
        self.settle_at(index)
    }

    /// Keyboard dismissal: reports a close regardless of where the sheet
    /// currently rests.
    pub fn key_pressed(&mut self, key: Key) -> Dismiss {
        match key {
            Key::Escape => self.report_close(true),
            Key::Other(_) => Dismiss::None,
        }
    }

    /// Recomputes snap geometry for a new viewport height.
    ///
    /// The sheet keeps its logical position: whichever snap index it was
    /// resting at (or animating toward) before the resize, it rests at or
    /// animates toward the recomputed offset of that same index afterwards.
    /// An active drag keeps its anchor and is clamped into the new range.
    pub fn viewport_resized(&mut self, viewport_height: f64) {
        let index = self.snaps.nearest_index(self.offset.stationary());
        self.snaps.recompute(viewport_height);
        let restored = self.snaps.offset(index);
        trace!(viewport_height, index, restored, "viewport resized");

        match &mut self.offset {
            SheetOffset::Static(offset) => *offset = restored,
            SheetOffset::Animation(anim) => anim.set_target(restored),
            SheetOffset::Drag(drag) => {
                drag.clamp_offset(self.snaps.open(), self.snaps.closed());
            }
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Starts (or skips) the spring toward `index` and reports dismissal for
    /// the closed snap. Shared by snap requests and drag release.
    fn settle_at(&mut self, index: usize) -> Dismiss {
        let target = self.snaps.offset(index);
        self.animate_to(target);
        self.report_close(index == self.snaps.closed_index())
    }

    fn animate_to(&mut self, target: f64) {
        let current = self.offset.current();
        if (current - target).abs() < self.spring.epsilon {
            // Already there; settle exactly without scheduling any frames.
            self.offset = SheetOffset::Static(target);
            return;
        }

        // An in-flight spring hands its momentum to the replacement; a drag
        // starts the spring from rest.
        let velocity = match &self.offset {
            SheetOffset::Animation(anim) => anim.velocity(),
            _ => 0.,
        };

        trace!(current, target, velocity, "animate to snap");
        self.offset = SheetOffset::Animation(Animation::new(current, target, velocity, self.spring));
    }

    fn report_close(&mut self, closing: bool) -> Dismiss {
        if !closing {
            self.dismissed = false;
            return Dismiss::None;
        }
        if self.dismissed {
            return Dismiss::None;
        }
        self.dismissed = true;
        Dismiss::Notify
    }
}

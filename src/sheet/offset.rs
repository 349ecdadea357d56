//! The single owned slot for the sheet's current offset.

use crate::animation::Animation;

use super::drag::DragSession;

/// Where the sheet's offset currently comes from.
///
/// There is exactly one of these per sheet, so replacing the variant is how
/// anything in flight gets cancelled: a drag taking over kills the animation,
/// a new animation displaces the old one, and cancellation is synchronous
/// because nothing else holds a handle.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetOffset {
    /// Resting at a fixed offset.
    Static(f64),
    /// Animating toward a snap offset.
    Animation(Animation),
    /// Controlled by an active drag session.
    Drag(DragSession),
}

impl SheetOffset {
    /// Returns the current offset in pixels.
    pub fn current(&self) -> f64 {
        match self {
            SheetOffset::Static(offset) => *offset,
            SheetOffset::Animation(anim) => anim.value(),
            SheetOffset::Drag(drag) => drag.current_offset(),
        }
    }

    /// Returns the offset the slot is headed toward.
    ///
    /// For a drag this is the live offset; where the drag will settle is not
    /// known until release.
    pub fn stationary(&self) -> f64 {
        match self {
            SheetOffset::Static(offset) => *offset,
            SheetOffset::Animation(anim) => anim.to(),
            SheetOffset::Drag(drag) => drag.current_offset(),
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self, Self::Static(_))
    }

    pub fn is_drag(&self) -> bool {
        matches!(self, Self::Drag(_))
    }

    pub fn is_animation_ongoing(&self) -> bool {
        matches!(self, Self::Animation(_))
    }
}

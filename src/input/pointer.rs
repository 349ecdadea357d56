//! Pointer identity and the drag-exclusion seam.

/// Identity of a captured pointer.
///
/// A drag session is bound to the pointer that started it; moves and releases
/// from other pointers are ignored for the duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// Host-side description of the element under a pointer-down.
///
/// Pointer-downs over interactive elements (buttons, links, inputs) or inside
/// a designated control region must not start a drag, so that the click
/// reaches the control instead. The host decides what counts; the controller
/// only asks.
pub trait DragTarget {
    /// Whether the element consumes clicks itself.
    fn is_interactive(&self) -> bool;

    /// Whether the element lies within a designated control region, such as a
    /// row of snap buttons.
    fn in_control_region(&self) -> bool {
        false
    }
}

/// The bare sheet surface; never excluded from starting a drag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SheetSurface;

impl DragTarget for SheetSurface {
    fn is_interactive(&self) -> bool {
        false
    }
}

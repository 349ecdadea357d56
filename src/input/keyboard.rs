//! Keyboard identity for the dismissal path.

/// A pressed key, as far as the sheet cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// The dismissal key.
    Escape,
    /// Anything else, by raw code; ignored by the sheet.
    Other(u32),
}

//! Serializable motion snapshots for timeline regression tests.

use serde::Serialize;

use super::Sheet;

/// Offset timeline of a settling sheet, rounded to whole pixels.
///
/// Rounding keeps the YAML stable across platforms while still catching any
/// change to the spring's frame-by-frame behavior.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Timeline(pub Vec<i64>);

impl Timeline {
    /// Records the current offset, then one entry per frame until the sheet
    /// settles.
    pub fn record(sheet: &mut Sheet) -> Self {
        let mut frames = vec![px(sheet.offset())];
        while sheet.are_animations_ongoing() {
            sheet.advance_animations();
            frames.push(px(sheet.offset()));
            assert!(frames.len() < 10_000, "sheet failed to settle");
        }
        Self(frames)
    }
}

fn px(offset: f64) -> i64 {
    offset.round() as i64
}

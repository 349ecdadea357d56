//! Snap geometry: descriptor to pixel computation and nearest-snap selection.

use ordered_float::NotNan;
use sheet_config::SnapPoint;
use thiserror::Error;

/// Malformed snap configuration, rejected at configuration time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("a sheet needs at least two snap points, got {0}")]
    TooFewSnapPoints(usize),
    #[error("snap point {index} is not a finite number")]
    NonFinite { index: usize },
    #[error("snap point {index}: proportion must lie within 0..=1, got {value}")]
    ProportionOutOfRange { index: usize, value: f64 },
    #[error("snap point {index}: pixel value must be non-negative, got {value}")]
    NegativePixels { index: usize, value: f64 },
    #[error(
        "snap offsets must be non-decreasing: \
         offset {index} ({value}px) lies above its predecessor ({prev}px)"
    )]
    NotMonotonic { index: usize, value: f64, prev: f64 },
    #[error("initial snap index {index} is out of range for {len} snap points")]
    InitialSnapOutOfRange { index: usize, len: usize },
}

/// Snap descriptors together with their pixel offsets for a viewport height.
///
/// The first offset is the fully-open position, the last the fully-closed
/// one; offsets are non-decreasing. Both invariants are checked at
/// construction and maintained across [`recompute`](Self::recompute).
#[derive(Debug, Clone, PartialEq)]
pub struct SnapLayout {
    /// Configured descriptors, kept for recomputation on resize.
    points: Vec<SnapPoint>,
    /// Computed pixel offsets, one per descriptor.
    offsets: Vec<f64>,
    /// Viewport height the offsets were computed for.
    viewport_height: f64,
}

impl SnapLayout {
    pub fn new(points: &[SnapPoint], viewport_height: f64) -> Result<Self, GeometryError> {
        if points.len() < 2 {
            return Err(GeometryError::TooFewSnapPoints(points.len()));
        }

        for (index, point) in points.iter().enumerate() {
            match *point {
                SnapPoint::Proportion(value) => {
                    if !value.is_finite() {
                        return Err(GeometryError::NonFinite { index });
                    }
                    if !(0. ..=1.).contains(&value) {
                        return Err(GeometryError::ProportionOutOfRange { index, value });
                    }
                }
                SnapPoint::Fixed(value) | SnapPoint::FromBottom(value) => {
                    if !value.is_finite() {
                        return Err(GeometryError::NonFinite { index });
                    }
                    if value < 0. {
                        return Err(GeometryError::NegativePixels { index, value });
                    }
                }
            }
        }

        let offsets = compute_offsets(points, viewport_height);
        for (index, pair) in offsets.windows(2).enumerate() {
            if pair[1] < pair[0] {
                return Err(GeometryError::NotMonotonic {
                    index: index + 1,
                    value: pair[1],
                    prev: pair[0],
                });
            }
        }

        Ok(Self {
            points: points.to_vec(),
            offsets,
            viewport_height,
        })
    }

    /// Recomputes pixel offsets for a new viewport height.
    ///
    /// A viewport shorter than a from-bottom peek can fold the ordering; in
    /// that case neighboring offsets collapse onto each other rather than
    /// crossing, keeping the non-decreasing invariant.
    pub fn recompute(&mut self, viewport_height: f64) {
        self.viewport_height = viewport_height;
        self.offsets = compute_offsets(&self.points, viewport_height);
        for i in 1..self.offsets.len() {
            self.offsets[i] = f64::max(self.offsets[i], self.offsets[i - 1]);
        }
    }

    /// Index of the snap offset with minimum absolute distance to `offset`.
    ///
    /// Ties go to the lowest index.
    pub fn nearest_index(&self, offset: f64) -> usize {
        self.offsets
            .iter()
            .enumerate()
            .min_by_key(|(_, snap)| NotNan::new((*snap - offset).abs()).unwrap())
            .map(|(index, _)| index)
            .unwrap()
    }

    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    /// Pixel offset of the snap point at `index`.
    ///
    /// Panics if `index` is out of range.
    pub fn offset(&self, index: usize) -> f64 {
        self.offsets[index]
    }

    /// The fully-open offset.
    pub fn open(&self) -> f64 {
        self.offsets[0]
    }

    /// The fully-closed offset.
    pub fn closed(&self) -> f64 {
        self.offsets[self.offsets.len() - 1]
    }

    pub fn closed_index(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        // A layout always has at least two points.
        false
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }
}

fn compute_offsets(points: &[SnapPoint], viewport_height: f64) -> Vec<f64> {
    points
        .iter()
        .map(|point| match *point {
            SnapPoint::Proportion(fraction) => (viewport_height * fraction).round(),
            SnapPoint::Fixed(px) => px,
            SnapPoint::FromBottom(px) => (viewport_height - px).max(0.),
        })
        .collect()
}

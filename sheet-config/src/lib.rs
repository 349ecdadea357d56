//! Bottom-sheet configuration.
//!
//! The sheet is configured with a small KDL document:
//!
//! ```kdl
//! snap-points {
//!     proportion 0.0
//!     proportion 0.48
//!     from-bottom 26.0
//! }
//! initial-snap 1
//! spring {
//!     stiffness 0.08
//!     damping 0.8
//!     epsilon 0.5
//! }
//! ```
//!
//! Snap points are listed top to bottom: the first is the fully-open offset,
//! the last is the fully-closed one. Every value that would otherwise produce
//! silent nonsense at runtime (a single snap point, damping ≥ 1, a proportion
//! above 1) is rejected here, at configuration time.

use std::ffi::OsStr;
use std::path::Path;

use miette::{miette, Context, IntoDiagnostic};
use tracing::debug;

#[derive(knuffel::Decode, Debug, Clone, PartialEq)]
pub struct Config {
    #[knuffel(child, default)]
    pub snap_points: SnapPoints,
    #[knuffel(child, unwrap(argument), default = Self::default().initial_snap)]
    pub initial_snap: usize,
    #[knuffel(child, default)]
    pub spring: Spring,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snap_points: SnapPoints::default(),
            initial_snap: 1,
            spring: Spring::default(),
        }
    }
}

/// Ordered snap descriptors, top to bottom.
#[derive(knuffel::Decode, Debug, Clone, PartialEq)]
pub struct SnapPoints {
    #[knuffel(children)]
    pub points: Vec<SnapPoint>,
}

impl Default for SnapPoints {
    fn default() -> Self {
        Self {
            points: vec![
                SnapPoint::Proportion(0.),
                SnapPoint::Proportion(0.48),
                SnapPoint::FromBottom(26.),
            ],
        }
    }
}

/// A single snap position along the sheet's travel axis.
#[derive(knuffel::Decode, Debug, Clone, Copy, PartialEq)]
pub enum SnapPoint {
    /// Proportion of the viewport height, 0.0 (open) to 1.0.
    Proportion(#[knuffel(argument)] f64),
    /// Absolute offset in pixels from the top of the travel range.
    Fixed(#[knuffel(argument)] f64),
    /// Pixels visible above the bottom edge (peek style): offset = H − px.
    FromBottom(#[knuffel(argument)] f64),
}

/// Tuning for the discrete spring that settles the sheet onto a snap point.
#[derive(knuffel::Decode, Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    #[knuffel(child, unwrap(argument), default = Self::default().stiffness)]
    pub stiffness: f64,
    #[knuffel(child, unwrap(argument), default = Self::default().damping)]
    pub damping: f64,
    /// Convergence threshold in pixels.
    #[knuffel(child, unwrap(argument), default = Self::default().epsilon)]
    pub epsilon: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            stiffness: 0.08,
            damping: 0.8,
            epsilon: 0.5,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> miette::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .with_context(|| format!("error reading {path:?}"))?;

        let filename = path.file_name().and_then(OsStr::to_str).unwrap_or("sheet.kdl");
        let config = Self::parse(filename, &contents)
            .with_context(|| format!("error parsing {path:?}"))?;

        debug!("loaded config from {path:?}");
        Ok(config)
    }

    pub fn parse(filename: &str, text: &str) -> miette::Result<Self> {
        let config = knuffel::parse::<Config>(filename, text).map_err(miette::Report::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Semantic checks that knuffel cannot express per-node.
    pub fn validate(&self) -> miette::Result<()> {
        let points = &self.snap_points.points;
        if points.len() < 2 {
            return Err(miette!(
                "snap-points needs at least two entries, got {}",
                points.len()
            ));
        }

        for (idx, point) in points.iter().enumerate() {
            match *point {
                SnapPoint::Proportion(value) => {
                    if !value.is_finite() || !(0. ..=1.).contains(&value) {
                        return Err(miette!(
                            "snap point {idx}: proportion must lie within 0..=1, got {value}"
                        ));
                    }
                }
                SnapPoint::Fixed(value) | SnapPoint::FromBottom(value) => {
                    if !value.is_finite() || value < 0. {
                        return Err(miette!(
                            "snap point {idx}: pixel value must be non-negative, got {value}"
                        ));
                    }
                }
            }
        }

        if self.initial_snap >= points.len() {
            return Err(miette!(
                "initial-snap {} is out of range for {} snap points",
                self.initial_snap,
                points.len()
            ));
        }

        let Spring {
            stiffness,
            damping,
            epsilon,
        } = self.spring;
        if !stiffness.is_finite() || stiffness <= 0. {
            return Err(miette!("spring stiffness must be positive, got {stiffness}"));
        }
        if !damping.is_finite() || !(0. ..1.).contains(&damping) || damping == 0. {
            // Damping at or above 1 never converges.
            return Err(miette!(
                "spring damping must lie strictly within 0..1, got {damping}"
            ));
        }
        if !epsilon.is_finite() || epsilon <= 0. {
            return Err(miette!("spring epsilon must be positive, got {epsilon}"));
        }

        Ok(())
    }
}

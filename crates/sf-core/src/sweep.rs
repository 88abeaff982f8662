//! Sample grid generation.
//!
//! Radial grids for the profile plots and exponent schedules for the
//! animation are both evenly spaced sweeps between two bounds.

use crate::{Real, SfError, SfResult};

/// Definition of a single parameter sweep.
///
/// Bounds may be descending (`start > end`); points are generated in
/// start-to-end order.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDefinition {
    pub start: Real,
    pub end: Real,
    /// Number of points to generate
    pub num_points: usize,
}

impl SweepDefinition {
    /// Create a checked sweep.
    pub fn new(start: Real, end: Real, num_points: usize) -> SfResult<Self> {
        crate::ensure_finite(start, "sweep start")?;
        crate::ensure_finite(end, "sweep end")?;

        if num_points < 2 {
            return Err(SfError::InvalidArg {
                what: "sweep must have at least 2 points",
            });
        }

        Ok(Self {
            start,
            end,
            num_points,
        })
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<Real> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        let delta = (self.end - self.start) / (self.num_points - 1) as Real;
        let mut points: Vec<Real> = (0..self.num_points)
            .map(|i| self.start + i as Real * delta)
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }
}

/// `num_points` evenly spaced values on `[start, end]`, endpoints exact.
pub fn linspace(start: Real, end: Real, num_points: usize) -> Vec<Real> {
    match num_points {
        0 => Vec::new(),
        1 => vec![start],
        _ => SweepDefinition {
            start,
            end,
            num_points,
        }
        .generate_points(),
    }
}

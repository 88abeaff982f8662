//! Sampled profiles and centerline normalization.

use crate::error::ProfileResult;
use crate::params::PowerLawParams;
use sf_core::{Real, finite_max};

/// One sampled velocity profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCurve {
    /// Flow-behavior index the curve was evaluated for
    pub n: Real,
    /// Radial positions, in sampling order
    pub r: Vec<Real>,
    /// Velocity at each radial position
    pub v: Vec<Real>,
    /// Velocity at `r = 0`, evaluated directly rather than read off the grid
    pub centerline: Real,
}

impl ProfileCurve {
    pub fn sample(params: &PowerLawParams, r: &[Real]) -> ProfileResult<Self> {
        let v = params.evaluate(r)?;
        let centerline = params.centerline_velocity()?;
        Ok(Self {
            n: params.n(),
            r: r.to_vec(),
            v,
            centerline,
        })
    }

    pub fn len(&self) -> usize {
        self.r.len()
    }

    pub fn is_empty(&self) -> bool {
        self.r.is_empty()
    }

    /// Largest sampled velocity (`None` for an empty curve).
    pub fn max_velocity(&self) -> Option<Real> {
        finite_max(&self.v)
    }

    /// `v(r) / v(0)`; all zeros when the centerline velocity is not positive.
    pub fn normalized(&self) -> Vec<Real> {
        normalize_by_centerline(&self.v, self.centerline)
    }

    /// `[r, v]` pairs for plotting.
    pub fn points(&self) -> Vec<[Real; 2]> {
        self.r.iter().zip(&self.v).map(|(&r, &v)| [r, v]).collect()
    }

    /// `[r, v/v0]` pairs for plotting.
    pub fn normalized_points(&self) -> Vec<[Real; 2]> {
        self.r
            .iter()
            .zip(self.normalized())
            .map(|(&r, v)| [r, v])
            .collect()
    }
}

/// Divide a profile by its centerline velocity.
///
/// A non-positive `v0` yields all zeros of the same length instead of a
/// division by zero.
pub fn normalize_by_centerline(v: &[Real], v0: Real) -> Vec<Real> {
    if v0 > 0.0 {
        v.iter().map(|x| x / v0).collect()
    } else {
        vec![0.0; v.len()]
    }
}

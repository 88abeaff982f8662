//! Validated parameter bundle for one profile.

use crate::curve::ProfileCurve;
use crate::error::ProfileResult;
use crate::evaluator::{PowerLawShape, RadialInput};
use sf_core::units::{Length, Velocity, mps, to_m};
use sf_core::Real;

/// Pipe and fluid parameters of a power-law profile.
///
/// Construction resolves the formula once, so a `PowerLawParams` can only hold
/// values inside the real domain of the profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawParams {
    radius: Real,
    beta: Real,
    mu0: Real,
    n: Real,
    shape: PowerLawShape,
}

impl PowerLawParams {
    pub fn new(radius: Real, beta: Real, mu0: Real, n: Real) -> ProfileResult<Self> {
        let shape = PowerLawShape::new(radius, beta, mu0, n)?;
        Ok(Self {
            radius,
            beta,
            mu0,
            n,
            shape,
        })
    }

    /// Same pipe and fluid, different flow-behavior index.
    pub fn with_n(&self, n: Real) -> ProfileResult<Self> {
        Self::new(self.radius, self.beta, self.mu0, n)
    }

    pub fn radius(&self) -> Real {
        self.radius
    }

    pub fn beta(&self) -> Real {
        self.beta
    }

    pub fn mu0(&self) -> Real {
        self.mu0
    }

    pub fn n(&self) -> Real {
        self.n
    }

    /// Evaluate at a scalar position or over a sequence of positions.
    pub fn evaluate<I: RadialInput>(&self, input: I) -> ProfileResult<I::Output> {
        input.evaluate_with(&self.shape)
    }

    /// Velocity at `r = 0`.
    pub fn centerline_velocity(&self) -> ProfileResult<Real> {
        self.shape.at(0.0)
    }

    /// Typed evaluation; with `beta` in Pa/m and `mu0` in Pa·sⁿ the result is in m/s.
    pub fn velocity_at(&self, r: Length) -> ProfileResult<Velocity> {
        Ok(mps(self.shape.at(to_m(r))?))
    }

    /// Sample the profile on a radial grid.
    pub fn sample(&self, r: &[Real]) -> ProfileResult<ProfileCurve> {
        ProfileCurve::sample(self, r)
    }
}

//! Closed-form evaluation of the power-law pipe-flow profile.

use crate::error::{ProfileError, ProfileResult};
use sf_core::{Real, is_integral};

/// Parameter-only part of the profile, resolved once per `(R, beta, mu0, n)`.
///
/// `v(r) = scale * (wall_term - r^exponent)` with
/// `scale = (beta / (2 mu0))^(1/n) * n / (n + 1)`,
/// `exponent = 1 + 1/n` and `wall_term = R^exponent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawShape {
    scale: Real,
    exponent: Real,
    wall_term: Real,
}

impl PowerLawShape {
    pub fn new(radius: Real, beta: Real, mu0: Real, n: Real) -> ProfileResult<Self> {
        check_finite(radius, "pipe radius R")?;
        check_finite(beta, "pressure gradient beta")?;
        check_finite(mu0, "viscosity coefficient mu0")?;
        check_finite(n, "flow-behavior index n")?;

        if mu0 == 0.0 {
            return Err(ProfileError::Domain {
                what: "viscosity coefficient mu0 must be non-zero",
            });
        }
        if n == 0.0 {
            return Err(ProfileError::Domain {
                what: "flow-behavior index n must be non-zero",
            });
        }

        let inv_n = 1.0 / n;
        let base = beta / (2.0 * mu0);
        if base < 0.0 && !is_integral(inv_n) {
            return Err(ProfileError::Domain {
                what: "beta / (2 mu0) is negative and 1/n is not an integer",
            });
        }

        let exponent = 1.0 + inv_n;
        let wall_term = real_pow(radius, exponent, "pipe radius R")?;

        let prefactor = base.powf(inv_n);
        let scale = prefactor * (n / (n + 1.0));
        check_finite(scale, "velocity prefactor")?;

        Ok(Self {
            scale,
            exponent,
            wall_term,
        })
    }

    /// Velocity at radial position `r`.
    pub fn at(&self, r: Real) -> ProfileResult<Real> {
        check_finite(r, "radial position r")?;
        let r_term = real_pow(r, self.exponent, "radial position r")?;
        let v = self.scale * (self.wall_term - r_term);
        check_finite(v, "velocity")
    }
}

/// Radial coordinates the evaluator accepts: a single position or an ordered
/// sequence of positions. Sequences map element-wise, preserving length and order.
pub trait RadialInput {
    type Output;

    fn evaluate_with(self, shape: &PowerLawShape) -> ProfileResult<Self::Output>;
}

impl RadialInput for Real {
    type Output = Real;

    fn evaluate_with(self, shape: &PowerLawShape) -> ProfileResult<Real> {
        shape.at(self)
    }
}

impl RadialInput for &[Real] {
    type Output = Vec<Real>;

    fn evaluate_with(self, shape: &PowerLawShape) -> ProfileResult<Vec<Real>> {
        self.iter().map(|&r| shape.at(r)).collect()
    }
}

impl RadialInput for &Vec<Real> {
    type Output = Vec<Real>;

    fn evaluate_with(self, shape: &PowerLawShape) -> ProfileResult<Vec<Real>> {
        self.as_slice().evaluate_with(shape)
    }
}

impl RadialInput for Vec<Real> {
    type Output = Vec<Real>;

    fn evaluate_with(self, shape: &PowerLawShape) -> ProfileResult<Vec<Real>> {
        self.as_slice().evaluate_with(shape)
    }
}

impl<const N: usize> RadialInput for [Real; N] {
    type Output = [Real; N];

    fn evaluate_with(self, shape: &PowerLawShape) -> ProfileResult<[Real; N]> {
        let mut out = [0.0; N];
        for (slot, r) in out.iter_mut().zip(self) {
            *slot = shape.at(r)?;
        }
        Ok(out)
    }
}

/// Velocity at a single radial position.
///
/// Fails with [`ProfileError::Domain`] for `mu0 == 0`, `n == 0`, or a
/// fractional power of a negative base.
pub fn velocity(r: Real, radius: Real, beta: Real, mu0: Real, n: Real) -> ProfileResult<Real> {
    PowerLawShape::new(radius, beta, mu0, n)?.at(r)
}

/// Element-wise velocity over an ordered sequence of radial positions.
pub fn velocity_profile(
    rs: &[Real],
    radius: Real,
    beta: Real,
    mu0: Real,
    n: Real,
) -> ProfileResult<Vec<Real>> {
    rs.evaluate_with(&PowerLawShape::new(radius, beta, mu0, n)?)
}

fn check_finite(v: Real, what: &'static str) -> ProfileResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ProfileError::NonFinite { what, value: v })
    }
}

/// `base^exponent` restricted to real results.
fn real_pow(base: Real, exponent: Real, what: &'static str) -> ProfileResult<Real> {
    if base < 0.0 && !is_integral(exponent) {
        return Err(ProfileError::Domain {
            what: "negative radial coordinate raised to a fractional power",
        });
    }
    check_finite(base.powf(exponent), what)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use sf_core::{Tolerances, linspace, nearly_equal};

    proptest! {
        #[test]
        fn no_slip_at_wall(
            radius in 0.1_f64..2.0,
            beta in 1e-3_f64..1.0,
            mu0 in 1e-3_f64..1.0,
            n in 0.01_f64..=1.0,
        ) {
            let v = velocity(radius, radius, beta, mu0, n).unwrap();
            prop_assert_eq!(v, 0.0);
        }

        #[test]
        fn decreases_from_axis_to_wall(
            radius in 0.1_f64..2.0,
            beta in 1e-3_f64..1.0,
            mu0 in 1e-3_f64..1.0,
            n in 0.01_f64..=1.0,
            a in 0.0_f64..=1.0,
            b in 0.0_f64..=1.0,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let v1 = velocity(lo * radius, radius, beta, mu0, n).unwrap();
            let v2 = velocity(hi * radius, radius, beta, mu0, n).unwrap();
            let tol = Tolerances { abs: 1e-300, rel: 1e-12 };
            prop_assert!(v1 >= v2 || nearly_equal(v1, v2, tol));
        }

        #[test]
        fn sequence_is_elementwise(
            beta in 1e-3_f64..1.0,
            mu0 in 1e-3_f64..1.0,
            n in 0.01_f64..=1.0,
            count in 2_usize..64,
        ) {
            let rs = linspace(0.0, 1.0, count);
            let seq = velocity_profile(&rs, 1.0, beta, mu0, n).unwrap();
            prop_assert_eq!(seq.len(), rs.len());
            for (r, v) in rs.iter().zip(&seq) {
                prop_assert_eq!(*v, velocity(*r, 1.0, beta, mu0, n).unwrap());
            }
        }

        #[test]
        fn normalized_axis_value_is_one(
            beta in 1e-3_f64..1.0,
            mu0 in 1e-3_f64..1.0,
            n in 0.01_f64..=1.0,
        ) {
            let v0 = velocity(0.0, 1.0, beta, mu0, n).unwrap();
            prop_assume!(v0 > 0.0);
            let curve = crate::normalize_by_centerline(&[v0], v0);
            prop_assert_eq!(curve[0], 1.0);
        }
    }
}

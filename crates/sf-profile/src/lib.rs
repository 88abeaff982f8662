//! sf-profile: laminar velocity profiles of power-law fluids in a round pipe.
//!
//! For a fluid with flow-behavior index `n` and viscosity coefficient `mu0`,
//! driven by pressure gradient `beta` through a pipe of radius `R`:
//!
//! ```text
//! v(r) = (beta / (2 mu0))^(1/n) * n / (n + 1) * (R^(1 + 1/n) - r^(1 + 1/n))
//! ```
//!
//! `n = 1` is the Newtonian (parabolic) case; `n < 1` flattens the core toward
//! plug flow.
//!
//! # Example
//!
//! ```
//! use sf_profile::{PowerLawParams, velocity};
//!
//! let v0 = velocity(0.0, 1.0, 0.02, 0.02, 1.0).unwrap();
//! assert_eq!(v0, 0.25);
//!
//! let params = PowerLawParams::new(1.0, 0.02, 0.02, 0.5).unwrap();
//! let v = params.evaluate(vec![0.0, 0.5, 1.0]).unwrap();
//! assert_eq!(v.len(), 3);
//! assert_eq!(v[2], 0.0);
//! ```

pub mod curve;
pub mod error;
pub mod evaluator;
pub mod params;

pub use curve::{ProfileCurve, normalize_by_centerline};
pub use error::{ProfileError, ProfileResult};
pub use evaluator::{PowerLawShape, RadialInput, velocity, velocity_profile};
pub use params::PowerLawParams;

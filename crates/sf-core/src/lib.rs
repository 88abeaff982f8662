//! sf-core: stable foundation for shearflow.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - sweep (evenly spaced sample grids)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod sweep;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{SfError, SfResult};
pub use numeric::*;
pub use sweep::{SweepDefinition, linspace};
pub use units::*;

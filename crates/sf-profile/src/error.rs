//! Velocity profile errors.

use sf_core::SfError;
use thiserror::Error;

/// Result type for profile evaluation.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Errors raised instead of returning NaN or complex results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    /// Inputs outside the real domain of the formula.
    #[error("Domain error: {what}")]
    Domain { what: &'static str },

    /// Non-finite input or result.
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

impl From<ProfileError> for SfError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::Domain { what } => SfError::InvalidArg { what },
            ProfileError::NonFinite { what, value } => SfError::NonFinite { what, value },
        }
    }
}

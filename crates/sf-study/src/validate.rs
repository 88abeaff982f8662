//! Study validation logic.

use crate::schema::{AnimationDef, ExponentRangeDef, ExportDef, PipeDef, StudyConfig};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_study(study: &StudyConfig) -> Result<(), ValidationError> {
    if study.version == 0 || study.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: study.version,
        });
    }

    validate_pipe(&study.pipe)?;

    if study.samples < 2 {
        return Err(invalid("samples", study.samples, "need at least 2 radial samples"));
    }

    positive("n_fixed", study.n_fixed)?;
    validate_range(&study.n_range)?;

    if study.key_n_values.is_empty() {
        return Err(invalid("key_n_values", "[]", "need at least one exponent"));
    }
    for (i, n) in study.key_n_values.iter().enumerate() {
        positive(&format!("key_n_values[{i}]"), *n)?;
    }

    validate_animation(&study.animation)?;
    validate_export(&study.export)?;

    Ok(())
}

fn validate_pipe(pipe: &PipeDef) -> Result<(), ValidationError> {
    positive("pipe.radius", pipe.radius)?;
    positive("pipe.mu0", pipe.mu0)?;
    if !pipe.beta.is_finite() {
        return Err(invalid("pipe.beta", pipe.beta, "must be finite"));
    }
    Ok(())
}

fn validate_range(range: &ExponentRangeDef) -> Result<(), ValidationError> {
    positive("n_range.start", range.start)?;
    positive("n_range.end", range.end)?;
    if range.count < 2 {
        return Err(invalid("n_range.count", range.count, "need at least 2 frames"));
    }
    Ok(())
}

fn validate_animation(animation: &AnimationDef) -> Result<(), ValidationError> {
    if animation.interval_ms == 0 {
        return Err(invalid("animation.interval_ms", 0, "must be positive"));
    }
    Ok(())
}

fn validate_export(export: &ExportDef) -> Result<(), ValidationError> {
    if export.fps == 0 {
        return Err(invalid("export.fps", 0, "must be positive"));
    }
    if export.dpi == 0 {
        return Err(invalid("export.dpi", 0, "must be positive"));
    }
    positive("export.width_in", export.width_in)?;
    positive("export.height_in", export.height_in)?;
    Ok(())
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be positive and finite"))
    }
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

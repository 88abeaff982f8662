//! Study loading, saving, validation, and introspection.

use std::path::Path;

use sf_core::{Real, linspace};
use sf_profile::PowerLawParams;
use sf_study::StudyConfig;

use crate::error::{AppError, AppResult};

/// Summary of a study for listing.
#[derive(Debug, Clone)]
pub struct StudySummary {
    pub name: String,
    pub radius: Real,
    pub beta: Real,
    pub mu0: Real,
    pub samples: usize,
    pub n_fixed: Real,
    pub frame_count: usize,
    pub key_count: usize,
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load a study from a YAML (or `.json`) file.
pub fn load_study(path: &Path) -> AppResult<StudyConfig> {
    if !path.exists() {
        return Err(AppError::StudyFileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        });
    }

    let study = if is_json(path) {
        sf_study::load_json(path)?
    } else {
        sf_study::load_yaml(path)?
    };

    tracing::info!(study = %study.name, path = %path.display(), "loaded study");
    Ok(study)
}

/// Save a study; the extension picks the format.
pub fn save_study(path: &Path, study: &StudyConfig) -> AppResult<()> {
    let result = if is_json(path) {
        sf_study::save_json(path, study)
    } else {
        sf_study::save_yaml(path, study)
    };

    match result {
        Err(sf_study::StudyError::Io(source)) => Err(AppError::StudyFileWrite {
            path: path.to_path_buf(),
            source,
        }),
        other => Ok(other?),
    }
}

/// Validate study structure and parameter domains.
pub fn validate_study(study: &StudyConfig) -> AppResult<()> {
    sf_study::validate_study(study)?;
    // Every exponent the study will evaluate must lie in the real domain.
    pipe_params(study, study.n_fixed)?;
    for &n in &study.key_n_values {
        pipe_params(study, n)?;
    }
    for n in study.n_range.to_sweep()?.generate_points() {
        pipe_params(study, n)?;
    }
    Ok(())
}

/// Pipe and fluid parameters of the study at exponent `n`.
pub fn pipe_params(study: &StudyConfig, n: Real) -> AppResult<PowerLawParams> {
    let pipe = &study.pipe;
    Ok(PowerLawParams::new(pipe.radius, pipe.beta, pipe.mu0, n)?)
}

/// The radial grid shared by all scenes: `samples` points on `[0, R]`.
pub fn radial_grid(study: &StudyConfig) -> Vec<Real> {
    linspace(0.0, study.pipe.radius, study.samples)
}

pub fn summarize(study: &StudyConfig) -> StudySummary {
    StudySummary {
        name: study.name.clone(),
        radius: study.pipe.radius,
        beta: study.pipe.beta,
        mu0: study.pipe.mu0,
        samples: study.samples,
        n_fixed: study.n_fixed,
        frame_count: study.n_range.count,
        key_count: study.key_n_values.len(),
    }
}

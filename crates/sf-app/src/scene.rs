//! Static plot scenes: the single-exponent profile and the comparison overlay.
//!
//! A scene is plain data (labels, limits, point series). The GUI draws it with
//! egui_plot, the CLI writes it as CSV.

use sf_core::Real;
use sf_study::StudyConfig;

use crate::error::AppResult;
use crate::study_service::{pipe_params, radial_grid};

/// Headroom above the highest curve point.
pub const Y_HEADROOM: Real = 1.1;

pub const RADIAL_LABEL: &str = "Radial position r";
pub const VELOCITY_LABEL: &str = "Velocity v(r)";
pub const NORMALIZED_LABEL: &str = "Normalized velocity v(r)/v(0)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColor {
    Blue,
    Green,
    Red,
    Purple,
    Orange,
}

impl SeriesColor {
    pub const PALETTE: [SeriesColor; 5] = [
        SeriesColor::Blue,
        SeriesColor::Green,
        SeriesColor::Red,
        SeriesColor::Purple,
        SeriesColor::Orange,
    ];

    /// Palette entry for the `i`-th series, cycling.
    pub fn nth(i: usize) -> Self {
        Self::PALETTE[i % Self::PALETTE.len()]
    }

    pub fn rgb(&self) -> [u8; 3] {
        match self {
            Self::Blue => [0, 0, 255],
            Self::Green => [0, 128, 0],
            Self::Red => [255, 0, 0],
            Self::Purple => [128, 0, 128],
            Self::Orange => [255, 165, 0],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub label: String,
    pub n: Real,
    pub color: SeriesColor,
    pub points: Vec<[Real; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotScene {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub x_limits: (Real, Real),
    /// `None` lets the plot fit the data
    pub y_limits: Option<(Real, Real)>,
    pub series: Vec<PlotSeries>,
}

/// Single velocity curve for `study.n_fixed`.
pub fn static_profile_scene(study: &StudyConfig) -> AppResult<PlotScene> {
    static_profile_scene_for(study, study.n_fixed)
}

/// Single velocity curve for an arbitrary exponent.
pub fn static_profile_scene_for(study: &StudyConfig, n: Real) -> AppResult<PlotScene> {
    let params = pipe_params(study, n)?;
    let curve = params.sample(&radial_grid(study))?;
    tracing::info!(n, samples = curve.len(), "static profile");

    Ok(PlotScene {
        title: format!("Velocity profile for n = {n:?}"),
        x_label: RADIAL_LABEL,
        y_label: VELOCITY_LABEL,
        x_limits: (0.0, study.pipe.radius),
        y_limits: None,
        series: vec![PlotSeries {
            label: format!("n = {n:?}"),
            n,
            color: SeriesColor::Blue,
            points: curve.points(),
        }],
    })
}

/// Normalized profiles `v(r)/v(0)` for every key exponent.
pub fn comparison_scene(study: &StudyConfig) -> AppResult<PlotScene> {
    let grid = radial_grid(study);
    let mut series = Vec::with_capacity(study.key_n_values.len());

    for (i, &n) in study.key_n_values.iter().enumerate() {
        let curve = pipe_params(study, n)?.sample(&grid)?;
        series.push(PlotSeries {
            label: format!("n = {n:?}"),
            n,
            color: SeriesColor::nth(i),
            points: curve.normalized_points(),
        });
    }
    tracing::info!(curves = series.len(), "comparison scene");

    Ok(PlotScene {
        title: "Normalized velocity profiles for different n values".to_string(),
        x_label: RADIAL_LABEL,
        y_label: NORMALIZED_LABEL,
        x_limits: (0.0, study.pipe.radius),
        y_limits: Some((0.0, Y_HEADROOM)),
        series,
    })
}

//! Study schema definitions.

use serde::{Deserialize, Serialize};
use sf_core::{SfResult, SweepDefinition};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudyConfig {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub pipe: PipeDef,
    /// Radial grid resolution on `[0, R]`
    #[serde(default = "default_samples")]
    pub samples: usize,
    /// Exponent of the static profile plot
    #[serde(default = "default_n_fixed")]
    pub n_fixed: f64,
    /// Exponent schedule of the animation
    #[serde(default)]
    pub n_range: ExponentRangeDef,
    /// Exponents overlaid in the comparison plot
    #[serde(default = "default_key_n_values")]
    pub key_n_values: Vec<f64>,
    #[serde(default)]
    pub animation: AnimationDef,
    #[serde(default)]
    pub export: ExportDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PipeDef {
    /// Pipe radius `R`
    pub radius: f64,
    /// Pressure gradient coefficient
    pub beta: f64,
    /// Viscosity coefficient
    pub mu0: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExponentRangeDef {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationDef {
    /// Delay between frames
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Restart from the first frame after the last one
    #[serde(default = "default_looped")]
    pub looped: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportDef {
    #[serde(default = "default_fps")]
    pub fps: u32,
    #[serde(default = "default_dpi")]
    pub dpi: u32,
    /// Figure size in inches; pixel size is `size * dpi`
    #[serde(default = "default_width_in")]
    pub width_in: f64,
    #[serde(default = "default_height_in")]
    pub height_in: f64,
}

fn default_version() -> u32 {
    crate::LATEST_VERSION
}

fn default_name() -> String {
    "Power-law pipe flow".to_string()
}

fn default_samples() -> usize {
    1000
}

fn default_n_fixed() -> f64 {
    0.1
}

fn default_key_n_values() -> Vec<f64> {
    vec![1.0, 0.5, 0.1, 0.05, 0.01]
}

fn default_interval_ms() -> u64 {
    100
}

fn default_looped() -> bool {
    true
}

fn default_fps() -> u32 {
    10
}

fn default_dpi() -> u32 {
    100
}

fn default_width_in() -> f64 {
    15.0
}

fn default_height_in() -> f64 {
    6.0
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            name: default_name(),
            pipe: PipeDef::default(),
            samples: default_samples(),
            n_fixed: default_n_fixed(),
            n_range: ExponentRangeDef::default(),
            key_n_values: default_key_n_values(),
            animation: AnimationDef::default(),
            export: ExportDef::default(),
        }
    }
}

impl Default for PipeDef {
    fn default() -> Self {
        Self {
            radius: 1.0,
            beta: 0.02,
            mu0: 0.02,
        }
    }
}

impl Default for ExponentRangeDef {
    fn default() -> Self {
        Self {
            start: 1.0,
            end: 0.01,
            count: 100,
        }
    }
}

impl ExponentRangeDef {
    pub fn to_sweep(&self) -> SfResult<SweepDefinition> {
        SweepDefinition::new(self.start, self.end, self.count)
    }
}

impl Default for AnimationDef {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            looped: default_looped(),
        }
    }
}

impl Default for ExportDef {
    fn default() -> Self {
        Self {
            fps: default_fps(),
            dpi: default_dpi(),
            width_in: default_width_in(),
            height_in: default_height_in(),
        }
    }
}

impl ExportDef {
    /// Output resolution in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        let px = |inches: f64| (inches * self.dpi as f64).round().max(0.0) as u32;
        (px(self.width_in), px(self.height_in))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_study() {
        let study = StudyConfig::default();
        assert_eq!(study.pipe.radius, 1.0);
        assert_eq!(study.pipe.beta, 0.02);
        assert_eq!(study.pipe.mu0, 0.02);
        assert_eq!(study.samples, 1000);
        assert_eq!(study.n_fixed, 0.1);
        assert_eq!(study.n_range.count, 100);
        assert_eq!(study.key_n_values, vec![1.0, 0.5, 0.1, 0.05, 0.01]);
        assert_eq!(study.animation.interval_ms, 100);
        assert_eq!(study.export.fps, 10);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let study: StudyConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(study, StudyConfig::default());
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let yaml = "pipe: { radius: 0.5, beta: 1.0, mu0: 0.1 }\nanimation: { looped: false }\n";
        let study: StudyConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(study.pipe.radius, 0.5);
        assert!(!study.animation.looped);
        assert_eq!(study.animation.interval_ms, 100);
        assert_eq!(study.export, ExportDef::default());
    }

    #[test]
    fn partial_pipe_keeps_other_defaults() {
        let study: StudyConfig = serde_yaml::from_str("pipe: { beta: 0.04 }").unwrap();
        assert_eq!(study.pipe.beta, 0.04);
        assert_eq!(study.pipe.radius, 1.0);
        assert_eq!(study.pipe.mu0, 0.02);
    }

    #[test]
    fn pixel_size_uses_dpi() {
        assert_eq!(ExportDef::default().pixel_size(), (1500, 600));
    }

    #[test]
    fn exponent_range_sweep_is_descending() {
        let points = ExponentRangeDef::default()
            .to_sweep()
            .unwrap()
            .generate_points();
        assert_eq!(points.first(), Some(&1.0));
        assert_eq!(points.last(), Some(&0.01));
    }
}

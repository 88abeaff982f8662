//! Result data types.

use serde::{Deserialize, Serialize};

pub type RenderId = String;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderManifest {
    pub render_id: RenderId,
    pub study_name: String,
    pub timestamp: String,
    pub frame_count: usize,
    pub fps: u32,
    pub dpi: u32,
    pub width_px: u32,
    pub height_px: u32,
    pub renderer_version: String,
}

/// One animation frame as exported: the raw and the normalized curve plus the
/// axis scaling used to draw them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrameRecord {
    pub index: usize,
    pub n: f64,
    pub title: String,
    pub r: Vec<f64>,
    pub v: Vec<f64>,
    pub v_norm: Vec<f64>,
    pub y_max: f64,
    pub y_max_norm: f64,
}

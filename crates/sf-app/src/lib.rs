//! Shared application service layer for shearflow.
//!
//! Both the CLI and the GUI go through this crate: study loading, the three
//! plot scenes, the animation player and render export.

pub mod animation;
pub mod error;
pub mod export_service;
pub mod progress;
pub mod query;
pub mod scene;
pub mod study_service;

// Re-export key types for convenience
pub use animation::{AnimationPlan, AnimationPlayer, FrameState, TickOutcome, render_frame};
pub use error::{AppError, AppResult};
pub use export_service::{ExportOptions, ExportRequest, ExportResponse, export_animation};
pub use progress::{ExportProgressEvent, ExportStage};
pub use query::{frame_series, list_renders, load_render, points_to_csv, scene_to_csv};
pub use scene::{
    PlotScene, PlotSeries, SeriesColor, comparison_scene, static_profile_scene,
    static_profile_scene_for,
};
pub use study_service::{
    StudySummary, load_study, pipe_params, radial_grid, save_study, summarize, validate_study,
};

//! Animation export and render caching service.
//!
//! Video encoding is left to external tools; an export stores every frame's
//! curves and axis limits together with the frame rate and resolution the
//! animation is meant to be played back at.

use std::time::Instant;

use sf_results::{FrameRecord, RenderManifest, RenderStore, compute_render_id};
use sf_study::StudyConfig;

use crate::animation::{AnimationPlan, FrameState, render_frame};
use crate::error::AppResult;
use crate::progress::{ExportProgressEvent, ExportStage};
use crate::study_service;

/// Options for exporting renders.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub use_cache: bool,
    pub renderer_version: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            renderer_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Request to export the animation of a study.
pub struct ExportRequest<'a> {
    pub study: &'a StudyConfig,
    pub store: &'a RenderStore,
    pub options: ExportOptions,
}

/// Response from an export.
#[derive(Debug, Clone)]
pub struct ExportResponse {
    pub render_id: String,
    pub manifest: RenderManifest,
    pub loaded_from_cache: bool,
    pub total_time_s: f64,
}

fn emit_progress(
    progress_cb: &mut Option<&mut dyn FnMut(ExportProgressEvent)>,
    stage: ExportStage,
    started: Instant,
    frames: Option<(usize, usize)>,
    message: Option<String>,
) {
    if let Some(cb) = progress_cb.as_deref_mut() {
        cb(ExportProgressEvent {
            stage,
            elapsed_wall_s: started.elapsed().as_secs_f64(),
            frames,
            message,
        });
    }
}

impl From<FrameState> for FrameRecord {
    fn from(frame: FrameState) -> Self {
        let (r, v): (Vec<f64>, Vec<f64>) = frame.raw.iter().map(|p| (p[0], p[1])).unzip();
        let v_norm = frame.normalized.iter().map(|p| p[1]).collect();
        FrameRecord {
            index: frame.index,
            n: frame.n,
            title: frame.title,
            r,
            v,
            v_norm,
            y_max: frame.y_max,
            y_max_norm: frame.y_max_norm,
        }
    }
}

/// Render every frame of the study's animation and store it, or reuse a stored
/// render of the identical study.
pub fn export_animation(
    request: &ExportRequest,
    mut progress_cb: Option<&mut dyn FnMut(ExportProgressEvent)>,
) -> AppResult<ExportResponse> {
    let started = Instant::now();

    emit_progress(
        &mut progress_cb,
        ExportStage::CheckingCache,
        started,
        None,
        Some("Checking render cache".to_string()),
    );

    study_service::validate_study(request.study)?;
    let render_id = compute_render_id(request.study, &request.options.renderer_version);

    if request.options.use_cache && request.store.has_render(&render_id) {
        emit_progress(
            &mut progress_cb,
            ExportStage::LoadingCachedRender,
            started,
            None,
            Some("Loading cached render".to_string()),
        );

        let manifest = request.store.load_manifest(&render_id)?;
        tracing::info!(render_id = %render_id, "reusing cached render");

        emit_progress(
            &mut progress_cb,
            ExportStage::Completed,
            started,
            None,
            Some("Loaded cached render".to_string()),
        );

        return Ok(ExportResponse {
            render_id,
            manifest,
            loaded_from_cache: true,
            total_time_s: started.elapsed().as_secs_f64(),
        });
    }

    let plan = AnimationPlan::from_study(request.study)?;
    let total = plan.len();
    let mut frames = Vec::with_capacity(total);

    for index in 0..total {
        let frame = render_frame(&plan, index).inspect_err(|e| {
            tracing::warn!(index, error = %e, "frame failed, aborting export");
        })?;
        frames.push(FrameRecord::from(frame));

        emit_progress(
            &mut progress_cb,
            ExportStage::RenderingFrames,
            started,
            Some((index + 1, total)),
            None,
        );
    }

    emit_progress(
        &mut progress_cb,
        ExportStage::SavingRender,
        started,
        Some((total, total)),
        Some("Saving render".to_string()),
    );

    let export = &request.study.export;
    let (width_px, height_px) = export.pixel_size();
    let manifest = RenderManifest {
        render_id: render_id.clone(),
        study_name: request.study.name.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        frame_count: frames.len(),
        fps: export.fps,
        dpi: export.dpi,
        width_px,
        height_px,
        renderer_version: request.options.renderer_version.clone(),
    };

    let dir = request.store.save_render(&manifest, &frames)?;
    tracing::info!(
        render_id = %render_id,
        frames = frames.len(),
        dir = %dir.display(),
        "exported animation"
    );

    emit_progress(
        &mut progress_cb,
        ExportStage::Completed,
        started,
        Some((total, total)),
        Some("Export completed".to_string()),
    );

    Ok(ExportResponse {
        render_id,
        manifest,
        loaded_from_cache: false,
        total_time_s: started.elapsed().as_secs_f64(),
    })
}

//! Render queries and CSV formatting.

use sf_results::{FrameRecord, RenderManifest, RenderStore};

use crate::error::{AppError, AppResult};
use crate::scene::PlotScene;

/// Stored renders, oldest first.
pub fn list_renders(store: &RenderStore) -> AppResult<Vec<RenderManifest>> {
    Ok(store.list_renders()?)
}

/// Manifest and frames of one render.
pub fn load_render(
    store: &RenderStore,
    render_id: &str,
) -> AppResult<(RenderManifest, Vec<FrameRecord>)> {
    let manifest = store.load_manifest(render_id)?;
    let frames = store.load_frames(render_id)?;
    Ok((manifest, frames))
}

/// `[r, v]` (or `[r, v/v0]`) points of one stored frame.
pub fn frame_series(
    frames: &[FrameRecord],
    index: usize,
    normalized: bool,
) -> AppResult<Vec<[f64; 2]>> {
    let frame = frames.get(index).ok_or(AppError::FrameOutOfRange {
        index,
        len: frames.len(),
    })?;
    let values = if normalized { &frame.v_norm } else { &frame.v };
    Ok(frame
        .r
        .iter()
        .zip(values)
        .map(|(&r, &v)| [r, v])
        .collect())
}

/// Two-column CSV with a header line.
pub fn points_to_csv(header: &str, points: &[[f64; 2]]) -> String {
    let mut csv = String::with_capacity(header.len() + 1 + points.len() * 24);
    csv.push_str(header);
    csv.push('\n');
    for [x, y] in points {
        csv.push_str(&format!("{},{}\n", x, y));
    }
    csv
}

/// Long-format CSV of every series in a scene: `n,x,y`.
pub fn scene_to_csv(scene: &PlotScene, y_column: &str) -> String {
    let mut csv = format!("n,r,{}\n", y_column);
    for series in &scene.series {
        for [x, y] in &series.points {
            csv.push_str(&format!("{},{},{}\n", series.n, x, y));
        }
    }
    csv
}

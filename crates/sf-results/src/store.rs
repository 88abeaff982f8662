//! Render storage API.

use crate::types::{FrameRecord, RenderManifest};
use crate::{ResultsError, ResultsResult};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct RenderStore {
    root_dir: PathBuf,
}

impl RenderStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    /// Store next to a study file, under `.shearflow/renders`.
    pub fn for_study(study_path: &Path) -> ResultsResult<Self> {
        let study_dir = study_path
            .parent()
            .ok_or_else(|| ResultsError::InvalidPath {
                message: "study path has no parent directory".to_string(),
            })?;
        Self::new(study_dir.join(".shearflow").join("renders"))
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn render_dir(&self, render_id: &str) -> PathBuf {
        self.root_dir.join(render_id)
    }

    pub fn has_render(&self, render_id: &str) -> bool {
        self.render_dir(render_id).join("manifest.json").exists()
    }

    pub fn save_render(
        &self,
        manifest: &RenderManifest,
        frames: &[FrameRecord],
    ) -> ResultsResult<PathBuf> {
        let render_dir = self.render_dir(&manifest.render_id);
        fs::create_dir_all(&render_dir)?;

        // Drop the old manifest so a partial rewrite never reads as complete.
        let manifest_path = render_dir.join("manifest.json");
        if manifest_path.exists() {
            fs::remove_file(&manifest_path)?;
        }

        let frames_path = render_dir.join("frames.jsonl");
        let mut frames_content = String::new();
        for frame in frames {
            let line = serde_json::to_string(frame)?;
            frames_content.push_str(&line);
            frames_content.push('\n');
        }
        fs::write(frames_path, frames_content)?;

        // Manifest last: its presence marks a complete render.
        let manifest_json = serde_json::to_string_pretty(manifest)?;
        fs::write(manifest_path, manifest_json)?;

        Ok(render_dir)
    }

    pub fn load_manifest(&self, render_id: &str) -> ResultsResult<RenderManifest> {
        let manifest_path = self.render_dir(render_id).join("manifest.json");

        if !manifest_path.exists() {
            return Err(ResultsError::RenderNotFound {
                render_id: render_id.to_string(),
            });
        }

        let content = fs::read_to_string(manifest_path)?;
        let manifest = serde_json::from_str(&content)?;
        Ok(manifest)
    }

    pub fn load_frames(&self, render_id: &str) -> ResultsResult<Vec<FrameRecord>> {
        let frames_path = self.render_dir(render_id).join("frames.jsonl");

        if !frames_path.exists() {
            return Err(ResultsError::RenderNotFound {
                render_id: render_id.to_string(),
            });
        }

        let content = fs::read_to_string(frames_path)?;
        let mut frames = Vec::new();
        for line in content.lines() {
            if !line.trim().is_empty() {
                let frame: FrameRecord = serde_json::from_str(line)?;
                frames.push(frame);
            }
        }

        Ok(frames)
    }

    /// All complete renders, oldest first.
    pub fn list_renders(&self) -> ResultsResult<Vec<RenderManifest>> {
        let mut renders = Vec::new();

        if !self.root_dir.exists() {
            return Ok(renders);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            if entry.path().is_dir() {
                let render_id = entry.file_name().to_string_lossy().to_string();
                if let Ok(manifest) = self.load_manifest(&render_id) {
                    renders.push(manifest);
                }
            }
        }

        renders.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        Ok(renders)
    }

    pub fn delete_render(&self, render_id: &str) -> ResultsResult<()> {
        let render_dir = self.render_dir(render_id);
        if render_dir.exists() {
            fs::remove_dir_all(render_dir)?;
        }
        Ok(())
    }
}

//! Content-based hashing for render IDs.

use sf_study::StudyConfig;
use sha2::{Digest, Sha256};

pub fn compute_render_id(study: &StudyConfig, renderer_version: &str) -> String {
    let mut hasher = Sha256::new();

    let study_json = serde_json::to_string(study).unwrap_or_default();
    hasher.update(study_json.as_bytes());

    hasher.update(renderer_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}

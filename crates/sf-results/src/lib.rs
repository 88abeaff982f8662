//! sf-results: storage for exported animation renders.

pub mod hash;
pub mod store;
pub mod types;

pub use hash::compute_render_id;
pub use store::RenderStore;
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Render not found: {render_id}")]
    RenderNotFound { render_id: String },

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },
}

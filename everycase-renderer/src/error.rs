//! Error types for everycase-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from rendering combinations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error (parse, missing variable, filter failure).
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Filesystem error while loading a template file.
    #[error("template io error at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    /// Failure reported by a caller-supplied render strategy.
    #[error("render strategy failed: {0}")]
    Strategy(String),
}

//! Error types for everycase-session.

use thiserror::Error;

use everycase_core::CoreError;
use everycase_locator::LocateError;
use everycase_renderer::RenderError;

/// All errors that can arise from a bound session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Lookup or combination error from the core engine.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// The manifest could not be resolved or loaded.
    #[error("manifest error: {0}")]
    Locate(#[from] LocateError),

    /// `render` was given a predicate that matches no combination.
    #[error("no combination of {tag} matches the predicate")]
    NoMatchingCombination { tag: String },
}

impl SessionError {
    /// `true` when the underlying cause is an unknown tag.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SessionError::Core(err) if err.is_not_found())
    }
}

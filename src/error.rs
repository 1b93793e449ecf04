//! Error types for the funnel experiment.

use std::path::PathBuf;

/// Errors that can abort an experiment run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A plot could not be drawn or saved. Fatal for the run.
    #[error("failed to render plot to {path}: {reason}")]
    Render { path: PathBuf, reason: String },

    /// Programmatic configuration was rejected before any work started.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn render(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::Render {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

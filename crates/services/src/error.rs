//! Shared error types for the services crate.

use thiserror::Error;

use storage::DataLoadError;

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("quiz already completed")]
    Completed,
}

/// Errors emitted while preparing a quiz.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),
}

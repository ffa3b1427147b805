//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::bundle::BundleError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by the quiz engine.
///
/// Rejected transitions never mutate the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no questions available for quiz")]
    Empty,
    #[error("an answer is already selected for this question")]
    AnswerLocked,
    #[error("no answer selected yet")]
    NoAnswerSelected,
    #[error("quiz already completed")]
    Completed,
}

/// Errors emitted by `AppSettingsService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppSettingsServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Bundle(#[from] BundleError),
}

//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by a `QuestionSource`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionSourceError {
    #[error("question source is not configured")]
    Disabled,
    #[error("question source request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("question source returned an unreadable payload: {0}")]
    Decode(#[from] serde_json::Error),
    /// Failure reported by a non-HTTP source.
    #[error("question source unavailable: {0}")]
    Unavailable(String),
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no questions available for this quiz")]
    NoQuestions,
    #[error(transparent)]
    Source(#[from] QuestionSourceError),
}

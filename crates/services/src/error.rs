//! Shared error types for the services crate.

use thiserror::Error;

/// Any failure while fetching lessons.
///
/// The store collapses every variant into one user-facing message; the
/// variants exist for logging.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("lesson request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Decode(#[from] lesson_core::Error),
}

/// Errors emitted by `SessionStore::submit_practice`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SubmitError {
    #[error("a practice upload is already in progress")]
    Busy,
    #[error("practice upload was cancelled")]
    Cancelled,
}

/// Errors emitted while building a lesson source configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceConfigError {
    #[error("invalid lessons endpoint {raw:?}: {source}")]
    InvalidEndpoint {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("lessons endpoint must use http or https, got {0:?}")]
    UnsupportedScheme(String),
}

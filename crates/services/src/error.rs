//! Shared error types for the services crate.

use thiserror::Error;

use trivia_core::session::SessionError;

/// Errors emitted while fetching questions from a trivia API.
///
/// Network failures, bad statuses, undecodable payloads, and the explicit
/// "no results" signal all land here; the caller treats them uniformly.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("trivia request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("trivia response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no questions available for the selected filters")]
    NoResults,
}

/// Errors emitted by `GameFlow`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GameError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("prompt failed: {0}")]
    Prompt(#[from] std::io::Error),
}

//! The seam between the game flow and a concrete trivia API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use trivia_core::model::{Category, Question, SessionConfig};

use crate::error::FetchError;

/// Applied to every outbound request; a timed-out fetch is reported like any
/// other network failure.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub(crate) fn build_client() -> Result<Client, FetchError> {
    Ok(Client::builder().timeout(REQUEST_TIMEOUT).build()?)
}

/// A trivia API the game can draw questions from.
///
/// Implementations perform exactly one GET per session and normalize the
/// payload into validated [`Question`] values, shuffled choices included.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Short name used in logs.
    fn label(&self) -> &'static str;

    /// The categories this source can filter by, in prompt order.
    ///
    /// Always ends with a "mix of all categories" entry.
    fn categories(&self) -> &[Category];

    /// Fetch and normalize questions for the given configuration.
    ///
    /// The source may return fewer questions than `config.amount()`; a short
    /// list is valid.
    ///
    /// # Errors
    ///
    /// Any network failure, non-success status, undecodable payload, or
    /// empty/no-results outcome is a [`FetchError`].
    async fn fetch(&self, config: &SessionConfig) -> Result<Vec<Question>, FetchError>;
}

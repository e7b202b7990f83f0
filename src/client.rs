//! HTTP client for the tasks endpoint.
//!
//! One invocation issues exactly one GET request. There are no retries and no
//! pagination; the endpoint returns the full filtered task list in one JSON
//! array.

use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::credential::Credential;
use crate::models::Task;

/// The tasks endpoint of the REST API.
pub const TASKS_ENDPOINT: &str = "https://beta.todoist.com/API/v8/tasks";

// The transport default would wait indefinitely; a slow listing is useless.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Failure while talking to the tasks endpoint.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("building request url: {0}")]
    Url(#[from] url::ParseError),

    #[error("sending request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with {status}")]
    Status { status: reqwest::StatusCode },
}

/// Build the GET URL for a filtered task listing.
///
/// The credential and the filter expression travel as query parameters, under
/// the keys the API expects.
pub fn tasks_url(token: &str, filter: &str) -> Result<Url, url::ParseError> {
    Url::parse_with_params(TASKS_ENDPOINT, &[("token", token), ("filter", filter)])
}

/// Client for the tasks endpoint.
pub struct TodoistClient {
    http: reqwest::Client,
    credential: Credential,
}

impl TodoistClient {
    pub fn new(credential: Credential) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { http, credential })
    }

    /// Fetch the tasks matching a filter expression.
    pub async fn tasks(&self, filter: &str) -> Result<Vec<Task>, FetchError> {
        let url = tasks_url(self.credential.as_str(), filter)?;

        tracing::debug!(%filter, "requesting tasks");

        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        let tasks: Vec<Task> = response.json().await?;

        tracing::debug!(count = tasks.len(), "fetched tasks");

        Ok(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }

    #[test]
    fn test_tasks_url_carries_token_and_filter() {
        let url = tasks_url("abc", "Inbox").expect("url should build");

        assert_eq!(url.query(), Some("token=abc&filter=Inbox"));
    }

    #[test]
    fn test_tasks_url_targets_the_tasks_endpoint() {
        let url = tasks_url("abc", "Inbox").expect("url should build");

        assert_eq!(url.host_str(), Some("beta.todoist.com"));
        assert_eq!(url.path(), "/API/v8/tasks");
    }

    #[test]
    fn test_tasks_url_encodes_filter_expressions() {
        let url = tasks_url("abc", "(overdue | today)").expect("url should build");

        assert_eq!(
            query_pairs(&url),
            vec![
                ("token".to_string(), "abc".to_string()),
                ("filter".to_string(), "(overdue | today)".to_string()),
            ]
        );
    }
}

//! This module defines traits for external dependencies (the remote tasks
//! endpoint) to make them easier to mock and substitute in tests. By
//! abstracting the HTTP client behind a trait, commands can be decoupled and
//! dependency-injected, improving testability.

use async_trait::async_trait;

use crate::client::{FetchError, TodoistClient};
use crate::models::Task;

#[cfg(test)]
pub use mocks::*;

// Dependency to fetch a filtered task list
#[async_trait]
pub trait TaskLister {
    /// Returns the tasks matching the filter expression.
    async fn list(&self, filter: &str) -> Result<Vec<Task>, FetchError>;
}

#[async_trait]
impl TaskLister for TodoistClient {
    async fn list(&self, filter: &str) -> Result<Vec<Task>, FetchError> {
        self.tasks(filter).await
    }
}

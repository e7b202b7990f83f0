//! Command to list the tasks of a project.
//!
//! This module implements the `list` command which fetches the tasks of a
//! single project and displays them as one priority-sorted list.
//! The command uses dependency injection to allow for easy testing and mocking
//! of the network round trip.

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::{
    args,
    client::TodoistClient,
    commands::CommandWithOutput,
    credential::Credential,
    dependencies::TaskLister,
    interaction::{Interaction, SpinnerInteraction},
    listing::TaskListing,
    query::TaskQuery,
};

// Interaction dependencies for the list command
pub trait ListInteraction: SpinnerInteraction + Send {}
impl<T: SpinnerInteraction + Send> ListInteraction for T {}

/// Command to list the tasks of a project.
pub struct List {
    query: TaskQuery,

    interaction: Box<dyn ListInteraction>,
    task_lister: Box<dyn TaskLister + Send>,
}

/// Convert CLI arguments to command with default dependencies injected.
///
/// The credential is resolved here, before any network activity; without a
/// token the command never comes into existence.
impl TryFrom<args::List> for List {
    type Error = anyhow::Error;

    fn try_from(args: args::List) -> Result<Self> {
        let credential = Credential::resolve()?;

        Ok(Self {
            query: TaskQuery::project(&args.project),
            interaction: Box::new(Interaction::new()),
            task_lister: Box::new(
                TodoistClient::new(credential).context("building HTTP client")?,
            ),
        })
    }
}

/// Execute the list command and return the flat listing.
///
/// The spinner runs for the duration of the fetch; dropping the handle clears
/// it on both the success and the error path.
#[async_trait]
impl CommandWithOutput for List {
    type Output = TaskListing;

    async fn execute(&mut self) -> Result<Self::Output> {
        let _spinner = self.interaction.start_spinner(self.query.label.clone())?;

        let tasks = self
            .task_lister
            .list(&self.query.filter)
            .await
            .context("fetching tasks")?;

        Ok(self.query.listing(tasks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::FetchError;
    use crate::dependencies::MockTodoist;
    use crate::interaction::SpinnerHandle;
    use crate::interaction::mocks::MockInteraction;
    use crate::models::Task;
    use reqwest::StatusCode;

    fn create_spinner_handle() -> SpinnerHandle {
        SpinnerHandle::new(Box::new(|| {}))
    }

    fn task(content: &str, priority: u8) -> Task {
        Task {
            content: content.to_string(),
            priority,
            due: None,
        }
    }

    #[tokio::test]
    async fn test_list_fetches_with_the_project_filter_and_sorts() {
        let mut mock_interaction = MockInteraction::new();
        mock_interaction
            .expect_start_spinner()
            .withf(|msg| msg == "Listing tasks from Inbox...")
            .return_once(|_| Ok(create_spinner_handle()));

        let mut mock_lister = MockTodoist::new();
        mock_lister
            .expect_list()
            .withf(|filter| filter == "Inbox")
            .return_once(|_| Ok(vec![task("A", 2), task("B", 4), task("C", 2)]));

        let mut list_command = List {
            query: TaskQuery::project("Inbox"),
            interaction: Box::new(mock_interaction),
            task_lister: Box::new(mock_lister),
        };

        let result = list_command
            .execute()
            .await
            .expect("execute should succeed");

        assert_eq!(
            result,
            TaskListing::Flat(vec![task("B", 4), task("A", 2), task("C", 2)])
        );
    }

    #[tokio::test]
    async fn test_list_fetch_failure_surfaces_the_error() {
        let mut mock_interaction = MockInteraction::new();
        mock_interaction
            .expect_start_spinner()
            .return_once(|_| Ok(create_spinner_handle()));

        let mut mock_lister = MockTodoist::new();
        mock_lister.expect_list().return_once(|_| {
            Err(FetchError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
            })
        });

        let mut list_command = List {
            query: TaskQuery::project("Inbox"),
            interaction: Box::new(mock_interaction),
            task_lister: Box::new(mock_lister),
        };

        let result = list_command.execute().await;

        assert!(result.is_err());
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("fetching tasks"));
        assert!(message.contains("500"));
    }
}

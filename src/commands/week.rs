//! Command to list the tasks due in the next seven days.
//!
//! Uses the `7 days` filter expression and groups the result by due date.

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

// Interaction dependencies for the week command
pub trait WeekInteraction: SpinnerInteraction + Send {}
impl<T: SpinnerInteraction + Send> WeekInteraction for T {}

/// Command to list the tasks due in the coming week.
pub struct Week {
    query: TaskQuery,

    interaction: Box<dyn WeekInteraction>,
    task_lister: Box<dyn TaskLister + Send>,
}

/// Convert CLI arguments to command with default dependencies injected.
impl TryFrom<args::Week> for Week {
    type Error = anyhow::Error;

    fn try_from(_: args::Week) -> Result<Self> {
        let credential = Credential::resolve()?;

        Ok(Self {
            query: TaskQuery::week(),
            interaction: Box::new(Interaction::new()),
            task_lister: Box::new(
                TodoistClient::new(credential).context("building HTTP client")?,
            ),
        })
    }
}

/// Execute the week command and return the date-grouped listing.
#[async_trait]
impl CommandWithOutput for Week {
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
    use crate::dependencies::MockTodoist;
    use crate::interaction::SpinnerHandle;
    use crate::interaction::mocks::MockInteraction;
    use crate::listing::DateGroup;
    use crate::models::{Due, Task};

    fn create_spinner_handle() -> SpinnerHandle {
        SpinnerHandle::new(Box::new(|| {}))
    }

    fn dated_task(content: &str, priority: u8, date: &str) -> Task {
        Task {
            content: content.to_string(),
            priority,
            due: Some(Due {
                date: date.to_string(),
            }),
        }
    }

    #[tokio::test]
    async fn test_week_sends_the_seven_days_filter_and_groups_by_date() {
        let mut mock_interaction = MockInteraction::new();
        mock_interaction
            .expect_start_spinner()
            .withf(|msg| msg == "Listing tasks due in the next 7 days...")
            .return_once(|_| Ok(create_spinner_handle()));

        let mut mock_lister = MockTodoist::new();
        mock_lister
            .expect_list()
            .withf(|filter| filter == "7 days")
            .return_once(|_| {
                Ok(vec![
                    dated_task("friday", 2, "2026-08-08"),
                    dated_task("thursday low", 1, "2026-08-07"),
                    dated_task("thursday high", 4, "2026-08-07"),
                ])
            });

        let mut week_command = Week {
            query: TaskQuery::week(),
            interaction: Box::new(mock_interaction),
            task_lister: Box::new(mock_lister),
        };

        let result = week_command
            .execute()
            .await
            .expect("execute should succeed");

        assert_eq!(
            result,
            TaskListing::ByDate(vec![
                DateGroup {
                    date: "2026-08-07".to_string(),
                    tasks: vec![
                        dated_task("thursday high", 4, "2026-08-07"),
                        dated_task("thursday low", 1, "2026-08-07"),
                    ],
                },
                DateGroup {
                    date: "2026-08-08".to_string(),
                    tasks: vec![dated_task("friday", 2, "2026-08-08")],
                },
            ])
        );
    }
}

//! Command to list overdue tasks and tasks due today.
//!
//! Uses the `(overdue | today)` filter expression and groups the result by
//! due date, so overdue tasks keep their original dates in the output.

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

// Interaction dependencies for the today command
pub trait TodayInteraction: SpinnerInteraction + Send {}
impl<T: SpinnerInteraction + Send> TodayInteraction for T {}

/// Command to list the tasks due today, plus anything overdue.
pub struct Today {
    query: TaskQuery,

    interaction: Box<dyn TodayInteraction>,
    task_lister: Box<dyn TaskLister + Send>,
}

/// Convert CLI arguments to command with default dependencies injected.
impl TryFrom<args::Today> for Today {
    type Error = anyhow::Error;

    fn try_from(_: args::Today) -> Result<Self> {
        let credential = Credential::resolve()?;

        Ok(Self {
            query: TaskQuery::today(),
            interaction: Box::new(Interaction::new()),
            task_lister: Box::new(
                TodoistClient::new(credential).context("building HTTP client")?,
            ),
        })
    }
}

/// Execute the today command and return the date-grouped listing.
#[async_trait]
impl CommandWithOutput for Today {
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

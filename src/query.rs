//! Per-verb request configuration.
//!
//! Each CLI verb maps to a [`TaskQuery`]: the filter expression sent to the
//! tasks endpoint, the label shown while the request is in flight, and the
//! grouping mode applied to the response.

use typed_builder::TypedBuilder;

use crate::listing::TaskListing;
use crate::models::Task;

/// Filter expression selecting overdue tasks and tasks due today.
pub const TODAY_FILTER: &str = "(overdue | today)";

/// Filter expression selecting tasks due in the next seven days.
pub const WEEK_FILTER: &str = "7 days";

/// How the fetched tasks are arranged for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grouping {
    /// A single list sorted by descending priority.
    Flat,
    /// Partitioned by due date, ascending, each group sorted by priority.
    ByDate,
}

/// Typed request configuration for one verb.
#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct TaskQuery {
    /// Filter expression in the remote service's query syntax.
    #[builder(setter(transform = |s: impl Into<String>| s.into()))]
    pub filter: String,

    /// Human-readable operation label, shown next to the spinner.
    #[builder(setter(transform = |s: impl Into<String>| s.into()))]
    pub label: String,

    pub grouping: Grouping,
}

impl TaskQuery {
    /// Query for `list <project>`.
    ///
    /// The project name goes into the filter expression verbatim. Any quoting
    /// the filter syntax needs is the caller's responsibility.
    pub fn project(project: &str) -> Self {
        TaskQuery::builder()
            .filter(project)
            .label(format!("Listing tasks from {project}..."))
            .grouping(Grouping::Flat)
            .build()
    }

    /// Query for `today`.
    pub fn today() -> Self {
        TaskQuery::builder()
            .filter(TODAY_FILTER)
            .label("Listing tasks due today...")
            .grouping(Grouping::ByDate)
            .build()
    }

    /// Query for `week`.
    pub fn week() -> Self {
        TaskQuery::builder()
            .filter(WEEK_FILTER)
            .label("Listing tasks due in the next 7 days...")
            .grouping(Grouping::ByDate)
            .build()
    }

    /// Arrange the fetched tasks according to the grouping mode.
    pub fn listing(&self, tasks: Vec<Task>) -> TaskListing {
        match self.grouping {
            Grouping::Flat => TaskListing::flat(tasks),
            Grouping::ByDate => TaskListing::by_date(tasks),
        }
    }
}

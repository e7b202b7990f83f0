//! Presentation pipeline for fetched tasks.
//!
//! The main entry points are [`TaskListing::flat`] and [`TaskListing::by_date`],
//! pure transformations of the raw task list into display order. The listing
//! is printed using the [`Display`] trait and serializes to JSON for the
//! `--output json` format.

use std::collections::BTreeMap;
use std::fmt::Display;

use console::{Style, style};
use serde::Serialize;

use crate::models::Task;

/// Tasks arranged for display.
///
/// `Flat` is a single priority-sorted list. `ByDate` is partitioned by due
/// date, groups ascending, each group priority-sorted. Serialization is
/// untagged, so JSON output is the bare task array or the bare group array.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TaskListing {
    Flat(Vec<Task>),
    ByDate(Vec<DateGroup>),
}

/// Tasks sharing a due date.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DateGroup {
    pub date: String,
    pub tasks: Vec<Task>,
}

impl TaskListing {
    /// Arrange tasks as a single list, most urgent first.
    pub fn flat(mut tasks: Vec<Task>) -> Self {
        sort_by_priority(&mut tasks);
        Self::Flat(tasks)
    }

    /// Partition tasks by due date, earliest date first.
    ///
    /// Tasks without a due date are dropped from the listing. The date
    /// strings are `YYYY-MM-DD`, so lexicographic key order is calendar
    /// order.
    pub fn by_date(tasks: Vec<Task>) -> Self {
        let mut dropped = 0usize;
        let mut groups: BTreeMap<String, Vec<Task>> = BTreeMap::new();

        for task in tasks {
            let Some(date) = task.due.as_ref().map(|due| due.date.clone()) else {
                dropped += 1;
                continue;
            };
            groups.entry(date).or_default().push(task);
        }

        if dropped > 0 {
            tracing::debug!(dropped, "ignoring tasks without a due date");
        }

        Self::ByDate(
            groups
                .into_iter()
                .map(|(date, mut tasks)| {
                    sort_by_priority(&mut tasks);
                    DateGroup { date, tasks }
                })
                .collect(),
        )
    }

    /// The display lines, fully materialized and in final output order.
    ///
    /// Date groups get a bold header and are separated by an empty line.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Flat(tasks) => tasks.iter().map(task_line).collect(),
            Self::ByDate(groups) => {
                let mut lines = Vec::new();
                for (index, group) in groups.iter().enumerate() {
                    if index > 0 {
                        lines.push(String::new());
                    }
                    lines.push(style(&group.date).bold().to_string());
                    lines.extend(group.tasks.iter().map(task_line));
                }
                lines
            }
        }
    }
}

impl Display for TaskListing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

// sort_by is stable, tasks sharing a priority keep their response order
fn sort_by_priority(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| b.priority.cmp(&a.priority));
}

fn task_line(task: &Task) -> String {
    let label = priority_style(task.priority).apply_to(format!("p{}", task.priority));
    format!("{label} {}", task.content)
}

/// Color for a priority label.
///
/// Every priority the API documents maps to one color; anything out of range
/// renders unstyled rather than failing.
fn priority_style(priority: u8) -> Style {
    match priority {
        4 => Style::new().red(),
        3 => Style::new().yellow(),
        2 => Style::new().cyan(),
        1 => Style::new().green(),
        _ => Style::new(),
    }
}

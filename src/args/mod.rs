//! CLI argument parsing layer.
//!
//! This module provides the CLI interface using clap derive macros.
//! It handles parsing command-line arguments and converting them into structured data types.
//!
//! The business logic layer is [`crate::commands`], which receives these parsed arguments.

use clap::{Parser, Subcommand};

mod cli;

pub use cli::{Cli, GlobalArgs};

/// Root command enum for the task listing verbs.
///
/// `TodoistArgs` is the root command that users will interact with.
/// Each verb maps to a fixed filter expression and grouping mode, see [`crate::query`].
#[derive(Subcommand)]
#[command(about = "Fetch and display your Todoist tasks")]
pub enum TodoistArgs {
    #[command(alias = "l")]
    List(List),
    #[command(alias = "t")]
    Today(Today),
    #[command(alias = "w")]
    Week(Week),
}

/// List the tasks of a single project, sorted by priority.
#[derive(Parser)]
pub struct List {
    /// Name of the project to list tasks from.
    ///
    /// The name is passed to the Todoist filter syntax verbatim.
    #[arg(index = 1)]
    pub project: String,
}

/// List overdue tasks and tasks due today, grouped by due date.
#[derive(Parser)]
pub struct Today;

/// List the tasks due in the next seven days, grouped by due date.
#[derive(Parser)]
pub struct Week;

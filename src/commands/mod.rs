//! This module contains business logic for the commands for the application.
//!
//! The main entry point is the [`command_from_args`] function which converts CLI arguments into a command.
use anyhow::Result;

use crate::{
    args::TodoistArgs,
    commands::{list::List, today::Today, week::Week},
    formatting::Format,
};
pub use core::{Command, CommandWithOutput, CommandWithOutputExt};

mod core;
pub mod list;
pub mod today;
pub mod week;

/// Convert CLI arguments into a command.
///
/// Constructing a command resolves the API credential and builds the HTTP
/// client; a missing credential fails here, before any request is made.
///
/// The output of the command will be formatted using the provided format and printed to stdout.
pub fn command_from_args(args: TodoistArgs, format: Format) -> Result<Box<dyn Command>> {
    match args {
        TodoistArgs::List(list_args) => List::try_from(list_args)?.with_print_to_stdout(format),
        TodoistArgs::Today(today_args) => Today::try_from(today_args)?.with_print_to_stdout(format),
        TodoistArgs::Week(week_args) => Week::try_from(week_args)?.with_print_to_stdout(format),
    }
}

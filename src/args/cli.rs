//! Root command for the CLI.
//!
//! The subcommands are defined in the [`TodoistArgs`](super::TodoistArgs) enum.

use clap::{Args, Parser};

use crate::formatting::Format;

use super::TodoistArgs;

/// Fetch and display your Todoist tasks
#[derive(Parser)]
#[command(name = "todoist", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global_args: GlobalArgs,

    #[command(subcommand)]
    pub command: TodoistArgs,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// Enable debug logging.
    ///
    /// Setting this flag will set the log level to debug and only show logs from this crate.
    ///
    /// The log level can also be overridden by setting the `TODOIST_LOG` environment variable.
    /// If the `TODOIST_LOG_ALL` environment variable is set, it will show logs from all crates at the specified level.
    #[arg(global = true, hide = true, long, short = 'D', default_value = "false")]
    pub debug: bool,

    /// Output format.
    #[arg(global = true, long = "output", short = 'o')]
    pub format: Option<Format>,
}

use std::process;

use anyhow::Result;
use clap::Parser;
use console::style;

use crate::args::Cli;
use crate::formatting::Format;

mod args;
mod client;
mod commands;
mod credential;
mod dependencies;
mod formatting;
mod interaction;
mod listing;
mod logging;
mod models;
mod query;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{} {err:#}", style("✗").red().bold());
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::setup_logging(cli.global_args.debug);

    let format = cli.global_args.format.unwrap_or(Format::Text);

    // The banner belongs to the human-facing output only.
    if format == Format::Text {
        println!("{}", style("Todoist CLI ✨").green());
    }

    let mut command = commands::command_from_args(cli.command, format)?;
    command.execute().await
}

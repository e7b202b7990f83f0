//! Core traits for commands.
//!
//! - [`Command`] is a unit of work that renders its own output.
//! - [`CommandWithOutput`] is a command that returns a result value.
//! - [`CommandWithOutputExt::with_print_to_stdout`] adapts the latter into
//!   the former by attaching the terminal renderer.

use anyhow::Result;
use async_trait::async_trait;
use console::style;

use crate::formatting::{Format, Formattable};

/// Trait for all commands.
#[async_trait]
pub trait Command {
    /// Execute the command
    async fn execute(&mut self) -> Result<()>;
}

/// Trait for commands that return an output.
#[async_trait]
pub trait CommandWithOutput {
    type Output;

    /// Execute the command and return the output.
    async fn execute(&mut self) -> Result<Self::Output>;
}

/// Command extensions trait.
pub trait CommandWithOutputExt {
    /// Convert a [`CommandWithOutput`] into a [`Command`] that renders the
    /// output to stdout in the given format.
    fn with_print_to_stdout(self, format: Format) -> Result<Box<dyn Command>>;
}

/// Wrapper that renders the output of a [`CommandWithOutput`] to stdout.
///
/// Text output is framed by blank lines and closed with a success indicator.
/// JSON output is the serialized result alone, for piping.
pub struct PrintToStdoutCommand<C, O>
where
    C: CommandWithOutput<Output = O>,
    O: Formattable,
{
    command: C,
    format: Format,
}

impl<C, O> PrintToStdoutCommand<C, O>
where
    C: CommandWithOutput<Output = O> + Send,
    O: Formattable,
{
    pub fn new(command: C, format: Format) -> Self {
        Self { command, format }
    }
}

#[async_trait]
impl<C, O> Command for PrintToStdoutCommand<C, O>
where
    C: CommandWithOutput<Output = O> + Send,
    O: Formattable,
{
    async fn execute(&mut self) -> Result<()> {
        let output = self.command.execute().await?;

        let formatted_output = output.format(self.format)?;

        match self.format {
            Format::Json => println!("{}", formatted_output),
            Format::Text => {
                println!();
                println!("{}", formatted_output);
                println!();
                println!("{} Done.", style("✔").green());
            }
        }

        Ok(())
    }
}

impl<C, O> CommandWithOutputExt for C
where
    C: CommandWithOutput<Output = O> + Send + 'static,
    O: Formattable + 'static,
{
    fn with_print_to_stdout(self, format: Format) -> Result<Box<dyn Command>> {
        Ok(Box::new(PrintToStdoutCommand::new(self, format)))
    }
}

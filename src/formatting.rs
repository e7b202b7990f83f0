//! Output format selection for command results.
//!
//! The [`Formattable`] trait turns a command result into the string that gets
//! printed, either as human-readable text or as JSON for scripting.
use std::fmt::Display;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

/// Format of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Trait for types that can be formatted as text or JSON.
pub trait Formattable {
    fn format(&self, format: Format) -> Result<String>;
}

/// Any type that implements [`Display`] and [`Serialize`] gets both formats
/// for free: `Display` renders the text, `Serialize` renders the JSON.
impl<T> Formattable for T
where
    T: Display + Serialize,
{
    fn format(&self, format: Format) -> Result<String> {
        Ok(match format {
            Format::Text => self.to_string(),
            Format::Json => serde_json::to_string(self).context("serializing to json")?,
        })
    }
}

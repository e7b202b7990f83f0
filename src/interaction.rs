//! Terminal interaction during a network round trip.
//!
//! The only interaction this tool has is the progress spinner shown while a
//! request is in flight. It sits behind the [`SpinnerInteraction`] trait so
//! commands can be tested without drawing to a terminal.

use std::time::Duration;

use anyhow::Result;
use indicatif::ProgressBar;

#[derive(Debug, Default, Clone)]
pub struct Interaction;

impl Interaction {
    pub fn new() -> Self {
        Default::default()
    }
}

/// Stops the spinner when dropped.
///
/// Holding the handle for the duration of the request keeps the spinner on
/// screen; any exit path, including `?`, clears it.
pub struct SpinnerHandle {
    stop_spinner: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl SpinnerHandle {
    pub fn new(stop_spinner: Box<dyn FnOnce() + Send + Sync>) -> Self {
        Self {
            stop_spinner: Some(stop_spinner),
        }
    }
}

impl Drop for SpinnerHandle {
    fn drop(&mut self) {
        if let Some(stop_spinner) = self.stop_spinner.take() {
            stop_spinner();
        }
    }
}

pub trait SpinnerInteraction {
    fn start_spinner(&self, message: String) -> Result<SpinnerHandle>;
}

impl SpinnerInteraction for Interaction {
    fn start_spinner(&self, message: String) -> Result<SpinnerHandle> {
        let progress_bar = ProgressBar::new_spinner();
        progress_bar.set_message(message);
        progress_bar.enable_steady_tick(Duration::from_millis(80));

        Ok(SpinnerHandle::new(Box::new(move || {
            progress_bar.finish_and_clear();
        })))
    }
}

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Setup logging.
/// By default, it will only show logs from our crate at the info level.
///
/// The log level can be overridden by setting the `TODOIST_LOG` environment variable,
/// or forced to debug with the hidden `--debug` flag.
/// If the `TODOIST_LOG_ALL` environment variable is set, it will show logs from all crates at the specified level.
///
/// Log events go to stderr so they never mix with the rendered task listing on stdout.
pub fn setup_logging(debug: bool) {
    // Get the log level from the flag or the environment variable.
    let log_level = if debug {
        "debug".to_string()
    } else {
        std::env::var("TODOIST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    // Check if we should show logs from all crates.
    let show_all_logs = std::env::var("TODOIST_LOG_ALL").is_ok();

    // This will either be "log_level" or "todoist_cli=log_level".
    let filter = if show_all_logs {
        log_level
    } else {
        format!("todoist_cli={}", log_level)
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::new(filter))
        .init();
}

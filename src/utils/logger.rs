//! Diagnostic logging setup using tracing-subscriber

use std::io::IsTerminal;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the stderr logger for the CLI.
///
/// `RUST_LOG` wins when set. Otherwise only warnings are shown, or debug
/// events from this crate when `verbose` is on. Calling this again after a
/// subscriber is installed is a no-op.
pub fn init_cli_logger(verbose: bool) {
    let default_directive = if verbose { "hdcv=debug" } else { "hdcv=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

//! Tracing setup for the simulator binaries.
//!
//! Reports, JSON and CSV go to stdout. Diagnostics go to stderr so piping a
//! report never picks up log lines. `RUST_LOG` overrides the level chosen
//! from the command line.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter directive for a `-v` count
///
/// A plain run only reports warnings (duplicate catalog ids, missing config).
/// `-v` adds the catalog/config/day summaries, `-vv` adds per-action and
/// per-sample detail.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the stderr subscriber for a CLI run
pub fn init_cli(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Debug-level subscriber routed through the test harness
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}

//! Logging setup.
//!
//! Logs go to stderr so stdout carries only the integration results.

use tracing_subscriber::EnvFilter;

/// Maps a `-v` count onto a default filter directive.
#[must_use]
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the verbosity flag.
///
/// Idempotent: if a subscriber is already installed it is kept, and the
/// refusal is reported on stderr only when `verbosity >= 2`.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        if verbosity >= 2 {
            eprintln!("logging already initialised: {err}");
        }
    }
}

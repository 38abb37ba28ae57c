//! Diagnostic logging.
//!
//! Diagnostics go to stderr only; stdout carries command output such as
//! `tagver get`, which scripts capture.

use tracing_subscriber::EnvFilter;

/// Build an `EnvFilter` based on CLI flags and environment.
///
/// Priority: quiet flag > verbose flag > RUST_LOG env > default_level
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if quiet {
        return EnvFilter::new("error");
    }

    if verbose > 0 {
        let level = match verbose {
            1 => "debug",
            _ => "trace",
        };
        return EnvFilter::new(level);
    }

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global stderr subscriber.
///
/// A second call is a no-op, so tests and embedders may call it freely.
pub fn init(quiet: bool, verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(quiet, verbose, "warn"))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

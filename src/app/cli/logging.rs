//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "warn";

/// Install the global subscriber. Diagnostics go to stderr so stdout stays
/// reserved for status lines.
///
/// `RUST_LOG` wins when set; otherwise the level comes from `--log-level`,
/// raised by each `-v`.
pub fn init(verbose: u8, log_level: Option<&str>) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(format!("clawdeploy={}", effective_level(verbose, log_level))),
    };

    // A subscriber may already be installed when embedded in another binary.
    let _ = tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn effective_level(verbose: u8, log_level: Option<&str>) -> &str {
    match verbose {
        0 => log_level.unwrap_or(DEFAULT_LEVEL),
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

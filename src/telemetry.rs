//! Tracing initialization shared by the binaries.

use tracing_subscriber::{EnvFilter, fmt as tfmt};

/// Install the global fmt subscriber.
///
/// Honors `RUST_LOG` (default `info`). Logs go to stderr so console reports
/// printed on stdout stay clean.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}

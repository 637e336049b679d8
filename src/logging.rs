//! Tracing subscriber setup
//!
//! Logs go to stderr so that command output on stdout stays clean. The filter
//! comes from `RUST_LOG`; `TRACKER_LOG_FORMAT=json` switches to JSON lines.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable selecting the log format (`text` or `json`)
pub const LOG_FORMAT_ENV: &str = "TRACKER_LOG_FORMAT";

/// Install the global subscriber, falling back to `default_level` when
/// `RUST_LOG` is unset or invalid
pub fn init_tracing(default_level: &str) {
    let log_format = std::env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| "text".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let registry = tracing_subscriber::registry().with(filter);

    // An already-installed subscriber is left in place.
    let _ = if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
}

//! Console logging setup for the binaries
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to whoever owns `main`.

use tracing::{info, Level};

/// Map a level name to a `Level`, falling back to INFO for anything unknown
pub fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Install a stderr fmt subscriber. A second call is a no-op.
pub fn setup_console_logging(level: &str) {
    let level = parse_level(level);

    // try_init: tests and repeated setup must not panic
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_target(false)
        .with_max_level(level)
        .try_init();

    info!("console logging initialized with level: {}", level);
}

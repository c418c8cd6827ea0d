// src/utils/logging.rs
//! Logging configuration
//!
//! Uses `env_logger` under the hood with a compact custom format.

use env_logger::{Builder, Target};
use log::{Level, LevelFilter};
use std::env;
use std::fmt;

/// Initializes the logging subsystem
///
/// # Configuration
/// - Logs to stderr
/// - Default log level: Info, or Debug when `verbose` is set
/// - `RUST_LOG` takes precedence over both when present
pub fn init_logging(verbose: bool) {
    let mut builder = common_log_config();

    if env::var("RUST_LOG").is_ok() {
        builder.parse_env("RUST_LOG");
    } else {
        builder.filter_level(default_level(verbose));
    }

    // A second init (e.g. from tests) is harmless, keep the first logger.
    let _ = builder.try_init();
}

fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Creates a base logger builder with the shared format
///
/// Lines look like `2026-10-19T08:00:00Z INFO  report::manager: message`.
/// Logs go to stderr so `credits` output on stdout stays pipeable.
fn common_log_config() -> Builder {
    let mut builder = Builder::new();

    builder
        .format(|buf, record| {
            use std::io::Write;
            let ts = buf.timestamp_seconds();
            writeln!(
                buf,
                "{} {}",
                ts,
                log_line(record.level(), record.target(), record.args())
            )
        })
        .target(Target::Stderr);

    builder
}

/// Level, crate-relative target and message of one log line
fn log_line(level: Level, target: &str, message: &fmt::Arguments<'_>) -> String {
    let target = target.strip_prefix(CRATE_PREFIX).unwrap_or(target);
    format!("{:<5} {}: {}", level, target, message)
}

const CRATE_PREFIX: &str = concat!(env!("CARGO_CRATE_NAME"), "::");

#![cfg(feature = "std")]
//! Diagnostics on stderr, kept off the game screen on stdout.

use std::io::{self, Write};
use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level, e.g. `GRIDRUN_LOG=debug`.
pub const LOG_ENV: &str = "GRIDRUN_LOG";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut err = io::stderr().lock();
        let _ = writeln!(err, "[{}] {}: {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Level for a raw `GRIDRUN_LOG` value; unset or unparsable means `warn`.
pub fn level_from_env(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger. Calling it again is harmless.
pub fn init_logging() {
    let level = level_from_env(std::env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
    log::debug!("logging at {}", level);
}

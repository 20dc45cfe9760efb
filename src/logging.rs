//! Stderr logger for the game binaries.
//!
//! Stdout carries the boards and prompts, so diagnostics go to stderr as
//! `seabattle[LEVEL] module: message`, with the crate prefix stripped from
//! the module path.

use std::env;
use std::fmt;

use log::{Level, LevelFilter, Metadata, Record};

/// Environment variable holding the level filter, e.g. `SEABATTLE_LOG=debug`.
pub const LOG_ENV: &str = "SEABATTLE_LOG";

const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{}",
                format_line(record.level(), record.target(), record.args())
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Render one log line.
pub(crate) fn format_line(level: Level, target: &str, message: &fmt::Arguments<'_>) -> String {
    let module = if target == CRATE_TARGET {
        ""
    } else {
        target
            .strip_prefix(CRATE_TARGET)
            .and_then(|rest| rest.strip_prefix("::"))
            .unwrap_or(target)
    };
    if module.is_empty() {
        format!("{}[{}] {}", CRATE_TARGET, level, message)
    } else {
        format!("{}[{}] {}: {}", CRATE_TARGET, level, module, message)
    }
}

/// Level named by `value`, falling back to `warn` so the board output
/// stays readable.
fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger with the level from [`LOG_ENV`].
///
/// Calling it twice keeps the first logger.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

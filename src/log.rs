//! Logging setup
//!
//! The library logs through the `log` facade; the binary installs an
//! `env_logger` backend writing to stderr.

use log::LevelFilter;

/// Map `-v` occurrences to a level filter
///
/// 0 → Warn, 1 → Info, 2 → Debug, 3+ → Trace.
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize logging for the command-line tool
///
/// Respects `verbosity`, unless `RUST_LOG` is set, in which case its filters win.
/// Safe to call more than once; later calls are ignored.
pub fn init_logger(verbosity: u8) {
    use std::env;

    let level = level_for(verbosity);

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}

#![deny(missing_docs)]
//! Logging front door for the campaign crates.
//!
//! Library code logs through `site_info!` and friends, which forward to the
//! `log` facade. Binaries install a `simplelog` backend; tests call
//! [`initialize_for_tests`].

use log::LevelFilter;

/// Per-item detail (individual rows, parse steps).
#[macro_export]
macro_rules! site_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Lifecycle events: catalog loaded, cache read, input closed.
#[macro_export]
macro_rules! site_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Criteria changes and recovered fallbacks.
#[macro_export]
macro_rules! site_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Best-effort operations that failed and were skipped.
#[macro_export]
macro_rules! site_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Failures the user should see in the log file.
#[macro_export]
macro_rules! site_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// `Debug` for debug builds, `Info` otherwise.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs a stderr logger for test binaries. Later calls are ignored.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    // `init` fails once a logger exists; the first one wins.
    let _ = TermLogger::init(
        default_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Never,
    );
}

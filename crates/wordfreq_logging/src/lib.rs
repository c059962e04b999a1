#![deny(missing_docs)]
//! Shared logging utilities for the wordfreq workspace.
//!
//! Library code logs through the `wf_*` macros so the backend can be swapped
//! in one place. The binary installs the real logger; tests call
//! [`initialize_for_tests`].

/// Re-exported so the macros resolve `log` from any calling crate.
#[doc(hidden)]
pub use log as __log;

/// `log::trace!` routed through this crate.
#[macro_export]
macro_rules! wf_trace {
    ($($arg:tt)*) => {{
        $crate::__log::trace!($($arg)*);
    }};
}

/// `log::debug!` routed through this crate.
#[macro_export]
macro_rules! wf_debug {
    ($($arg:tt)*) => {{
        $crate::__log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! wf_info {
    ($($arg:tt)*) => {{
        $crate::__log::info!($($arg)*);
    }};
}

/// `log::warn!` routed through this crate.
#[macro_export]
macro_rules! wf_warn {
    ($($arg:tt)*) => {{
        $crate::__log::warn!($($arg)*);
    }};
}

/// `log::error!` routed through this crate.
#[macro_export]
macro_rules! wf_error {
    ($($arg:tt)*) => {{
        $crate::__log::error!($($arg)*);
    }};
}

/// Level used when nothing more specific is requested: chatty in debug
/// builds, quiet in release builds.
pub fn default_level() -> log::LevelFilter {
    if cfg!(debug_assertions) {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    }
}

/// Send test log output to stderr, one level more verbose than the binary.
///
/// Safe to call from every test; only the first call installs a logger.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Later calls find the logger already set.
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Never);
}

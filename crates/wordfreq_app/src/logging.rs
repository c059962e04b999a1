//! Logger setup for the wordfreq binary.
//!
//! Stdout carries the report, so every log record goes to stderr.

use log::LevelFilter;
use simplelog::{ColorChoice, Config, ConfigBuilder, TermLogger, TerminalMode};

pub fn initialize(level: LevelFilter) {
    // A second init only happens in tests; keep the first logger.
    let _ = TermLogger::init(level, build_config(), TerminalMode::Stderr, ColorChoice::Auto);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

//! Logging utilities for the harness binary

/// Initialize the logger with default settings for terminal use.
/// Fixed INFO level; the harness consumes no environment variables, so the
/// usual RUST_LOG override is deliberately not read.
pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .init();
}

//! Utility modules for the harness

pub mod logging;

pub use logging::init_logger;

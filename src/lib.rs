//! Deterministic waveform regions for exercising a debugger's array plotting

pub mod buffer;
pub mod params;
pub mod scenario;
pub mod utils;

// Waveform generation
pub mod gen;

// Platform abstraction layer (suspension point)
pub mod platform;

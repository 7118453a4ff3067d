/// Platform abstraction for the suspension point
/// This module provides a unified interface for handing control to an
/// external inspector (debugger) across different platforms.

/// Trait for suspension-point implementations.
pub trait Suspend {
    /// Halt here so an attached inspector can look around.
    ///
    /// Must return normally when no inspector is attached; never terminates
    /// or corrupts the process.
    fn suspend(&self);
}

/// Stub suspension point: does nothing. Used in tests and on platforms
/// without a trap mechanism.
pub struct NoTrap;

impl Suspend for NoTrap {
    fn suspend(&self) {}
}

// Platform-specific implementations
#[cfg(all(feature = "trap", unix))]
pub mod sigtrap;

// Re-export platform-specific types
#[cfg(all(feature = "trap", unix))]
pub use self::sigtrap::SigTrap;

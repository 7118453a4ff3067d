use nix::sys::signal::{raise, Signal};

use super::Suspend;

/// Breakpoint trap backed by SIGTRAP.
///
/// Only raises the signal when a tracer is actually attached; an untraced
/// SIGTRAP would terminate the process instead of pausing it.
pub struct SigTrap;

impl SigTrap {
    /// Reads `TracerPid` from /proc/self/status. Nonzero means something has
    /// attached to us via ptrace.
    #[cfg(target_os = "linux")]
    fn tracer_attached() -> bool {
        let status = match std::fs::read_to_string("/proc/self/status") {
            Ok(status) => status,
            Err(_) => return false,
        };

        status
            .lines()
            .find_map(|line| line.strip_prefix("TracerPid:"))
            .and_then(|pid| pid.trim().parse::<u32>().ok())
            .map(|pid| pid != 0)
            .unwrap_or(false)
    }

    // No portable attachment probe outside Linux; assume untraced.
    #[cfg(not(target_os = "linux"))]
    fn tracer_attached() -> bool {
        false
    }
}

impl Suspend for SigTrap {
    fn suspend(&self) {
        if !Self::tracer_attached() {
            log::warn!("no debugger attached, skipping breakpoint");
            return;
        }

        // SIGTRAP is always a valid signal number, so raise cannot fail here.
        let _ = raise(Signal::SIGTRAP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suspend_is_a_no_op_without_a_tracer() {
        // Test runners are not ptrace-attached, so this must fall through.
        SigTrap.suspend();
    }
}

/* Harness binary: synthesizes waveforms into a few differently-shaped
regions, then stops on a breakpoint so a debugger's plot command has
something to chew on. */

// Entry point with the real SIGTRAP suspension point

#[cfg(all(feature = "trap", unix))]
fn main() -> anyhow::Result<()> {
    wavetrap::utils::init_logger();
    wavetrap::scenario::run(&wavetrap::platform::SigTrap)
}

#[cfg(not(all(feature = "trap", unix)))]
fn main() -> anyhow::Result<()> {
    wavetrap::utils::init_logger();
    wavetrap::scenario::run(&wavetrap::platform::NoTrap)
}

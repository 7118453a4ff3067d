//! The fixed inspection scenario: four differently-shaped regions, one
//! shared sequencer, one suspension point.

use crate::buffer::SampleBuffer;
use crate::gen;
use crate::params::ParamSequencer;
use crate::platform::Suspend;

/// Element count of both fixed-extent regions
pub const STACK_LEN: usize = 1024;
/// Element count of the heap allocation
pub const HEAP_LEN: usize = 1024;
/// Where the aliased sub-view starts inside the heap allocation
pub const VIEW_OFFSET: usize = 256;

/// Run the scenario: fill the regions, print operator guidance, suspend for
/// the inspector, release the heap buffer. Strictly linear, no branching.
pub fn run(trap: &dyn Suspend) -> anyhow::Result<()> {
    let mut sequencer = ParamSequencer::new();

    // Fixed-extent locals of two element types.
    let mut counts = [0i32; STACK_LEN];
    let mut samples = [0.0f64; STACK_LEN];

    // Heap allocation, plus an aliased window over its tail.
    let mut heap = SampleBuffer::new(HEAP_LEN);

    gen::fill(&mut counts, &mut sequencer);
    gen::fill(&mut samples, &mut sequencer);
    gen::fill(heap.as_mut_slice(), &mut sequencer);
    {
        let mut tail = heap.view_mut(VIEW_OFFSET);
        gen::fill(tail.as_mut_slice(), &mut sequencer);
    }
    log::debug!(
        "regions ready: counts[{STACK_LEN}] i32, samples[{STACK_LEN}] f64, \
         heap[{HEAP_LEN}] f64 with tail view at {VIEW_OFFSET}"
    );

    println!("And...breakpoint!");
    println!();
    println!("Now use the plot command to inspect data in program variables.");
    println!("For example:");
    println!("  plot counts");
    println!("  plot counts samples@512 counts@800:0:-1");

    trap.suspend();

    drop(heap);

    Ok(())
}

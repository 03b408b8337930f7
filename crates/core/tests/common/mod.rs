//! Shared test fixtures.
//!
//! Canonical reference sequences and small helpers used across the unit
//! tests. The Belady sequence is the textbook input on which the four
//! policies diverge: FIFO faults 9 times at 3 frames, LRU 10, MIN 7.

use paging_core::PageSequence;
use paging_core::SimulationResult;
use paging_core::policy::ReplacementPolicy;
use paging_core::sim::simulator;

/// Builds a validated sequence from a slice of page indices.
pub fn seq(requests: &[u32]) -> PageSequence {
    PageSequence::new(requests.to_vec()).unwrap()
}

/// The classic Belady's-anomaly sequence `1 2 3 4 1 2 5 1 2 3 4 5`.
pub fn belady_sequence() -> PageSequence {
    seq(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5])
}

/// Runs `policy` over `sequence`, panicking on driver errors.
pub fn run(
    policy: &mut dyn ReplacementPolicy,
    sequence: &PageSequence,
    frames: usize,
) -> SimulationResult {
    simulator::run(policy, sequence, frames).unwrap()
}

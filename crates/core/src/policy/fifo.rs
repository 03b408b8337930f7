//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! Evicts the page that has been resident the longest, regardless of how
//! recently it was accessed. The admission queue is a total order, so no
//! tie-break is needed; a page re-admitted after eviction counts as newly
//! admitted and moves to the tail.
//!
//! FIFO is the one policy here that is not a stack algorithm: more frames
//! can produce *more* faults on some inputs (Belady's anomaly).

use std::collections::{BTreeSet, HashSet, VecDeque};

use super::{Access, ReplacementPolicy};
use crate::sequence::PageSequence;

/// FIFO policy state.
#[derive(Debug, Default)]
pub struct FifoPolicy {
    /// Resident pages in admission order; head is the next victim.
    queue: VecDeque<u32>,
    /// Resident pages, for O(1) membership tests.
    resident: HashSet<u32>,
    /// Incrementally tracked swap set (sorted for reporting).
    swap: BTreeSet<u32>,
    faults: u64,
    frames: usize,
}

impl FifoPolicy {
    /// Creates a new FIFO policy instance.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn reset(&mut self, frames: usize) {
        self.queue.clear();
        self.resident.clear();
        self.swap.clear();
        self.faults = 0;
        self.frames = frames;
    }

    fn reference(&mut self, page: u32, _position: usize, _sequence: &PageSequence) -> Access {
        if self.resident.contains(&page) {
            return Access::Hit;
        }

        self.faults += 1;
        // The page may be returning from swap.
        let _ = self.swap.remove(&page);

        if self.resident.len() >= self.frames {
            if let Some(victim) = self.queue.pop_front() {
                let _ = self.resident.remove(&victim);
                let _ = self.swap.insert(victim);
            }
        }
        let _ = self.resident.insert(page);
        self.queue.push_back(page);
        Access::Fault
    }

    fn fault_count(&self) -> u64 {
        self.faults
    }

    fn resident_pages(&self) -> Vec<u32> {
        self.queue.iter().copied().collect()
    }

    fn swap_state(&self, _sequence: &PageSequence) -> BTreeSet<u32> {
        self.swap.clone()
    }
}

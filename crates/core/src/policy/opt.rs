//! Optimal (Belady/MIN) Replacement Policy.
//!
//! Evicts the resident page whose next use lies furthest in the future, or
//! that never recurs at all. Decisions use look-ahead into the remaining
//! sequence rather than access history, so the frame table carries no
//! recency metadata.
//!
//! # Tie-break
//!
//! When several residents share the maximal next-use distance (including
//! multiple pages that never recur, all at `usize::MAX`), the victim is the
//! one encountered *last* while scanning the frame table (`>=` comparison in
//! the scan, not strict `>`). Classical Belady leaves ties unspecified; this
//! rule is kept as-is for reproducible output.
//!
//! # Cost
//!
//! Each next-use lookup is a forward linear scan from the position after the
//! current reference, so a fault on a full table costs time proportional to
//! frames × remaining sequence length. Fine for classroom-scale sequences.

use std::collections::BTreeSet;

use super::{Access, ReplacementPolicy, derived_swap};
use crate::frame::FrameTable;
use crate::sequence::PageSequence;

/// OPT policy state.
#[derive(Debug)]
pub struct OptPolicy {
    table: FrameTable,
    faults: u64,
}

impl OptPolicy {
    /// Creates a new OPT policy instance.
    pub fn new() -> Self {
        Self {
            table: FrameTable::new(0),
            faults: 0,
        }
    }

    /// Returns the resident page that is used furthest in the future after
    /// `position`, applying the last-scanned-wins tie-break.
    fn optimal_victim(&self, sequence: &PageSequence, position: usize) -> Option<u32> {
        let mut victim = None;
        let mut farthest = 0usize;
        for entry in self.table.entries() {
            let next = next_use(sequence, entry.page, position + 1);
            if victim.is_none() || next >= farthest {
                farthest = next;
                victim = Some(entry.page);
            }
        }
        victim
    }
}

/// Position of the next reference to `page` at or after `from`, or
/// `usize::MAX` if the page never recurs.
fn next_use(sequence: &PageSequence, page: u32, from: usize) -> usize {
    if from >= sequence.len() {
        return usize::MAX;
    }
    sequence.requests()[from..]
        .iter()
        .position(|&q| q == page)
        .map_or(usize::MAX, |offset| from + offset)
}

impl Default for OptPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplacementPolicy for OptPolicy {
    fn name(&self) -> &'static str {
        "MIN"
    }

    fn reset(&mut self, frames: usize) {
        self.table = FrameTable::new(frames);
        self.faults = 0;
    }

    fn reference(&mut self, page: u32, position: usize, sequence: &PageSequence) -> Access {
        if self.table.is_resident(page) {
            return Access::Hit;
        }

        self.faults += 1;
        if self.table.is_full() {
            if let Some(victim) = self.optimal_victim(sequence, position) {
                self.table.evict_and_admit(victim, page, position);
            }
        } else {
            self.table.admit(page, position);
        }
        Access::Fault
    }

    fn fault_count(&self) -> u64 {
        self.faults
    }

    fn resident_pages(&self) -> Vec<u32> {
        self.table.resident_pages()
    }

    fn swap_state(&self, sequence: &PageSequence) -> BTreeSet<u32> {
        derived_swap(sequence, &self.table.resident_pages())
    }
}

//! Least Recently Used (LRU) Replacement Policy.
//!
//! Evicts the resident page whose last access lies furthest in the past.
//! Every reference — hit or fault — refreshes the page's last-access rank;
//! recency must reflect all accesses, not just faults.
//!
//! Victim ties (equal last-access ranks cannot occur within one run, but the
//! scan is written defensively) go to the entry encountered first in table
//! iteration order, which is deterministic because eviction replaces slots
//! in place.

use std::collections::BTreeSet;

use super::{Access, ReplacementPolicy, derived_swap};
use crate::frame::FrameTable;
use crate::sequence::PageSequence;

/// LRU policy state.
#[derive(Debug)]
pub struct LruPolicy {
    table: FrameTable,
    faults: u64,
}

impl LruPolicy {
    /// Creates a new LRU policy instance.
    pub fn new() -> Self {
        Self {
            table: FrameTable::new(0),
            faults: 0,
        }
    }

    /// Returns the resident page with the minimum last-access rank.
    ///
    /// First-encountered entry wins on equal ranks (strict `<` in the scan).
    fn lru_victim(&self) -> Option<u32> {
        let mut victim = None;
        let mut oldest = usize::MAX;
        for entry in self.table.entries() {
            if entry.last_access_rank < oldest {
                oldest = entry.last_access_rank;
                victim = Some(entry.page);
            }
        }
        victim
    }
}

impl Default for LruPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplacementPolicy for LruPolicy {
    fn name(&self) -> &'static str {
        "LRU"
    }

    fn reset(&mut self, frames: usize) {
        self.table = FrameTable::new(frames);
        self.faults = 0;
    }

    fn reference(&mut self, page: u32, position: usize, _sequence: &PageSequence) -> Access {
        if self.table.is_resident(page) {
            self.table.touch(page, position);
            return Access::Hit;
        }

        self.faults += 1;
        if self.table.is_full() {
            if let Some(victim) = self.lru_victim() {
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

//! Random (RAND) Replacement Policy.
//!
//! Evicts a victim chosen uniformly at random from the resident set. Uses a
//! simple xorshift64 generator rather than a full RNG; victim selection
//! indexes a sorted snapshot of the resident set so that a given seed yields
//! the same eviction order on every run.
//!
//! By default the generator is seeded from the system clock, so results are
//! not reproducible across runs. Tests that need pinned behavior inject a
//! seed with [`RandPolicy::with_seed`].

use std::collections::{BTreeSet, HashSet};
use std::time::{SystemTime, UNIX_EPOCH};

use super::{Access, ReplacementPolicy};
use crate::sequence::PageSequence;

/// Fallback seed when the system clock is unavailable or reads as zero.
const FALLBACK_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// RAND policy state.
#[derive(Debug)]
pub struct RandPolicy {
    /// Resident pages; no ordering metadata is needed.
    resident: HashSet<u32>,
    /// Incrementally tracked swap set (sorted for reporting).
    swap: BTreeSet<u32>,
    faults: u64,
    frames: usize,
    /// Seed to restore on reset; `None` means reseed from the clock.
    seed: Option<u64>,
    /// Current xorshift64 state. Never zero.
    state: u64,
}

impl RandPolicy {
    /// Creates a RAND policy seeded from the system clock.
    pub fn new() -> Self {
        Self {
            resident: HashSet::new(),
            swap: BTreeSet::new(),
            faults: 0,
            frames: 0,
            seed: None,
            state: entropy_seed(),
        }
    }

    /// Creates a RAND policy with an injected seed.
    ///
    /// The seed is restored on every reset, making repeated runs over the
    /// same sequence reproducible.
    pub fn with_seed(seed: u64) -> Self {
        let state = if seed == 0 { FALLBACK_SEED } else { seed };
        Self {
            resident: HashSet::new(),
            swap: BTreeSet::new(),
            faults: 0,
            frames: 0,
            seed: Some(state),
            state,
        }
    }

    /// Advances the xorshift64 state and returns the next value.
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Picks a victim uniformly from the resident set.
    fn random_victim(&mut self) -> Option<u32> {
        let pages: Vec<u32> = {
            let mut pages: Vec<u32> = self.resident.iter().copied().collect();
            pages.sort_unstable();
            pages
        };
        if pages.is_empty() {
            return None;
        }
        let index = (self.next_u64() as usize) % pages.len();
        Some(pages[index])
    }
}

/// Draws a seed from the system clock, falling back to a fixed constant.
fn entropy_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64);
    if nanos == 0 { FALLBACK_SEED } else { nanos }
}

impl Default for RandPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplacementPolicy for RandPolicy {
    fn name(&self) -> &'static str {
        "RAND"
    }

    fn reset(&mut self, frames: usize) {
        self.resident.clear();
        self.swap.clear();
        self.faults = 0;
        self.frames = frames;
        self.state = self.seed.unwrap_or_else(entropy_seed);
    }

    fn reference(&mut self, page: u32, _position: usize, _sequence: &PageSequence) -> Access {
        if self.resident.contains(&page) {
            return Access::Hit;
        }

        self.faults += 1;
        // The page may be returning from swap.
        let _ = self.swap.remove(&page);

        if self.resident.len() >= self.frames {
            if let Some(victim) = self.random_victim() {
                let _ = self.resident.remove(&victim);
                let _ = self.swap.insert(victim);
            }
        }
        let _ = self.resident.insert(page);
        Access::Fault
    }

    fn fault_count(&self) -> u64 {
        self.faults
    }

    fn resident_pages(&self) -> Vec<u32> {
        let mut pages: Vec<u32> = self.resident.iter().copied().collect();
        pages.sort_unstable();
        pages
    }

    fn swap_state(&self, _sequence: &PageSequence) -> BTreeSet<u32> {
        self.swap.clone()
    }
}

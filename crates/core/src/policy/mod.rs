//! Page Replacement Policies.
//!
//! Implements the four classic algorithms for selecting victim pages when a
//! fault occurs and no frame is free.
//!
//! # Policies
//!
//! - `Fifo`: First-In, First-Out.
//! - `Lru`: Least Recently Used.
//! - `Opt`: Optimal (Belady/MIN), look-ahead based.
//! - `Rand`: Random selection.
//!
//! The policies share one capability contract ([`ReplacementPolicy`]) but
//! have unrelated internal state shapes: FIFO keeps an admission queue, LRU
//! and OPT keep a ranked frame table, RAND keeps a plain resident set plus a
//! pseudo-random source.

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Recently Used replacement policy.
pub mod lru;

/// Optimal (Belady/MIN) replacement policy.
pub mod opt;

/// Random replacement policy.
pub mod rand;

use std::collections::BTreeSet;

use crate::sequence::PageSequence;

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;
pub use opt::OptPolicy;
pub use rand::RandPolicy;

/// Outcome of a single page reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The page was already resident; no state changed beyond recency.
    Hit,
    /// The page was not resident; the fault counter advanced and a frame was
    /// filled (evicting a victim if the table was full).
    Fault,
}

/// Trait for page replacement policies.
///
/// A policy owns its per-run mutable state exclusively; [`reset`] is called
/// at the start of every simulation and no state survives across sequences.
///
/// [`reset`]: ReplacementPolicy::reset
pub trait ReplacementPolicy: Send + Sync {
    /// Returns the policy's report token: `"FIFO"`, `"LRU"`, `"MIN"`, or
    /// `"RAND"`.
    fn name(&self) -> &'static str;

    /// Clears all per-run state and fixes the frame capacity for the run.
    fn reset(&mut self, frames: usize);

    /// Processes the reference to `page` at sequence position `position`.
    ///
    /// `sequence` is the full reference sequence; only the OPT policy reads
    /// it (for its look-ahead victim search).
    fn reference(&mut self, page: u32, position: usize, sequence: &PageSequence) -> Access;

    /// Number of page faults since the last reset.
    fn fault_count(&self) -> u64;

    /// Pages currently resident, in the policy's internal table order.
    fn resident_pages(&self) -> Vec<u32>;

    /// Final swap state: pages referenced during the run but not resident at
    /// its end.
    ///
    /// FIFO and RAND track this incrementally; LRU and OPT derive it from
    /// the final resident set. Both paths must yield the same set.
    fn swap_state(&self, sequence: &PageSequence) -> BTreeSet<u32>;
}

/// Returns one instance of every policy, in the fixed report order
/// FIFO, RAND, LRU, MIN.
pub fn all() -> Vec<Box<dyn ReplacementPolicy>> {
    vec![
        Box::new(FifoPolicy::new()),
        Box::new(RandPolicy::new()),
        Box::new(LruPolicy::new()),
        Box::new(OptPolicy::new()),
    ]
}

/// Derives the swap state from the final resident set: every page referenced
/// anywhere in the sequence that did not end the run in a frame.
pub(crate) fn derived_swap(sequence: &PageSequence, residents: &[u32]) -> BTreeSet<u32> {
    let mut swap = sequence.distinct_pages();
    for page in residents {
        let _ = swap.remove(page);
    }
    swap
}

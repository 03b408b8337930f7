//! Physical frame table.
//!
//! Tracks which logical pages currently occupy physical frames, together with
//! the per-entry metadata the replacement policies need for victim selection:
//! the rank (sequence position) at which a page was loaded, and the rank of
//! its most recent access.
//!
//! Ranks are simulation-local logical timestamps, not wall-clock time.

/// A single occupied frame: the resident page plus its ordering metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameEntry {
    /// Logical page index occupying the frame.
    pub page: u32,
    /// Sequence position at which the page was brought in. Assigned once.
    pub load_rank: usize,
    /// Sequence position of the most recent access, including hits.
    pub last_access_rank: usize,
}

impl FrameEntry {
    /// Creates an entry for a page brought in at `rank`.
    fn new(page: u32, rank: usize) -> Self {
        Self {
            page,
            load_rank: rank,
            last_access_rank: rank,
        }
    }
}

/// A fixed-capacity table of occupied frames.
///
/// Invariants: at most `capacity` entries, and a page index appears in at
/// most one entry. Eviction replaces the victim's slot in place, so table
/// iteration order is stable across replacements — the LRU and OPT tie-break
/// rules depend on this.
#[derive(Debug, Clone)]
pub struct FrameTable {
    entries: Vec<FrameEntry>,
    capacity: usize,
}

impl FrameTable {
    /// Creates an empty table with room for `capacity` frames.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns true if `page` currently occupies a frame.
    pub fn is_resident(&self, page: u32) -> bool {
        self.entries.iter().any(|entry| entry.page == page)
    }

    /// Number of occupied frames.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no frame is occupied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true once every frame is occupied.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Brings `page` into a free frame at sequence position `rank`.
    ///
    /// Callers must check [`FrameTable::is_full`] first; admitting into a
    /// full table is a programming error, not a user-facing condition.
    pub fn admit(&mut self, page: u32, rank: usize) {
        debug_assert!(self.entries.len() < self.capacity, "frame table overflow");
        debug_assert!(!self.is_resident(page), "page already resident");
        self.entries.push(FrameEntry::new(page, rank));
    }

    /// Refreshes the last-access rank of a resident page.
    ///
    /// The load rank is untouched. No-op if `page` is not resident.
    pub fn touch(&mut self, page: u32, rank: usize) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.page == page) {
            entry.last_access_rank = rank;
        }
    }

    /// Evicts `victim` and admits `new_page` in its slot, both ranks set to
    /// `rank`. No-op if `victim` is not resident.
    pub fn evict_and_admit(&mut self, victim: u32, new_page: u32, rank: usize) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.page == victim) {
            *entry = FrameEntry::new(new_page, rank);
        }
    }

    /// Iterates over the occupied frames in table order.
    pub fn entries(&self) -> impl Iterator<Item = &FrameEntry> {
        self.entries.iter()
    }

    /// Returns the resident page indices in table order.
    pub fn resident_pages(&self) -> Vec<u32> {
        self.entries.iter().map(|entry| entry.page).collect()
    }
}

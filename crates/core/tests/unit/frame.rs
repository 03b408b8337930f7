//! # Frame Table Tests
//!
//! Verifies residency tracking, rank bookkeeping, and the in-place eviction
//! contract that the LRU/OPT tie-break rules depend on.

use paging_core::frame::FrameTable;

/// Admitted pages are resident; others are not.
#[test]
fn admit_and_residency() {
    let mut table = FrameTable::new(2);
    table.admit(7, 0);
    assert!(table.is_resident(7));
    assert!(!table.is_resident(8));
    assert_eq!(table.len(), 1);
    assert!(!table.is_full());
}

/// Admission sets both ranks to the admission position.
#[test]
fn admit_sets_both_ranks() {
    let mut table = FrameTable::new(1);
    table.admit(3, 5);
    let entry = table.entries().next().unwrap();
    assert_eq!(entry.load_rank, 5);
    assert_eq!(entry.last_access_rank, 5);
}

/// Touch refreshes the last-access rank and leaves the load rank alone.
#[test]
fn touch_updates_only_last_access() {
    let mut table = FrameTable::new(1);
    table.admit(3, 0);
    table.touch(3, 9);
    let entry = table.entries().next().unwrap();
    assert_eq!(entry.load_rank, 0);
    assert_eq!(entry.last_access_rank, 9);
}

/// The table reports full exactly at capacity.
#[test]
fn full_at_capacity() {
    let mut table = FrameTable::new(2);
    table.admit(1, 0);
    table.admit(2, 1);
    assert!(table.is_full());
    assert_eq!(table.len(), 2);
}

/// Eviction replaces the victim's slot in place, keeping the other entries'
/// positions stable.
#[test]
fn evict_and_admit_replaces_in_place() {
    let mut table = FrameTable::new(3);
    table.admit(1, 0);
    table.admit(2, 1);
    table.admit(3, 2);

    table.evict_and_admit(2, 9, 3);

    assert!(!table.is_resident(2));
    assert!(table.is_resident(9));
    assert_eq!(table.resident_pages(), vec![1, 9, 3]);

    let ranks: Vec<(u32, usize, usize)> = table
        .entries()
        .map(|e| (e.page, e.load_rank, e.last_access_rank))
        .collect();
    assert_eq!(ranks[1], (9, 3, 3));
}

/// Evicting a non-resident page is a no-op.
#[test]
fn evicting_absent_page_is_noop() {
    let mut table = FrameTable::new(2);
    table.admit(1, 0);
    table.evict_and_admit(5, 9, 1);
    assert_eq!(table.resident_pages(), vec![1]);
}

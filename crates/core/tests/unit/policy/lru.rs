//! # LRU Policy Tests
//!
//! Textbook scenario plus the recency rule that distinguishes LRU from
//! FIFO: hits refresh a page's rank, so victim selection reflects all
//! accesses rather than admission order.

use std::collections::BTreeSet;

use paging_core::policy::{Access, LruPolicy, ReplacementPolicy};

use crate::common::{belady_sequence, run, seq};

/// The Belady sequence at 3 frames faults 10 times under LRU.
#[test]
fn belady_sequence_three_frames() {
    let result = run(&mut LruPolicy::new(), &belady_sequence(), 3);
    assert_eq!(result.page_faults, 10);
    let swap: BTreeSet<u32> = [1, 2].into_iter().collect();
    assert_eq!(result.swap_state, swap);
}

/// A hit must refresh recency: after `1 2 3 1`, page 2 (not page 1) is the
/// least recently used and gets evicted by page 4.
#[test]
fn hit_refreshes_recency() {
    let mut policy = LruPolicy::new();
    let result = run(&mut policy, &seq(&[1, 2, 3, 1, 4]), 3);
    assert_eq!(result.page_faults, 4);
    assert!(!policy.resident_pages().contains(&2));
    let swap: Vec<u32> = result.swap_state.into_iter().collect();
    assert_eq!(swap, vec![2]);
}

/// Eviction fills the victim's slot in place, so table order stays stable.
#[test]
fn eviction_replaces_victim_slot() {
    let mut policy = LruPolicy::new();
    let _ = run(&mut policy, &seq(&[1, 2, 3, 1, 4]), 3);
    // 4 replaces 2 in slot 1.
    assert_eq!(policy.resident_pages(), vec![1, 4, 3]);
}

/// A hit never increments the fault counter or changes membership.
#[test]
fn hit_changes_only_rank() {
    let sequence = seq(&[1, 2, 1]);
    let mut policy = LruPolicy::new();
    policy.reset(2);
    assert_eq!(policy.reference(1, 0, &sequence), Access::Fault);
    assert_eq!(policy.reference(2, 1, &sequence), Access::Fault);
    assert_eq!(policy.reference(1, 2, &sequence), Access::Hit);
    assert_eq!(policy.fault_count(), 2);
    assert_eq!(policy.resident_pages(), vec![1, 2]);
}

/// Swap state is derived from the final resident set.
#[test]
fn swap_is_distinct_minus_resident() {
    let sequence = seq(&[1, 2, 3, 4, 5]);
    let mut policy = LruPolicy::new();
    let result = run(&mut policy, &sequence, 2);
    // 4 and 5 end resident; 1, 2, 3 were pushed out.
    let swap: BTreeSet<u32> = [1, 2, 3].into_iter().collect();
    assert_eq!(result.swap_state, swap);
    assert_eq!(result.page_faults, 5);
}

//! Simulation results.
//!
//! A [`SimulationResult`] is the immutable record of one (policy, sequence)
//! run: the policy's report token, an elapsed-time instrumentation field,
//! the fault count, and the final swap state in ascending order.

use std::collections::BTreeSet;

use serde::Serialize;

/// Immutable outcome of a single simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationResult {
    /// Policy report token: `"FIFO"`, `"LRU"`, `"MIN"`, or `"RAND"`.
    pub policy: &'static str,
    /// Wall-clock run time, rounded to whole seconds.
    ///
    /// Instrumentation only; never a correctness-relevant value, and tests
    /// must not assert on it.
    pub elapsed_seconds: u64,
    /// Number of page faults over the full sequence.
    pub page_faults: u64,
    /// Pages referenced during the run but not resident at its end, sorted
    /// ascending.
    pub swap_state: BTreeSet<u32>,
}

impl SimulationResult {
    /// Renders the swap state as space-separated ascending indices, or the
    /// literal token `"0"` when the swap set is empty.
    pub fn swap_state_formatted(&self) -> String {
        if self.swap_state.is_empty() {
            return "0".to_owned();
        }
        let mut out = String::new();
        for page in &self.swap_state {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&page.to_string());
        }
        out
    }
}

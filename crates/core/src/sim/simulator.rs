//! Simulation driver.
//!
//! Drives one replacement policy across one reference sequence: resets the
//! policy, feeds references in order, counts wall-clock time, and packages
//! the fault count and final swap state into a [`SimulationResult`].
//!
//! Runs are self-contained: the policy's mutable state is owned exclusively
//! for the duration of the call and no state survives across sequences, so
//! callers may run independent simulations concurrently with one policy
//! instance per task.

use std::time::Instant;

use tracing::debug;

use crate::common::SimulatorError;
use crate::policy::{self, ReplacementPolicy};
use crate::result::SimulationResult;
use crate::sequence::PageSequence;

/// Runs `policy` over `sequence` with `frames` physical frames.
///
/// The sequence is assumed to be pre-validated; an out-of-range page index
/// is a caller contract violation and is not detected here.
///
/// # Errors
///
/// Returns [`SimulatorError::InvalidConfiguration`] if `frames` is zero —
/// victim selection is undefined without at least one frame, so the driver
/// fails fast instead of looping.
pub fn run(
    policy: &mut dyn ReplacementPolicy,
    sequence: &PageSequence,
    frames: usize,
) -> Result<SimulationResult, SimulatorError> {
    if frames == 0 {
        return Err(SimulatorError::InvalidConfiguration(
            "number of frames must be positive".into(),
        ));
    }

    let start = Instant::now();
    policy.reset(frames);
    for (position, page) in sequence.iter().enumerate() {
        let _ = policy.reference(page, position, sequence);
    }
    let swap_state = policy.swap_state(sequence);
    let elapsed_seconds = start.elapsed().as_secs_f64().round() as u64;

    debug!(
        policy = policy.name(),
        frames,
        references = sequence.len(),
        faults = policy.fault_count(),
        "simulation complete"
    );

    Ok(SimulationResult {
        policy: policy.name(),
        elapsed_seconds,
        page_faults: policy.fault_count(),
        swap_state,
    })
}

/// Runs all four policies over `sequence`, in the fixed report order
/// FIFO, RAND, LRU, MIN.
///
/// # Errors
///
/// Returns [`SimulatorError::InvalidConfiguration`] if `frames` is zero.
pub fn run_all(
    sequence: &PageSequence,
    frames: usize,
) -> Result<Vec<SimulationResult>, SimulatorError> {
    policy::all()
        .iter_mut()
        .map(|policy| run(policy.as_mut(), sequence, frames))
        .collect()
}

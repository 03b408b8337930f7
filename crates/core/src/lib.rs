//! Virtual-memory page replacement simulator library.
//!
//! This crate simulates page replacement over a fixed number of physical
//! frames with the following:
//! 1. **Policies:** FIFO, LRU, Optimal (Belady/MIN), and Random, behind one
//!    capability trait.
//! 2. **Frame table:** Resident-set tracking with load-order and
//!    last-access ranks for victim selection.
//! 3. **Driver:** Runs one policy over one reference sequence and derives
//!    the final swap state.
//! 4. **Configuration:** Memory geometry (page size, frame count, swap
//!    size) derived and validated from physical/virtual sizes.
//! 5. **I/O:** Text input parsing and report formatting for batch runs.

/// Common types (errors).
pub mod common;
/// Memory geometry configuration (inputs, derived values, validation).
pub mod config;
/// Physical frame table and per-frame metadata.
pub mod frame;
/// Replacement policies (FIFO, LRU, OPT, RAND) and their shared trait.
pub mod policy;
/// Report formatting.
pub mod report;
/// Simulation result record.
pub mod result;
/// Page reference sequences.
pub mod sequence;
/// Simulation driver and input loading.
pub mod sim;

/// Validated memory geometry; construct with `SystemConfig::new` or
/// deserialize from JSON.
pub use crate::config::SystemConfig;
/// Error type covering configuration, input, and I/O failures.
pub use crate::common::SimulatorError;
/// Immutable record of one (policy, sequence) run.
pub use crate::result::SimulationResult;
/// Ordered, validated page reference sequence.
pub use crate::sequence::PageSequence;

//! Common utilities and types used throughout the paging simulator.
//!
//! This module provides the building blocks shared across all components of
//! the simulator. It includes:
//! 1. **Error Handling:** The [`SimulatorError`] type covering configuration,
//!    input, and I/O failures.

/// Error type definitions.
pub mod error;

pub use error::SimulatorError;

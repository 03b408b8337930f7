//! Error types for the paging simulator.
//!
//! This module defines the error surface of the simulator core. It covers:
//! 1. **Configuration errors:** Impossible memory geometries (non-power-of-two
//!    page size, virtual memory smaller than physical memory, zero counts).
//! 2. **Input errors:** Malformed tokens, wrong request counts, and page
//!    indices outside the configured address space.
//! 3. **I/O errors:** Propagated from reading input files.

use std::io;

use thiserror::Error;

/// Errors produced while configuring, loading, or driving a simulation.
#[derive(Debug, Error)]
pub enum SimulatorError {
    /// The system configuration is internally inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A value in the input stream failed validation.
    #[error("invalid input: {field} = '{value}' ({reason})")]
    InvalidInput {
        /// Name of the field being read when the error occurred.
        field: String,
        /// The offending token, verbatim.
        value: String,
        /// Why the token was rejected.
        reason: String,
    },

    /// An I/O failure while reading input or writing a report.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl SimulatorError {
    /// Builds an [`SimulatorError::InvalidInput`] from the field name, the
    /// offending token, and a reason.
    pub fn input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

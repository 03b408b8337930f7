//! Simulation driving and input loading.
//!
//! Provides the driver that runs a replacement policy over a reference
//! sequence, and the loader that parses the text input format into a
//! configuration plus sequences.

/// Text input parsing.
pub mod loader;

/// Simulation driver.
pub mod simulator;

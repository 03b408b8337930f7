//! Report formatting.
//!
//! Renders the simulator's output document: the derived memory geometry
//! followed by, for each input sequence, the sequence itself and one block
//! per policy (name, elapsed seconds, fault count, swap state) in the fixed
//! order FIFO, RAND, LRU, MIN.

use std::io::{self, Write};

use crate::config::SystemConfig;
use crate::result::SimulationResult;
use crate::sequence::PageSequence;

/// One input sequence together with its per-policy results.
pub type SequenceRun = (PageSequence, Vec<SimulationResult>);

/// Writes the full report for one input file.
///
/// Layout: page size, frame count, and swap size on separate lines, a blank
/// line, the sequence count, a blank line, then per sequence: the sequence
/// as space-separated indices followed by four lines per policy. Sequence
/// blocks are separated by a blank line.
///
/// # Errors
///
/// Propagates any write failure from `writer`.
pub fn write_report<W: Write>(
    mut writer: W,
    config: &SystemConfig,
    runs: &[SequenceRun],
) -> io::Result<()> {
    writeln!(writer, "{}", config.page_size())?;
    writeln!(writer, "{}", config.number_of_frames())?;
    writeln!(writer, "{}", config.swap_size())?;
    writeln!(writer)?;

    writeln!(writer, "{}", runs.len())?;
    writeln!(writer)?;

    for (index, (sequence, results)) in runs.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }
        writeln!(writer, "{sequence}")?;
        for result in results {
            writeln!(writer, "{}", result.policy)?;
            writeln!(writer, "{}", result.elapsed_seconds)?;
            writeln!(writer, "{}", result.page_faults)?;
            writeln!(writer, "{}", result.swap_state_formatted())?;
        }
    }

    Ok(())
}

/// Renders the report into a `String`.
///
/// Convenience wrapper over [`write_report`] for callers that want the text
/// in memory (the CLI's stdout path and the tests).
pub fn render_report(config: &SystemConfig, runs: &[SequenceRun]) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail.
    if write_report(&mut buffer, config, runs).is_ok() {
        String::from_utf8(buffer).unwrap_or_default()
    } else {
        String::new()
    }
}

//! Input loading and parsing.
//!
//! Parses the simulator's text input format into a [`SystemConfig`] and its
//! page reference sequences. The format is:
//!
//! ```text
//! <physical memory bytes>
//! <virtual memory bytes>
//! <architecture: x86 | x64>
//! <number of pages>
//!
//! <number of sequences>
//!
//! <requests in sequence 1>
//! <sequence 1: space-separated page indices on one line>
//!
//! <requests in sequence 2>
//! ...
//! ```
//!
//! Scalar values are read as whitespace-separated tokens (blank lines
//! between them are insignificant), but each request line must carry exactly
//! the declared number of indices on a single line. Every sequence is
//! validated against the configured page count before it is returned.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::common::SimulatorError;
use crate::config::{Architecture, SystemConfig};
use crate::sequence::PageSequence;

/// Token-oriented reader over the input text, with line-granular access for
/// request sequences.
#[derive(Debug)]
struct TokenReader<'a> {
    lines: std::str::Lines<'a>,
    pending: VecDeque<&'a str>,
}

impl<'a> TokenReader<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines(),
            pending: VecDeque::new(),
        }
    }

    /// Returns the next whitespace-separated token, crossing line
    /// boundaries as needed.
    fn next_token(&mut self, field: &str) -> Result<&'a str, SimulatorError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let line = self.lines.next().ok_or_else(|| {
                SimulatorError::input(field, "<end of input>", "value is missing")
            })?;
            self.pending.extend(line.split_whitespace());
        }
    }

    /// Returns the tokens of the next non-blank line.
    ///
    /// Any tokens left over from scalar reads on a previous line are
    /// discarded first, matching line-oriented input files.
    fn next_line_tokens(&mut self, field: &str) -> Result<Vec<&'a str>, SimulatorError> {
        self.pending.clear();
        loop {
            let line = self.lines.next().ok_or_else(|| {
                SimulatorError::input(field, "<end of input>", "line is missing")
            })?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if !tokens.is_empty() {
                return Ok(tokens);
            }
        }
    }

    fn next_positive_u64(&mut self, field: &str) -> Result<u64, SimulatorError> {
        let token = self.next_token(field)?;
        let value: u64 = token
            .parse()
            .map_err(|_| SimulatorError::input(field, token, "must be an integer"))?;
        if value == 0 {
            return Err(SimulatorError::input(field, token, "must be positive"));
        }
        Ok(value)
    }

    fn next_positive_u32(&mut self, field: &str) -> Result<u32, SimulatorError> {
        let token = self.next_token(field)?;
        let value: u32 = token
            .parse()
            .map_err(|_| SimulatorError::input(field, token, "must be an integer"))?;
        if value == 0 {
            return Err(SimulatorError::input(field, token, "must be positive"));
        }
        Ok(value)
    }

    fn next_architecture(&mut self) -> Result<Architecture, SimulatorError> {
        let token = self.next_token("architecture")?;
        Architecture::from_token(token)
            .ok_or_else(|| SimulatorError::input("architecture", token, "must be 'x86' or 'x64'"))
    }
}

/// Parses a complete input document into a configuration and its validated
/// reference sequences.
///
/// # Errors
///
/// Returns [`SimulatorError::InvalidInput`] for malformed or missing
/// tokens, request lines whose length disagrees with the declared count,
/// and out-of-range page indices; [`SimulatorError::InvalidConfiguration`]
/// for inconsistent memory geometry.
pub fn parse_input(input: &str) -> Result<(SystemConfig, Vec<PageSequence>), SimulatorError> {
    let mut reader = TokenReader::new(input);

    let physical_memory = reader.next_positive_u64("physical memory size")?;
    let virtual_memory = reader.next_positive_u64("virtual memory size")?;
    let architecture = reader.next_architecture()?;
    let number_of_pages = reader.next_positive_u32("number of pages")?;

    let config = SystemConfig::new(
        physical_memory,
        virtual_memory,
        architecture,
        number_of_pages,
    )?;

    let number_of_sequences = reader.next_positive_u32("number of sequences")? as usize;
    let mut sequences = Vec::with_capacity(number_of_sequences);

    for _ in 0..number_of_sequences {
        let count = reader.next_positive_u32("number of requests")? as usize;
        let tokens = reader.next_line_tokens("request sequence")?;
        if tokens.len() != count {
            return Err(SimulatorError::input(
                "request sequence",
                tokens.join(" "),
                format!("expected {count} requests, found {}", tokens.len()),
            ));
        }

        let mut requests = Vec::with_capacity(count);
        for token in tokens {
            let page: u32 = token
                .parse()
                .map_err(|_| SimulatorError::input("page index", token, "must be an integer"))?;
            requests.push(page);
        }

        let sequence = PageSequence::new(requests)?;
        sequence.validate(config.number_of_pages())?;
        sequences.push(sequence);
    }

    Ok((config, sequences))
}

/// Reads and parses an input file from disk.
///
/// # Errors
///
/// Returns [`SimulatorError::Io`] if the file cannot be read, plus every
/// error [`parse_input`] can produce.
pub fn load_input(path: impl AsRef<Path>) -> Result<(SystemConfig, Vec<PageSequence>), SimulatorError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let (config, sequences) = parse_input(&text)?;
    info!(
        path = %path.display(),
        frames = config.number_of_frames(),
        sequences = sequences.len(),
        "input loaded"
    );
    Ok((config, sequences))
}

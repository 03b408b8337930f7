//! # Loader Tests
//!
//! Parses canonical and malformed input documents, and exercises the
//! file-reading wrapper through a temporary file.

use std::io::Write;

use paging_core::SimulatorError;
use paging_core::config::Architecture;
use paging_core::sim::loader;

/// A canonical two-sequence document in the generator's layout.
const CANONICAL: &str = "\
4096
16384
x86
16

2

5
1 2 3 4 5

3
0 0 0
";

/// The canonical document parses into the expected geometry and sequences.
#[test]
fn parses_canonical_document() {
    let (config, sequences) = loader::parse_input(CANONICAL).unwrap();
    assert_eq!(config.page_size(), 1024);
    assert_eq!(config.number_of_frames(), 4);
    assert_eq!(config.architecture(), Architecture::X86);
    assert_eq!(sequences.len(), 2);
    assert_eq!(sequences[0].requests(), &[1, 2, 3, 4, 5]);
    assert_eq!(sequences[1].requests(), &[0, 0, 0]);
}

/// Blank lines between scalar values are insignificant.
#[test]
fn tolerates_missing_blank_lines() {
    let input = "4096\n16384\nx64\n16\n1\n3\n7 8 9\n";
    let (config, sequences) = loader::parse_input(input).unwrap();
    assert_eq!(config.architecture(), Architecture::X64);
    assert_eq!(sequences[0].requests(), &[7, 8, 9]);
}

/// A request line whose length disagrees with the declared count is
/// rejected.
#[test]
fn rejects_wrong_request_count() {
    let input = "4096\n16384\nx86\n16\n1\n4\n1 2 3\n";
    let err = loader::parse_input(input).unwrap_err();
    assert!(matches!(err, SimulatorError::InvalidInput { .. }));
}

/// Unknown architecture tokens are rejected with the offending value.
#[test]
fn rejects_unknown_architecture() {
    let input = "4096\n16384\nsparc\n16\n1\n1\n0\n";
    match loader::parse_input(input).unwrap_err() {
        SimulatorError::InvalidInput { field, value, .. } => {
            assert_eq!(field, "architecture");
            assert_eq!(value, "sparc");
        }
        other => panic!("unexpected error: {other}"),
    }
}

/// Page indices at or above the configured page count are rejected at load
/// time.
#[test]
fn rejects_out_of_range_page_index() {
    let input = "4096\n16384\nx86\n16\n1\n2\n3 16\n";
    let err = loader::parse_input(input).unwrap_err();
    assert!(matches!(err, SimulatorError::InvalidInput { .. }));
}

/// Non-numeric and non-positive scalars are rejected.
#[test]
fn rejects_bad_scalars() {
    assert!(loader::parse_input("abc\n").is_err());
    assert!(loader::parse_input("0\n16384\nx86\n16\n").is_err());
}

/// Truncated documents report the missing field rather than panicking.
#[test]
fn rejects_truncated_document() {
    let input = "4096\n16384\nx86\n16\n2\n3\n1 2 3\n";
    // Second sequence is missing entirely.
    let err = loader::parse_input(input).unwrap_err();
    assert!(matches!(err, SimulatorError::InvalidInput { .. }));
}

/// The file wrapper reads from disk and propagates parse results.
#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CANONICAL.as_bytes()).unwrap();
    let (config, sequences) = loader::load_input(file.path()).unwrap();
    assert_eq!(config.number_of_frames(), 4);
    assert_eq!(sequences.len(), 2);
}

/// A missing file surfaces as an I/O error.
#[test]
fn missing_file_is_io_error() {
    let err = loader::load_input("/nonexistent/input.txt").unwrap_err();
    assert!(matches!(err, SimulatorError::Io(_)));
}

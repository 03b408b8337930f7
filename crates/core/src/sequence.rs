//! Page reference sequences.
//!
//! A [`PageSequence`] is an ordered, non-empty list of logical page indices.
//! It is validated once against the configured page count and is immutable
//! afterwards; the replacement policies never re-check indices during
//! simulation.

use std::collections::BTreeSet;
use std::fmt;

use crate::common::SimulatorError;

/// An ordered, non-empty sequence of page references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSequence {
    requests: Vec<u32>,
}

impl PageSequence {
    /// Creates a sequence from a list of page indices.
    ///
    /// # Errors
    ///
    /// Returns [`SimulatorError::InvalidInput`] if the list is empty.
    pub fn new(requests: Vec<u32>) -> Result<Self, SimulatorError> {
        if requests.is_empty() {
            return Err(SimulatorError::input(
                "request sequence",
                "<empty>",
                "must contain at least one page reference",
            ));
        }
        Ok(Self { requests })
    }

    /// Checks that every page index is within `[0, number_of_pages)`.
    ///
    /// Called once at load time; simulation assumes a validated sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SimulatorError::InvalidInput`] naming the first
    /// out-of-range index.
    pub fn validate(&self, number_of_pages: u32) -> Result<(), SimulatorError> {
        for &page in &self.requests {
            if page >= number_of_pages {
                return Err(SimulatorError::input(
                    "page index",
                    page.to_string(),
                    format!("must be between 0 and {}", number_of_pages - 1),
                ));
            }
        }
        Ok(())
    }

    /// Returns the raw requests in reference order.
    pub fn requests(&self) -> &[u32] {
        &self.requests
    }

    /// Returns the number of references in the sequence.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Always `false` for a constructed sequence; present for completeness.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Iterates over the page indices in reference order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.requests.iter().copied()
    }

    /// Returns the set of distinct pages referenced anywhere in the sequence.
    ///
    /// Used by the post-hoc swap derivation: swap = distinct − resident.
    pub fn distinct_pages(&self) -> BTreeSet<u32> {
        self.requests.iter().copied().collect()
    }
}

impl fmt::Display for PageSequence {
    /// Renders the sequence as space-separated page indices.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, page) in self.requests.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{page}")?;
        }
        Ok(())
    }
}

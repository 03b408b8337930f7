//! Configuration system for the paging simulator.
//!
//! This module defines the memory geometry the simulator runs against. It
//! provides:
//! 1. **Inputs:** Physical and virtual memory sizes, addressing
//!    architecture, and virtual page count.
//! 2. **Derived values:** Page size, physical frame count, and swap size,
//!    computed once at construction.
//! 3. **Validation:** Positive sizes, virtual ≥ physical, and a
//!    power-of-two page size, enforced before any simulation runs.
//!
//! Configuration arrives either from the text input format (see
//! [`crate::sim::loader`]) or from JSON via serde; both paths go through the
//! same [`SystemConfig::new`] validation.

use serde::Deserialize;

use crate::common::SimulatorError;

/// Addressing architecture of the simulated machine.
///
/// Only the input token is interpreted; the simulation itself is
/// architecture-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    /// 32-bit addressing (`x86`).
    X86,
    /// 64-bit addressing (`x64`).
    X64,
}

impl Architecture {
    /// Parses the input-file token, `"x86"` or `"x64"`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "x86" => Some(Self::X86),
            "x64" => Some(Self::X64),
            _ => None,
        }
    }

    /// Returns the input-file token for this architecture.
    pub fn token(self) -> &'static str {
        match self {
            Self::X86 => "x86",
            Self::X64 => "x64",
        }
    }
}

/// Raw configuration inputs, before validation.
///
/// Exists so JSON deserialization funnels through [`SystemConfig::new`].
#[derive(Debug, Deserialize)]
struct RawSystemConfig {
    physical_memory: u64,
    virtual_memory: u64,
    architecture: Architecture,
    number_of_pages: u32,
}

/// Validated memory geometry: raw inputs plus derived page size, frame
/// count, and swap size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawSystemConfig")]
pub struct SystemConfig {
    physical_memory: u64,
    virtual_memory: u64,
    architecture: Architecture,
    number_of_pages: u32,
    page_size: u64,
    number_of_frames: u32,
    swap_size: u64,
}

impl SystemConfig {
    /// Builds and validates a configuration, computing the derived values.
    ///
    /// Page size is `virtual_memory / number_of_pages`, frame count is
    /// `physical_memory / page_size`, and swap size is
    /// `(number_of_pages - number_of_frames) * page_size`.
    ///
    /// # Errors
    ///
    /// Returns [`SimulatorError::InvalidConfiguration`] if any size is
    /// non-positive, virtual memory is smaller than physical memory, or the
    /// derived page size is not a power of two.
    pub fn new(
        physical_memory: u64,
        virtual_memory: u64,
        architecture: Architecture,
        number_of_pages: u32,
    ) -> Result<Self, SimulatorError> {
        if physical_memory == 0 {
            return Err(SimulatorError::InvalidConfiguration(
                "physical memory size must be positive".into(),
            ));
        }
        if virtual_memory < physical_memory {
            return Err(SimulatorError::InvalidConfiguration(format!(
                "virtual memory ({virtual_memory} bytes) must be >= physical memory ({physical_memory} bytes)"
            )));
        }
        if number_of_pages == 0 {
            return Err(SimulatorError::InvalidConfiguration(
                "number of pages must be positive".into(),
            ));
        }

        let page_size = virtual_memory / u64::from(number_of_pages);
        if page_size == 0 || !page_size.is_power_of_two() {
            return Err(SimulatorError::InvalidConfiguration(format!(
                "derived page size ({page_size}) must be a power of 2"
            )));
        }

        let number_of_frames = (physical_memory / page_size) as u32;
        if number_of_frames == 0 {
            return Err(SimulatorError::InvalidConfiguration(
                "physical memory holds no complete frame".into(),
            ));
        }
        // Frame count can reach the page count when all pages fit in RAM;
        // saturate so such configurations report a zero-byte swap.
        let swap_size = u64::from(number_of_pages.saturating_sub(number_of_frames)) * page_size;

        Ok(Self {
            physical_memory,
            virtual_memory,
            architecture,
            number_of_pages,
            page_size,
            number_of_frames,
            swap_size,
        })
    }

    /// Physical memory size in bytes.
    pub fn physical_memory(&self) -> u64 {
        self.physical_memory
    }

    /// Virtual memory size in bytes.
    pub fn virtual_memory(&self) -> u64 {
        self.virtual_memory
    }

    /// Addressing architecture.
    pub fn architecture(&self) -> Architecture {
        self.architecture
    }

    /// Total number of virtual pages.
    pub fn number_of_pages(&self) -> u32 {
        self.number_of_pages
    }

    /// Derived page size in bytes.
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Derived number of physical frames.
    pub fn number_of_frames(&self) -> u32 {
        self.number_of_frames
    }

    /// Derived swap size in bytes.
    pub fn swap_size(&self) -> u64 {
        self.swap_size
    }
}

impl TryFrom<RawSystemConfig> for SystemConfig {
    type Error = SimulatorError;

    fn try_from(raw: RawSystemConfig) -> Result<Self, Self::Error> {
        Self::new(
            raw.physical_memory,
            raw.virtual_memory,
            raw.architecture,
            raw.number_of_pages,
        )
    }
}

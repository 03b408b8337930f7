//! # Configuration Tests
//!
//! Verifies the memory geometry derivation (page size, frame count, swap
//! size) and the validation rules: positive sizes, virtual ≥ physical, and
//! a power-of-two page size. Also covers the serde path, which must funnel
//! through the same validation.

use paging_core::SimulatorError;
use paging_core::config::{Architecture, SystemConfig};

/// The generator's default geometry: 4 KiB physical, 16 KiB virtual,
/// 16 pages → 1 KiB pages, 4 frames, 12 KiB swap.
#[test]
fn derives_page_size_frames_and_swap() {
    let config = SystemConfig::new(4096, 16384, Architecture::X86, 16).unwrap();
    assert_eq!(config.page_size(), 1024);
    assert_eq!(config.number_of_frames(), 4);
    assert_eq!(config.swap_size(), 12288);
}

/// Raw inputs survive construction unchanged.
#[test]
fn keeps_raw_inputs() {
    let config = SystemConfig::new(4096, 16384, Architecture::X64, 16).unwrap();
    assert_eq!(config.physical_memory(), 4096);
    assert_eq!(config.virtual_memory(), 16384);
    assert_eq!(config.architecture(), Architecture::X64);
    assert_eq!(config.number_of_pages(), 16);
}

/// A derived page size that is not a power of two is rejected.
#[test]
fn rejects_non_power_of_two_page_size() {
    // 1000 / 10 = 100, not a power of two.
    let err = SystemConfig::new(500, 1000, Architecture::X86, 10).unwrap_err();
    assert!(matches!(err, SimulatorError::InvalidConfiguration(_)));
}

/// Virtual memory smaller than physical memory is rejected.
#[test]
fn rejects_virtual_smaller_than_physical() {
    let err = SystemConfig::new(16384, 4096, Architecture::X86, 4).unwrap_err();
    assert!(matches!(err, SimulatorError::InvalidConfiguration(_)));
}

/// Zero-valued inputs are rejected.
#[test]
fn rejects_zero_inputs() {
    assert!(SystemConfig::new(0, 16384, Architecture::X86, 16).is_err());
    assert!(SystemConfig::new(4096, 16384, Architecture::X86, 0).is_err());
}

/// When every page fits in physical memory the swap size is zero.
#[test]
fn zero_swap_when_all_pages_fit() {
    let config = SystemConfig::new(16384, 16384, Architecture::X86, 16).unwrap();
    assert_eq!(config.number_of_frames(), 16);
    assert_eq!(config.swap_size(), 0);
}

/// Architecture tokens parse exactly as the input format spells them.
#[test]
fn architecture_tokens() {
    assert_eq!(Architecture::from_token("x86"), Some(Architecture::X86));
    assert_eq!(Architecture::from_token("x64"), Some(Architecture::X64));
    assert_eq!(Architecture::from_token("arm"), None);
    assert_eq!(Architecture::X86.token(), "x86");
}

/// JSON deserialization produces a validated configuration with derived
/// values populated.
#[test]
fn deserializes_and_validates_from_json() {
    let json = r#"{
        "physical_memory": 4096,
        "virtual_memory": 16384,
        "architecture": "x86",
        "number_of_pages": 16
    }"#;
    let config: SystemConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.page_size(), 1024);
    assert_eq!(config.number_of_frames(), 4);
}

/// Invalid geometry is rejected during deserialization, not later.
#[test]
fn json_rejects_invalid_geometry() {
    let json = r#"{
        "physical_memory": 16384,
        "virtual_memory": 4096,
        "architecture": "x64",
        "number_of_pages": 4
    }"#;
    assert!(serde_json::from_str::<SystemConfig>(json).is_err());
}

#![cfg(feature = "dev")]
//! Tests for the window mapper, lookup tables and auto window.
//!
//! These tests verify the algorithm layer:
//! - Window bounds and degenerate detection
//! - Bit masking and the compiled per-sample mapping
//! - Lookup table equivalence with direct evaluation
//! - Range detection and range-derived windows
//!
//! ## Test Organization
//!
//! 1. **Window Level** - Bounds and construction
//! 2. **Window Mapper** - Masking, thresholding, inversion
//! 3. **Lookup Tables** - Policy and equivalence
//! 4. **Auto Window** - Range and window derivation

use approx::assert_relative_eq;

use winlevel::internals::algorithms::auto::{rescaled_range, sample_range, window_from_range};
use winlevel::internals::algorithms::lut::{Lut, LutPolicy, table_len};
use winlevel::internals::algorithms::window::{WindowLevel, WindowMapper, sample_mask};
use winlevel::internals::math::rescale::Rescale;
use winlevel::internals::math::voi::VoiLutFunction;

// ============================================================================
// Helper Functions
// ============================================================================

fn mapper(width: f64, center: f64, bits: u8, invert: bool) -> WindowMapper<f64> {
    WindowMapper::new(
        WindowLevel::new(width, center),
        Rescale::identity(),
        VoiLutFunction::Linear,
        bits,
        invert,
    )
}

// ============================================================================
// Window Level Tests
// ============================================================================

/// Test window bounds.
#[test]
fn test_window_bounds() {
    let w = WindowLevel::new(400.0, 40.0);
    assert_eq!(w.bounds(), (-160.0, 240.0));
    assert!(!w.is_degenerate());

    let from = WindowLevel::from_bounds(-160.0, 240.0);
    assert_eq!(from, w);
}

/// Test degenerate detection.
#[test]
fn test_window_degenerate() {
    assert!(WindowLevel::new(0.0, 10.0).is_degenerate());
    assert!(WindowLevel::new(-0.0, 10.0).is_degenerate());
    assert!(!WindowLevel::new(1e-12, 10.0).is_degenerate());
}

// ============================================================================
// Window Mapper Tests
// ============================================================================

/// Test sample masks for each bit depth.
#[test]
fn test_sample_mask() {
    assert_eq!(sample_mask(1), 0x0001);
    assert_eq!(sample_mask(8), 0x00FF);
    assert_eq!(sample_mask(12), 0x0FFF);
    assert_eq!(sample_mask(15), 0x7FFF);
    assert_eq!(sample_mask(16), 0xFFFF);
}

/// Test the mapper on the reference scenario.
#[test]
fn test_mapper_values() {
    let m = mapper(256.0, 128.0, 16, false);

    assert_eq!(m.map(0), 0);
    assert_eq!(m.map(128), 128);
    assert_eq!(m.map(255), 255);
    assert_eq!(m.map(1000), 255);
    assert_eq!(m.mask(), u16::MAX);
}

/// Test that the mapper ignores bits above `bits_stored`.
#[test]
fn test_mapper_masks_high_bits() {
    let m = mapper(4096.0, 2048.0, 12, false);

    for v in [0u16, 1, 1000, 2048, 4095] {
        assert_eq!(m.map(v), m.map(v | 0xF000), "sample {v}");
    }
}

/// Test that inversion is exact.
#[test]
fn test_mapper_invert() {
    let plain = mapper(1000.0, 500.0, 16, false);
    let inverted = mapper(1000.0, 500.0, 16, true);

    for v in (0..1200u16).step_by(7) {
        assert_eq!(plain.map(v) as u16 + inverted.map(v) as u16, 255);
    }
}

/// Test the thresholding mapper for a zero-width window.
#[test]
fn test_mapper_threshold() {
    let m = mapper(0.0, 100.0, 16, false);

    assert_eq!(m.map(0), 0);
    assert_eq!(m.map(99), 0);
    assert_eq!(m.map(100), 255);
    assert_eq!(m.map(u16::MAX), 255);
}

/// Test the mapper with a rescale and the sigmoid function.
#[test]
fn test_mapper_rescaled_sigmoid() {
    let m = WindowMapper::new(
        WindowLevel::new(256.0, 0.0),
        Rescale::new(1.0, -128.0),
        VoiLutFunction::Sigmoid,
        16,
        false,
    );

    assert_eq!(m.map(0), 30);
    assert_eq!(m.map(128), 128);
    assert_eq!(m.map(256), 225);
}

// ============================================================================
// Lookup Table Tests
// ============================================================================

/// Test table sizes.
#[test]
fn test_table_len() {
    assert_eq!(table_len(8), 256);
    assert_eq!(table_len(12), 4096);
    assert_eq!(table_len(16), 65536);
}

/// Test the lookup table policy.
#[test]
fn test_lut_policy() {
    assert!(LutPolicy::Always.use_table(0, 16));
    assert!(!LutPolicy::Never.use_table(1 << 20, 8));
    assert!(!LutPolicy::Auto.use_table(0, 1));
    assert!(!LutPolicy::Auto.use_table(4095, 12));
    assert!(LutPolicy::Auto.use_table(4096, 12));
    assert!(!LutPolicy::Auto.use_table(256 * 128, 16));
    assert!(LutPolicy::Auto.use_table(512 * 512, 16));
    assert_eq!(LutPolicy::default(), LutPolicy::Auto);
}

/// Test that the table matches the mapper for every sample value.
#[test]
fn test_lut_matches_mapper() {
    for (bits, invert) in [(16u8, false), (12, true), (8, false)] {
        let m = WindowMapper::new(
            WindowLevel::new(400.0, 40.0),
            Rescale::new(1.0, -1024.0),
            VoiLutFunction::Linear,
            bits,
            invert,
        );
        let lut = Lut::build(&m);

        assert_eq!(lut.len(), table_len(bits));
        assert!(!lut.is_empty());
        for v in 0..=u16::MAX {
            assert_eq!(lut.get(v), m.map(v), "bits={bits} sample={v}");
        }
    }
}

/// Test the raw table contents.
#[test]
fn test_lut_slice() {
    let lut = Lut::build(&mapper(2.0, 1.5, 2, false));

    assert_eq!(lut.as_slice(), &[0, 128, 255, 255]);
}

// ============================================================================
// Auto Window Tests
// ============================================================================

/// Test the masked sample range.
#[test]
fn test_sample_range() {
    assert_eq!(sample_range(&[], 0xFFFF), None);
    assert_eq!(sample_range(&[5], 0xFFFF), Some((5, 5)));
    assert_eq!(sample_range(&[300, 7, 4000], 0xFFFF), Some((7, 4000)));
    assert_eq!(sample_range(&[0xF00A, 3], 0x0FFF), Some((3, 10)));
}

/// Test that a negative slope keeps the range ordered.
#[test]
fn test_rescaled_range_negative_slope() {
    let (min, max) = rescaled_range(&[10, 20], 0xFFFF, &Rescale::new(-2.0, 0.0)).unwrap();

    assert_relative_eq!(min, -40.0);
    assert_relative_eq!(max, -20.0);
}

/// Test range-derived windows for each function.
#[test]
fn test_window_from_range() {
    let linear = window_from_range(100.0, 300.0, VoiLutFunction::Linear);
    assert_relative_eq!(linear.center, 200.5);
    assert_relative_eq!(linear.width, 201.0);

    let exact = window_from_range(100.0, 300.0, VoiLutFunction::LinearExact);
    assert_relative_eq!(exact.center, 200.0);
    assert_relative_eq!(exact.width, 200.0);

    let flat = window_from_range(7.0, 7.0, VoiLutFunction::Sigmoid);
    assert!(flat.is_degenerate());
}

/// Test that the derived linear window maps the range ends to black and white.
#[test]
fn test_window_from_range_endpoints() {
    for (lo, hi) in [(0.0, 4095.0), (-1024.0, 3071.0), (10.0, 11.0)] {
        let w = window_from_range(lo, hi, VoiLutFunction::Linear);
        let f = VoiLutFunction::Linear;

        assert_eq!(f.evaluate(lo, w.center, w.width), 0.0, "[{lo}, {hi}]");
        assert_eq!(f.evaluate(hi, w.center, w.width), 255.0, "[{lo}, {hi}]");
    }
}

#![cfg(feature = "dev")]
//! Tests for VOI LUT functions, quantization and the modality rescale.
//!
//! These tests verify the per-value mathematics of the pipeline:
//! - Linear, LinearExact and Sigmoid values at known points
//! - Saturation and monotonicity
//! - Keyword parsing and display
//! - Rounding up and to nearest, and RGBA pixel layout
//!
//! ## Test Organization
//!
//! 1. **Function Values** - Known evaluations
//! 2. **Function Properties** - Saturation, monotonicity, width limits
//! 3. **Keywords** - Parsing and display
//! 4. **Quantization** - Rounding and pixel writing
//! 5. **Rescale** - Modality rescale

use approx::assert_relative_eq;

use winlevel::internals::math::quantize::{
    CHANNELS, OPAQUE, Rounding, quantize, quantize_up, write_pixel,
};
use winlevel::internals::math::rescale::Rescale;
use winlevel::internals::math::voi::VoiLutFunction;
use winlevel::internals::primitives::errors::WindowingError;

const FUNCTIONS: [VoiLutFunction; 3] = [
    VoiLutFunction::Linear,
    VoiLutFunction::LinearExact,
    VoiLutFunction::Sigmoid,
];

// ============================================================================
// Function Value Tests
// ============================================================================

/// Test the DICOM linear function at known points.
#[test]
fn test_linear_values() {
    let f = VoiLutFunction::Linear;

    assert_relative_eq!(f.evaluate(0.0, 128.0, 256.0), 0.0);
    assert_relative_eq!(f.evaluate(128.0, 128.0, 256.0), 128.0);
    assert_relative_eq!(f.evaluate(127.5, 128.0, 256.0), 127.5);
    assert_relative_eq!(f.evaluate(255.0, 128.0, 256.0), 255.0);
    assert_relative_eq!(f.evaluate(1000.0, 128.0, 256.0), 255.0);
}

/// Test the exact linear function at known points.
#[test]
fn test_linear_exact_values() {
    let f = VoiLutFunction::LinearExact;

    assert_relative_eq!(f.evaluate(0.0, 128.0, 256.0), 0.0);
    assert_relative_eq!(f.evaluate(64.0, 128.0, 256.0), 63.75);
    assert_relative_eq!(f.evaluate(128.0, 128.0, 256.0), 127.5);
    assert_relative_eq!(f.evaluate(255.0, 128.0, 256.0), 254.00390625);
    assert_relative_eq!(f.evaluate(-50.0, 128.0, 256.0), 0.0);
}

/// Test the sigmoid function at known points.
#[test]
fn test_sigmoid_values() {
    let f = VoiLutFunction::Sigmoid;

    assert_relative_eq!(f.evaluate(128.0, 128.0, 256.0), 127.5);
    assert_relative_eq!(
        f.evaluate(0.0, 128.0, 256.0),
        255.0 / (1.0 + 2f64.exp()),
        epsilon = 1e-9
    );
    assert_relative_eq!(
        f.evaluate(256.0, 128.0, 256.0),
        255.0 / (1.0 + (-2f64).exp()),
        epsilon = 1e-9
    );
}

/// Test that single precision gives the same results.
#[test]
fn test_f32_evaluation() {
    let f = VoiLutFunction::Linear;

    assert_relative_eq!(f.evaluate(128.0f32, 128.0, 256.0), 128.0f32, epsilon = 1e-3);
    assert_eq!(quantize(f.evaluate(1000.0f32, 128.0, 256.0)), 255);
}

// ============================================================================
// Function Property Tests
// ============================================================================

/// Test that every function stays within the display range.
#[test]
fn test_output_range() {
    for f in FUNCTIONS {
        for x in [-1.0e9, -5000.0, 0.0, 40.0, 5000.0, 1.0e9] {
            let y = f.evaluate(x, 40.0, 400.0);
            assert!((0.0..=255.0).contains(&y), "{f}: f({x}) = {y}");
        }
    }
}

/// Test that every function is non-decreasing.
#[test]
fn test_monotonicity() {
    for f in FUNCTIONS {
        let mut prev = f.evaluate(-1000.0, 100.0, 300.0);
        for i in -999..2000 {
            let y = f.evaluate(i as f64, 100.0, 300.0);
            assert!(y >= prev, "{f} decreases at {i}");
            prev = y;
        }
    }
}

/// Test the linear saturation boundaries.
///
/// Verifies that `Linear` is 0 at `c - w/2` and 255 at `c + w/2`.
#[test]
fn test_linear_saturation_boundaries() {
    let f = VoiLutFunction::Linear;
    let (c, w) = (40.0, 400.0);

    assert_eq!(f.evaluate(c - w / 2.0, c, w), 0.0);
    assert_eq!(f.evaluate(c + w / 2.0, c, w), 255.0);
    assert!(f.evaluate(c - w / 2.0 + 1.0, c, w) > 0.0);
}

/// Test the width limits of each function.
#[test]
fn test_accepts_width() {
    assert!(VoiLutFunction::Linear.accepts_width(1.0));
    assert!(!VoiLutFunction::Linear.accepts_width(0.999));
    assert!(VoiLutFunction::LinearExact.accepts_width(0.001));
    assert!(!VoiLutFunction::LinearExact.accepts_width(0.0));
    assert!(VoiLutFunction::Sigmoid.accepts_width(0.5));
    assert!(!VoiLutFunction::Sigmoid.accepts_width(-1.0));
}

/// Test that a unit-width linear window is a step.
#[test]
fn test_linear_unit_width() {
    let f = VoiLutFunction::Linear;

    assert_eq!(f.evaluate(9.0, 10.0, 1.0), 0.0);
    assert_eq!(f.evaluate(9.5, 10.0, 1.0), 0.0);
    assert_eq!(f.evaluate(10.0, 10.0, 1.0), 255.0);
}

// ============================================================================
// Keyword Tests
// ============================================================================

/// Test keyword parsing and display.
#[test]
fn test_keywords() {
    for f in FUNCTIONS {
        assert_eq!(VoiLutFunction::try_from(f.keyword()).unwrap(), f);
        assert_eq!(f.to_string(), f.keyword());
    }

    assert_eq!(
        VoiLutFunction::try_from(" LINEAR_EXACT ").unwrap(),
        VoiLutFunction::LinearExact
    );
    assert_eq!(VoiLutFunction::default(), VoiLutFunction::LinearExact);
}

/// Test that unknown keywords are rejected.
#[test]
fn test_unknown_keyword() {
    let err = VoiLutFunction::try_from("linear").unwrap_err();
    assert!(matches!(err, WindowingError::InvalidArgument(msg) if msg.contains("linear")));
}

// ============================================================================
// Quantization Tests
// ============================================================================

/// Test rounding to display bytes.
#[test]
fn test_quantize() {
    assert_eq!(quantize(0.0f64), 0);
    assert_eq!(quantize(0.49f64), 0);
    assert_eq!(quantize(127.5f64), 128);
    assert_eq!(quantize(254.5f64), 255);
    assert_eq!(quantize(255.0f64), 255);
}

/// Test that quantization saturates and is total.
#[test]
fn test_quantize_saturation() {
    assert_eq!(quantize(-10.0f64), 0);
    assert_eq!(quantize(300.0f64), 255);
    assert_eq!(quantize(f64::INFINITY), 255);
    assert_eq!(quantize(f64::NEG_INFINITY), 0);
    assert_eq!(quantize(f64::NAN), 0);
}

/// Test rounding up to display bytes.
///
/// Verifies the ceiling on the default ramp's landmarks, and that noise
/// just above an exact level does not add a step.
#[test]
fn test_quantize_up() {
    assert_eq!(quantize_up(0.0f64), 0);
    assert_eq!(quantize_up(0.25f64), 1);
    assert_eq!(quantize_up(127.5f64), 128);
    assert_eq!(quantize_up(254.00390625f64), 255);
    assert_eq!(quantize_up(1000.0f64), 255);
    assert_eq!(quantize_up(-5.0f64), 0);
    assert_eq!(quantize_up(f64::NAN), 0);
    assert_eq!(quantize_up(102.00000000000001f64), 102);
    assert_eq!(quantize_up(0.4f64 * 255.0), 102);
    assert_eq!(quantize_up(127.5f32), 128);
}

/// Test the rounding used by each function.
#[test]
fn test_function_rounding() {
    assert_eq!(VoiLutFunction::LinearExact.rounding(), Rounding::Up);
    assert_eq!(VoiLutFunction::Linear.rounding(), Rounding::Nearest);
    assert_eq!(VoiLutFunction::Sigmoid.rounding(), Rounding::Nearest);
    assert_eq!(Rounding::default(), Rounding::Up);

    assert_eq!(Rounding::Up.apply(2.5f64), 3);
    assert_eq!(Rounding::Nearest.apply(2.5f64), 3);
    assert_eq!(Rounding::Up.apply(2.25f64), 3);
    assert_eq!(Rounding::Nearest.apply(2.25f64), 2);
}

/// Test the RGBA pixel layout.
#[test]
fn test_write_pixel() {
    let mut pixel = [0u8; CHANNELS];
    write_pixel(&mut pixel, 77);

    assert_eq!(pixel, [77, 77, 77, OPAQUE]);
}

// ============================================================================
// Rescale Tests
// ============================================================================

/// Test the modality rescale.
#[test]
fn test_rescale() {
    let ct = Rescale::new(1.0, -1024.0);
    assert_relative_eq!(ct.apply(1064.0), 40.0);
    assert!(!ct.is_identity());

    let pet = Rescale::new(0.5, 0.0);
    assert_relative_eq!(pet.apply(300.0), 150.0);

    let identity = Rescale::<f64>::default();
    assert!(identity.is_identity());
    assert_eq!(identity, Rescale::identity());
    assert_relative_eq!(identity.apply(123.0), 123.0);
}

//! Tests for frames and error types.
//!
//! These tests verify the primitive types shared by every layer:
//! - Frame construction, dimension checks and row access
//! - Error classification and messages
//!
//! ## Test Organization
//!
//! 1. **Frame** - Construction and access
//! 2. **Errors** - Kinds and Display

use winlevel::{ErrorKind, Frame, WindowingError};

// ============================================================================
// Frame Tests
// ============================================================================

/// Test frame construction and accessors.
#[test]
fn test_frame_new() {
    let samples = [1u16, 2, 3, 4, 5, 6];
    let frame = Frame::new(2, 3, &samples).unwrap();

    assert_eq!(frame.rows(), 2);
    assert_eq!(frame.columns(), 3);
    assert_eq!(frame.len(), 6);
    assert!(!frame.is_empty());
    assert_eq!(frame.samples(), &samples);
}

/// Test row access.
#[test]
fn test_frame_rows() {
    let samples = [1u16, 2, 3, 4, 5, 6];
    let frame = Frame::new(3, 2, &samples).unwrap();

    assert_eq!(frame.row(0), Some(&[1u16, 2][..]));
    assert_eq!(frame.row(2), Some(&[5u16, 6][..]));
    assert_eq!(frame.row(3), None);
}

/// Test a single-row frame.
#[test]
fn test_frame_from_row() {
    let frame = Frame::from_row(&[9, 8, 7]);

    assert_eq!(frame.rows(), 1);
    assert_eq!(frame.columns(), 3);
    assert_eq!(frame.row(0), Some(&[9u16, 8, 7][..]));
}

/// Test empty frames.
///
/// Verifies that a zero dimension with no samples is a valid, empty frame.
#[test]
fn test_frame_empty() {
    let frame = Frame::new(0, 10, &[]).unwrap();
    assert!(frame.is_empty());
    assert_eq!(frame.row(0), None);

    let frame = Frame::new(4, 0, &[]).unwrap();
    assert!(frame.is_empty());
    assert_eq!(frame.row(3), Some(&[][..]));
}

/// Test dimension errors.
#[test]
fn test_frame_errors() {
    assert_eq!(
        Frame::new(2, 2, &[1, 2, 3]).unwrap_err(),
        WindowingError::MismatchedDimensions {
            rows: 2,
            columns: 2,
            len: 3
        }
    );

    let overflow = Frame::new(usize::MAX, 2, &[]).unwrap_err();
    assert!(matches!(overflow, WindowingError::InvalidArgument(_)));
}

// ============================================================================
// Error Tests
// ============================================================================

/// Test error classification.
///
/// Verifies that only the zero-width error is arithmetic.
#[test]
fn test_error_kind() {
    let invalid = [
        WindowingError::InvalidArgument("x".into()),
        WindowingError::MismatchedDimensions {
            rows: 1,
            columns: 1,
            len: 2,
        },
        WindowingError::MismatchedOutput {
            expected: 4,
            got: 3,
        },
        WindowingError::InvalidWidth(-1.0),
        WindowingError::InvalidNumericValue("width=NaN".into()),
        WindowingError::InvalidRescale {
            slope: 0.0,
            intercept: 0.0,
        },
        WindowingError::InvalidBitsStored(0),
        WindowingError::FrameOverflow {
            expected: 1,
            got: 2,
        },
        WindowingError::IncompleteFrame {
            expected: 2,
            got: 1,
        },
        WindowingError::NoFrameInProgress,
        WindowingError::UnsupportedFeature {
            adapter: "Streaming",
            feature: "auto_window",
        },
        WindowingError::DuplicateParameter { parameter: "window" },
    ];

    for err in invalid {
        assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{err}");
    }

    assert_eq!(
        WindowingError::ArithmeticDegenerate { center: 1.0 }.kind(),
        ErrorKind::ArithmeticDegenerate
    );
}

/// Test error messages.
#[test]
fn test_error_display() {
    assert_eq!(
        WindowingError::MismatchedDimensions {
            rows: 2,
            columns: 3,
            len: 5
        }
        .to_string(),
        "Dimension mismatch: 2 rows x 3 columns, but 5 samples"
    );
    assert_eq!(
        WindowingError::MismatchedOutput {
            expected: 16,
            got: 12
        }
        .to_string(),
        "Output length mismatch: need 16 bytes, got 12"
    );
    assert_eq!(
        WindowingError::InvalidWidth(-2.5).to_string(),
        "Invalid window width: -2.5"
    );
    assert_eq!(
        WindowingError::NoFrameInProgress.to_string(),
        "No frame in progress"
    );
    assert!(
        WindowingError::DuplicateParameter { parameter: "invert" }
            .to_string()
            .contains("'invert'")
    );
}

/// Test that errors work with `?` in functions returning a boxed error.
#[test]
fn test_error_trait() {
    fn run() -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        Ok(winlevel::apply_window_level(&[1], 0.0, 1.0)?)
    }

    let err = run().unwrap_err();
    assert!(err.to_string().starts_with("Degenerate window"));
}

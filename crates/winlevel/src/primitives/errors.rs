//! Error types for window/level operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while mapping
//! grayscale samples to display values: malformed buffers, invalid window
//! parameters, adapter misuse and the zero-width window.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (lengths, widths, names).
//! * **Deferred**: Builder misuse is recorded and reported by `build()`.
//! * **Classified**: Every variant belongs to one [`ErrorKind`], so callers can
//!   branch on the coarse category without matching each variant.
//! * **No-std**: Uses `alloc` for dynamic messages when `std` is disabled.
//!
//! ## Invariants
//!
//! * `ArithmeticDegenerate` is the only variant of kind `ArithmeticDegenerate`.
//! * Numeric values in errors are reported as `f64` regardless of the
//!   precision the transform was configured with.
//!
//! ## Non-goals
//!
//! * This module does not perform validation (see `engine::validator`).
//! * This module does not provide recovery strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Kind
// ============================================================================

/// Coarse classification of a [`WindowingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A buffer, dimension or parameter was malformed.
    InvalidArgument,

    /// The window has zero width and the configured policy rejects it.
    ArithmeticDegenerate,
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for window/level operations.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowingError {
    /// Generic invalid argument with a descriptive message.
    InvalidArgument(String),

    /// `rows * columns` does not match the number of samples.
    MismatchedDimensions {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        columns: usize,
        /// Number of samples supplied.
        len: usize,
    },

    /// The output slice does not hold exactly four bytes per sample.
    MismatchedOutput {
        /// Required output length (`4 * samples`).
        expected: usize,
        /// Length of the slice provided.
        got: usize,
    },

    /// Window width is negative, or below the minimum of the VOI function.
    InvalidWidth(f64),

    /// A parameter is NaN or infinite.
    InvalidNumericValue(String),

    /// Rescale slope must be finite and non-zero, intercept finite.
    InvalidRescale {
        /// The slope provided.
        slope: f64,
        /// The intercept provided.
        intercept: f64,
    },

    /// Bits stored must be in `1..=16`.
    InvalidBitsStored(u8),

    /// A streamed chunk would run past the end of the current frame.
    FrameOverflow {
        /// Samples in the frame.
        expected: usize,
        /// Samples that would have been received including this chunk.
        got: usize,
    },

    /// The frame was finished before all of its samples were received.
    IncompleteFrame {
        /// Samples in the frame.
        expected: usize,
        /// Samples received.
        got: usize,
    },

    /// A chunk was pushed to a streaming processor with no frame started.
    NoFrameInProgress,

    /// The selected adapter does not support the requested feature.
    UnsupportedFeature {
        /// Name of the adapter (e.g., "Streaming").
        adapter: &'static str,
        /// Name of the unsupported feature.
        feature: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// Window width is exactly zero, so `high == low`.
    ArithmeticDegenerate {
        /// Center of the degenerate window.
        center: f64,
    },
}

impl WindowingError {
    /// Coarse category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ArithmeticDegenerate { .. } => ErrorKind::ArithmeticDegenerate,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for WindowingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            Self::MismatchedDimensions { rows, columns, len } => {
                write!(
                    f,
                    "Dimension mismatch: {rows} rows x {columns} columns, but {len} samples"
                )
            }
            Self::MismatchedOutput { expected, got } => {
                write!(f, "Output length mismatch: need {expected} bytes, got {got}")
            }
            Self::InvalidWidth(width) => write!(f, "Invalid window width: {width}"),
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidRescale { slope, intercept } => {
                write!(
                    f,
                    "Invalid rescale: slope {slope}, intercept {intercept} (slope must be finite and non-zero)"
                )
            }
            Self::InvalidBitsStored(bits) => {
                write!(f, "Invalid bits_stored: {bits} (must be in [1, 16])")
            }
            Self::FrameOverflow { expected, got } => {
                write!(f, "Frame overflow: frame has {expected} samples, received {got}")
            }
            Self::IncompleteFrame { expected, got } => {
                write!(f, "Incomplete frame: expected {expected} samples, received {got}")
            }
            Self::NoFrameInProgress => write!(f, "No frame in progress"),
            Self::UnsupportedFeature { adapter, feature } => {
                write!(f, "Adapter '{adapter}' does not support feature: {feature}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::ArithmeticDegenerate { center } => {
                write!(f, "Degenerate window: zero width at center {center}")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for WindowingError {}

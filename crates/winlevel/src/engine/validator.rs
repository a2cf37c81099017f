//! Input validation for window/level configuration and buffers.
//!
//! ## Purpose
//!
//! This module checks every parameter and buffer before the executor runs,
//! so that no NaN, infinite or zero-width window ever reaches the VOI
//! functions.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * A window that passes [`Validator::validate_window`] is finite and either
//!   accepted by its VOI function or zero-width under `Threshold`.
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or correct inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::window::{WindowLevel, ZeroWidthPolicy};
use crate::math::quantize::CHANNELS;
use crate::math::rescale::Rescale;
use crate::math::voi::VoiLutFunction;
use crate::primitives::errors::WindowingError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for window/level configuration and buffers.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Buffer Validation
    // ========================================================================

    /// Output length for `samples` pixels, checked for overflow.
    pub fn output_len(samples: usize) -> Result<usize, WindowingError> {
        samples.checked_mul(CHANNELS).ok_or_else(|| {
            WindowingError::InvalidArgument(format!("{samples} samples overflow the output size"))
        })
    }

    /// Validate that `out_len` holds exactly one RGBA pixel per sample.
    pub fn validate_output_len(samples: usize, out_len: usize) -> Result<(), WindowingError> {
        let expected = Self::output_len(samples)?;

        if out_len != expected {
            return Err(WindowingError::MismatchedOutput {
                expected,
                got: out_len,
            });
        }
        Ok(())
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), WindowingError> {
        if !val.is_finite() {
            return Err(WindowingError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a window against the VOI function and the zero-width policy.
    ///
    /// # Notes
    ///
    /// * Negative widths are always rejected.
    /// * A zero width is `ArithmeticDegenerate` under `Reject`.
    /// * `Linear` additionally requires `width >= 1`.
    pub fn validate_window<T: Float>(
        window: &WindowLevel<T>,
        function: VoiLutFunction,
        policy: ZeroWidthPolicy,
    ) -> Result<(), WindowingError> {
        Self::validate_scalar(window.center, "center")?;
        Self::validate_scalar(window.width, "width")?;

        let width = window.width.to_f64().unwrap_or(f64::NAN);

        if window.width < T::zero() {
            return Err(WindowingError::InvalidWidth(width));
        }

        if window.is_degenerate() {
            return match policy {
                ZeroWidthPolicy::Reject => Err(WindowingError::ArithmeticDegenerate {
                    center: window.center.to_f64().unwrap_or(f64::NAN),
                }),
                ZeroWidthPolicy::Threshold => Ok(()),
            };
        }

        if !function.accepts_width(window.width) {
            return Err(WindowingError::InvalidWidth(width));
        }

        Ok(())
    }

    /// Validate the modality rescale.
    pub fn validate_rescale<T: Float>(rescale: &Rescale<T>) -> Result<(), WindowingError> {
        if !rescale.slope.is_finite()
            || rescale.slope == T::zero()
            || !rescale.intercept.is_finite()
        {
            return Err(WindowingError::InvalidRescale {
                slope: rescale.slope.to_f64().unwrap_or(f64::NAN),
                intercept: rescale.intercept.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate the number of significant bits per sample.
    pub fn validate_bits_stored(bits_stored: u8) -> Result<(), WindowingError> {
        if !(1..=16).contains(&bits_stored) {
            return Err(WindowingError::InvalidBitsStored(bits_stored));
        }
        Ok(())
    }

    /// Validate that exactly one window source was configured.
    pub fn validate_window_source(explicit: bool, auto: bool) -> Result<(), WindowingError> {
        match (explicit, auto) {
            (true, true) => Err(WindowingError::InvalidArgument(
                "window and auto_window are mutually exclusive".into(),
            )),
            (false, false) => Err(WindowingError::InvalidArgument(
                "no window configured; call window() or auto_window()".into(),
            )),
            _ => Ok(()),
        }
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), WindowingError> {
        if let Some(param) = duplicate_param {
            return Err(WindowingError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}

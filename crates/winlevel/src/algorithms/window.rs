//! Window parameters and the compiled per-sample mapping.
//!
//! ## Purpose
//!
//! This module defines [`WindowLevel`], the `(width, center)` pair chosen by
//! the user, and [`WindowMapper`], which combines the window with the bit
//! mask, modality rescale, VOI function and inversion into one function from
//! a stored sample to a display byte.
//!
//! ## Design notes
//!
//! * **Zero width**: a zero-width window has `high == low`, so none of the VOI
//!   functions is defined. Under [`ZeroWidthPolicy::Threshold`] the mapper
//!   switches to a step at the center instead of dividing; under
//!   [`ZeroWidthPolicy::Reject`] the engine refuses to build a mapper at all.
//! * **Rounding** follows the VOI function: `LinearExact` rounds up,
//!   `Linear` and `Sigmoid` round to nearest.
//! * **Inversion** is applied to the quantized byte, so it is exact.
//!
//! ## Invariants
//!
//! * [`WindowMapper::map`] never divides by zero and never returns a value
//!   derived from NaN.
//! * For a fixed mapper without inversion, `map` is non-decreasing in the
//!   masked sample value when the rescale slope is positive.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::quantize::{DISPLAY_MAX, constant, sample_value};
use crate::math::rescale::Rescale;
use crate::math::voi::VoiLutFunction;

// ============================================================================
// Window Level
// ============================================================================

/// A display window: the intensity range `[center - width/2, center + width/2]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowLevel<T> {
    /// Center of the window, in rescaled units.
    pub center: T,

    /// Width of the window, in rescaled units.
    pub width: T,
}

impl<T: Float> WindowLevel<T> {
    /// Create a window from its width and center.
    pub fn new(width: T, center: T) -> Self {
        Self { center, width }
    }

    /// Create the window spanning `[low, high]`.
    pub fn from_bounds(low: T, high: T) -> Self {
        let two = constant::<T>(2.0);
        Self {
            center: (low + high) / two,
            width: high - low,
        }
    }

    /// Lower and upper bounds of the window.
    pub fn bounds(&self) -> (T, T) {
        let half = self.width / constant::<T>(2.0);
        (self.center - half, self.center + half)
    }

    /// Whether the window has exactly zero width.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width == T::zero()
    }
}

// ============================================================================
// Zero Width Policy
// ============================================================================

/// Behavior for a window whose width is exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZeroWidthPolicy {
    /// Fail with `ArithmeticDegenerate`.
    #[default]
    Reject,

    /// Saturate at the center: `x < center` is black, `x >= center` is white.
    Threshold,
}

// ============================================================================
// Bit Mask
// ============================================================================

/// Mask that keeps the low `bits_stored` bits of a sample.
///
/// `bits_stored` is expected in `1..=16`; larger values keep all bits.
#[inline]
pub fn sample_mask(bits_stored: u8) -> u16 {
    if bits_stored >= 16 {
        u16::MAX
    } else {
        (1u16 << bits_stored) - 1
    }
}

// ============================================================================
// Window Mapper
// ============================================================================

/// Compiled mapping from a stored sample to a display byte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowMapper<T> {
    window: WindowLevel<T>,
    rescale: Rescale<T>,
    function: VoiLutFunction,
    mask: u16,
    invert: bool,
    threshold: bool,
}

impl<T: Float> WindowMapper<T> {
    /// Compile a mapper from already validated parameters.
    ///
    /// A zero-width window always produces a thresholding mapper; rejecting
    /// it is the caller's responsibility.
    pub fn new(
        window: WindowLevel<T>,
        rescale: Rescale<T>,
        function: VoiLutFunction,
        bits_stored: u8,
        invert: bool,
    ) -> Self {
        Self {
            window,
            rescale,
            function,
            mask: sample_mask(bits_stored),
            invert,
            threshold: window.is_degenerate(),
        }
    }

    /// The window this mapper applies.
    #[inline]
    pub fn window(&self) -> WindowLevel<T> {
        self.window
    }

    /// The bit mask applied to every sample.
    #[inline]
    pub fn mask(&self) -> u16 {
        self.mask
    }

    /// Map one stored sample to its gray display byte.
    #[inline]
    pub fn map(&self, sample: u16) -> u8 {
        let x = self.rescale.apply(sample_value::<T>(sample & self.mask));

        let gray = if self.threshold {
            if x < self.window.center {
                0
            } else {
                DISPLAY_MAX
            }
        } else {
            self.function
                .rounding()
                .apply(self.function.evaluate(x, self.window.center, self.window.width))
        };

        if self.invert {
            DISPLAY_MAX - gray
        } else {
            gray
        }
    }
}

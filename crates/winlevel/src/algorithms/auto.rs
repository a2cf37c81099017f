//! Automatic window selection from the sample range.
//!
//! ## Purpose
//!
//! When a frame carries no usable window, viewers fall back to stretching
//! the full range of the frame over the display. This module finds the range
//! of the (masked, rescaled) samples and turns it into a window that maps
//! the minimum to 0 and the maximum to 255 under the selected VOI function.
//!
//! ## Invariants
//!
//! * Under `Linear`, a range `[min, max]` yields `width = max - min + 1`, so
//!   the window is always usable (`width >= 1`).
//! * Under `LinearExact` and `Sigmoid`, a flat range yields a zero-width
//!   window, which is then subject to the zero-width policy.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::window::WindowLevel;
use crate::math::quantize::{constant, sample_value};
use crate::math::rescale::Rescale;
use crate::math::voi::VoiLutFunction;

/// Smallest and largest masked sample, or `None` for an empty buffer.
pub fn sample_range(samples: &[u16], mask: u16) -> Option<(u16, u16)> {
    let mut iter = samples.iter().map(|&v| v & mask);
    let first = iter.next()?;
    Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

/// Range of `samples` after masking and rescaling, as `(min, max)`.
///
/// A negative slope swaps the ends, so the result is always ordered.
pub fn rescaled_range<T: Float>(
    samples: &[u16],
    mask: u16,
    rescale: &Rescale<T>,
) -> Option<(T, T)> {
    let (lo, hi) = sample_range(samples, mask)?;
    let a = rescale.apply(sample_value::<T>(lo));
    let b = rescale.apply(sample_value::<T>(hi));
    Some((a.min(b), a.max(b)))
}

/// Window that stretches `[min, max]` over the display range.
pub fn window_from_range<T: Float>(min: T, max: T, function: VoiLutFunction) -> WindowLevel<T> {
    let two = constant::<T>(2.0);
    let mid = (min + max) / two;

    match function {
        VoiLutFunction::Linear => WindowLevel {
            center: mid + constant::<T>(0.5),
            width: max - min + T::one(),
        },
        VoiLutFunction::LinearExact | VoiLutFunction::Sigmoid => WindowLevel {
            center: mid,
            width: max - min,
        },
    }
}

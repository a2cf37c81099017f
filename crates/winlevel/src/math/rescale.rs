//! Modality rescale (the linear modality LUT).
//!
//! ## Purpose
//!
//! Stored pixel values are often not in physical units. CT scanners, for
//! example, store values that become Hounsfield units after
//! `slope * v + intercept`. Windows are expressed in the rescaled unit, so the
//! rescale runs before the VOI function.
//!
//! ## Invariants
//!
//! * The identity rescale is `(1, 0)` and is the default.
//! * A validated rescale has a finite, non-zero slope and a finite intercept,
//!   so it is strictly monotonic.

// External dependencies
use num_traits::Float;

/// Linear map from stored sample values to output units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rescale<T> {
    /// Multiplier applied to the stored value.
    pub slope: T,

    /// Offset added after the multiplication.
    pub intercept: T,
}

impl<T: Float> Default for Rescale<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Float> Rescale<T> {
    /// Create a rescale with the given slope and intercept.
    pub fn new(slope: T, intercept: T) -> Self {
        Self { slope, intercept }
    }

    /// The identity rescale `(1, 0)`.
    pub fn identity() -> Self {
        Self {
            slope: T::one(),
            intercept: T::zero(),
        }
    }

    /// Whether this rescale leaves values untouched.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.slope == T::one() && self.intercept == T::zero()
    }

    /// Map a stored value into output units.
    #[inline]
    pub fn apply(&self, value: T) -> T {
        if self.is_identity() {
            return value;
        }
        self.slope * value + self.intercept
    }
}

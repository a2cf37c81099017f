//! VOI LUT functions.
//!
//! ## Purpose
//!
//! This module implements the Value Of Interest functions that map a
//! rescaled intensity onto the display range `[0, 255]` given a window
//! center `c` and width `w`.
//!
//! ## Key concepts
//!
//! | Function      | Mapping                                               | Width    | Rounding  |
//! |---------------|-------------------------------------------------------|----------|-----------|
//! | `LinearExact` | `((x - c) / w + 0.5) * 255`, saturating               | `w > 0`  | `Up`      |
//! | `Linear`      | `((x - (c - 0.5)) / (w - 1) + 0.5) * 255`, saturating | `w >= 1` | `Nearest` |
//! | `Sigmoid`     | `255 / (1 + exp(-4 (x - c) / w))`                     | `w > 0`  | `Nearest` |
//!
//! `Linear` saturates to 0 for `x <= c - 0.5 - (w - 1) / 2` and to 255 for
//! `x > c - 0.5 + (w - 1) / 2`. `LinearExact` is the plain
//! `(x - low) / (high - low) * 255` with `low = c - w / 2`, `high = c + w / 2`,
//! and is the default: the window center lands on `127.5` for every width,
//! and rounding up sends it to `128` while keeping `high - 1` at `255` for a
//! 256-wide window. The DICOM `Linear` function is available on request; its
//! center level is `127.5 + 127.5 / (w - 1)`, noticeably above mid-gray for
//! narrow windows.
//!
//! ## Invariants
//!
//! * Every function is non-decreasing in `x`.
//! * [`VoiLutFunction::evaluate`] returns a value in `[0, 255]` whenever the
//!   width satisfies [`VoiLutFunction::accepts_width`].
//!
//! ## Non-goals
//!
//! * Zero-width windows are not handled here (see `algorithms::window`).
//! * Explicit VOI LUT tables (VOI LUT Sequence) are not supported.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;

// Internal dependencies
use crate::math::quantize::{Rounding, constant, display_max};
use crate::primitives::errors::WindowingError;

/// Window/level function applied after the modality rescale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VoiLutFunction {
    /// Standard DICOM linear function.
    Linear,

    /// Plain linear ramp from `low` to `high`.
    #[default]
    LinearExact,

    /// Logistic curve centered on the window center.
    Sigmoid,
}

impl VoiLutFunction {
    /// The DICOM keyword for this function.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Linear => "LINEAR",
            Self::LinearExact => "LINEAR_EXACT",
            Self::Sigmoid => "SIGMOID",
        }
    }

    /// Whether a strictly positive `width` is usable with this function.
    ///
    /// `Linear` divides by `w - 1`, and collapses to a step at `w == 1`, so
    /// anything narrower is rejected.
    pub fn accepts_width<T: Float>(self, width: T) -> bool {
        match self {
            Self::Linear => width >= T::one(),
            Self::LinearExact | Self::Sigmoid => width > T::zero(),
        }
    }

    /// How levels from this function are converted to bytes.
    pub fn rounding(self) -> Rounding {
        match self {
            Self::LinearExact => Rounding::Up,
            Self::Linear | Self::Sigmoid => Rounding::Nearest,
        }
    }

    /// Map a rescaled value `x` through the window `(center, width)`.
    ///
    /// The result is real-valued and clamped to `[0, 255]`; rounding is left
    /// to the caller.
    #[inline]
    pub fn evaluate<T: Float>(self, x: T, center: T, width: T) -> T {
        let max = display_max::<T>();
        let half = constant::<T>(0.5);

        let level = match self {
            Self::Linear => {
                let shifted = center - half;
                let half_span = (width - T::one()) * half;
                if x <= shifted - half_span {
                    return T::zero();
                }
                if x > shifted + half_span {
                    return max;
                }
                ((x - shifted) / (width - T::one()) + half) * max
            }
            Self::LinearExact => ((x - center) / width + half) * max,
            Self::Sigmoid => {
                let four = constant::<T>(4.0);
                max / (T::one() + (-four * (x - center) / width).exp())
            }
        };

        level.max(T::zero()).min(max)
    }
}

impl Display for VoiLutFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.keyword())
    }
}

impl TryFrom<&str> for VoiLutFunction {
    type Error = WindowingError;

    /// Parse a DICOM VOI LUT Function keyword; surrounding whitespace is ignored.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "LINEAR" => Ok(Self::Linear),
            "LINEAR_EXACT" => Ok(Self::LinearExact),
            "SIGMOID" => Ok(Self::Sigmoid),
            other => Err(WindowingError::InvalidArgument(format!(
                "unknown VOI LUT function '{other}'"
            ))),
        }
    }
}

//! Conversion between real-valued display levels and RGBA bytes.
//!
//! ## Purpose
//!
//! This module owns the last step of the pipeline: clamping a real display
//! level to `[0, 255]`, rounding it to a byte, and writing one RGBA pixel.
//!
//! ## Invariants
//!
//! * Both conversions are total: NaN maps to 0, values outside `[0, 255]`
//!   saturate.
//! * [`Rounding::Nearest`] rounds halves away from zero (`127.5` → `128`).
//! * [`Rounding::Up`] takes the ceiling, so any level above a byte value lights
//!   the next one (`127.5` → `128`, `254.004` → `255`). Levels within
//!   [`ceil_tolerance`] of an integer count as that integer, so arithmetic
//!   noise on an exact level never adds a step.
//! * Every written pixel has alpha [`OPAQUE`].
//!
//! ## Compatibility
//!
//! Browser viewers that store levels into a `Uint8ClampedArray` round halves
//! to even (`0.5` → `0`, `2.5` → `2`, `127.5` → `128`). Neither rounding mode
//! here reproduces that tie rule: `Up` maps `0.5` to `1` and `2.5` to `3`,
//! `Nearest` maps them to `1` and `3` as well.

// External dependencies
use num_traits::Float;

/// Largest display level.
pub const DISPLAY_MAX: u8 = 255;

/// Alpha value of every output pixel.
pub const OPAQUE: u8 = 255;

/// Bytes per output pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Convert an `f64` literal into `T`.
#[inline]
pub fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Convert a stored sample into `T`.
#[inline]
pub fn sample_value<T: Float>(value: u16) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Upper bound of the display range as `T`.
#[inline]
pub fn display_max<T: Float>() -> T {
    constant(DISPLAY_MAX as f64)
}

/// How a real display level becomes a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// Smallest byte at or above the level.
    #[default]
    Up,

    /// Nearest byte, halves away from zero.
    Nearest,
}

impl Rounding {
    /// Convert `level` to a byte with this rounding.
    #[inline]
    pub fn apply<T: Float>(self, level: T) -> u8 {
        match self {
            Self::Up => quantize_up(level),
            Self::Nearest => quantize(level),
        }
    }
}

/// Slack below an integer that [`quantize_up`] still treats as that integer.
#[inline]
pub fn ceil_tolerance<T: Float>() -> T {
    T::epsilon() * constant::<T>(4096.0)
}

/// Clamp `level` to `[0, 255]` and round it up to a byte.
#[inline]
pub fn quantize_up<T: Float>(level: T) -> u8 {
    if level.is_nan() {
        return 0;
    }
    (level - ceil_tolerance())
        .ceil()
        .max(T::zero())
        .min(display_max())
        .to_u8()
        .unwrap_or(0)
}

/// Clamp `level` to `[0, 255]` and round it to the nearest byte.
#[inline]
pub fn quantize<T: Float>(level: T) -> u8 {
    if level.is_nan() {
        return 0;
    }
    level
        .max(T::zero())
        .min(display_max())
        .round()
        .to_u8()
        .unwrap_or(0)
}

/// Write `gray` into R, G and B of `pixel`, and full opacity into A.
#[inline]
pub fn write_pixel(pixel: &mut [u8], gray: u8) {
    pixel[0] = gray;
    pixel[1] = gray;
    pixel[2] = gray;
    pixel[3] = OPAQUE;
}

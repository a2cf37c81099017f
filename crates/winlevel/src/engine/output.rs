//! Output types for window/level operations.
//!
//! ## Purpose
//!
//! This module defines [`DisplayBuffer`], the RGBA result of windowing a
//! whole frame, together with the window that was applied.
//!
//! ## Design notes
//!
//! * **Ownership**: The byte buffer is newly allocated and owned by the result;
//!   [`DisplayBuffer::into_vec`] hands it to the caller without copying.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * `data.len() == 4 * rows * columns`.
//! * Every fourth byte (alpha) is 255.
//!
//! ## Non-goals
//!
//! * This module does not compute pixels; it only stores them.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::window::WindowLevel;
use crate::math::quantize::CHANNELS;

// ============================================================================
// Result Structure
// ============================================================================

/// RGBA display buffer produced from a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayBuffer<T> {
    /// Number of rows.
    pub rows: usize,

    /// Number of columns.
    pub columns: usize,

    /// Row-major RGBA bytes, four per pixel.
    pub data: Vec<u8>,

    /// Window that was applied (resolved from the frame under auto window).
    pub window_used: WindowLevel<T>,

    /// Whether the executor indexed a lookup table.
    pub used_table: bool,
}

impl<T: Float> DisplayBuffer<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    /// Whether the buffer holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// RGBA value of the pixel at `index` in row-major order.
    pub fn pixel(&self, index: usize) -> Option<[u8; 4]> {
        let start = index.checked_mul(CHANNELS)?;
        let end = start.checked_add(CHANNELS)?;
        let px = self.data.get(start..end)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// RGBA value of the pixel at `(row, column)`.
    pub fn pixel_at(&self, row: usize, column: usize) -> Option<[u8; 4]> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.pixel(row * self.columns + column)
    }

    /// Gray level of every pixel, in row-major order.
    pub fn gray_levels(&self) -> impl Iterator<Item = u8> + '_ {
        self.data.chunks_exact(CHANNELS).map(|px| px[0])
    }

    /// The raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Take ownership of the raw RGBA bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for DisplayBuffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Dimensions:   {} x {}", self.rows, self.columns)?;
        writeln!(
            f,
            "  Window:       center {}, width {}",
            self.window_used.center, self.window_used.width
        )?;
        writeln!(
            f,
            "  Lookup table: {}",
            if self.used_table { "yes" } else { "no" }
        )?;
        writeln!(f)?;

        writeln!(f, "Display Data:")?;
        writeln!(f, "{:>8} {:>5} {:>5} {:>5} {:>5}", "Index", "R", "G", "B", "A")?;
        writeln!(f, "{:-<32}", "")?;

        // First 10 and last 10 pixels if there are more than 20
        let n = self.pixel_count();
        let head = n.min(10);
        let tail_start = if n > 20 { n - 10 } else { head };

        for idx in (0..head).chain(tail_start..n) {
            if idx == tail_start && tail_start > head {
                writeln!(f, "{:>8}", "...")?;
            }
            if let Some([r, g, b, a]) = self.pixel(idx) {
                writeln!(f, "{idx:>8} {r:>5} {g:>5} {b:>5} {a:>5}")?;
            }
        }

        Ok(())
    }
}

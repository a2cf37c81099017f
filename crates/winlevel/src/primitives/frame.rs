//! Borrowed grayscale frame with known dimensions.
//!
//! ## Purpose
//!
//! A [`Frame`] pairs a row-major sample buffer with its dimensions so that
//! the dimension check happens once, at construction, instead of at every
//! use site.
//!
//! ## Invariants
//!
//! * `rows * columns == samples.len()` for every constructed frame.
//! * The samples are never mutated.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// Internal dependencies
use crate::primitives::errors::WindowingError;

/// Row-major buffer of unsigned 16-bit samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    rows: usize,
    columns: usize,
    samples: &'a [u16],
}

impl<'a> Frame<'a> {
    /// Wrap `samples` as a `rows x columns` frame.
    pub fn new(rows: usize, columns: usize, samples: &'a [u16]) -> Result<Self, WindowingError> {
        let expected = rows.checked_mul(columns).ok_or_else(|| {
            WindowingError::InvalidArgument(format!(
                "frame dimensions {rows} x {columns} overflow usize"
            ))
        })?;

        if expected != samples.len() {
            return Err(WindowingError::MismatchedDimensions {
                rows,
                columns,
                len: samples.len(),
            });
        }

        Ok(Self {
            rows,
            columns,
            samples,
        })
    }

    /// Treat `samples` as a single row.
    pub fn from_row(samples: &'a [u16]) -> Self {
        Self {
            rows: 1,
            columns: samples.len(),
            samples,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The underlying samples.
    #[inline]
    pub fn samples(&self) -> &'a [u16] {
        self.samples
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the frame holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples of row `row`, or `None` if out of range.
    pub fn row(&self, row: usize) -> Option<&'a [u16]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.columns;
        self.samples.get(start..start + self.columns)
    }
}

//! Precomputed lookup tables.
//!
//! ## Purpose
//!
//! Samples have at most 16 significant bits, so the whole pipeline from
//! stored sample to display byte fits in a table of `2^bits_stored` bytes.
//! For frames with more samples than table entries, building the table once
//! and indexing it is cheaper than evaluating the VOI function per sample.
//!
//! ## Invariants
//!
//! * `Lut::get(v) == mapper.map(v)` for every `u16` value `v`.
//! * The table length is `2^bits_stored`, and every masked index is in range.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::window::WindowMapper;

// ============================================================================
// LUT Policy
// ============================================================================

/// Whether the executor precomputes a lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LutPolicy {
    /// Use a table when the frame has at least as many samples as entries.
    #[default]
    Auto,

    /// Always build a table.
    Always,

    /// Evaluate every sample directly.
    Never,
}

impl LutPolicy {
    /// Decide whether to build a table for `samples` values of `bits_stored` bits.
    pub fn use_table(self, samples: usize, bits_stored: u8) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => samples > 0 && samples >= table_len(bits_stored),
        }
    }
}

/// Number of entries in a table for `bits_stored` bits.
#[inline]
pub fn table_len(bits_stored: u8) -> usize {
    1usize << bits_stored.min(16)
}

// ============================================================================
// Lookup Table
// ============================================================================

/// Sample-to-gray lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lut {
    table: Vec<u8>,
    mask: u16,
}

impl Lut {
    /// Tabulate `mapper` over every value that survives its bit mask.
    pub fn build<T: Float>(mapper: &WindowMapper<T>) -> Self {
        let mask = mapper.mask();
        let table: Vec<u8> = (0..=mask).map(|v| mapper.map(v)).collect();

        Self { table, mask }
    }

    /// Gray value for a stored sample.
    #[inline]
    pub fn get(&self, sample: u16) -> u8 {
        self.table[(sample & self.mask) as usize]
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table is empty (never true for a built table).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The raw table, indexed by masked sample value.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.table
    }
}

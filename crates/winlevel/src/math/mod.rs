//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure per-value functions of the display pipeline:
//! - Modality rescale (stored value to output unit)
//! - VOI LUT functions (output unit to real display level)
//! - Quantization (real display level to RGBA byte)
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Modality rescale.
pub mod rescale;

/// VOI LUT functions.
pub mod voi;

/// Display level quantization.
pub mod quantize;

//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer composes the math layer into complete sample-to-byte mappings:
//! - Window parameters and the compiled per-sample mapper
//! - Lookup tables over the stored bit range
//! - Automatic window selection from the frame's range
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Window parameters and the per-sample mapper.
pub mod window;

/// Lookup tables.
pub mod lut;

/// Automatic window selection.
pub mod auto;

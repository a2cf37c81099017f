//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing processors that adapt the engine layer
//! to how samples arrive:
//!
//! - **Batch**: The whole frame is in memory
//! - **Streaming**: The frame arrives in raster-ordered chunks
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Whole-frame batch adapter.
pub mod batch;

/// Chunked streaming adapter.
pub mod streaming;

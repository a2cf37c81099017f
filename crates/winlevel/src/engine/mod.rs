//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer validates configuration and buffers, plans the transform and
//! runs it over sample buffers, sequentially or on the rayon pool.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Planning and execution.
pub mod executor;

/// Output types.
pub mod output;

/// Validation.
pub mod validator;

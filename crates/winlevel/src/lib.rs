//! # winlevel: Window/Level display mapping for Rust
//!
//! Maps 16-bit grayscale samples (CT, MR, CR, ...) to 8-bit RGBA display
//! buffers through a window width and center, the standard radiology
//! convention for choosing which intensities are visible.
//!
//! ## What is windowing?
//!
//! A display shows 256 gray levels; medical images store thousands. The
//! window `(width, center)` selects the intensity range
//! `[center - width/2, center + width/2]` and stretches it over the display:
//! values below the window are black, values above it are white, and values
//! inside it are mapped by a VOI LUT function (a linear ramp by default).
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use winlevel::prelude::*;
//!
//! let samples = vec![0u16, 128, 255, 1000];
//!
//! let rgba = apply_window_level(&samples, 256.0, 128.0)?;
//!
//! assert_eq!(
//!     rgba,
//!     vec![0, 0, 0, 255, 128, 128, 128, 255, 255, 255, 255, 255, 255, 255, 255, 255]
//! );
//! # Result::<(), WindowingError>::Ok(())
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use winlevel::prelude::*;
//!
//! // A 2x3 CT frame, stored values with a -1024 intercept
//! let samples = vec![0u16, 1024, 1064, 1104, 2024, 4095];
//! let frame = Frame::new(2, 3, &samples)?;
//!
//! let model = Windowing::new()
//!     .window(400.0, 40.0)            // Soft-tissue window, in HU
//!     .rescale(1.0, -1024.0)          // Stored value to HU
//!     .voi_function(Linear)           // DICOM linear, not the default
//!     .bits_stored(12)                // Ignore bits above bit 11
//!     .invert(false)                  // MONOCHROME2
//!     .zero_width_policy(Reject)      // Zero width is an error
//!     .lut_policy(Auto)               // Table for large frames
//!     .adapter(Batch)
//!     .build()?;
//!
//! let display = model.apply_frame(&frame)?;
//! assert_eq!(display.pixel_at(0, 0), Some([0, 0, 0, 255]));
//! assert_eq!(display.pixel_at(1, 2), Some([255, 255, 255, 255]));
//! println!("{}", display);
//! # Result::<(), WindowingError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every operation returns `Result<_, WindowingError>`. Errors are grouped by
//! [`ErrorKind`](prelude::ErrorKind):
//!
//! - **`InvalidArgument`**: malformed buffers or parameters (dimension
//!   mismatch, wrong output length, negative or non-finite width, ...).
//! - **`ArithmeticDegenerate`**: a zero-width window under the default
//!   `Reject` policy.
//!
//! ```rust
//! use winlevel::prelude::*;
//!
//! match apply_window_level(&[10, 20], 0.0, 15.0) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => assert_eq!(e.kind(), ErrorKind::ArithmeticDegenerate),
//! }
//!
//! // Saturate at the center instead
//! let model = Windowing::new()
//!     .window(0.0, 15.0)
//!     .zero_width_policy(Threshold)
//!     .adapter(Batch)
//!     .build()?;
//! assert_eq!(model.apply(&[10, 20])?, vec![0, 0, 0, 255, 255, 255, 255, 255]);
//! # Result::<(), WindowingError>::Ok(())
//! ```
//!
//! ## Streaming
//!
//! ```rust
//! use winlevel::prelude::*;
//!
//! let mut stream = Windowing::new()
//!     .window(256.0, 128.0)
//!     .adapter(Streaming)
//!     .build()?;
//!
//! stream.new_frame(2, 2)?;
//! let top = stream.process_chunk(&[0, 255])?;
//! let bottom = stream.process_chunk(&[128, 1000])?;
//! let summary = stream.finish()?;
//!
//! assert_eq!(top.len() + bottom.len(), 16);
//! assert_eq!(summary.chunks, 2);
//! # Result::<(), WindowingError>::Ok(())
//! ```
//!
//! ## Cargo features
//!
//! - `std` (default): standard library support; disable for `no_std`.
//! - `parallel`: split large frames across the `rayon` thread pool.
//! - `serde`: `Serialize`/`Deserialize` for window presets and policies.
//! - `dev`: expose internal layers for integration tests.
//!
//! ## Logging
//!
//! The crate emits `tracing` events (`debug` when a plan or lookup table is
//! built, `trace` per transform) and never installs a subscriber.
//!
//! ## References
//!
//! - DICOM PS3.3, C.11.2.1.2 "Window Center and Window Width"
//! - DICOM PS3.3, C.11.1 "Modality LUT Module"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors and frame type.
mod primitives;

// Layer 2: Math - per-value functions.
mod math;

// Layer 3: Algorithms - window mapper, lookup tables, auto window.
mod algorithms;

// Layer 4: Engine - validation, planning and execution.
mod engine;

// Layer 5: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Streaming},
        BatchWindowing, DisplayBuffer, ErrorKind, Frame,
        LutPolicy::{Always, Auto, Never},
        Rescale, StreamSummary, StreamingWindowing,
        VoiLutFunction::{Linear, LinearExact, Sigmoid},
        WindowLevel, WindowingBuilder as Windowing, WindowingError,
        ZeroWidthPolicy::{Reject, Threshold},
        apply_window_level,
    };
}

pub use api::{
    BatchWindowing, DisplayBuffer, ErrorKind, Frame, LutPolicy, Rescale, Rounding,
    StreamSummary, StreamingWindowing, VoiLutFunction, WindowLevel, WindowingAdapter,
    WindowingBuilder, WindowingError, ZeroWidthPolicy, apply_window_level,
};

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}

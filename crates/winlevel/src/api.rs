//! High-level API for window/level transforms.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: the one-call
//! [`apply_window_level`] function and a fluent builder for configuring the
//! full pipeline (rescale, VOI function, inversion, bit depth, policies) and
//! choosing an execution adapter (Batch or Streaming).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Marker types transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for the window precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`WindowingBuilder`] via `Windowing::new()`.
//! 2. Chain configuration methods (`.window()`, `.rescale()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Batch)` to get an execution builder.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::BatchWindowingBuilder;
use crate::adapters::streaming::StreamingWindowingBuilder;

// Publicly re-exported types
pub use crate::adapters::batch::BatchWindowing;
pub use crate::adapters::streaming::{StreamSummary, StreamingWindowing};
pub use crate::algorithms::lut::LutPolicy;
pub use crate::algorithms::window::{WindowLevel, ZeroWidthPolicy};
pub use crate::engine::output::DisplayBuffer;
pub use crate::math::quantize::Rounding;
pub use crate::math::rescale::Rescale;
pub use crate::math::voi::VoiLutFunction;
pub use crate::primitives::errors::{ErrorKind, WindowingError};
pub use crate::primitives::frame::Frame;

/// Map 16-bit samples to RGBA bytes through the window `(width, center)`.
///
/// Uses the default pipeline: no rescale, `LinearExact` VOI function with
/// levels rounded up, 16 bits stored, no inversion, and zero-width windows
/// rejected with
/// [`WindowingError::ArithmeticDegenerate`].
///
/// ```rust
/// use winlevel::prelude::*;
///
/// let rgba = apply_window_level(&[0, 128, 255, 1000], 256.0, 128.0)?;
/// assert_eq!(&rgba[4..8], &[128, 128, 128, 255]);
/// # Result::<(), WindowingError>::Ok(())
/// ```
pub fn apply_window_level(
    samples: &[u16],
    window_width: f64,
    window_center: f64,
) -> Result<Vec<u8>, WindowingError> {
    WindowingBuilder::new()
        .window(window_width, window_center)
        .adapter(Batch)
        .build()?
        .apply(samples)
}

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Streaming};
}

/// Fluent builder for configuring the window/level pipeline.
#[derive(Debug, Clone)]
pub struct WindowingBuilder<T> {
    /// Explicit window.
    pub window: Option<WindowLevel<T>>,

    /// Derive the window from each frame's range (Batch only).
    pub auto_window: Option<bool>,

    /// Modality rescale (default: identity).
    pub rescale: Option<Rescale<T>>,

    /// VOI LUT function (default: LinearExact).
    pub voi_function: Option<VoiLutFunction>,

    /// Invert display levels (default: false).
    pub invert: Option<bool>,

    /// Significant bits per sample (default: 16).
    pub bits_stored: Option<u8>,

    /// Behavior for zero-width windows (default: Reject).
    pub zero_width_policy: Option<ZeroWidthPolicy>,

    /// Lookup table policy (default: Auto).
    pub lut_policy: Option<LutPolicy>,

    /// Parallel execution hint (requires the `parallel` feature).
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for WindowingBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> WindowingBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: WindowingAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            window: None,
            auto_window: None,
            rescale: None,
            voi_function: None,
            invert: None,
            bits_stored: None,
            zero_width_policy: None,
            lut_policy: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the window from its width and center.
    pub fn window(mut self, width: T, center: T) -> Self {
        if self.window.is_some() {
            self.duplicate_param = Some("window");
        }
        self.window = Some(WindowLevel::new(width, center));
        self
    }

    /// Derive the window from the range of each frame.
    pub fn auto_window(mut self) -> Self {
        if self.auto_window.is_some() {
            self.duplicate_param = Some("auto_window");
        }
        self.auto_window = Some(true);
        self
    }

    /// Set the modality rescale (`slope * v + intercept`).
    pub fn rescale(mut self, slope: T, intercept: T) -> Self {
        if self.rescale.is_some() {
            self.duplicate_param = Some("rescale");
        }
        self.rescale = Some(Rescale::new(slope, intercept));
        self
    }

    /// Set the VOI LUT function.
    pub fn voi_function(mut self, function: VoiLutFunction) -> Self {
        if self.voi_function.is_some() {
            self.duplicate_param = Some("voi_function");
        }
        self.voi_function = Some(function);
        self
    }

    /// Invert display levels (MONOCHROME1 or viewport invert).
    pub fn invert(mut self, invert: bool) -> Self {
        if self.invert.is_some() {
            self.duplicate_param = Some("invert");
        }
        self.invert = Some(invert);
        self
    }

    /// Set the number of significant bits per sample.
    pub fn bits_stored(mut self, bits: u8) -> Self {
        if self.bits_stored.is_some() {
            self.duplicate_param = Some("bits_stored");
        }
        self.bits_stored = Some(bits);
        self
    }

    /// Set the behavior for zero-width windows.
    pub fn zero_width_policy(mut self, policy: ZeroWidthPolicy) -> Self {
        if self.zero_width_policy.is_some() {
            self.duplicate_param = Some("zero_width_policy");
        }
        self.zero_width_policy = Some(policy);
        self
    }

    /// Set the lookup table policy.
    pub fn lut_policy(mut self, policy: LutPolicy) -> Self {
        if self.lut_policy.is_some() {
            self.duplicate_param = Some("lut_policy");
        }
        self.lut_policy = Some(policy);
        self
    }

    /// Split work across the rayon pool (no-op without the `parallel` feature).
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait WindowingAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`WindowingBuilder`] into a specialized execution builder.
    fn convert(builder: WindowingBuilder<T>) -> Self::Output;
}

/// Marker for whole-frame batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> WindowingAdapter<T> for Batch {
    type Output = BatchWindowingBuilder<T>;

    fn convert(builder: WindowingBuilder<T>) -> Self::Output {
        let mut result = BatchWindowingBuilder::default();

        result.window = builder.window;
        if let Some(auto) = builder.auto_window {
            result.auto_window = auto;
        }
        if let Some(rescale) = builder.rescale {
            result.rescale = rescale;
        }
        if let Some(function) = builder.voi_function {
            result.voi_function = function;
        }
        if let Some(invert) = builder.invert {
            result.invert = invert;
        }
        if let Some(bits) = builder.bits_stored {
            result.bits_stored = bits;
        }
        if let Some(policy) = builder.zero_width_policy {
            result.zero_width_policy = policy;
        }
        if let Some(policy) = builder.lut_policy {
            result.lut_policy = policy;
        }
        result.parallel = builder.parallel;

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for chunked streaming processing.
#[derive(Debug, Clone, Copy)]
pub struct Streaming;

impl<T: Float> WindowingAdapter<T> for Streaming {
    type Output = StreamingWindowingBuilder<T>;

    fn convert(builder: WindowingBuilder<T>) -> Self::Output {
        let mut result = StreamingWindowingBuilder::default();

        result.window = builder.window;
        if let Some(rescale) = builder.rescale {
            result.rescale = rescale;
        }
        if let Some(function) = builder.voi_function {
            result.voi_function = function;
        }
        if let Some(invert) = builder.invert {
            result.invert = invert;
        }
        if let Some(bits) = builder.bits_stored {
            result.bits_stored = bits;
        }
        if let Some(policy) = builder.zero_width_policy {
            result.zero_width_policy = policy;
        }
        if let Some(policy) = builder.lut_policy {
            result.lut_policy = policy;
        }
        result.parallel = builder.parallel;

        // The range of a streamed frame is unknown until its last chunk
        if builder.auto_window == Some(true) {
            result.deferred_error = Some(WindowingError::UnsupportedFeature {
                adapter: "Streaming",
                feature: "auto_window",
            });
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

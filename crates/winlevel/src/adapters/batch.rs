//! Batch adapter for whole-frame window/level transforms.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter: the complete sample
//! buffer is in memory and is mapped to a newly allocated RGBA buffer in one
//! call. It is the adapter a renderer uses on every window/level change.
//!
//! ## Design notes
//!
//! * **Processing**: Processes the entire buffer in a single pass.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Reuse**: A built processor is immutable and can be applied to any
//!   number of frames, from any number of threads.
//!
//! ## Invariants
//!
//! * The output holds exactly four bytes per input sample.
//! * Output pixel order matches input sample order.
//! * Explicit windows are validated at build time; auto windows are validated
//!   per frame, once the range is known.
//!
//! ## Non-goals
//!
//! * This adapter does not accept partial frames (use the streaming adapter).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::lut::LutPolicy;
use crate::algorithms::window::{WindowLevel, ZeroWidthPolicy};
use crate::engine::executor::{WindowSource, WindowingConfig, WindowingExecutor};
use crate::engine::output::DisplayBuffer;
use crate::engine::validator::Validator;
use crate::math::rescale::Rescale;
use crate::math::voi::VoiLutFunction;
use crate::primitives::errors::WindowingError;
use crate::primitives::frame::Frame;

// ============================================================================
// Batch Windowing Builder
// ============================================================================

/// Builder for the batch window/level processor.
#[derive(Debug, Clone)]
pub struct BatchWindowingBuilder<T> {
    /// Explicit window
    pub window: Option<WindowLevel<T>>,

    /// Derive the window from each frame's range
    pub auto_window: bool,

    /// Modality rescale
    pub rescale: Rescale<T>,

    /// VOI LUT function
    pub voi_function: VoiLutFunction,

    /// Invert display levels
    pub invert: bool,

    /// Significant bits per sample
    pub bits_stored: u8,

    /// Policy for zero-width windows
    pub zero_width_policy: ZeroWidthPolicy,

    /// Lookup table policy
    pub lut_policy: LutPolicy,

    /// Parallel execution hint
    pub parallel: Option<bool>,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<WindowingError>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BatchWindowingBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BatchWindowingBuilder<T> {
    /// Create a new batch builder with default parameters and no window.
    fn new() -> Self {
        Self {
            window: None,
            auto_window: false,
            rescale: Rescale::identity(),
            voi_function: VoiLutFunction::default(),
            invert: false,
            bits_stored: 16,
            zero_width_policy: ZeroWidthPolicy::default(),
            lut_policy: LutPolicy::default(),
            parallel: None,
            deferred_error: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set an explicit window from its width and center.
    pub fn window(mut self, width: T, center: T) -> Self {
        self.window = Some(WindowLevel::new(width, center));
        self
    }

    /// Derive the window from the range of each frame.
    pub fn auto_window(mut self) -> Self {
        self.auto_window = true;
        self
    }

    /// Set the modality rescale.
    pub fn rescale(mut self, slope: T, intercept: T) -> Self {
        self.rescale = Rescale::new(slope, intercept);
        self
    }

    /// Set the VOI LUT function.
    pub fn voi_function(mut self, function: VoiLutFunction) -> Self {
        self.voi_function = function;
        self
    }

    /// Invert display levels (MONOCHROME1).
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Set the number of significant bits per sample.
    pub fn bits_stored(mut self, bits: u8) -> Self {
        self.bits_stored = bits;
        self
    }

    /// Set the zero-width window policy.
    pub fn zero_width_policy(mut self, policy: ZeroWidthPolicy) -> Self {
        self.zero_width_policy = policy;
        self
    }

    /// Set the lookup table policy.
    pub fn lut_policy(mut self, policy: LutPolicy) -> Self {
        self.lut_policy = policy;
        self
    }

    /// Set parallel execution hint.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchWindowing<T>, WindowingError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Exactly one window source
        Validator::validate_window_source(self.window.is_some(), self.auto_window)?;

        Validator::validate_rescale(&self.rescale)?;
        Validator::validate_bits_stored(self.bits_stored)?;

        let source = match self.window {
            Some(window) => {
                Validator::validate_window(&window, self.voi_function, self.zero_width_policy)?;
                WindowSource::Explicit(window)
            }
            None => WindowSource::Auto,
        };

        Ok(BatchWindowing {
            config: WindowingConfig {
                window: source,
                rescale: self.rescale,
                function: self.voi_function,
                invert: self.invert,
                bits_stored: self.bits_stored,
                zero_width_policy: self.zero_width_policy,
                lut_policy: self.lut_policy,
                parallel: self.parallel.unwrap_or(false),
            },
        })
    }
}

// ============================================================================
// Batch Windowing Processor
// ============================================================================

/// Batch window/level processor.
#[derive(Debug, Clone)]
pub struct BatchWindowing<T> {
    config: WindowingConfig<T>,
}

impl<T: Float + Send + Sync> BatchWindowing<T> {
    /// The resolved configuration.
    pub fn config(&self) -> &WindowingConfig<T> {
        &self.config
    }

    /// Map `samples` to a newly allocated RGBA buffer.
    pub fn apply(&self, samples: &[u16]) -> Result<Vec<u8>, WindowingError> {
        let mut out = vec![0u8; Validator::output_len(samples.len())?];
        WindowingExecutor::run_with_config(samples, &mut out, &self.config)?;
        Ok(out)
    }

    /// Map `samples` into a caller-owned buffer of `4 * samples.len()` bytes.
    pub fn apply_into(&self, samples: &[u16], out: &mut [u8]) -> Result<(), WindowingError> {
        WindowingExecutor::run_with_config(samples, out, &self.config)?;
        Ok(())
    }

    /// Map a frame, keeping its dimensions and the window applied.
    pub fn apply_frame(&self, frame: &Frame<'_>) -> Result<DisplayBuffer<T>, WindowingError> {
        let samples = frame.samples();
        let mut data = vec![0u8; Validator::output_len(samples.len())?];
        let output = WindowingExecutor::run_with_config(samples, &mut data, &self.config)?;

        Ok(DisplayBuffer {
            rows: frame.rows(),
            columns: frame.columns(),
            data,
            window_used: output.window,
            used_table: output.used_table,
        })
    }
}

//! Streaming adapter for frames delivered in pieces.
//!
//! ## Purpose
//!
//! Decoders often hand out a frame as a sequence of row bands or tiles in
//! raster order. This adapter maps each piece as it arrives, so display
//! bytes can be uploaded before the whole frame is decoded.
//!
//! ## Design notes
//!
//! * **Strategy**: The window and lookup table are planned once per frame in
//!   [`StreamingWindowing::new_frame`], from the frame's total size.
//! * **Cursor**: The processor counts received samples and refuses chunks
//!   that run past the end of the frame.
//! * **Equivalence**: Any split of a frame into chunks yields the same bytes
//!   as the batch adapter with the same configuration.
//!
//! ## Invariants
//!
//! * At most one frame is in progress at a time.
//! * `received <= rows * columns` for the frame in progress.
//!
//! ## Non-goals
//!
//! * This adapter does not support auto window (the range is not known until
//!   the last chunk).
//! * This adapter does not reorder chunks; they must arrive in raster order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::mem::take;
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::algorithms::lut::LutPolicy;
use crate::algorithms::window::{WindowLevel, ZeroWidthPolicy};
use crate::engine::executor::{ExecutionPlan, WindowSource, WindowingConfig};
use crate::engine::validator::Validator;
use crate::math::rescale::Rescale;
use crate::math::voi::VoiLutFunction;
use crate::primitives::errors::WindowingError;

// ============================================================================
// Streaming Windowing Builder
// ============================================================================

/// Builder for the streaming window/level processor.
#[derive(Debug, Clone)]
pub struct StreamingWindowingBuilder<T> {
    /// Explicit window
    pub window: Option<WindowLevel<T>>,

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

impl<T: Float> Default for StreamingWindowingBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> StreamingWindowingBuilder<T> {
    /// Create a new streaming builder with default parameters and no window.
    fn new() -> Self {
        Self {
            window: None,
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

    /// Set the window from its width and center.
    pub fn window(mut self, width: T, center: T) -> Self {
        self.window = Some(WindowLevel::new(width, center));
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

    /// Build the streaming processor.
    pub fn build(self) -> Result<StreamingWindowing<T>, WindowingError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_rescale(&self.rescale)?;
        Validator::validate_bits_stored(self.bits_stored)?;

        let window = self.window.ok_or_else(|| {
            WindowingError::InvalidArgument("no window configured; call window()".into())
        })?;
        Validator::validate_window(&window, self.voi_function, self.zero_width_policy)?;

        Ok(StreamingWindowing {
            config: WindowingConfig {
                window: WindowSource::Explicit(window),
                rescale: self.rescale,
                function: self.voi_function,
                invert: self.invert,
                bits_stored: self.bits_stored,
                zero_width_policy: self.zero_width_policy,
                lut_policy: self.lut_policy,
                parallel: self.parallel.unwrap_or(false),
            },
            frame: None,
        })
    }
}

// ============================================================================
// Stream Summary
// ============================================================================

/// Summary of a completed streamed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamSummary<T> {
    /// Number of rows.
    pub rows: usize,

    /// Number of columns.
    pub columns: usize,

    /// Samples received.
    pub samples: usize,

    /// Chunks received.
    pub chunks: usize,

    /// Window that was applied.
    pub window_used: WindowLevel<T>,

    /// Whether a lookup table was used.
    pub used_table: bool,
}

// ============================================================================
// Streaming Windowing Processor
// ============================================================================

#[derive(Debug)]
struct FrameState<T> {
    plan: ExecutionPlan<T>,
    rows: usize,
    columns: usize,
    expected: usize,
    received: usize,
    chunks: usize,
}

/// Streaming window/level processor.
#[derive(Debug)]
pub struct StreamingWindowing<T> {
    config: WindowingConfig<T>,
    frame: Option<FrameState<T>>,
}

impl<T: Float + Send + Sync> StreamingWindowing<T> {
    /// The resolved configuration.
    pub fn config(&self) -> &WindowingConfig<T> {
        &self.config
    }

    /// Start a `rows x columns` frame, discarding any frame in progress.
    pub fn new_frame(&mut self, rows: usize, columns: usize) -> Result<(), WindowingError> {
        let expected = rows.checked_mul(columns).ok_or_else(|| {
            WindowingError::InvalidArgument("frame dimensions overflow usize".into())
        })?;

        if let Some(old) = &self.frame {
            if old.received < old.expected {
                debug!(
                    received = old.received,
                    expected = old.expected,
                    "discarding incomplete frame"
                );
            }
        }

        let plan = ExecutionPlan::prepare(&self.config, &[], expected)?;
        self.frame = Some(FrameState {
            plan,
            rows,
            columns,
            expected,
            received: 0,
            chunks: 0,
        });
        Ok(())
    }

    /// Whether a frame is in progress.
    pub fn in_progress(&self) -> bool {
        self.frame.is_some()
    }

    /// Samples still expected for the frame in progress.
    pub fn remaining(&self) -> usize {
        self.frame
            .as_ref()
            .map_or(0, |frame| frame.expected - frame.received)
    }

    /// Map the next chunk of the frame to a newly allocated RGBA buffer.
    pub fn process_chunk(&mut self, samples: &[u16]) -> Result<Vec<u8>, WindowingError> {
        let mut out = vec![0u8; Validator::output_len(samples.len())?];
        self.process_chunk_into(samples, &mut out)?;
        Ok(out)
    }

    /// Map the next chunk of the frame into a caller-owned buffer.
    pub fn process_chunk_into(
        &mut self,
        samples: &[u16],
        out: &mut [u8],
    ) -> Result<(), WindowingError> {
        let frame = self
            .frame
            .as_mut()
            .ok_or(WindowingError::NoFrameInProgress)?;

        let got = frame.received + samples.len();
        if got > frame.expected {
            return Err(WindowingError::FrameOverflow {
                expected: frame.expected,
                got,
            });
        }

        frame.plan.write(samples, out)?;
        frame.received = got;
        frame.chunks += 1;
        Ok(())
    }

    /// Close the frame in progress.
    ///
    /// The frame is closed even when it is incomplete; the error reports how
    /// many samples were missing.
    pub fn finish(&mut self) -> Result<StreamSummary<T>, WindowingError> {
        let frame = take(&mut self.frame).ok_or(WindowingError::NoFrameInProgress)?;

        if frame.received != frame.expected {
            return Err(WindowingError::IncompleteFrame {
                expected: frame.expected,
                got: frame.received,
            });
        }

        Ok(StreamSummary {
            rows: frame.rows,
            columns: frame.columns,
            samples: frame.received,
            chunks: frame.chunks,
            window_used: frame.plan.window(),
            used_table: frame.plan.uses_table(),
        })
    }
}

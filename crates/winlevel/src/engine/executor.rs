//! Execution engine for window/level transforms.
//!
//! ## Purpose
//!
//! This module turns a validated configuration into an [`ExecutionPlan`]
//! (resolved window, compiled mapper, optional lookup table) and runs the
//! plan over a sample buffer, writing one RGBA pixel per sample.
//!
//! ## Design notes
//!
//! * Planning is separate from writing so the streaming adapter can plan once
//!   per frame and write many chunks.
//! * The lookup table and the direct mapper produce identical bytes; the
//!   table is only a cost trade-off.
//! * With the `parallel` feature, writing is split across the `rayon` pool.
//!   Every pixel depends on one sample only, so the result does not depend
//!   on the split.
//!
//! ## Invariants
//!
//! * `out.len() == 4 * samples.len()` before any byte is written.
//! * Every written pixel has `R == G == B` and `A == 255`.
//!
//! ## Non-goals
//!
//! * This module does not own output buffers (handled by adapters).

// External dependencies
use num_traits::Float;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

// Internal dependencies
use crate::algorithms::auto::{rescaled_range, window_from_range};
use crate::algorithms::lut::{Lut, LutPolicy};
use crate::algorithms::window::{WindowLevel, WindowMapper, ZeroWidthPolicy, sample_mask};
use crate::engine::validator::Validator;
use crate::math::quantize::{CHANNELS, write_pixel};
use crate::math::rescale::Rescale;
use crate::math::voi::VoiLutFunction;
use crate::primitives::errors::WindowingError;

// ============================================================================
// Configuration
// ============================================================================

/// Where the window comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowSource<T> {
    /// A fixed window supplied by the caller.
    Explicit(WindowLevel<T>),

    /// Stretch the range of each frame over the display.
    Auto,
}

/// Resolved execution configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowingConfig<T> {
    /// Window source.
    pub window: WindowSource<T>,

    /// Modality rescale applied before windowing.
    pub rescale: Rescale<T>,

    /// VOI LUT function.
    pub function: VoiLutFunction,

    /// Invert the display levels.
    pub invert: bool,

    /// Significant bits per sample.
    pub bits_stored: u8,

    /// Policy for zero-width windows.
    pub zero_width_policy: ZeroWidthPolicy,

    /// Lookup table policy.
    pub lut_policy: LutPolicy,

    /// Split writing across the rayon pool (requires the `parallel` feature).
    pub parallel: bool,
}

impl<T: Float> WindowingConfig<T> {
    /// Configuration with defaults for everything except the window.
    pub fn with_window(window: WindowSource<T>) -> Self {
        Self {
            window,
            rescale: Rescale::identity(),
            function: VoiLutFunction::default(),
            invert: false,
            bits_stored: 16,
            zero_width_policy: ZeroWidthPolicy::default(),
            lut_policy: LutPolicy::default(),
            parallel: false,
        }
    }
}

/// Output from a single executor run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExecutorOutput<T> {
    /// Window actually applied (resolved from the range under `Auto`).
    pub window: WindowLevel<T>,

    /// Whether a lookup table was used.
    pub used_table: bool,
}

// ============================================================================
// Execution Plan
// ============================================================================

/// A resolved window with its compiled mapper and optional lookup table.
#[derive(Debug, Clone)]
pub struct ExecutionPlan<T> {
    mapper: WindowMapper<T>,
    lut: Option<Lut>,
    parallel: bool,
}

impl<T: Float + Send + Sync> ExecutionPlan<T> {
    /// Resolve and validate the window, then compile the mapping.
    ///
    /// `samples` is only read under [`WindowSource::Auto`]. `frame_len` is the
    /// total number of samples the plan will be used for, and drives the
    /// lookup table decision.
    pub fn prepare(
        config: &WindowingConfig<T>,
        samples: &[u16],
        frame_len: usize,
    ) -> Result<Self, WindowingError> {
        let window = match config.window {
            WindowSource::Explicit(window) => window,
            WindowSource::Auto => {
                let mask = sample_mask(config.bits_stored);
                let (min, max) = rescaled_range(samples, mask, &config.rescale).ok_or_else(
                    || WindowingError::InvalidArgument("auto window needs at least one sample".into()),
                )?;
                window_from_range(min, max, config.function)
            }
        };

        Validator::validate_window(&window, config.function, config.zero_width_policy)?;

        let mapper = WindowMapper::new(
            window,
            config.rescale,
            config.function,
            config.bits_stored,
            config.invert,
        );

        let lut = if config.lut_policy.use_table(frame_len, config.bits_stored) {
            let lut = Lut::build(&mapper);
            debug!(entries = lut.len(), "built window/level lookup table");
            Some(lut)
        } else {
            None
        };

        debug!(
            center = window.center.to_f64().unwrap_or(f64::NAN),
            width = window.width.to_f64().unwrap_or(f64::NAN),
            function = config.function.keyword(),
            invert = config.invert,
            "prepared window/level plan"
        );

        Ok(Self {
            mapper,
            lut,
            parallel: config.parallel,
        })
    }

    /// The window this plan applies.
    pub fn window(&self) -> WindowLevel<T> {
        self.mapper.window()
    }

    /// Whether this plan indexes a lookup table.
    pub fn uses_table(&self) -> bool {
        self.lut.is_some()
    }

    /// Whether writing is split across threads.
    pub fn is_parallel(&self) -> bool {
        self.parallel && cfg!(feature = "parallel")
    }

    /// Gray value of a single sample.
    #[inline]
    pub fn gray(&self, sample: u16) -> u8 {
        match &self.lut {
            Some(lut) => lut.get(sample),
            None => self.mapper.map(sample),
        }
    }

    /// Write one RGBA pixel per sample into `out`.
    pub fn write(&self, samples: &[u16], out: &mut [u8]) -> Result<(), WindowingError> {
        Validator::validate_output_len(samples.len(), out.len())?;

        trace!(
            samples = samples.len(),
            table = self.uses_table(),
            parallel = self.is_parallel(),
            "applying window/level"
        );

        match &self.lut {
            Some(lut) => self.dispatch(samples, out, |v| lut.get(v)),
            None => {
                let mapper = self.mapper;
                self.dispatch(samples, out, move |v| mapper.map(v))
            }
        }
        Ok(())
    }

    #[cfg(feature = "parallel")]
    fn dispatch<F>(&self, samples: &[u16], out: &mut [u8], gray: F)
    where
        F: Fn(u16) -> u8 + Send + Sync,
    {
        if self.parallel {
            write_parallel(samples, out, gray);
        } else {
            write_sequential(samples, out, gray);
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn dispatch<F>(&self, samples: &[u16], out: &mut [u8], gray: F)
    where
        F: Fn(u16) -> u8 + Send + Sync,
    {
        write_sequential(samples, out, gray);
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Single-shot window/level execution.
pub struct WindowingExecutor;

impl WindowingExecutor {
    /// Plan and run `config` over `samples`, writing into `out`.
    pub fn run_with_config<T: Float + Send + Sync>(
        samples: &[u16],
        out: &mut [u8],
        config: &WindowingConfig<T>,
    ) -> Result<ExecutorOutput<T>, WindowingError> {
        Validator::validate_output_len(samples.len(), out.len())?;

        let plan = ExecutionPlan::prepare(config, samples, samples.len())?;
        plan.write(samples, out)?;

        Ok(ExecutorOutput {
            window: plan.window(),
            used_table: plan.uses_table(),
        })
    }
}

// ============================================================================
// Pixel Writers
// ============================================================================

fn write_sequential<F>(samples: &[u16], out: &mut [u8], gray: F)
where
    F: Fn(u16) -> u8,
{
    for (pixel, &v) in out.chunks_exact_mut(CHANNELS).zip(samples) {
        write_pixel(pixel, gray(v));
    }
}

#[cfg(feature = "parallel")]
fn write_parallel<F>(samples: &[u16], out: &mut [u8], gray: F)
where
    F: Fn(u16) -> u8 + Send + Sync,
{
    out.par_chunks_exact_mut(CHANNELS)
        .zip(samples.par_iter())
        .for_each(|(pixel, &v)| write_pixel(pixel, gray(v)));
}

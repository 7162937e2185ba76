//! `HT_SINE` (Hilbert Transform - SineWave)
//!
//! `sin(phase)` and `sin(phase + 45°)` of the dominant cycle phase. In a
//! cycling market the two lines cross a quarter cycle ahead of turning
//! points; in a trend they wander apart without crossing.
//!
//! # Lookback
//!
//! 63 bars plus the configured unstable period.
//!
//! # Example
//!
//! ```
//! use cycle_ta::indicators::ht_sine;
//!
//! let prices: Vec<f64> = (0..150).map(|i| 10.0 + (i as f64 * 0.3).sin()).collect();
//! let out = ht_sine(&prices).unwrap();
//!
//! assert!(out.sine[62].is_nan());
//! assert!(out.sine[63].abs() <= 1.0);
//! assert!(out.lead_sine[63].abs() <= 1.0);
//! ```

use super::ht_core::{begin, fill_prefix};
use crate::error::Result;
use crate::kernels::dc_phase::DcPhase;
use crate::kernels::hilbert::{HilbertPipeline, Priming};
use crate::traits::SeriesElement;

const NAME: &str = "ht_sine";

/// Output of `HT_SINE`.
#[derive(Debug, Clone)]
pub struct HtSineOutput<T> {
    /// Sine of the dominant cycle phase.
    pub sine: Vec<T>,
    /// Sine of the phase advanced by 45 degrees.
    pub lead_sine: Vec<T>,
}

/// Returns the lookback period for `HT_SINE`.
#[inline]
#[must_use]
pub const fn ht_sine_lookback() -> usize {
    Priming::Long.lookback()
}

/// Returns the minimum input length required for one valid `HT_SINE` value.
#[inline]
#[must_use]
pub const fn ht_sine_min_len() -> usize {
    ht_sine_lookback() + 1
}

/// Computes `HT_SINE` into pre-allocated buffers.
///
/// Returns the number of valid values.
///
/// # Errors
///
/// Returns `Error::BufferTooSmall` if either buffer is shorter than `data`.
pub fn ht_sine_into<T: SeriesElement>(
    data: &[T],
    sine: &mut [T],
    lead_sine: &mut [T],
) -> Result<usize> {
    compute_into(data, 0, sine, lead_sine)
}

/// Computes `HT_SINE`.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if a filter constant cannot be represented in `T`.
pub fn ht_sine<T: SeriesElement>(data: &[T]) -> Result<HtSineOutput<T>> {
    let mut output = HtSineOutput {
        sine: vec![T::nan(); data.len()],
        lead_sine: vec![T::nan(); data.len()],
    };
    ht_sine_into(data, &mut output.sine, &mut output.lead_sine)?;
    Ok(output)
}

fn compute_into<T: SeriesElement>(
    data: &[T],
    unstable: usize,
    sine: &mut [T],
    lead_sine: &mut [T],
) -> Result<usize> {
    let len = data.len();
    let lookback = ht_sine_lookback() + unstable;
    let valid = begin(NAME, len, lookback, &[sine.len(), lead_sine.len()])?;

    fill_prefix(sine, len, lookback);
    fill_prefix(lead_sine, len, lookback);
    if valid == 0 {
        return Ok(0);
    }

    let mut dc_phase = DcPhase::new()?;
    for bar in HilbertPipeline::new(data, Priming::Long)? {
        dc_phase.update(bar.smoothed, bar.smooth_period);
        if bar.index >= lookback {
            (sine[bar.index], lead_sine[bar.index]) = dc_phase.sine_pair();
        }
    }

    Ok(valid)
}

// ==================== Configuration Type ====================

/// `HT_SINE` configuration with fluent builder API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtSine {
    unstable_period: usize,
}

impl HtSine {
    /// Creates a configuration with no extra unstable period.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hides `bars` additional leading values behind the sentinel.
    ///
    /// Default: 0
    #[must_use]
    pub const fn unstable_period(mut self, bars: usize) -> Self {
        self.unstable_period = bars;
        self
    }

    /// Computes `HT_SINE` using this configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if a filter constant cannot be represented in `T`.
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<HtSineOutput<T>> {
        let mut output = HtSineOutput {
            sine: vec![T::nan(); data.len()],
            lead_sine: vec![T::nan(); data.len()],
        };
        self.compute_into(data, &mut output)?;
        Ok(output)
    }

    /// Computes `HT_SINE` into a pre-allocated output struct.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if either buffer is shorter than `data`.
    pub fn compute_into<T: SeriesElement>(
        &self,
        data: &[T],
        output: &mut HtSineOutput<T>,
    ) -> Result<usize> {
        compute_into(
            data,
            self.unstable_period,
            &mut output.sine,
            &mut output.lead_sine,
        )
    }

    /// Returns the lookback for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        ht_sine_lookback() + self.unstable_period
    }

    /// Returns the minimum input length for this configuration.
    #[must_use]
    pub const fn min_len(&self) -> usize {
        self.lookback() + 1
    }
}

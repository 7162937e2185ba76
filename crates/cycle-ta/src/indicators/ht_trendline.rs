//! `HT_TRENDLINE` (Hilbert Transform - Instantaneous Trendline)
//!
//! Averaging price over exactly one measured dominant cycle removes the
//! cycle and keeps the trend; a 4-tap WMA then smooths the result. The line
//! lags far less than a fixed-window average of similar smoothness.
//!
//! # Lookback
//!
//! 63 bars plus the configured unstable period.

use super::ht_core::{begin, fill_prefix};
use crate::error::Result;
use crate::kernels::hilbert::{HilbertPipeline, Priming};
use crate::kernels::trendline::Trendline;
use crate::traits::SeriesElement;

const NAME: &str = "ht_trendline";

/// Returns the lookback period for `HT_TRENDLINE`.
#[inline]
#[must_use]
pub const fn ht_trendline_lookback() -> usize {
    Priming::Long.lookback()
}

/// Returns the minimum input length required for one valid `HT_TRENDLINE` value.
#[inline]
#[must_use]
pub const fn ht_trendline_min_len() -> usize {
    ht_trendline_lookback() + 1
}

/// Computes `HT_TRENDLINE` into a pre-allocated output buffer.
///
/// Returns the number of valid values.
///
/// # Errors
///
/// Returns `Error::BufferTooSmall` if `output` is shorter than `data`.
pub fn ht_trendline_into<T: SeriesElement>(data: &[T], output: &mut [T]) -> Result<usize> {
    compute_into(data, 0, output)
}

/// Computes `HT_TRENDLINE`.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if a filter constant cannot be represented in `T`.
///
/// # Example
///
/// ```
/// use cycle_ta::indicators::ht_trendline;
///
/// let prices: Vec<f64> = (0..200)
///     .map(|i| 100.0 + 4.0 * (2.0 * std::f64::consts::PI * i as f64 / 20.0).sin())
///     .collect();
/// let trend = ht_trendline(&prices).unwrap();
///
/// assert!(trend[62].is_nan());
/// assert!((trend[199] - 100.0).abs() < 1.0);
/// ```
pub fn ht_trendline<T: SeriesElement>(data: &[T]) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); data.len()];
    ht_trendline_into(data, &mut output)?;
    Ok(output)
}

fn compute_into<T: SeriesElement>(data: &[T], unstable: usize, output: &mut [T]) -> Result<usize> {
    let len = data.len();
    let lookback = ht_trendline_lookback() + unstable;
    let valid = begin(NAME, len, lookback, &[output.len()])?;

    fill_prefix(output, len, lookback);
    if valid == 0 {
        return Ok(0);
    }

    let mut trendline = Trendline::new()?;
    for bar in HilbertPipeline::new(data, Priming::Long)? {
        let value = trendline.update(data, bar.index, bar.smooth_period);
        if bar.index >= lookback {
            output[bar.index] = value;
        }
    }

    Ok(valid)
}

// ==================== Configuration Type ====================

/// `HT_TRENDLINE` configuration with fluent builder API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtTrendline {
    unstable_period: usize,
}

impl HtTrendline {
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

    /// Computes `HT_TRENDLINE` using this configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if a filter constant cannot be represented in `T`.
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<Vec<T>> {
        let mut output = vec![T::nan(); data.len()];
        compute_into(data, self.unstable_period, &mut output)?;
        Ok(output)
    }

    /// Computes `HT_TRENDLINE` into a pre-allocated buffer, returning the valid count.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if `output` is shorter than `data`.
    pub fn compute_into<T: SeriesElement>(&self, data: &[T], output: &mut [T]) -> Result<usize> {
        compute_into(data, self.unstable_period, output)
    }

    /// Returns the lookback for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        ht_trendline_lookback() + self.unstable_period
    }

    /// Returns the minimum input length for this configuration.
    #[must_use]
    pub const fn min_len(&self) -> usize {
        self.lookback() + 1
    }
}

//! `HT_DCPERIOD` (Hilbert Transform - Dominant Cycle Period)
//!
//! The smoothed dominant cycle period, in bars, measured by the homodyne
//! discriminator. Adaptive indicators use it to size their windows.
//!
//! # Lookback
//!
//! 32 bars plus the configured unstable period.
//!
//! # Example
//!
//! ```
//! use cycle_ta::indicators::ht_dcperiod;
//!
//! let prices: Vec<f64> = (0..200)
//!     .map(|i| 100.0 + 5.0 * (2.0 * std::f64::consts::PI * i as f64 / 20.0).sin())
//!     .collect();
//! let period = ht_dcperiod(&prices).unwrap();
//!
//! assert!(period[31].is_nan());
//! assert!(period[32].is_finite());
//! assert!((period[199] - 20.0).abs() < 2.0);
//! ```

use super::ht_core::{begin, fill_prefix};
use crate::error::Result;
use crate::kernels::hilbert::{HilbertPipeline, Priming};
use crate::traits::SeriesElement;

const NAME: &str = "ht_dcperiod";

/// Returns the lookback period for `HT_DCPERIOD`.
#[inline]
#[must_use]
pub const fn ht_dcperiod_lookback() -> usize {
    Priming::Short.lookback()
}

/// Returns the minimum input length required for one valid `HT_DCPERIOD` value.
#[inline]
#[must_use]
pub const fn ht_dcperiod_min_len() -> usize {
    ht_dcperiod_lookback() + 1
}

/// Computes `HT_DCPERIOD` into a pre-allocated output buffer.
///
/// Returns the number of valid values.
///
/// # Errors
///
/// Returns `Error::BufferTooSmall` if `output` is shorter than `data`.
pub fn ht_dcperiod_into<T: SeriesElement>(data: &[T], output: &mut [T]) -> Result<usize> {
    compute_into(data, 0, output)
}

/// Computes `HT_DCPERIOD`.
///
/// Input shorter than [`ht_dcperiod_min_len`] yields an all-NaN output.
///
/// # Errors
///
/// Returns `Error::NumericConversion` only if a filter constant cannot be
/// represented in `T`.
pub fn ht_dcperiod<T: SeriesElement>(data: &[T]) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); data.len()];
    ht_dcperiod_into(data, &mut output)?;
    Ok(output)
}

fn compute_into<T: SeriesElement>(data: &[T], unstable: usize, output: &mut [T]) -> Result<usize> {
    let len = data.len();
    let lookback = ht_dcperiod_lookback() + unstable;
    let valid = begin(NAME, len, lookback, &[output.len()])?;

    fill_prefix(output, len, lookback);
    if valid == 0 {
        return Ok(0);
    }

    for bar in HilbertPipeline::new(data, Priming::Short)? {
        if bar.index >= lookback {
            output[bar.index] = bar.smooth_period;
        }
    }

    Ok(valid)
}

// ==================== Configuration Type ====================

/// `HT_DCPERIOD` configuration with fluent builder API.
///
/// ```
/// use cycle_ta::indicators::ht_dcperiod::HtDcPeriod;
///
/// let prices: Vec<f64> = (0..100).map(|i| 50.0 + (i as f64 * 0.3).sin()).collect();
/// let config = HtDcPeriod::new().unstable_period(10);
/// let result = config.compute(&prices).unwrap();
///
/// assert_eq!(config.lookback(), 42);
/// assert!(result[41].is_nan());
/// assert!(result[42].is_finite());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtDcPeriod {
    unstable_period: usize,
}

impl HtDcPeriod {
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

    /// Computes `HT_DCPERIOD` using this configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if a filter constant cannot be represented in `T`.
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<Vec<T>> {
        let mut output = vec![T::nan(); data.len()];
        compute_into(data, self.unstable_period, &mut output)?;
        Ok(output)
    }

    /// Computes `HT_DCPERIOD` into a pre-allocated buffer, returning the valid count.
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
        ht_dcperiod_lookback() + self.unstable_period
    }

    /// Returns the minimum input length for this configuration.
    #[must_use]
    pub const fn min_len(&self) -> usize {
        self.lookback() + 1
    }
}

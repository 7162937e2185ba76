//! `HT_TRENDMODE` (Hilbert Transform - Trend vs Cycle Mode)
//!
//! `1` while the market trends, `0` while it cycles. Output is in `T` so the
//! lookback prefix can carry the NaN sentinel.
//!
//! # Lookback
//!
//! 63 bars plus the configured unstable period.

use super::ht_core::{begin, fill_prefix};
use crate::error::Result;
use crate::kernels::dc_phase::DcPhase;
use crate::kernels::hilbert::{HilbertPipeline, Priming};
use crate::kernels::trend_mode::{TrendModeClassifier, TrendModeInput};
use crate::kernels::trendline::Trendline;
use crate::traits::SeriesElement;

const NAME: &str = "ht_trendmode";

/// Returns the lookback period for `HT_TRENDMODE`.
#[inline]
#[must_use]
pub const fn ht_trendmode_lookback() -> usize {
    Priming::Long.lookback()
}

/// Returns the minimum input length required for one valid `HT_TRENDMODE` value.
#[inline]
#[must_use]
pub const fn ht_trendmode_min_len() -> usize {
    ht_trendmode_lookback() + 1
}

/// Computes `HT_TRENDMODE` into a pre-allocated output buffer.
///
/// Returns the number of valid values.
///
/// # Errors
///
/// Returns `Error::BufferTooSmall` if `output` is shorter than `data`.
pub fn ht_trendmode_into<T: SeriesElement>(data: &[T], output: &mut [T]) -> Result<usize> {
    compute_into(data, 0, output)
}

/// Computes `HT_TRENDMODE`.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if a filter constant cannot be represented in `T`.
///
/// # Example
///
/// ```
/// use cycle_ta::indicators::ht_trendmode;
///
/// let prices: Vec<f64> = (0..150).map(|i| 100.0 + i as f64).collect();
/// let mode = ht_trendmode(&prices).unwrap();
///
/// assert!(mode[62].is_nan());
/// assert!(mode[63..].iter().all(|&m| m == 0.0 || m == 1.0));
/// ```
pub fn ht_trendmode<T: SeriesElement>(data: &[T]) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); data.len()];
    ht_trendmode_into(data, &mut output)?;
    Ok(output)
}

fn compute_into<T: SeriesElement>(data: &[T], unstable: usize, output: &mut [T]) -> Result<usize> {
    let len = data.len();
    let lookback = ht_trendmode_lookback() + unstable;
    let valid = begin(NAME, len, lookback, &[output.len()])?;

    fill_prefix(output, len, lookback);
    if valid == 0 {
        return Ok(0);
    }

    let mut dc_phase = DcPhase::new()?;
    let mut trendline = Trendline::new()?;
    let mut classifier = TrendModeClassifier::new()?;

    for bar in HilbertPipeline::new(data, Priming::Long)? {
        let phase = dc_phase.update(bar.smoothed, bar.smooth_period);
        let (sine, lead_sine) = dc_phase.sine_pair();
        let trend = trendline.update(data, bar.index, bar.smooth_period);

        let mode = classifier.update(&TrendModeInput {
            sine,
            lead_sine,
            phase,
            smooth_period: bar.smooth_period,
            smoothed: bar.smoothed,
            trendline: trend,
        });

        if bar.index >= lookback {
            output[bar.index] = mode.value();
        }
    }

    Ok(valid)
}

// ==================== Configuration Type ====================

/// `HT_TRENDMODE` configuration with fluent builder API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtTrendMode {
    unstable_period: usize,
}

impl HtTrendMode {
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

    /// Computes `HT_TRENDMODE` using this configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if a filter constant cannot be represented in `T`.
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<Vec<T>> {
        let mut output = vec![T::nan(); data.len()];
        compute_into(data, self.unstable_period, &mut output)?;
        Ok(output)
    }

    /// Computes `HT_TRENDMODE` into a pre-allocated buffer, returning the valid count.
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
        ht_trendmode_lookback() + self.unstable_period
    }

    /// Returns the minimum input length for this configuration.
    #[must_use]
    pub const fn min_len(&self) -> usize {
        self.lookback() + 1
    }
}

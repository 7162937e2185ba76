//! `HT_DCPHASE` (Hilbert Transform - Dominant Cycle Phase)
//!
//! Phase of the dominant cycle in degrees, normally within `(-45, 315]`.
//! It advances by about `360 / period` per bar on a cycling market and
//! stalls in a trend.
//!
//! # Lookback
//!
//! 63 bars plus the configured unstable period.

use super::ht_core::{begin, fill_prefix};
use crate::error::Result;
use crate::kernels::dc_phase::DcPhase;
use crate::kernels::hilbert::{HilbertPipeline, Priming};
use crate::traits::SeriesElement;

const NAME: &str = "ht_dcphase";

/// Returns the lookback period for `HT_DCPHASE`.
#[inline]
#[must_use]
pub const fn ht_dcphase_lookback() -> usize {
    Priming::Long.lookback()
}

/// Returns the minimum input length required for one valid `HT_DCPHASE` value.
#[inline]
#[must_use]
pub const fn ht_dcphase_min_len() -> usize {
    ht_dcphase_lookback() + 1
}

/// Computes `HT_DCPHASE` into a pre-allocated output buffer.
///
/// Returns the number of valid values.
///
/// # Errors
///
/// Returns `Error::BufferTooSmall` if `output` is shorter than `data`.
pub fn ht_dcphase_into<T: SeriesElement>(data: &[T], output: &mut [T]) -> Result<usize> {
    compute_into(data, 0, output)
}

/// Computes `HT_DCPHASE`.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if a filter constant cannot be represented in `T`.
pub fn ht_dcphase<T: SeriesElement>(data: &[T]) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); data.len()];
    ht_dcphase_into(data, &mut output)?;
    Ok(output)
}

fn compute_into<T: SeriesElement>(data: &[T], unstable: usize, output: &mut [T]) -> Result<usize> {
    let len = data.len();
    let lookback = ht_dcphase_lookback() + unstable;
    let valid = begin(NAME, len, lookback, &[output.len()])?;

    fill_prefix(output, len, lookback);
    if valid == 0 {
        return Ok(0);
    }

    let mut dc_phase = DcPhase::new()?;
    for bar in HilbertPipeline::new(data, Priming::Long)? {
        let phase = dc_phase.update(bar.smoothed, bar.smooth_period);
        if bar.index >= lookback {
            output[bar.index] = phase;
        }
    }

    Ok(valid)
}

// ==================== Configuration Type ====================

/// `HT_DCPHASE` configuration with fluent builder API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtDcPhase {
    unstable_period: usize,
}

impl HtDcPhase {
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

    /// Computes `HT_DCPHASE` using this configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if a filter constant cannot be represented in `T`.
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<Vec<T>> {
        let mut output = vec![T::nan(); data.len()];
        compute_into(data, self.unstable_period, &mut output)?;
        Ok(output)
    }

    /// Computes `HT_DCPHASE` into a pre-allocated buffer, returning the valid count.
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
        ht_dcphase_lookback() + self.unstable_period
    }

    /// Returns the minimum input length for this configuration.
    #[must_use]
    pub const fn min_len(&self) -> usize {
        self.lookback() + 1
    }
}

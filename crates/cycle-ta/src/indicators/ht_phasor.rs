//! `HT_PHASOR` (Hilbert Transform - Phasor Components)
//!
//! The in-phase and quadrature components `(I1, Q1)` of the detrended price.
//! Together they form the phasor whose rotation rate is the dominant cycle.
//!
//! # Lookback
//!
//! 32 bars plus the configured unstable period.

use super::ht_core::{begin, fill_prefix};
use crate::error::Result;
use crate::kernels::hilbert::{HilbertPipeline, Priming};
use crate::traits::SeriesElement;

const NAME: &str = "ht_phasor";

/// Output of `HT_PHASOR`.
#[derive(Debug, Clone)]
pub struct HtPhasorOutput<T> {
    /// In-phase component (`I1`).
    pub inphase: Vec<T>,
    /// Quadrature component (`Q1`).
    pub quadrature: Vec<T>,
}

/// Returns the lookback period for `HT_PHASOR`.
#[inline]
#[must_use]
pub const fn ht_phasor_lookback() -> usize {
    Priming::Short.lookback()
}

/// Returns the minimum input length required for one valid `HT_PHASOR` value.
#[inline]
#[must_use]
pub const fn ht_phasor_min_len() -> usize {
    ht_phasor_lookback() + 1
}

/// Computes `HT_PHASOR` into pre-allocated buffers.
///
/// Returns the number of valid values.
///
/// # Errors
///
/// Returns `Error::BufferTooSmall` if either buffer is shorter than `data`.
pub fn ht_phasor_into<T: SeriesElement>(
    data: &[T],
    inphase: &mut [T],
    quadrature: &mut [T],
) -> Result<usize> {
    compute_into(data, 0, inphase, quadrature)
}

/// Computes `HT_PHASOR`.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if a filter constant cannot be represented in `T`.
///
/// # Example
///
/// ```
/// use cycle_ta::indicators::ht_phasor;
///
/// let prices: Vec<f64> = (0..120).map(|i| 20.0 + (i as f64 * 0.25).sin()).collect();
/// let out = ht_phasor(&prices).unwrap();
///
/// assert!(out.inphase[31].is_nan());
/// assert!(out.quadrature[32].is_finite());
/// ```
pub fn ht_phasor<T: SeriesElement>(data: &[T]) -> Result<HtPhasorOutput<T>> {
    let mut output = HtPhasorOutput {
        inphase: vec![T::nan(); data.len()],
        quadrature: vec![T::nan(); data.len()],
    };
    ht_phasor_into(data, &mut output.inphase, &mut output.quadrature)?;
    Ok(output)
}

fn compute_into<T: SeriesElement>(
    data: &[T],
    unstable: usize,
    inphase: &mut [T],
    quadrature: &mut [T],
) -> Result<usize> {
    let len = data.len();
    let lookback = ht_phasor_lookback() + unstable;
    let valid = begin(NAME, len, lookback, &[inphase.len(), quadrature.len()])?;

    fill_prefix(inphase, len, lookback);
    fill_prefix(quadrature, len, lookback);
    if valid == 0 {
        return Ok(0);
    }

    for bar in HilbertPipeline::new(data, Priming::Short)? {
        if bar.index >= lookback {
            inphase[bar.index] = bar.quadrature.i1;
            quadrature[bar.index] = bar.quadrature.q1;
        }
    }

    Ok(valid)
}

// ==================== Configuration Type ====================

/// `HT_PHASOR` configuration with fluent builder API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtPhasor {
    unstable_period: usize,
}

impl HtPhasor {
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

    /// Computes `HT_PHASOR` using this configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if a filter constant cannot be represented in `T`.
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<HtPhasorOutput<T>> {
        let mut output = HtPhasorOutput {
            inphase: vec![T::nan(); data.len()],
            quadrature: vec![T::nan(); data.len()],
        };
        self.compute_into(data, &mut output)?;
        Ok(output)
    }

    /// Computes `HT_PHASOR` into a pre-allocated output struct.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if either buffer is shorter than `data`.
    pub fn compute_into<T: SeriesElement>(
        &self,
        data: &[T],
        output: &mut HtPhasorOutput<T>,
    ) -> Result<usize> {
        compute_into(
            data,
            self.unstable_period,
            &mut output.inphase,
            &mut output.quadrature,
        )
    }

    /// Returns the lookback for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        ht_phasor_lookback() + self.unstable_period
    }

    /// Returns the minimum input length for this configuration.
    #[must_use]
    pub const fn min_len(&self) -> usize {
        self.lookback() + 1
    }
}

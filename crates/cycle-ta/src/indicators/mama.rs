//! MAMA (MESA Adaptive Moving Average) indicator.
//!
//! MAMA is an exponential average whose smoothing factor follows the rate of
//! change of the Hilbert phase `atan(Q1 / I1)`: a fast-moving phase (a
//! cycling market) slows the average down, a stalled phase (a trend or a
//! turning point) lets it snap to price.
//!
//! # Outputs
//!
//! - MAMA: the adaptive average
//! - FAMA: Following Adaptive Moving Average, MAMA smoothed with half the alpha
//!
//! # Parameters
//!
//! - `fast_limit`: largest alpha, default 0.5
//! - `slow_limit`: smallest alpha, default 0.05
//!
//! Both must lie in `(0, 1]` with `slow_limit < fast_limit`.
//!
//! # Lookback
//!
//! 32 bars plus the configured unstable period.

use std::f64::consts::PI;

use super::ht_core::{begin, fill_prefix};
use crate::error::{Error, Result};
use crate::kernels::hilbert::{HilbertPipeline, Priming};
use crate::traits::SeriesElement;

const NAME: &str = "mama";

/// Default upper alpha limit.
pub const DEFAULT_FAST_LIMIT: f64 = 0.5;

/// Default lower alpha limit.
pub const DEFAULT_SLOW_LIMIT: f64 = 0.05;

/// Output structure for MAMA indicator.
#[derive(Debug, Clone)]
pub struct MamaOutput<T> {
    /// MESA Adaptive Moving Average
    pub mama: Vec<T>,
    /// Following Adaptive Moving Average
    pub fama: Vec<T>,
}

/// Returns the lookback period for MAMA.
#[inline]
#[must_use]
pub const fn mama_lookback() -> usize {
    Priming::Short.lookback()
}

/// Returns the minimum input length required for one valid MAMA value.
#[inline]
#[must_use]
pub const fn mama_min_len() -> usize {
    mama_lookback() + 1
}

/// Smoothing factor for a bar whose phase fell by `delta_phase` degrees.
///
/// The phase change is floored at 1 degree. A change of at most 1 degree
/// gives `fast_limit`; otherwise `fast_limit / delta_phase`, raised to
/// `slow_limit` if smaller. The result always lies in `[slow_limit, fast_limit]`.
///
/// ```
/// use cycle_ta::indicators::mama::adaptive_alpha;
///
/// assert_eq!(adaptive_alpha(0.2_f64, 0.5, 0.05), 0.5);
/// assert_eq!(adaptive_alpha(5.0_f64, 0.5, 0.05), 0.1);
/// assert_eq!(adaptive_alpha(90.0_f64, 0.5, 0.05), 0.05);
/// ```
#[inline]
#[must_use]
pub fn adaptive_alpha<T: SeriesElement>(delta_phase: T, fast_limit: T, slow_limit: T) -> T {
    let delta = if delta_phase < T::one() {
        T::one()
    } else {
        delta_phase
    };
    if delta > T::one() {
        (fast_limit / delta).max(slow_limit)
    } else {
        fast_limit
    }
}

/// Computes MAMA with default limits into pre-allocated buffers.
///
/// Returns the number of valid values.
///
/// # Errors
///
/// Returns `Error::BufferTooSmall` if either buffer is shorter than `data`.
pub fn mama_into<T: SeriesElement>(
    data: &[T],
    mama_out: &mut [T],
    fama_out: &mut [T],
) -> Result<usize> {
    let fast_limit = T::from_f64(DEFAULT_FAST_LIMIT)?;
    let slow_limit = T::from_f64(DEFAULT_SLOW_LIMIT)?;
    compute_into(data, fast_limit, slow_limit, 0, mama_out, fama_out)
}

/// Computes MAMA with custom limits into pre-allocated buffers.
///
/// Returns the number of valid values.
///
/// # Errors
///
/// Returns an error if:
/// - A limit is outside `(0, 1]` or `slow_limit >= fast_limit`
///   (`Error::InvalidParameter`)
/// - Either buffer is shorter than `data` (`Error::BufferTooSmall`)
pub fn mama_full_into<T: SeriesElement>(
    data: &[T],
    fast_limit: T,
    slow_limit: T,
    mama_out: &mut [T],
    fama_out: &mut [T],
) -> Result<usize> {
    compute_into(data, fast_limit, slow_limit, 0, mama_out, fama_out)
}

/// Computes MAMA with the default limits (0.5, 0.05).
///
/// # Errors
///
/// Returns `Error::NumericConversion` if a filter constant cannot be represented in `T`.
///
/// # Example
///
/// ```
/// use cycle_ta::indicators::mama;
///
/// let prices: Vec<f64> = (0..100).map(|i| 100.0 + i as f64 * 0.5).collect();
/// let out = mama(&prices).unwrap();
///
/// assert!(out.mama[31].is_nan());
/// assert!(out.fama[32] <= out.mama[32]);
/// ```
pub fn mama<T: SeriesElement>(data: &[T]) -> Result<MamaOutput<T>> {
    let mut output = empty_output(data.len());
    mama_into(data, &mut output.mama, &mut output.fama)?;
    Ok(output)
}

/// Computes MAMA with custom limits.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` if a limit is outside `(0, 1]` or
/// `slow_limit >= fast_limit`.
pub fn mama_full<T: SeriesElement>(
    data: &[T],
    fast_limit: T,
    slow_limit: T,
) -> Result<MamaOutput<T>> {
    let mut output = empty_output(data.len());
    mama_full_into(data, fast_limit, slow_limit, &mut output.mama, &mut output.fama)?;
    Ok(output)
}

fn empty_output<T: SeriesElement>(len: usize) -> MamaOutput<T> {
    MamaOutput {
        mama: vec![T::nan(); len],
        fama: vec![T::nan(); len],
    }
}

fn validate_limits<T: SeriesElement>(fast_limit: T, slow_limit: T) -> Result<()> {
    let in_range = |limit: T| limit > T::zero() && limit <= T::one();
    let invalid = |name, value: T, reason| Error::InvalidParameter {
        indicator: NAME,
        name,
        value: value.to_f64().unwrap_or(f64::NAN),
        reason,
    };

    if !in_range(fast_limit) {
        return Err(invalid("fast_limit", fast_limit, "must be in (0, 1]"));
    }
    if !in_range(slow_limit) {
        return Err(invalid("slow_limit", slow_limit, "must be in (0, 1]"));
    }
    if slow_limit >= fast_limit {
        return Err(invalid(
            "slow_limit",
            slow_limit,
            "must be less than fast_limit",
        ));
    }
    Ok(())
}

fn compute_into<T: SeriesElement>(
    data: &[T],
    fast_limit: T,
    slow_limit: T,
    unstable: usize,
    mama_out: &mut [T],
    fama_out: &mut [T],
) -> Result<usize> {
    validate_limits(fast_limit, slow_limit)?;

    let len = data.len();
    let lookback = mama_lookback() + unstable;
    let valid = begin(NAME, len, lookback, &[mama_out.len(), fama_out.len()])?;

    fill_prefix(mama_out, len, lookback);
    fill_prefix(fama_out, len, lookback);
    if valid == 0 {
        return Ok(0);
    }

    let rad_to_deg = T::from_f64(180.0 / PI)?;
    let half = T::from_f64(0.5)?;

    let mut prev_phase = T::zero();
    let mut mama = T::zero();
    let mut fama = T::zero();

    for bar in HilbertPipeline::new(data, Priming::Short)? {
        let q = bar.quadrature;
        let phase = if q.i1 == T::zero() {
            T::zero()
        } else {
            (q.q1 / q.i1).atan() * rad_to_deg
        };
        let alpha = adaptive_alpha(prev_phase - phase, fast_limit, slow_limit);
        prev_phase = phase;

        mama = alpha * bar.price + (T::one() - alpha) * mama;
        let fama_alpha = half * alpha;
        fama = fama_alpha * mama + (T::one() - fama_alpha) * fama;

        if bar.index >= lookback {
            mama_out[bar.index] = mama;
            fama_out[bar.index] = fama;
        }
    }

    Ok(valid)
}

// ==================== Configuration Type ====================

/// MAMA configuration with fluent builder API.
///
/// ```
/// use cycle_ta::indicators::mama::Mama;
///
/// let prices: Vec<f64> = (0..80).map(|i| 50.0 + (i as f64 * 0.2).sin()).collect();
///
/// let result = Mama::default().compute(&prices).unwrap();
/// assert!(result.mama[32].is_finite());
///
/// let result = Mama::new()
///     .fast_limit(0.6)
///     .slow_limit(0.1)
///     .unstable_period(4)
///     .compute(&prices)
///     .unwrap();
/// assert!(result.mama[35].is_nan());
/// assert!(result.mama[36].is_finite());
///
/// assert!(Mama::new().slow_limit(0.7).compute(&prices).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mama {
    fast_limit: f64,
    slow_limit: f64,
    unstable_period: usize,
}

impl Default for Mama {
    /// Creates a MAMA configuration with the standard limits (0.5, 0.05).
    fn default() -> Self {
        Self {
            fast_limit: DEFAULT_FAST_LIMIT,
            slow_limit: DEFAULT_SLOW_LIMIT,
            unstable_period: 0,
        }
    }
}

impl Mama {
    /// Creates a MAMA configuration with the standard limits (0.5, 0.05).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the upper alpha limit.
    ///
    /// Default: 0.5
    #[must_use]
    pub const fn fast_limit(mut self, fast_limit: f64) -> Self {
        self.fast_limit = fast_limit;
        self
    }

    /// Sets the lower alpha limit.
    ///
    /// Default: 0.05
    #[must_use]
    pub const fn slow_limit(mut self, slow_limit: f64) -> Self {
        self.slow_limit = slow_limit;
        self
    }

    /// Hides `bars` additional leading values behind the sentinel.
    ///
    /// Default: 0
    #[must_use]
    pub const fn unstable_period(mut self, bars: usize) -> Self {
        self.unstable_period = bars;
        self
    }

    /// Computes MAMA using the configured parameters.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if the limits are invalid.
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<MamaOutput<T>> {
        let mut output = empty_output(data.len());
        self.compute_into(data, &mut output)?;
        Ok(output)
    }

    /// Computes MAMA into a pre-allocated output struct.
    ///
    /// Returns the number of valid values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The limits are invalid (`Error::InvalidParameter`)
    /// - Either buffer is shorter than `data` (`Error::BufferTooSmall`)
    pub fn compute_into<T: SeriesElement>(
        &self,
        data: &[T],
        output: &mut MamaOutput<T>,
    ) -> Result<usize> {
        compute_into(
            data,
            T::from_f64(self.fast_limit)?,
            T::from_f64(self.slow_limit)?,
            self.unstable_period,
            &mut output.mama,
            &mut output.fama,
        )
    }

    /// Returns the upper alpha limit.
    #[must_use]
    pub const fn get_fast_limit(&self) -> f64 {
        self.fast_limit
    }

    /// Returns the lower alpha limit.
    #[must_use]
    pub const fn get_slow_limit(&self) -> f64 {
        self.slow_limit
    }

    /// Returns the lookback for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        mama_lookback() + self.unstable_period
    }

    /// Returns the minimum input length for this configuration.
    #[must_use]
    pub const fn min_len(&self) -> usize {
        self.lookback() + 1
    }
}

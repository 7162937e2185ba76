//! Weighted Moving Average (WMA).
//!
//! Linearly decreasing weights: the newest price has weight `period` and the
//! oldest weight 1. The 4-bar price smoother of the Hilbert indicators is the
//! `period = 4` case of this primitive.
//!
//! # Algorithm
//!
//! O(n) running sums:
//! 1. The weighted sum and the plain sum of the first window are built once.
//! 2. Each step adds the new value with weight `period`, subtracts the
//!    previous plain sum (every value loses one weight unit) and rolls the
//!    plain sum forward.
//!
//! # Formula
//!
//! ```text
//! WMA = (P₁ × n + P₂ × (n-1) + ... + Pₙ × 1) / (n × (n+1) / 2)
//! ```
//!
//! # Example
//!
//! ```
//! use cycle_ta::indicators::wma::wma;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = wma(&data, 3).unwrap();
//!
//! assert!(result[0].is_nan());
//! assert!(result[1].is_nan());
//! // (1×1 + 2×2 + 3×3) / 6
//! assert!((result[2] - 14.0 / 6.0).abs() < 1e-12);
//! ```

use super::ht_core::{begin, fill_prefix};
use crate::error::Result;
use crate::traits::{validate_period, SeriesElement};

/// Returns the lookback period for WMA: `period - 1`.
///
/// ```
/// use cycle_ta::indicators::wma::wma_lookback;
///
/// assert_eq!(wma_lookback(4), 3);
/// assert_eq!(wma_lookback(0), 0);
/// ```
#[inline]
#[must_use]
pub const fn wma_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Returns the minimum input length that yields a valid WMA value.
#[inline]
#[must_use]
pub const fn wma_min_len(period: usize) -> usize {
    period
}

/// Computes the Weighted Moving Average of a data series.
///
/// The output has the same length as the input with `period - 1` leading NaN.
/// An input shorter than `period` yields an all-NaN output.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is zero.
///
/// # NaN Handling
///
/// A NaN input poisons every window that contains it; the running sums are
/// rebuilt once it leaves the window.
#[must_use = "this returns a Result with the WMA values, which should be used"]
pub fn wma<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period)?;
    let mut output = vec![T::nan(); data.len()];
    wma_into(data, period, &mut output)?;
    Ok(output)
}

/// Computes the Weighted Moving Average into a pre-allocated output buffer.
///
/// Returns the number of valid values, `data.len() - period + 1` (or 0).
///
/// # Errors
///
/// Returns an error if:
/// - The period is zero (`Error::InvalidPeriod`)
/// - The output buffer is shorter than the input (`Error::BufferTooSmall`)
///
/// ```
/// use cycle_ta::indicators::wma::wma_into;
///
/// let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
/// let mut output = vec![0.0_f64; 5];
/// assert_eq!(wma_into(&data, 3, &mut output).unwrap(), 3);
/// ```
#[must_use = "this returns a Result with the count of valid WMA values"]
pub fn wma_into<T: SeriesElement>(data: &[T], period: usize, output: &mut [T]) -> Result<usize> {
    validate_period(period)?;
    let len = data.len();
    let lookback = wma_lookback(period);
    let valid = begin("wma", len, lookback, &[output.len()])?;

    fill_prefix(output, len, lookback);
    if valid == 0 {
        return Ok(0);
    }

    let weight_sum = T::from_usize(period * (period + 1) / 2)?;
    let period_t = T::from_usize(period)?;

    let (mut weighted_sum, mut plain_sum) = window_sums(&data[..period])?;
    let mut has_nan = data[..period].iter().any(|v| v.is_nan());
    output[lookback] = if has_nan {
        T::nan()
    } else {
        weighted_sum / weight_sum
    };

    for i in period..len {
        let entering = data[i];
        let leaving = data[i - period];

        if entering.is_nan() {
            has_nan = true;
        }

        if has_nan {
            if leaving.is_nan() && !entering.is_nan() {
                let window = &data[i + 1 - period..=i];
                has_nan = window.iter().any(|v| v.is_nan());
                if !has_nan {
                    (weighted_sum, plain_sum) = window_sums(window)?;
                }
            }
        } else {
            weighted_sum = weighted_sum - plain_sum + entering * period_t;
            plain_sum = plain_sum - leaving + entering;
        }

        output[i] = if has_nan {
            T::nan()
        } else {
            weighted_sum / weight_sum
        };
    }

    Ok(valid)
}

/// Weighted sum (weights `1..=len`, oldest first) and plain sum of a window.
fn window_sums<T: SeriesElement>(window: &[T]) -> Result<(T, T)> {
    let mut weighted = T::zero();
    let mut plain = T::zero();
    for (i, &value) in window.iter().enumerate() {
        weighted = weighted + value * T::from_usize(i + 1)?;
        plain = plain + value;
    }
    Ok((weighted, plain))
}

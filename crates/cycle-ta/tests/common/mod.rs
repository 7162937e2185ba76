//! Shared helpers for the integration tests.
//!
//! Each test binary pulls in only what it needs, hence the `dead_code`
//! allowances.

#![allow(dead_code)]
#![allow(clippy::cast_precision_loss)]

use std::f64::consts::PI;

/// Tight tolerance for values that should agree exactly up to rounding.
pub const EPSILON: f64 = 1e-10;

/// Tolerance for comparisons across precisions or summation orders.
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Compares two floats within `epsilon`, treating NaN as equal to NaN.
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < epsilon
}

/// Counts NaN values anywhere in `data`.
pub fn count_nans(data: &[f64]) -> usize {
    data.iter().filter(|v| v.is_nan()).count()
}

/// Lowest `ht_dcperiod` value possible at `index`.
///
/// The period state starts at 0 on bar 12 and every clamped update is at
/// least 6, so the smoothed period can be no lower than this replay of the
/// 6-only path.
pub fn dcperiod_floor(index: usize) -> f64 {
    let mut period = 0.0;
    let mut smooth = 0.0;
    for _ in 12..=index {
        period = 0.2 * 6.0 + 0.8 * period;
        smooth = 0.33 * period + 0.67 * smooth;
    }
    smooth
}

/// Checks that `data` starts with exactly `expected_nan_count` NaNs and
/// contains no NaN afterwards.
pub fn verify_nan_prefix(data: &[f64], expected_nan_count: usize) -> bool {
    let expected = expected_nan_count.min(data.len());
    for (i, &val) in data.iter().enumerate() {
        if i < expected {
            if !val.is_nan() {
                return false;
            }
        } else if val.is_nan() {
            return false;
        }
    }
    true
}

/// `len` bars of `base + amplitude * sin(2πi / period)`.
pub fn sine_wave(len: usize, period: f64, amplitude: f64, base: f64) -> Vec<f64> {
    (0..len)
        .map(|i| base + amplitude * (2.0 * PI * i as f64 / period).sin())
        .collect()
}

/// `len` bars rising by `step` from `start`.
pub fn ramp(len: usize, start: f64, step: f64) -> Vec<f64> {
    (0..len).map(|i| start + step * i as f64).collect()
}

/// A deterministic, positive, mildly cyclic price series.
pub fn synthetic_prices(len: usize) -> Vec<f64> {
    let mut price = 100.0;
    (0..len)
        .map(|i| {
            let x = i as f64;
            price += (x * 0.1).sin() * 1.5 + (x * 0.037).cos() * 0.8;
            price = price.max(10.0);
            price
        })
        .collect()
}

/// Mean absolute value of `data[from..]`, skipping NaN.
pub fn mean_abs_from(data: &[f64], from: usize) -> f64 {
    let tail: Vec<f64> = data
        .iter()
        .skip(from)
        .copied()
        .filter(|v| !v.is_nan())
        .collect();
    if tail.is_empty() {
        return f64::NAN;
    }
    tail.iter().map(|v| v.abs()).sum::<f64>() / tail.len() as f64
}

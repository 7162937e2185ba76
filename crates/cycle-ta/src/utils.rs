//! Helpers for inspecting indicator output.
//!
//! Every indicator reports "not yet available" as NaN, so checking an output
//! mostly means counting its NaN prefix and comparing the remainder with a
//! tolerance.
//!
//! # Example
//!
//! ```
//! use cycle_ta::utils::{approx_eq, count_nan_prefix, EPSILON};
//!
//! let out = vec![f64::NAN, f64::NAN, 1.0 / 3.0];
//! assert_eq!(count_nan_prefix(&out), 2);
//! assert!(approx_eq(out[2], 0.333_333_333_333_333, EPSILON));
//! ```

use crate::traits::SeriesElement;

/// Standard epsilon for high-precision floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for values produced by long recursive chains.
///
/// The Hilbert pipeline feeds every bar through several feedback stages, so
/// `f32` and `f64` runs drift apart by far more than [`EPSILON`].
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Approximate equality check for floating-point values.
///
/// Returns `true` if `a` and `b` are within `tolerance` of each other,
/// or if both are NaN (two sentinels compare equal).
///
/// ```
/// use cycle_ta::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
/// assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < tolerance
}

/// Count the number of NaN values in a slice.
#[inline]
#[must_use]
pub fn count_nans<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().filter(|x| x.is_nan()).count()
}

/// Count the number of NaN values at the beginning of a slice.
///
/// For any indicator in this crate, `count_nan_prefix(&out)` equals
/// `lookback.min(out.len())` on finite input.
///
/// ```
/// use cycle_ta::utils::count_nan_prefix;
///
/// let data = vec![f64::NAN, f64::NAN, 1.0, 2.0, f64::NAN];
/// assert_eq!(count_nan_prefix(&data), 2);
/// ```
#[inline]
#[must_use]
pub fn count_nan_prefix<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().take_while(|x| x.is_nan()).count()
}

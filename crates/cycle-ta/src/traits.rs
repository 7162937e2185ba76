//! Core traits for cycle-ta numeric operations.
//!
//! The primary trait is [`SeriesElement`], which abstracts the indicators over
//! `f32` and `f64`. The module also hosts the small validation helpers every
//! indicator runs before it writes any output.
//!
//! # Example
//!
//! ```
//! use cycle_ta::traits::SeriesElement;
//!
//! fn mean<T: SeriesElement>(data: &[T]) -> cycle_ta::Result<T> {
//!     let sum = data.iter().fold(T::zero(), |acc, &x| acc + x);
//!     Ok(sum / T::from_usize(data.len())?)
//! }
//!
//! let data = vec![1.0_f64, 2.0, 3.0];
//! assert!((mean(&data).unwrap() - 2.0).abs() < 1e-10);
//! ```

use num_traits::{Float, NumCast, ToPrimitive};

use crate::error::{Error, Result};

/// A trait for types that can be used as elements in a data series.
///
/// # Type Bounds
///
/// The trait requires:
/// - `Float`: Standard floating-point operations (NaN handling, trigonometry, arithmetic)
/// - `NumCast`: Safe conversion between numeric types
/// - `Copy`: Values can be copied (required for the fixed-size filter state)
/// - `Default`: A default value exists (typically zero)
/// - `Send + Sync`: Series can be processed from worker threads
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Truncates a non-negative value to a `usize` count.
    ///
    /// NaN, negative and out-of-range values map to 0, so a degenerate cycle
    /// length never turns into an index.
    #[inline]
    #[must_use]
    fn to_count(self) -> usize {
        if self.is_nan() || self < Self::zero() {
            0
        } else {
            ToPrimitive::to_usize(&self).unwrap_or(0)
        }
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Validates that a period is valid for a windowed primitive.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
#[inline]
pub const fn validate_period(period: usize) -> Result<()> {
    if period == 0 {
        Err(Error::InvalidPeriod {
            period,
            reason: "period must be at least 1",
        })
    } else {
        Ok(())
    }
}

/// Validates that an output buffer can hold one value per input sample.
///
/// # Errors
///
/// Returns `Error::BufferTooSmall` if `actual < required`.
#[inline]
pub const fn validate_output_len(
    indicator: &'static str,
    required: usize,
    actual: usize,
) -> Result<()> {
    if actual < required {
        Err(Error::BufferTooSmall {
            indicator,
            required,
            actual,
        })
    } else {
        Ok(())
    }
}

//! Streaming 4-bar weighted moving average of price.
//!
//! Every Hilbert indicator runs on the smoothed price
//!
//! ```text
//! smooth[t] = (4·p[t] + 3·p[t-1] + 2·p[t-2] + p[t-3]) / 10
//! ```
//!
//! kept as a running weighted sum and a running plain sum, exactly as the
//! `wma` primitive does for an arbitrary window, so one update costs a few
//! additions regardless of series length.

use crate::error::Result;
use crate::traits::SeriesElement;

/// Running state of the 4-bar price WMA over a borrowed series.
#[derive(Debug, Clone)]
pub struct PriceSmoother<'a, T> {
    data: &'a [T],
    weighted_sum: T,
    plain_sum: T,
    trailing_value: T,
    trailing_idx: usize,
    four: T,
    tenth: T,
}

impl<'a, T: SeriesElement> PriceSmoother<'a, T> {
    /// Number of samples consumed by [`PriceSmoother::new`].
    pub const PRIMING: usize = 3;

    /// Primes the smoother with the first three samples of `data`.
    ///
    /// After priming, [`update`](Self::update) must be called with consecutive
    /// indices starting at 3.
    ///
    /// # Panics
    ///
    /// Panics if `data` has fewer than three samples. Callers check the
    /// indicator lookback first.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if a weight cannot be represented in `T`.
    pub fn new(data: &'a [T]) -> Result<Self> {
        let two = T::from_f64(2.0)?;
        let three = T::from_f64(3.0)?;

        let weighted_sum = data[0] + data[1] * two + data[2] * three;
        let plain_sum = data[0] + data[1] + data[2];

        Ok(Self {
            data,
            weighted_sum,
            plain_sum,
            trailing_value: T::zero(),
            trailing_idx: 0,
            four: T::from_f64(4.0)?,
            tenth: T::from_f64(0.1)?,
        })
    }

    /// Adds `data[today]` to the window and returns the smoothed price.
    #[inline]
    pub fn update(&mut self, today: usize) -> T {
        let price = self.data[today];
        self.plain_sum = self.plain_sum + price - self.trailing_value;
        self.weighted_sum = self.weighted_sum + price * self.four;
        self.trailing_value = self.data[self.trailing_idx];
        self.trailing_idx += 1;

        let smoothed = self.weighted_sum * self.tenth;
        self.weighted_sum = self.weighted_sum - self.plain_sum;
        smoothed
    }
}

//! Instantaneous trendline.
//!
//! The instantaneous trend is the plain average of the last
//! `round(smooth_period)` raw prices, an average over exactly one dominant
//! cycle that cancels the cycle component. The published trendline is the
//! 4-tap weighted average of the last four instantaneous trends.

use crate::error::Result;
use crate::traits::SeriesElement;

/// Rolling state of the trendline smoother.
#[derive(Debug, Clone)]
pub struct Trendline<T> {
    /// Instantaneous trends of the previous three bars, newest first.
    history: [T; 3],
    half: T,
    weights: [T; 4],
    ten: T,
}

impl<T: SeriesElement> Trendline<T> {
    /// Creates a trendline whose missing history is zero.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if a weight cannot be represented in `T`.
    pub fn new() -> Result<Self> {
        Ok(Self {
            history: [T::zero(); 3],
            half: T::from_f64(0.5)?,
            weights: [
                T::from_f64(4.0)?,
                T::from_f64(3.0)?,
                T::from_f64(2.0)?,
                T::one(),
            ],
            ten: T::from_f64(10.0)?,
        })
    }

    /// Averages one dominant cycle of `data` ending at `today` and returns
    /// the smoothed trendline.
    ///
    /// At most `today + 1` prices are averaged.
    ///
    /// # Panics
    ///
    /// Panics if `today >= data.len()`.
    pub fn update(&mut self, data: &[T], today: usize, smooth_period: T) -> T {
        let n = (smooth_period + self.half).to_count().min(today + 1);
        let window = &data[today + 1 - n..=today];

        let instant = if n == 0 {
            T::zero()
        } else {
            let sum = window.iter().rev().fold(T::zero(), |acc, &p| acc + p);
            let count: T = num_traits::cast(n).unwrap_or_else(T::one);
            sum / count
        };

        let [w0, w1, w2, w3] = self.weights;
        let [h1, h2, h3] = self.history;
        let trendline = (w0 * instant + w1 * h1 + w2 * h2 + w3 * h3) / self.ten;

        self.history = [instant, h1, h2];
        trendline
    }
}

//! Batch processing of many independent series.
//!
//! Each indicator call owns all of its state, so a batch is embarrassingly
//! parallel. With the `parallel` feature the series are spread over the Rayon
//! thread pool once the batch is large enough to pay for it; without it the
//! same API runs sequentially.
//!
//! ```toml
//! [dependencies]
//! cycle-ta = { version = "0.1", features = ["parallel"] }
//! ```
//!
//! # Example
//!
//! ```
//! use cycle_ta::batch::BatchProcessor;
//! use cycle_ta::indicators::ht_dcperiod;
//!
//! let series: Vec<Vec<f64>> = (1..=3)
//!     .map(|k| (0..80).map(|i| 100.0 + (i as f64 * 0.1 * k as f64).sin()).collect())
//!     .collect();
//!
//! let periods = BatchProcessor::new().process(&series, |s| ht_dcperiod(s)).unwrap();
//! assert_eq!(periods.len(), 3);
//! assert!(periods.iter().all(|p| p.len() == 80));
//! ```

use tracing::debug;

use crate::error::Result;
use crate::traits::SeriesElement;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Default number of series below which a batch runs sequentially.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Runs one indicator over many series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchProcessor {
    /// Minimum number of series for the parallel path.
    min_parallel_threshold: usize,
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProcessor {
    /// Creates a batch processor with the default threshold.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Sets the minimum number of series required to use parallel processing.
    ///
    /// Has no effect without the `parallel` feature.
    #[must_use]
    pub const fn min_parallel_threshold(mut self, threshold: usize) -> Self {
        self.min_parallel_threshold = threshold;
        self
    }

    /// Returns the configured parallel threshold.
    #[must_use]
    pub const fn get_min_parallel_threshold(&self) -> usize {
        self.min_parallel_threshold
    }

    /// Applies `indicator_fn` to every series, preserving order.
    ///
    /// Accepts anything that views as a slice: `Vec<T>`, `&[T]`, arrays.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `indicator_fn`. On the parallel
    /// path "first" means first observed, not lowest index.
    #[cfg(feature = "parallel")]
    pub fn process<T, S, F, R>(&self, series: &[S], indicator_fn: F) -> Result<Vec<R>>
    where
        T: SeriesElement,
        S: AsRef<[T]> + Sync,
        F: Fn(&[T]) -> Result<R> + Send + Sync,
        R: Send,
    {
        if series.len() < self.min_parallel_threshold {
            debug!(series = series.len(), path = "sequential", "processing batch");
            sequential(series, indicator_fn)
        } else {
            debug!(series = series.len(), path = "parallel", "processing batch");
            series
                .par_iter()
                .map(|s| indicator_fn(s.as_ref()))
                .collect::<Result<Vec<R>>>()
        }
    }

    /// Applies `indicator_fn` to every series, preserving order.
    ///
    /// Accepts anything that views as a slice: `Vec<T>`, `&[T]`, arrays.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `indicator_fn`.
    #[cfg(not(feature = "parallel"))]
    pub fn process<T, S, F, R>(&self, series: &[S], indicator_fn: F) -> Result<Vec<R>>
    where
        T: SeriesElement,
        S: AsRef<[T]>,
        F: Fn(&[T]) -> Result<R>,
    {
        debug!(series = series.len(), path = "sequential", "processing batch");
        sequential(series, indicator_fn)
    }
}

fn sequential<T, S, F, R>(series: &[S], indicator_fn: F) -> Result<Vec<R>>
where
    T: SeriesElement,
    S: AsRef<[T]>,
    F: Fn(&[T]) -> Result<R>,
{
    series.iter().map(|s| indicator_fn(s.as_ref())).collect()
}

/// Shorthand for [`BatchProcessor::new`]`.process(series, indicator_fn)`.
///
/// # Errors
///
/// Returns the first error produced by `indicator_fn`.
#[cfg(feature = "parallel")]
pub fn process_batch<T, S, F, R>(series: &[S], indicator_fn: F) -> Result<Vec<R>>
where
    T: SeriesElement,
    S: AsRef<[T]> + Sync,
    F: Fn(&[T]) -> Result<R> + Send + Sync,
    R: Send,
{
    BatchProcessor::new().process(series, indicator_fn)
}

/// Shorthand for [`BatchProcessor::new`]`.process(series, indicator_fn)`.
///
/// # Errors
///
/// Returns the first error produced by `indicator_fn`.
#[cfg(not(feature = "parallel"))]
pub fn process_batch<T, S, F, R>(series: &[S], indicator_fn: F) -> Result<Vec<R>>
where
    T: SeriesElement,
    S: AsRef<[T]>,
    F: Fn(&[T]) -> Result<R>,
{
    BatchProcessor::new().process(series, indicator_fn)
}

//! Commonly used types and traits for convenient importing.
//!
//! # Usage
//!
//! ```
//! use cycle_ta::prelude::*;
//!
//! let prices: Vec<f64> = (0..120).map(|i| 50.0 + (i as f64 * 0.25).sin()).collect();
//!
//! let period = ht_dcperiod(&prices).unwrap();
//! let mode = HtTrendMode::new().compute(&prices).unwrap();
//! let MamaOutput { mama, fama } = Mama::default().compute(&prices).unwrap();
//!
//! assert_eq!(count_nan_prefix(&period), ht_dcperiod_lookback());
//! assert_eq!(count_nan_prefix(&mode), ht_trendmode_lookback());
//! assert_eq!(mama.len(), fama.len());
//! ```
//!
//! # Contents
//!
//! - [`Error`] and [`Result`]
//! - [`SeriesElement`]
//! - every indicator function with its `_into`, `_lookback` and `_min_len` companions
//! - the output structs and the builder configuration types
//! - [`CycleMode`], [`count_nan_prefix`] and [`approx_eq`]

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::SeriesElement;

// Indicator functions (simple API)
pub use crate::indicators::{
    adaptive_alpha, ht_dcperiod, ht_dcphase, ht_phasor, ht_sine, ht_trendline, ht_trendmode, mama,
    mama_full, wma,
};

// Indicator functions (_into API for pre-allocated buffers)
pub use crate::indicators::{
    ht_dcperiod_into, ht_dcphase_into, ht_phasor_into, ht_sine_into, ht_trendline_into,
    ht_trendmode_into, mama_full_into, mama_into, wma_into,
};

// Multi-output types
pub use crate::indicators::{HtPhasorOutput, HtSineOutput, MamaOutput};

// Configuration types
pub use crate::indicators::{HtDcPeriod, HtDcPhase, HtPhasor, HtSine, HtTrendMode, HtTrendline, Mama};

// Lookback functions
pub use crate::indicators::{
    ht_dcperiod_lookback, ht_dcperiod_min_len, ht_dcphase_lookback, ht_dcphase_min_len,
    ht_phasor_lookback, ht_phasor_min_len, ht_sine_lookback, ht_sine_min_len,
    ht_trendline_lookback, ht_trendline_min_len, ht_trendmode_lookback, ht_trendmode_min_len,
    mama_lookback, mama_min_len, wma_lookback, wma_min_len,
};

// Batch processing
pub use crate::batch::BatchProcessor;

pub use crate::kernels::CycleMode;
pub use crate::utils::{approx_eq, count_nan_prefix};

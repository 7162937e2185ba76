//! cycle-ta: Hilbert Transform cycle indicators for technical analysis
//!
//! This crate implements John Ehlers' Hilbert Transform indicator family and
//! the MESA Adaptive Moving Average. All of them share one streaming engine:
//! a 4-bar price smoother feeding a Hilbert filter bank and a homodyne
//! discriminator that measures the dominant market cycle.
//!
//! # Features
//!
//! - **Reference semantics**: lookbacks, warm-up and numeric guards follow
//!   the TA-Lib definitions of `HT_*` and `MAMA`
//! - **Bounded state**: a pass allocates nothing but its outputs
//! - **Generics**: works with both `f32` and `f64`
//! - **Total functions**: short input yields NaN, not errors
//!
//! # Quick Start
//!
//! ```
//! use cycle_ta::prelude::*;
//!
//! let prices: Vec<f64> = (0..300)
//!     .map(|i| 100.0 + 5.0 * (2.0 * std::f64::consts::PI * i as f64 / 20.0).sin())
//!     .collect();
//!
//! let period = ht_dcperiod(&prices).unwrap();
//! assert!(period[31].is_nan());
//! assert!((period[299] - 20.0).abs() < 2.0);
//! ```
//!
//! # Available Indicators
//!
//! ## Cycle
//! - [`indicators::ht_dcperiod()`]: Dominant cycle period
//! - [`indicators::ht_dcphase()`]: Dominant cycle phase
//! - [`indicators::ht_phasor()`]: In-phase and quadrature components
//! - [`indicators::ht_sine()`]: Sine wave and lead sine
//!
//! ## Trend
//! - [`indicators::ht_trendline()`]: Instantaneous trendline
//! - [`indicators::ht_trendmode()`]: Trend versus cycle mode
//! - [`indicators::mama()`]: MESA Adaptive Moving Average
//!
//! # Error Handling
//!
//! ```
//! use cycle_ta::prelude::*;
//!
//! // Too short for the 63-bar lookback: all NaN, not an error.
//! let short = vec![1.0_f64; 10];
//! assert!(ht_sine(&short).unwrap().sine.iter().all(|v| v.is_nan()));
//!
//! // Invalid limits are an error.
//! assert!(mama_full(&short, 0.05, 0.5).is_err());
//! ```
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (`trace` per call, `debug` for
//! all-NaN outputs and batch dispatch) and never installs a subscriber.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod error;
pub mod indicators;
pub mod kernels;
pub mod prelude;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use kernels::CycleMode;
pub use traits::SeriesElement;
pub use utils::{approx_eq, count_nan_prefix, count_nans, EPSILON, LOOSE_EPSILON};

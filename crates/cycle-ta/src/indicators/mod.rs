//! Hilbert Transform cycle indicators and the MESA adaptive moving average.
//!
//! # Overview
//!
//! All indicators in this module share the following properties:
//!
//! - **Generic**: Work with both `f32` and `f64` via the
//!   [`SeriesElement`](crate::traits::SeriesElement) trait
//! - **Single pass**: one O(n) sweep over the input with fixed-size state
//! - **Same length**: the output aligns with the input; the first `lookback`
//!   values are NaN
//! - **Total**: input shorter than the lookback (even empty input) is not an
//!   error, the output is simply all NaN
//!
//! # Indicators
//!
//! ## Cycle Measurement (lookback 32)
//!
//! - [`ht_dcperiod`] - smoothed dominant cycle period in bars
//! - [`ht_phasor`] - in-phase and quadrature components
//!
//! ## Cycle Phase (lookback 63)
//!
//! - [`ht_dcphase`] - dominant cycle phase in degrees
//! - [`ht_sine`] - sine and lead sine of the phase
//! - [`ht_trendline`] - instantaneous trendline
//! - [`ht_trendmode`] - 1 for trend, 0 for cycle
//!
//! ## Adaptive Averages (lookback 32)
//!
//! - [`mama`] / [`mama_full`] - MAMA and FAMA
//!
//! ## Primitives
//!
//! - [`wma`] - fixed-window weighted moving average
//!
//! # Example
//!
//! ```
//! use cycle_ta::indicators::{ht_dcperiod, ht_sine, mama};
//!
//! let prices: Vec<f64> = (0..200)
//!     .map(|i| 100.0 + 3.0 * (i as f64 * 0.3).sin() + i as f64 * 0.05)
//!     .collect();
//!
//! let period = ht_dcperiod(&prices).unwrap();
//! let sine = ht_sine(&prices).unwrap();
//! let adaptive = mama(&prices).unwrap();
//!
//! assert_eq!(period.len(), prices.len());
//! assert_eq!(sine.lead_sine.len(), prices.len());
//! assert!(adaptive.fama[199].is_finite());
//! ```
//!
//! # Error Handling
//!
//! Indicators return [`Result<T, Error>`](crate::error::Error) only for
//! caller mistakes:
//!
//! - Output buffers shorter than the input
//!   ([`BufferTooSmall`](crate::error::Error::BufferTooSmall))
//! - MAMA limits outside `(0, 1]` or out of order
//!   ([`InvalidParameter`](crate::error::Error::InvalidParameter))
//! - A zero WMA period ([`InvalidPeriod`](crate::error::Error::InvalidPeriod))

mod ht_core;

pub mod ht_dcperiod;
pub mod ht_dcphase;
pub mod ht_phasor;
pub mod ht_sine;
pub mod ht_trendline;
pub mod ht_trendmode;
pub mod mama;
pub mod wma;

// Re-export indicator functions for convenient access, e.g.
// `use cycle_ta::indicators::ht_sine;`

pub use ht_dcperiod::{
    ht_dcperiod, ht_dcperiod_into, ht_dcperiod_lookback, ht_dcperiod_min_len, HtDcPeriod,
};
pub use ht_dcphase::{ht_dcphase, ht_dcphase_into, ht_dcphase_lookback, ht_dcphase_min_len, HtDcPhase};
pub use ht_phasor::{
    ht_phasor, ht_phasor_into, ht_phasor_lookback, ht_phasor_min_len, HtPhasor, HtPhasorOutput,
};
pub use ht_sine::{ht_sine, ht_sine_into, ht_sine_lookback, ht_sine_min_len, HtSine, HtSineOutput};
pub use ht_trendline::{
    ht_trendline, ht_trendline_into, ht_trendline_lookback, ht_trendline_min_len, HtTrendline,
};
pub use ht_trendmode::{
    ht_trendmode, ht_trendmode_into, ht_trendmode_lookback, ht_trendmode_min_len, HtTrendMode,
};
pub use mama::{
    adaptive_alpha, mama, mama_full, mama_full_into, mama_into, mama_lookback, mama_min_len, Mama,
    MamaOutput,
};
pub use wma::{wma, wma_into, wma_lookback, wma_min_len};

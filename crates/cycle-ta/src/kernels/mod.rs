//! Streaming building blocks shared by the Hilbert Transform indicators.
//!
//! Every kernel holds only fixed-size state, so a full indicator pass
//! allocates nothing beyond its output buffers.
//!
//! # Kernels
//!
//! - [`price_smoother`]: 4-bar WMA of price, updated in O(1)
//! - [`hilbert`]: Hilbert filter bank, homodyne period estimator and the
//!   pipeline that drives them over a series
//! - [`dc_phase`]: dominant cycle phase from a one-cycle DFT
//! - [`trendline`]: cycle-length average smoothed by a 4-tap WMA
//! - [`trend_mode`]: trend versus cycle state machine

pub mod dc_phase;
pub mod hilbert;
pub mod price_smoother;
pub mod trend_mode;
pub mod trendline;

pub use dc_phase::DcPhase;
pub use hilbert::{
    CycleEstimator, HilbertBar, HilbertFilterBank, HilbertPipeline, Priming, Quadrature,
};
pub use price_smoother::PriceSmoother;
pub use trend_mode::{CycleMode, TrendModeClassifier, TrendModeInput};
pub use trendline::Trendline;

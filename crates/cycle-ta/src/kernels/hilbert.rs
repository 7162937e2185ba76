//! Hilbert Transform filter bank and dominant cycle period estimator.
//!
//! This is the shared engine of every `HT_*` indicator and of MAMA, following
//! John Ehlers' homodyne discriminator design:
//!
//! 1. [`PriceSmoother`] produces a 4-bar WMA of price.
//! 2. [`HilbertFilterBank`] runs four Hilbert stages over the smoothed price
//!    producing the detrended series and the in-phase/quadrature pair
//!    `(I1, Q1)` together with their 90° advanced companions `(jI, jQ)`.
//! 3. [`CycleEstimator`] combines them into the homodyne discriminator and
//!    derives the dominant cycle period.
//!
//! Each stage is the FIR `a·x[t] + b·x[t-2] − b·x[t-4] − a·x[t-6]`, scaled by
//! `0.075·period[t-1] + 0.54`. Because only every other sample is tapped,
//! odd and even bars are kept in separate three-slot lanes and the whole
//! state is a handful of fixed-size arrays.
//!
//! The period of bar `t-1` scales the filters of bar `t`, and bar `t`'s
//! filter outputs produce the new period. [`HilbertPipeline`] resolves this
//! one-step loop by always reading [`CycleEstimator::adjusted_prev_period`]
//! before updating the estimator.

use std::f64::consts::PI;

use super::price_smoother::PriceSmoother;
use crate::error::Result;
use crate::traits::SeriesElement;

const A: f64 = 0.0962;
const B: f64 = 0.5769;

/// How long the price smoother runs before the Hilbert stages start.
///
/// The reference indicators come in two families with different warm-up
/// lengths. Values smoothed during priming are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priming {
    /// `HT_DCPERIOD`, `HT_PHASOR` and MAMA: 9 discarded bars, lookback 32.
    Short,
    /// `HT_DCPHASE`, `HT_SINE`, `HT_TRENDLINE` and `HT_TRENDMODE`: 34
    /// discarded bars, lookback 63.
    Long,
}

impl Priming {
    /// Number of smoothed values discarded before the first Hilbert bar.
    #[inline]
    #[must_use]
    pub const fn discarded(self) -> usize {
        match self {
            Self::Short => 9,
            Self::Long => 34,
        }
    }

    /// Index of the first bar run through the Hilbert stages.
    #[inline]
    #[must_use]
    pub const fn first_bar(self) -> usize {
        PriceSmoother::<f64>::PRIMING + self.discarded()
    }

    /// Number of leading bars without output.
    #[inline]
    #[must_use]
    pub const fn lookback(self) -> usize {
        match self {
            Self::Short => 32,
            Self::Long => 63,
        }
    }
}

/// Tap history of one parity of a Hilbert stage.
#[derive(Debug, Clone, Copy, Default)]
struct Lane<T> {
    /// `a·x` for the last three same-parity bars; the slot about to be
    /// overwritten holds the value from six bars back.
    taps: [T; 3],
    /// `b·x[t-4]` once the next same-parity bar arrives.
    prev: T,
    /// `x[t-2]` for the next same-parity bar.
    prev_input: T,
}

/// One Hilbert FIR stage with separate odd and even lanes.
#[derive(Debug, Clone, Copy, Default)]
struct HilbertStage<T> {
    lanes: [Lane<T>; 2],
}

impl<T: SeriesElement> HilbertStage<T> {
    #[inline]
    fn apply(&mut self, input: T, parity: usize, slot: usize, c: &Coefficients<T>, scale: T) -> T {
        let lane = &mut self.lanes[parity];
        let weighted = c.a * input;
        let mut out = -lane.taps[slot];
        lane.taps[slot] = weighted;
        out = out + weighted;
        out = out - lane.prev;
        lane.prev = c.b * lane.prev_input;
        out = out + lane.prev;
        lane.prev_input = input;
        out * scale
    }
}

/// Three-bar delay of the detrender feeding `I1`, per parity.
#[derive(Debug, Clone, Copy, Default)]
struct DelayLine<T> {
    prev2: T,
    prev3: T,
}

#[derive(Debug, Clone, Copy)]
struct Coefficients<T> {
    a: T,
    b: T,
}

/// One bar of filter-bank output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrature<T> {
    /// Detrended smoothed price.
    pub detrender: T,
    /// In-phase component: the detrender delayed by three bars.
    pub i1: T,
    /// Quadrature component: Hilbert transform of the detrender.
    pub q1: T,
    /// `I1` advanced by 90°.
    pub ji: T,
    /// `Q1` advanced by 90°.
    pub jq: T,
}

/// Cascade of the detrender, `Q1`, `jI` and `jQ` Hilbert stages.
#[derive(Debug, Clone)]
pub struct HilbertFilterBank<T> {
    detrender: HilbertStage<T>,
    q1: HilbertStage<T>,
    ji: HilbertStage<T>,
    jq: HilbertStage<T>,
    i1_delay: [DelayLine<T>; 2],
    slot: usize,
    coefficients: Coefficients<T>,
}

impl<T: SeriesElement> HilbertFilterBank<T> {
    /// Creates a filter bank with all taps at zero.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if a coefficient cannot be represented in `T`.
    pub fn new() -> Result<Self> {
        Ok(Self {
            detrender: HilbertStage::default(),
            q1: HilbertStage::default(),
            ji: HilbertStage::default(),
            jq: HilbertStage::default(),
            i1_delay: [DelayLine::default(); 2],
            slot: 0,
            coefficients: Coefficients {
                a: T::from_f64(A)?,
                b: T::from_f64(B)?,
            },
        })
    }

    /// Runs one bar through the cascade.
    ///
    /// `today` only selects the lane (its parity); `scale` is
    /// `0.075·period[t-1] + 0.54`.
    pub fn step(&mut self, smoothed: T, today: usize, scale: T) -> Quadrature<T> {
        let parity = today % 2;
        let other = 1 - parity;
        let slot = self.slot;
        let c = self.coefficients;

        let detrender = self.detrender.apply(smoothed, parity, slot, &c, scale);
        let q1 = self.q1.apply(detrender, parity, slot, &c, scale);
        let i1 = self.i1_delay[parity].prev3;
        let ji = self.ji.apply(i1, parity, slot, &c, scale);
        let jq = self.jq.apply(q1, parity, slot, &c, scale);

        // Both lanes share the slot index; it moves after each even bar.
        if parity == 0 {
            self.slot = (self.slot + 1) % 3;
        }

        let delay = &mut self.i1_delay[other];
        delay.prev3 = delay.prev2;
        delay.prev2 = detrender;

        Quadrature {
            detrender,
            i1,
            q1,
            ji,
            jq,
        }
    }
}

/// Homodyne discriminator and dominant cycle period smoothing.
#[derive(Debug, Clone)]
pub struct CycleEstimator<T> {
    prev_i2: T,
    prev_q2: T,
    re: T,
    im: T,
    period: T,
    smooth_period: T,
    consts: EstimatorConstants<T>,
}

#[derive(Debug, Clone, Copy)]
struct EstimatorConstants<T> {
    fifth: T,
    four_fifths: T,
    rad_to_deg: T,
    full_circle: T,
    widen: T,
    narrow: T,
    min_period: T,
    max_period: T,
    smooth: T,
    smooth_complement: T,
    scale_slope: T,
    scale_offset: T,
}

impl<T: SeriesElement> CycleEstimator<T> {
    /// Shortest admissible dominant cycle, in bars.
    pub const MIN_PERIOD: f64 = 6.0;
    /// Longest admissible dominant cycle, in bars.
    pub const MAX_PERIOD: f64 = 50.0;

    /// Creates an estimator with every accumulator, the period included, at zero.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if a constant cannot be represented in `T`.
    pub fn new() -> Result<Self> {
        Ok(Self {
            prev_i2: T::zero(),
            prev_q2: T::zero(),
            re: T::zero(),
            im: T::zero(),
            period: T::zero(),
            smooth_period: T::zero(),
            consts: EstimatorConstants {
                fifth: T::from_f64(0.2)?,
                four_fifths: T::from_f64(0.8)?,
                rad_to_deg: T::from_f64(180.0 / PI)?,
                full_circle: T::from_f64(360.0)?,
                widen: T::from_f64(1.5)?,
                narrow: T::from_f64(0.67)?,
                min_period: T::from_f64(Self::MIN_PERIOD)?,
                max_period: T::from_f64(Self::MAX_PERIOD)?,
                smooth: T::from_f64(0.33)?,
                smooth_complement: T::from_f64(0.67)?,
                scale_slope: T::from_f64(0.075)?,
                scale_offset: T::from_f64(0.54)?,
            },
        })
    }

    /// Filter-bank scale for the next bar, from the current period.
    #[inline]
    #[must_use]
    pub fn adjusted_prev_period(&self) -> T {
        self.consts.scale_slope * self.period + self.consts.scale_offset
    }

    /// Folds one bar of filter output into the period estimate.
    ///
    /// Returns the bar's clamped instantaneous period `p`:
    /// the raw homodyne period limited to `[0.67, 1.5]` times the previous
    /// period and to `[6, 50]` bars. The stored period then becomes
    /// `0.2·p + 0.8·prev`. When either discriminator term is exactly zero
    /// the previous period is carried into the clamps instead.
    pub fn update(&mut self, q: &Quadrature<T>) -> T {
        let c = self.consts;

        let q2 = c.fifth * (q.q1 + q.ji) + c.four_fifths * self.prev_q2;
        let i2 = c.fifth * (q.i1 - q.jq) + c.four_fifths * self.prev_i2;

        self.re = c.fifth * (i2 * self.prev_i2 + q2 * self.prev_q2) + c.four_fifths * self.re;
        self.im = c.fifth * (i2 * self.prev_q2 - q2 * self.prev_i2) + c.four_fifths * self.im;
        self.prev_q2 = q2;
        self.prev_i2 = i2;

        let prev_period = self.period;
        let mut period = prev_period;
        if self.im != T::zero() && self.re != T::zero() {
            period = c.full_circle / ((self.im / self.re).atan() * c.rad_to_deg);
        }

        period = period.min(c.widen * prev_period);
        period = period.max(c.narrow * prev_period);
        if period < c.min_period {
            period = c.min_period;
        } else if period > c.max_period {
            period = c.max_period;
        }

        self.period = c.fifth * period + c.four_fifths * prev_period;
        self.smooth_period = c.smooth * self.period + c.smooth_complement * self.smooth_period;
        period
    }

    /// Dominant cycle period after the last update.
    #[inline]
    #[must_use]
    pub const fn period(&self) -> T {
        self.period
    }

    /// Smoothed dominant cycle period (`HT_DCPERIOD`) after the last update.
    #[inline]
    #[must_use]
    pub const fn smooth_period(&self) -> T {
        self.smooth_period
    }
}

/// One bar emitted by [`HilbertPipeline`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HilbertBar<T> {
    /// Index of the bar in the input series.
    pub index: usize,
    /// Raw input price.
    pub price: T,
    /// 4-bar WMA of price.
    pub smoothed: T,
    /// Filter-bank outputs.
    pub quadrature: Quadrature<T>,
    /// Clamped instantaneous period of this bar, within `[6, 50]`.
    pub clamped_period: T,
    /// Dominant cycle period after this bar.
    pub period: T,
    /// Smoothed dominant cycle period after this bar.
    pub smooth_period: T,
}

/// Single forward pass of smoother, filter bank and estimator over a series.
///
/// Yields one [`HilbertBar`] per bar from [`Priming::first_bar`] to the end.
#[derive(Debug, Clone)]
pub struct HilbertPipeline<'a, T> {
    data: &'a [T],
    smoother: Option<PriceSmoother<'a, T>>,
    bank: HilbertFilterBank<T>,
    estimator: CycleEstimator<T>,
    today: usize,
}

impl<'a, T: SeriesElement> HilbertPipeline<'a, T> {
    /// Primes the price smoother over the leading bars of `data`.
    ///
    /// A series no longer than the priming window yields no bars.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if a constant cannot be represented in `T`.
    pub fn new(data: &'a [T], priming: Priming) -> Result<Self> {
        let first_bar = priming.first_bar();
        let bank = HilbertFilterBank::new()?;
        let estimator = CycleEstimator::new()?;

        // Too short to reach the first Hilbert bar: an exhausted pipeline.
        let smoother = if data.len() > first_bar {
            let mut smoother = PriceSmoother::new(data)?;
            for today in PriceSmoother::<T>::PRIMING..first_bar {
                smoother.update(today);
            }
            Some(smoother)
        } else {
            None
        };

        Ok(Self {
            data,
            smoother,
            bank,
            estimator,
            today: first_bar,
        })
    }

    /// Current state of the period estimator.
    #[must_use]
    pub const fn estimator(&self) -> &CycleEstimator<T> {
        &self.estimator
    }
}

impl<T: SeriesElement> Iterator for HilbertPipeline<'_, T> {
    type Item = HilbertBar<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let today = self.today;
        let price = *self.data.get(today)?;
        let smoother = self.smoother.as_mut()?;

        let scale = self.estimator.adjusted_prev_period();
        let smoothed = smoother.update(today);
        let quadrature = self.bank.step(smoothed, today, scale);
        let clamped_period = self.estimator.update(&quadrature);
        self.today += 1;

        Some(HilbertBar {
            index: today,
            price,
            smoothed,
            quadrature,
            clamped_period,
            period: self.estimator.period(),
            smooth_period: self.estimator.smooth_period(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len().saturating_sub(self.today);
        (remaining, Some(remaining))
    }
}

impl<T: SeriesElement> ExactSizeIterator for HilbertPipeline<'_, T> {}

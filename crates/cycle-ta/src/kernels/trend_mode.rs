//! Trend versus cycle classification.
//!
//! A bar is in cycle mode while the sine wave is tracking the market: the
//! sine and lead sine lines have crossed within the last half cycle, or the
//! DC phase is advancing at roughly the cycle rate. A smoothed price that
//! breaks 1.5% away from the trendline forces trend mode regardless.

use crate::error::Result;
use crate::traits::SeriesElement;

/// Market state reported by `ht_trendmode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleMode {
    /// Price is trending; reported as `1`.
    Trend,
    /// Price is cycling; reported as `0`.
    #[default]
    Cycle,
}

impl CycleMode {
    /// Numeric encoding used in indicator output.
    #[inline]
    #[must_use]
    pub fn value<T: SeriesElement>(self) -> T {
        match self {
            Self::Trend => T::one(),
            Self::Cycle => T::zero(),
        }
    }
}

/// One bar of classifier input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendModeInput<T> {
    /// `sin(phase)`.
    pub sine: T,
    /// `sin(phase + 45°)`.
    pub lead_sine: T,
    /// DC phase in degrees.
    pub phase: T,
    /// Smoothed dominant cycle period.
    pub smooth_period: T,
    /// 4-bar WMA of price.
    pub smoothed: T,
    /// Instantaneous trendline.
    pub trendline: T,
}

/// State machine carried across bars.
#[derive(Debug, Clone)]
pub struct TrendModeClassifier<T> {
    prev_sine: T,
    prev_lead_sine: T,
    prev_phase: T,
    days_in_trend: T,
    mode: CycleMode,
    half: T,
    full_turn: T,
    slow_rate: T,
    fast_rate: T,
    breakout: T,
}

impl<T: SeriesElement> TrendModeClassifier<T> {
    /// Creates a classifier in cycle mode with all history at zero.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if a constant cannot be represented in `T`.
    pub fn new() -> Result<Self> {
        Ok(Self {
            prev_sine: T::zero(),
            prev_lead_sine: T::zero(),
            prev_phase: T::zero(),
            days_in_trend: T::zero(),
            mode: CycleMode::Cycle,
            half: T::from_f64(0.5)?,
            full_turn: T::from_f64(360.0)?,
            slow_rate: T::from_f64(0.67)?,
            fast_rate: T::from_f64(1.5)?,
            breakout: T::from_f64(0.015)?,
        })
    }

    /// Classifies one bar.
    pub fn update(&mut self, bar: &TrendModeInput<T>) -> CycleMode {
        let mut mode = CycleMode::Trend;

        let crossed_up = bar.sine > bar.lead_sine && self.prev_sine <= self.prev_lead_sine;
        let crossed_down = bar.sine < bar.lead_sine && self.prev_sine >= self.prev_lead_sine;
        if crossed_up || crossed_down {
            self.days_in_trend = T::zero();
            mode = CycleMode::Cycle;
        }

        self.days_in_trend = self.days_in_trend + T::one();
        if self.days_in_trend < self.half * bar.smooth_period {
            mode = CycleMode::Cycle;
        }

        let advance = bar.phase - self.prev_phase;
        if bar.smooth_period != T::zero() {
            let cycle_rate = self.full_turn / bar.smooth_period;
            if advance > self.slow_rate * cycle_rate && advance < self.fast_rate * cycle_rate {
                mode = CycleMode::Cycle;
            }
        }

        if bar.trendline != T::zero()
            && ((bar.smoothed - bar.trendline) / bar.trendline).abs() >= self.breakout
        {
            mode = CycleMode::Trend;
        }

        self.prev_sine = bar.sine;
        self.prev_lead_sine = bar.lead_sine;
        self.prev_phase = bar.phase;
        self.mode = mode;
        mode
    }

    /// Bars since the last sine/lead-sine crossing, counting the current one.
    #[inline]
    #[must_use]
    pub fn days_in_trend(&self) -> usize {
        self.days_in_trend.to_count()
    }

    /// Mode reported for the last bar.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> CycleMode {
        self.mode
    }
}

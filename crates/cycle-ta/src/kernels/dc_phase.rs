//! Dominant cycle phase from a one-cycle DFT of the smoothed price.
//!
//! The last `n = round(smooth_period)` smoothed prices (at most 50) are
//! correlated against one period of sine and cosine:
//!
//! ```text
//! real = Σ sin(2πk/n)·smooth[t-k]
//! imag = Σ cos(2πk/n)·smooth[t-k]     for k in 0..n
//! ```
//!
//! and the phase is `atan(real/imag)` in degrees, rotated by
//! `90 + 360/smooth_period`, moved into the lower half-plane when
//! `imag < 0`, and wrapped once by 360 above 315.

use std::f64::consts::PI;

use crate::error::Result;
use crate::traits::SeriesElement;

/// Capacity of the smoothed-price ring; the longest admissible cycle.
pub const RING_SIZE: usize = 50;

/// Phase accumulator over a fixed ring of smoothed prices.
#[derive(Debug, Clone)]
pub struct DcPhase<T> {
    ring: [T; RING_SIZE],
    head: usize,
    phase: T,
    consts: PhaseConstants<T>,
}

#[derive(Debug, Clone, Copy)]
struct PhaseConstants<T> {
    two_pi: T,
    rad_to_deg: T,
    half: T,
    quarter_turn: T,
    half_turn: T,
    full_turn: T,
    wrap_above: T,
    near_zero: T,
    deg_to_rad: T,
    lead: T,
}

impl<T: SeriesElement> DcPhase<T> {
    /// Creates an accumulator with an all-zero ring and phase 0.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if a constant cannot be represented in `T`.
    pub fn new() -> Result<Self> {
        Ok(Self {
            ring: [T::zero(); RING_SIZE],
            head: 0,
            phase: T::zero(),
            consts: PhaseConstants {
                two_pi: T::from_f64(2.0 * PI)?,
                rad_to_deg: T::from_f64(180.0 / PI)?,
                half: T::from_f64(0.5)?,
                quarter_turn: T::from_f64(90.0)?,
                half_turn: T::from_f64(180.0)?,
                full_turn: T::from_f64(360.0)?,
                wrap_above: T::from_f64(315.0)?,
                near_zero: T::from_f64(0.01)?,
                deg_to_rad: T::from_f64(PI / 180.0)?,
                lead: T::from_f64(45.0)?,
            },
        })
    }

    /// Pushes the bar's smoothed price and returns the new phase in degrees.
    ///
    /// `smooth_period` is the estimator's smoothed period after the same bar.
    pub fn update(&mut self, smoothed: T, smooth_period: T) -> T {
        let c = self.consts;
        self.ring[self.head] = smoothed;

        let n = (smooth_period + c.half).to_count().min(RING_SIZE);
        let mut real = T::zero();
        let mut imag = T::zero();
        if n > 0 {
            // n <= 50, always representable.
            let n_t: T = num_traits::cast(n).unwrap_or_else(T::one);
            let mut k = T::zero();
            let mut idx = self.head;
            for _ in 0..n {
                let angle = k * c.two_pi / n_t;
                let price = self.ring[idx];
                real = real + angle.sin() * price;
                imag = imag + angle.cos() * price;
                k = k + T::one();
                idx = if idx == 0 { RING_SIZE - 1 } else { idx - 1 };
            }
        }

        let magnitude = imag.abs();
        if magnitude > T::zero() {
            self.phase = (real / imag).atan() * c.rad_to_deg;
        } else if magnitude <= c.near_zero {
            if real < T::zero() {
                self.phase = self.phase - c.quarter_turn;
            } else if real > T::zero() {
                self.phase = self.phase + c.quarter_turn;
            }
        }

        self.phase = self.phase + c.quarter_turn + c.full_turn / smooth_period;
        if imag < T::zero() {
            self.phase = self.phase + c.half_turn;
        }
        if self.phase > c.wrap_above {
            self.phase = self.phase - c.full_turn;
        }

        self.head = (self.head + 1) % RING_SIZE;
        self.phase
    }

    /// Phase after the last update, in degrees.
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> T {
        self.phase
    }

    /// `(sin(phase), sin(phase + 45°))` for the current phase.
    #[inline]
    #[must_use]
    pub fn sine_pair(&self) -> (T, T) {
        let c = self.consts;
        (
            (self.phase * c.deg_to_rad).sin(),
            ((self.phase + c.lead) * c.deg_to_rad).sin(),
        )
    }
}

//! Property-based tests for the Hilbert Transform indicators and MAMA.
//!
//! These tests generate random price series and verify that:
//! - Output lengths match input lengths
//! - The NaN prefix is exactly the lookback
//! - Outputs stay inside their documented ranges
//! - The unstable period only hides values
//! - Each call depends only on its input

#![allow(clippy::needless_range_loop)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]

mod common;

use common::{approx_eq, dcperiod_floor, verify_nan_prefix};
use cycle_ta::indicators::{
    adaptive_alpha, ht_dcperiod, ht_dcperiod_lookback, ht_dcphase, ht_dcphase_lookback,
    ht_phasor, ht_phasor_lookback, ht_sine, ht_sine_lookback, ht_trendline,
    ht_trendline_lookback, ht_trendmode, ht_trendmode_lookback, mama, mama_full, mama_lookback,
    HtDcPeriod, HtTrendline, Mama,
};
use proptest::prelude::*;

/// Positive prices long enough to leave at least a few valid bars.
fn price_series() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0..1000.0_f64, 70..=300)
}

/// Zero-mean oscillations, where the start-up floor of the period shows.
fn signed_series() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-100.0..100.0_f64, 70..=200)
}

/// Prices of any length, including those shorter than every lookback.
fn any_length_series() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0..1000.0_f64, 0..=120)
}

// ==================== Length and Prefix ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_single_output_lengths_and_prefix(data in price_series()) {
        let period = ht_dcperiod(&data).unwrap();
        let phase = ht_dcphase(&data).unwrap();
        let trend = ht_trendline(&data).unwrap();
        let mode = ht_trendmode(&data).unwrap();

        prop_assert_eq!(period.len(), data.len());
        prop_assert_eq!(phase.len(), data.len());
        prop_assert_eq!(trend.len(), data.len());
        prop_assert_eq!(mode.len(), data.len());

        prop_assert!(verify_nan_prefix(&period, ht_dcperiod_lookback()));
        prop_assert!(verify_nan_prefix(&phase, ht_dcphase_lookback()));
        prop_assert!(verify_nan_prefix(&trend, ht_trendline_lookback()));
        prop_assert!(verify_nan_prefix(&mode, ht_trendmode_lookback()));
    }

    #[test]
    fn prop_multi_output_lengths_and_prefix(data in price_series()) {
        let phasor = ht_phasor(&data).unwrap();
        let sine = ht_sine(&data).unwrap();
        let adaptive = mama(&data).unwrap();

        prop_assert!(verify_nan_prefix(&phasor.inphase, ht_phasor_lookback()));
        prop_assert!(verify_nan_prefix(&phasor.quadrature, ht_phasor_lookback()));
        prop_assert!(verify_nan_prefix(&sine.sine, ht_sine_lookback()));
        prop_assert!(verify_nan_prefix(&sine.lead_sine, ht_sine_lookback()));
        prop_assert!(verify_nan_prefix(&adaptive.mama, mama_lookback()));
        prop_assert!(verify_nan_prefix(&adaptive.fama, mama_lookback()));
    }

    #[test]
    fn prop_short_input_is_all_nan(data in any_length_series()) {
        let period = ht_dcperiod(&data).unwrap();
        let sine = ht_sine(&data).unwrap();
        let mode = ht_trendmode(&data).unwrap();

        prop_assert_eq!(period.len(), data.len());
        if data.len() <= ht_dcperiod_lookback() {
            prop_assert!(period.iter().all(|v| v.is_nan()));
        }
        if data.len() <= ht_sine_lookback() {
            prop_assert!(sine.sine.iter().all(|v| v.is_nan()));
            prop_assert!(mode.iter().all(|v| v.is_nan()));
        }
    }
}

// ==================== Value Ranges ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_dcperiod_within_clamp(data in price_series()) {
        let period = ht_dcperiod(&data).unwrap();

        for i in ht_dcperiod_lookback()..data.len() {
            prop_assert!(
                (6.0..=50.0).contains(&period[i]),
                "period[{}] = {} outside [6, 50]", i, period[i]
            );
        }
    }

    #[test]
    fn prop_dcperiod_above_startup_floor(data in signed_series()) {
        let period = ht_dcperiod(&data).unwrap();

        for i in ht_dcperiod_lookback()..data.len() {
            prop_assert!(period[i] <= 50.0);
            prop_assert!(
                period[i] >= dcperiod_floor(i) - 1e-9,
                "period[{}] = {} below floor {}", i, period[i], dcperiod_floor(i)
            );
        }
    }

    #[test]
    fn prop_sine_matches_phase(data in price_series()) {
        let phase = ht_dcphase(&data).unwrap();
        let sine = ht_sine(&data).unwrap();

        for i in ht_sine_lookback()..data.len() {
            prop_assert!(sine.sine[i].abs() <= 1.0);
            prop_assert!(sine.lead_sine[i].abs() <= 1.0);
            prop_assert!(approx_eq(sine.sine[i], phase[i].to_radians().sin(), 1e-9));
            prop_assert!(approx_eq(
                sine.lead_sine[i],
                (phase[i] + 45.0).to_radians().sin(),
                1e-9
            ));
        }
    }

    #[test]
    fn prop_trendmode_is_binary(data in price_series()) {
        let mode = ht_trendmode(&data).unwrap();

        for &m in &mode[ht_trendmode_lookback()..] {
            prop_assert!(m == 0.0 || m == 1.0, "mode {} is not 0 or 1", m);
        }
    }

    #[test]
    fn prop_phasor_finite(data in price_series()) {
        let phasor = ht_phasor(&data).unwrap();

        for i in ht_phasor_lookback()..data.len() {
            prop_assert!(phasor.inphase[i].is_finite());
            prop_assert!(phasor.quadrature[i].is_finite());
        }
    }

    #[test]
    fn prop_trendline_within_price_range(data in price_series()) {
        let trend = ht_trendline(&data).unwrap();
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = data.iter().copied().fold(f64::INFINITY, f64::min);

        // Weighted averages of window means never leave the price range.
        for &t in &trend[ht_trendline_lookback()..] {
            prop_assert!(t >= min - 1e-9 && t <= max + 1e-9);
        }
    }
}

// ==================== MAMA ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_adaptive_alpha_bounds(
        delta in -720.0..720.0_f64,
        slow in 0.01..0.5_f64,
        spread in 0.01..0.5_f64,
    ) {
        let fast = (slow + spread).min(1.0);
        let alpha = adaptive_alpha(delta, fast, slow);

        prop_assert!(alpha >= slow && alpha <= fast);
        if delta <= 1.0 {
            prop_assert_eq!(alpha, fast);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_mama_stays_bounded(data in price_series()) {
        let out = mama(&data).unwrap();
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        // Both lines are convex combinations of prices and a zero seed.
        for i in mama_lookback()..data.len() {
            prop_assert!(out.mama[i].is_finite());
            prop_assert!(out.fama[i].is_finite());
            prop_assert!(out.mama[i] >= 0.0 && out.mama[i] <= max + 1e-9);
            prop_assert!(out.fama[i] >= 0.0 && out.fama[i] <= max + 1e-9);
        }
    }

    #[test]
    fn prop_mama_limits_validated(
        data in price_series(),
        fast in -0.5..1.5_f64,
        slow in -0.5..1.5_f64,
    ) {
        let valid = fast > 0.0 && fast <= 1.0 && slow > 0.0 && slow <= 1.0 && slow < fast;
        prop_assert_eq!(mama_full(&data, fast, slow).is_ok(), valid);
    }
}

// ==================== Unstable Period and Purity ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_unstable_period_only_hides(data in price_series(), extra in 0usize..20) {
        let base = ht_dcperiod(&data).unwrap();
        let hidden = HtDcPeriod::new().unstable_period(extra).compute(&data).unwrap();
        let lookback = ht_dcperiod_lookback() + extra;

        prop_assert!(verify_nan_prefix(&hidden, lookback));
        for i in lookback..data.len() {
            prop_assert_eq!(hidden[i], base[i]);
        }

        let base = ht_trendline(&data).unwrap();
        let hidden = HtTrendline::new().unstable_period(extra).compute(&data).unwrap();
        for i in (ht_trendline_lookback() + extra)..data.len() {
            prop_assert_eq!(hidden[i], base[i]);
        }

        let base = mama(&data).unwrap();
        let hidden = Mama::new().unstable_period(extra).compute(&data).unwrap();
        for i in (mama_lookback() + extra)..data.len() {
            prop_assert_eq!(hidden.mama[i], base.mama[i]);
            prop_assert_eq!(hidden.fama[i], base.fama[i]);
        }
    }

    #[test]
    fn prop_calls_are_independent(data in price_series(), other in price_series()) {
        let first = ht_trendmode(&data).unwrap();
        let _ = ht_trendmode(&other).unwrap();
        let second = ht_trendmode(&data).unwrap();

        for (a, b) in first.iter().zip(&second) {
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn prop_prefix_extension_does_not_change_history(data in price_series()) {
        // Outputs are causal: appending bars never rewrites earlier values.
        let cut = data.len() - 5;
        let full = ht_sine(&data).unwrap();
        let partial = ht_sine(&data[..cut]).unwrap();

        for i in 0..cut {
            prop_assert_eq!(full.sine[i].to_bits(), partial.sine[i].to_bits());
        }
    }
}

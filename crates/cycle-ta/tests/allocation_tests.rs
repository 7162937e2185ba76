//! Write pattern verification for the `_into` API.
//!
//! - Pre-allocation: `_into` variants never grow the caller's buffers
//! - Direct writes: every output slot is written, prefix and body
//! - Zero allocation: with `--features dhat-heap` the kernels are shown to
//!   allocate nothing at all

#![allow(clippy::needless_range_loop)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]

mod common;

use common::{synthetic_prices, verify_nan_prefix};
use cycle_ta::indicators::{
    ht_dcperiod_into, ht_dcperiod_lookback, ht_dcphase_into, ht_phasor_into, ht_sine_into,
    ht_trendline_into, ht_trendmode_into, ht_trendmode_lookback, mama_full_into, mama_into,
    mama_lookback, wma_into, HtDcPeriod, Mama, MamaOutput,
};

const LEN: usize = 256;

// ==================== Pre-allocation Tests ====================

#[test]
fn allocation_ht_dcperiod_into_no_realloc() {
    let data = synthetic_prices(LEN);
    let mut output = vec![0.0_f64; data.len()];
    let initial_capacity = output.capacity();

    ht_dcperiod_into(&data, &mut output).unwrap();

    assert_eq!(
        output.capacity(),
        initial_capacity,
        "ht_dcperiod_into should not reallocate output buffer"
    );
    assert_eq!(output.len(), data.len());
}

#[test]
fn allocation_ht_phasor_into_no_realloc() {
    let data = synthetic_prices(LEN);
    let mut inphase = vec![0.0_f64; data.len()];
    let mut quadrature = vec![0.0_f64; data.len()];
    let caps = (inphase.capacity(), quadrature.capacity());

    ht_phasor_into(&data, &mut inphase, &mut quadrature).unwrap();

    assert_eq!((inphase.capacity(), quadrature.capacity()), caps);
}

#[test]
fn allocation_ht_sine_into_no_realloc() {
    let data = synthetic_prices(LEN);
    let mut sine = vec![0.0_f64; data.len()];
    let mut lead_sine = vec![0.0_f64; data.len()];
    let caps = (sine.capacity(), lead_sine.capacity());

    ht_sine_into(&data, &mut sine, &mut lead_sine).unwrap();

    assert_eq!((sine.capacity(), lead_sine.capacity()), caps);
}

#[test]
fn allocation_mama_into_no_realloc() {
    let data = synthetic_prices(LEN);
    let mut mama_out = vec![0.0_f64; data.len()];
    let mut fama_out = vec![0.0_f64; data.len()];
    let caps = (mama_out.capacity(), fama_out.capacity());

    mama_into(&data, &mut mama_out, &mut fama_out).unwrap();

    assert_eq!((mama_out.capacity(), fama_out.capacity()), caps);
}

// ==================== Direct Write Tests ====================

#[test]
fn allocation_into_overwrites_stale_contents() {
    let data = synthetic_prices(LEN);

    // Stale values in the prefix must be replaced by NaN.
    let mut output = vec![7.0_f64; data.len()];
    ht_trendmode_into(&data, &mut output).unwrap();
    assert!(verify_nan_prefix(&output, ht_trendmode_lookback()));

    let mut mama_out = vec![-1.0_f64; data.len()];
    let mut fama_out = vec![-1.0_f64; data.len()];
    mama_full_into(&data, 0.6, 0.1, &mut mama_out, &mut fama_out).unwrap();
    assert!(verify_nan_prefix(&mama_out, mama_lookback()));
    assert!(verify_nan_prefix(&fama_out, mama_lookback()));
}

#[test]
fn allocation_larger_buffer_tail_untouched() {
    let data = synthetic_prices(LEN);
    let mut output = vec![42.0_f64; data.len() + 10];

    let valid = ht_dcperiod_into(&data, &mut output).unwrap();

    assert_eq!(valid, LEN - ht_dcperiod_lookback());
    assert!(output[LEN..].iter().all(|&v| v == 42.0));
}

#[test]
fn allocation_into_matches_allocating_api() {
    let data = synthetic_prices(LEN);

    let expected = HtDcPeriod::new().unstable_period(5).compute(&data).unwrap();
    let mut output = vec![0.0_f64; data.len()];
    HtDcPeriod::new()
        .unstable_period(5)
        .compute_into(&data, &mut output)
        .unwrap();
    for (a, b) in expected.iter().zip(&output) {
        assert!(a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan()));
    }

    let expected = Mama::new().fast_limit(0.4).compute(&data).unwrap();
    let mut out = MamaOutput {
        mama: vec![0.0_f64; data.len()],
        fama: vec![0.0_f64; data.len()],
    };
    Mama::new().fast_limit(0.4).compute_into(&data, &mut out).unwrap();
    assert_eq!(&expected.mama[mama_lookback()..], &out.mama[mama_lookback()..]);
    assert_eq!(&expected.fama[mama_lookback()..], &out.fama[mama_lookback()..]);
    assert!(verify_nan_prefix(&out.mama, mama_lookback()));
}

// ==================== Zero Allocation Verification (dhat) ====================
//
// Run single-threaded so profilers do not interfere:
//   cargo test -p cycle-ta --features dhat-heap --test allocation_tests dhat_tests -- --test-threads=1

#[cfg(feature = "dhat-heap")]
mod dhat_tests {
    use super::*;

    #[global_allocator]
    static ALLOC: dhat::Alloc = dhat::Alloc;

    /// Runs `f` once unmeasured, so one-time setup such as log callsite
    /// registration is excluded, then measures a second run.
    fn measure_allocations<F: FnMut()>(mut f: F) -> dhat::HeapStats {
        f();
        let _profiler = dhat::Profiler::builder().testing().build();
        f();
        dhat::HeapStats::get()
    }

    fn assert_zero(stats: &dhat::HeapStats, name: &str) {
        assert_eq!(
            stats.total_blocks, 0,
            "{name} should perform zero heap allocations, but allocated {} blocks ({} bytes)",
            stats.total_blocks, stats.total_bytes
        );
    }

    #[test]
    fn dhat_ht_dcperiod_into_zero_allocs() {
        let data = synthetic_prices(LEN);
        let mut output = vec![0.0_f64; data.len()];

        let stats = measure_allocations(|| {
            ht_dcperiod_into(&data, &mut output).unwrap();
        });
        assert_zero(&stats, "ht_dcperiod_into");
    }

    #[test]
    fn dhat_ht_dcphase_into_zero_allocs() {
        let data = synthetic_prices(LEN);
        let mut output = vec![0.0_f64; data.len()];

        let stats = measure_allocations(|| {
            ht_dcphase_into(&data, &mut output).unwrap();
        });
        assert_zero(&stats, "ht_dcphase_into");
    }

    #[test]
    fn dhat_ht_phasor_into_zero_allocs() {
        let data = synthetic_prices(LEN);
        let mut inphase = vec![0.0_f64; data.len()];
        let mut quadrature = vec![0.0_f64; data.len()];

        let stats = measure_allocations(|| {
            ht_phasor_into(&data, &mut inphase, &mut quadrature).unwrap();
        });
        assert_zero(&stats, "ht_phasor_into");
    }

    #[test]
    fn dhat_ht_sine_into_zero_allocs() {
        let data = synthetic_prices(LEN);
        let mut sine = vec![0.0_f64; data.len()];
        let mut lead_sine = vec![0.0_f64; data.len()];

        let stats = measure_allocations(|| {
            ht_sine_into(&data, &mut sine, &mut lead_sine).unwrap();
        });
        assert_zero(&stats, "ht_sine_into");
    }

    #[test]
    fn dhat_ht_trendline_into_zero_allocs() {
        let data = synthetic_prices(LEN);
        let mut output = vec![0.0_f64; data.len()];

        let stats = measure_allocations(|| {
            ht_trendline_into(&data, &mut output).unwrap();
        });
        assert_zero(&stats, "ht_trendline_into");
    }

    #[test]
    fn dhat_ht_trendmode_into_zero_allocs() {
        let data = synthetic_prices(LEN);
        let mut output = vec![0.0_f64; data.len()];

        let stats = measure_allocations(|| {
            ht_trendmode_into(&data, &mut output).unwrap();
        });
        assert_zero(&stats, "ht_trendmode_into");
    }

    #[test]
    fn dhat_mama_into_zero_allocs() {
        let data = synthetic_prices(LEN);
        let mut mama_out = vec![0.0_f64; data.len()];
        let mut fama_out = vec![0.0_f64; data.len()];

        let stats = measure_allocations(|| {
            mama_into(&data, &mut mama_out, &mut fama_out).unwrap();
        });
        assert_zero(&stats, "mama_into");
    }

    #[test]
    fn dhat_wma_into_zero_allocs() {
        let data = synthetic_prices(LEN);
        let mut output = vec![0.0_f64; data.len()];

        let stats = measure_allocations(|| {
            wma_into(&data, 4, &mut output).unwrap();
        });
        assert_zero(&stats, "wma_into");
    }

    #[test]
    fn dhat_short_input_zero_allocs() {
        let data = synthetic_prices(20);
        let mut output = vec![0.0_f64; data.len()];

        let stats = measure_allocations(|| {
            ht_trendmode_into(&data, &mut output).unwrap();
        });
        assert_zero(&stats, "ht_trendmode_into on short input");
    }
}

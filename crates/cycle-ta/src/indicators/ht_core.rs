//! Call plumbing shared by the Hilbert Transform indicators.
//!
//! Every `HT_*` indicator and MAMA follows the same contract:
//!
//! 1. Output buffers are checked before anything is written.
//! 2. The first `lookback` outputs (reference lookback plus the configured
//!    unstable period) are NaN.
//! 3. The recursion always starts at sample 0, so the unstable period only
//!    hides values and never changes them.
//! 4. An input no longer than the lookback, including an empty one, is not
//!    an error: the output is entirely NaN.

use tracing::{debug, trace};

use crate::error::Result;
use crate::traits::{validate_output_len, SeriesElement};

/// Validates every output buffer against the input length and logs the call.
///
/// Returns the number of valid (non-sentinel) values the call will produce.
///
/// # Errors
///
/// Returns `Error::BufferTooSmall` for the first buffer shorter than `len`.
pub(crate) fn begin(
    indicator: &'static str,
    len: usize,
    lookback: usize,
    buffers: &[usize],
) -> Result<usize> {
    for &actual in buffers {
        validate_output_len(indicator, len, actual)?;
    }

    trace!(indicator, len, lookback, "computing indicator");

    let valid = len.saturating_sub(lookback);
    if valid == 0 {
        debug!(indicator, len, lookback, "input shorter than lookback, output is all NaN");
    }
    Ok(valid)
}

/// Writes the NaN prefix: `min(lookback, len)` leading sentinels.
#[inline]
pub(crate) fn fill_prefix<T: SeriesElement>(output: &mut [T], len: usize, lookback: usize) {
    for value in output.iter_mut().take(lookback.min(len)) {
        *value = T::nan();
    }
}

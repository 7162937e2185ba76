//! Error types for cycle-ta.
//!
//! Only parameter problems are errors. An input shorter than an indicator's
//! lookback is a valid call whose output is entirely NaN, and the numeric
//! guards inside the Hilbert pipeline recover silently.

use thiserror::Error;

/// The main error type for cycle-ta operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A scalar parameter is outside its allowed range.
    ///
    /// Returned before any output is written, e.g. for MAMA limits that are
    /// not positive or where `slow_limit >= fast_limit`.
    #[error("{indicator}: invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Name of the indicator that rejected the parameter.
        indicator: &'static str,
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Description of the constraint that failed.
        reason: &'static str,
    },

    /// The period parameter is invalid.
    ///
    /// This error is returned when a windowed primitive receives a zero period.
    #[error("invalid period {period}: {reason}")]
    InvalidPeriod {
        /// The invalid period value that was provided.
        period: usize,
        /// Description of why the period is invalid.
        reason: &'static str,
    },

    /// An output buffer passed to an `_into` function is shorter than the input.
    #[error("{indicator}: output buffer too small: required {required} elements, got {actual}")]
    BufferTooSmall {
        /// Name of the indicator whose buffer was rejected.
        indicator: &'static str,
        /// The number of elements required (the input length).
        required: usize,
        /// The number of elements provided.
        actual: usize,
    },

    /// Failed to convert a numeric value to the target type.
    ///
    /// This error occurs when using `NumCast::from()` to convert a constant
    /// (e.g. a Hilbert coefficient) to the generic `Float` type and the
    /// conversion fails.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

/// Convenience type alias for Results using the cycle-ta Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_error() {
        let err = Error::InvalidParameter {
            indicator: "mama",
            name: "slow_limit",
            value: 0.6,
            reason: "must be less than fast_limit",
        };
        assert_eq!(
            err.to_string(),
            "mama: invalid parameter slow_limit = 0.6: must be less than fast_limit"
        );
    }

    #[test]
    fn test_invalid_period_error() {
        let err = Error::InvalidPeriod {
            period: 0,
            reason: "period must be at least 1",
        };
        assert_eq!(err.to_string(), "invalid period 0: period must be at least 1");
    }

    #[test]
    fn test_buffer_too_small_error() {
        let err = Error::BufferTooSmall {
            indicator: "ht_sine",
            required: 100,
            actual: 50,
        };
        assert_eq!(
            err.to_string(),
            "ht_sine: output buffer too small: required 100 elements, got 50"
        );
    }

    #[test]
    fn test_numeric_conversion_error() {
        let err = Error::NumericConversion {
            context: "f64 to series element",
        };
        assert_eq!(
            err.to_string(),
            "numeric conversion failed: f64 to series element"
        );
    }

    #[test]
    fn test_error_equality() {
        let err1 = Error::BufferTooSmall {
            indicator: "mama",
            required: 20,
            actual: 10,
        };
        let err2 = err1.clone();
        let err3 = Error::BufferTooSmall {
            indicator: "mama",
            required: 30,
            actual: 10,
        };

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }

    #[test]
    fn test_error_is_std_error() {
        fn accepts_std_error<E: std::error::Error>(_: E) {}
        accepts_std_error(Error::NumericConversion { context: "test" });
    }
}

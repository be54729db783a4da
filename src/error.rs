//! Configuration errors.
//!
//! Every fallible constructor in the crate validates its parameters up
//! front and reports a [`ConfigError`] before any generation runs.

use thiserror::Error;

/// A malformed operator, coder or driver configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Exactly one of a per-gene probability or an expected count is required.
    #[error("exactly one of p_mut or e_mut must be given")]
    AmbiguousMutationRate,

    /// A probability parameter fell outside `[0, 1]`.
    #[error("{name} must be within [0, 1], got {value}")]
    ProbabilityOutOfRange {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A parameter that must be strictly positive was not.
    #[error("{name} must be positive, got {value}")]
    NotPositive {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A count parameter that must be at least `min` was smaller.
    #[error("{name} must be at least {min}, got {value}")]
    CountTooSmall {
        /// Parameter name.
        name: &'static str,
        /// Smallest accepted value.
        min: usize,
        /// Offending value.
        value: usize,
    },

    /// A count parameter exceeded its largest supported value.
    #[error("{name} must be at most {max}, got {value}")]
    CountTooLarge {
        /// Parameter name.
        name: &'static str,
        /// Largest accepted value.
        max: usize,
        /// Offending value.
        value: usize,
    },

    /// A `[lo, hi]` range was inverted.
    #[error("{name}[{index}] is inverted: {lo} > {hi}")]
    InvertedRange {
        /// Parameter name.
        name: &'static str,
        /// Position of the range in its list.
        index: usize,
        /// Lower end.
        lo: f64,
        /// Upper end.
        hi: f64,
    },

    /// Two parallel parameter lists disagree in length.
    #[error("{name} length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Parameter name.
        name: &'static str,
        /// Required length.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },

    /// The minimum rule count exceeds the maximum.
    #[error("min_rules ({min}) exceeds max_rules ({max})")]
    RuleCountRange {
        /// Minimum rule count.
        min: usize,
        /// Maximum rule count.
        max: usize,
    },
}

/// Checks that `value` lies in `[0, 1]`.
pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::ProbabilityOutOfRange { name, value })
    }
}

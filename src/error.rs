//! Error types for rhal.
//!
//! Vector arithmetic itself never fails: every operation wraps or saturates over its whole
//! input domain. Errors only come from building lane containers out of slices of the wrong
//! size, from harness configuration, and from the verification harnesses reporting a mismatch.

use std::fmt;

/// Errors that can occur around rhal operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RhalError {
    /// A slice did not hold exactly one vector's worth of lanes.
    LaneCount {
        /// Lane count of the target vector type.
        expected: usize,
        /// Length of the slice that was provided.
        actual: usize,
    },
    /// A harness setting could not be parsed or is out of range.
    Config {
        /// Name of the setting (flag or environment variable).
        key: String,
        /// Human-readable error message.
        message: String,
    },
    /// A backend produced a result that differs from the reference.
    Verification {
        /// Number of mismatching vectors.
        mismatches: usize,
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for RhalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RhalError::LaneCount { expected, actual } => write!(
                f,
                "Lane count mismatch: expected {} lanes, got {}",
                expected, actual
            ),
            RhalError::Config { key, message } => {
                write!(f, "Invalid configuration for `{}`: {}", key, message)
            }
            RhalError::Verification {
                mismatches,
                message,
            } => write!(
                f,
                "Verification failed: {} ({} mismatching vectors)",
                message, mismatches
            ),
        }
    }
}

impl std::error::Error for RhalError {}

/// Result type alias for rhal operations.
pub type Result<T> = std::result::Result<T, RhalError>;

/// Creates a lane count error.
pub fn lane_count_error(expected: usize, actual: usize) -> RhalError {
    RhalError::LaneCount { expected, actual }
}

/// Creates a configuration error.
pub fn config_error(key: impl Into<String>, message: impl Into<String>) -> RhalError {
    RhalError::Config {
        key: key.into(),
        message: message.into(),
    }
}

/// Creates a verification error.
pub fn verification_error(mismatches: usize, message: impl Into<String>) -> RhalError {
    RhalError::Verification {
        mismatches,
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_count_error_display() {
        let error = lane_count_error(8, 3);
        let display = format!("{}", error);
        assert!(display.contains("Lane count mismatch"));
        assert!(display.contains("expected 8 lanes"));
        assert!(display.contains("got 3"));
    }

    #[test]
    fn test_config_error_display() {
        let error = config_error("RHAL_SAMPLES", "must be greater than zero");
        let display = format!("{}", error);
        assert!(display.contains("Invalid configuration"));
        assert!(display.contains("`RHAL_SAMPLES`"));
        assert!(display.contains("must be greater than zero"));
    }

    #[test]
    fn test_verification_error_display() {
        let error = verification_error(2, "rvv disagrees with scalar");
        let display = format!("{}", error);
        assert!(display.contains("Verification failed"));
        assert!(display.contains("rvv disagrees with scalar"));
        assert!(display.contains("2 mismatching vectors"));
    }

    #[test]
    fn test_error_equality() {
        let error1 = lane_count_error(4, 2);
        let error2 = lane_count_error(4, 2);
        let error3 = lane_count_error(2, 4);

        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = config_error("--seed", "not a number");

        let _: &dyn std::error::Error = &error;

        assert!(std::error::Error::source(&error).is_none());
    }
}

//! Error types for sequencing and playback.

use thiserror::Error;

/// Errors surfaced synchronously to the caller of a builder or play operation.
///
/// Nothing is appended and no timer is scheduled when one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SequenceError {
    /// A step or play call received a negative or non-finite duration.
    #[error("invalid duration: {duration_ms}ms (expected a finite value >= 0)")]
    InvalidDuration { duration_ms: f64 },

    /// Playback was requested without a usable target element.
    #[error("missing target element: {target}")]
    MissingTarget { target: String },

    /// A serialized sequence or configuration could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}

impl SequenceError {
    pub fn missing_target(target: impl Into<String>) -> Self {
        SequenceError::MissingTarget {
            target: target.into(),
        }
    }
}

/// Accepts finite durations >= 0.
pub(crate) fn check_duration(duration_ms: f64) -> Result<f64, SequenceError> {
    if duration_ms.is_finite() && duration_ms >= 0.0 {
        Ok(duration_ms)
    } else {
        Err(SequenceError::InvalidDuration { duration_ms })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_and_nan() {
        assert!(check_duration(-1.0).is_err());
        assert!(check_duration(f64::NAN).is_err());
        assert!(check_duration(f64::INFINITY).is_err());
        assert_eq!(check_duration(0.0), Ok(0.0));
    }

    #[test]
    fn display_mentions_value() {
        let err = SequenceError::InvalidDuration { duration_ms: -5.0 };
        assert!(err.to_string().contains("-5ms"));
    }
}

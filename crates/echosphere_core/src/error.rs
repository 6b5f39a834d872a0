use thiserror::Error;

/// Failures a scorer can report instead of a score.
///
/// None of these reach the end user: the analyzer swaps in the scorer's
/// zero-default and logs the error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    #[error("{scorer} produced a non-finite {field}")]
    NonFinite {
        scorer: &'static str,
        field: &'static str,
    },

    #[error("{scorer} unavailable: {reason}")]
    Unavailable { scorer: String, reason: String },

    #[error("invalid engine config: {0}")]
    InvalidConfig(String),
}

impl ScoreError {
    pub fn unavailable(scorer: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            scorer: scorer.into(),
            reason: reason.into(),
        }
    }
}

/// Reject NaN/inf before it leaks into a score.
pub fn ensure_finite(scorer: &'static str, field: &'static str, value: f64) -> Result<f64, ScoreError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScoreError::NonFinite { scorer, field })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = ScoreError::NonFinite {
            scorer: "valence",
            field: "compound",
        };
        assert_eq!(e.to_string(), "valence produced a non-finite compound");

        let e = ScoreError::unavailable("stub", "configured to fail");
        assert_eq!(e.to_string(), "stub unavailable: configured to fail");
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("s", "f", 0.25), Ok(0.25));
        assert!(ensure_finite("s", "f", f64::NAN).is_err());
        assert!(ensure_finite("s", "f", f64::INFINITY).is_err());
    }
}

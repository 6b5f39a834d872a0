//! Deterministic scorers for tests and for callers that want to pin one
//! signal while exercising the rest of the pipeline.

use echosphere_core::{
    LexiconScore, PolarityScorer, PolaritySubjectivity, ScoreError, SentimentScorer,
};

/// Always returns the same valence score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSentiment {
    score: LexiconScore,
}

impl FixedSentiment {
    pub fn new(score: LexiconScore) -> Self {
        Self { score }
    }

    /// Neutral proportions with the given compound.
    pub fn compound(compound: f64) -> Self {
        Self::new(LexiconScore {
            compound,
            ..LexiconScore::NEUTRAL
        })
    }
}

impl SentimentScorer for FixedSentiment {
    fn name(&self) -> &str {
        "fixed-sentiment"
    }

    fn score(&self, _text: &str) -> Result<LexiconScore, ScoreError> {
        Ok(self.score)
    }
}

/// Always returns the same polarity/subjectivity, unclamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPolarity {
    polarity: f64,
    subjectivity: f64,
}

impl FixedPolarity {
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity,
            subjectivity,
        }
    }
}

impl PolarityScorer for FixedPolarity {
    fn name(&self) -> &str {
        "fixed-polarity"
    }

    fn score(&self, _text: &str) -> Result<PolaritySubjectivity, ScoreError> {
        Ok(PolaritySubjectivity {
            polarity: self.polarity,
            subjectivity: self.subjectivity,
        })
    }
}

/// Fails every call; stands in for a scorer whose model could not load.
#[derive(Debug, Clone, PartialEq)]
pub struct FailingScorer {
    reason: String,
}

impl FailingScorer {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> ScoreError {
        ScoreError::unavailable("failing-scorer", self.reason.clone())
    }
}

impl SentimentScorer for FailingScorer {
    fn name(&self) -> &str {
        "failing-scorer"
    }

    fn score(&self, _text: &str) -> Result<LexiconScore, ScoreError> {
        Err(self.error())
    }
}

impl PolarityScorer for FailingScorer {
    fn name(&self) -> &str {
        "failing-scorer"
    }

    fn score(&self, _text: &str) -> Result<PolaritySubjectivity, ScoreError> {
        Err(self.error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_scorers_ignore_input() {
        let s = FixedSentiment::compound(0.4);
        assert_eq!(s.score("anything").unwrap().compound, 0.4);
        assert_eq!(s.score("").unwrap().neutral, 1.0);

        let p = FixedPolarity::new(-0.2, 0.9);
        let out = p.score("x").unwrap();
        assert_eq!((out.polarity, out.subjectivity), (-0.2, 0.9));
    }

    #[test]
    fn test_failing_scorer_reports_reason() {
        let f = FailingScorer::new("no lexicon");
        let err = SentimentScorer::score(&f, "text").unwrap_err();
        assert!(err.to_string().contains("no lexicon"));
        assert!(PolarityScorer::score(&f, "text").is_err());
    }
}

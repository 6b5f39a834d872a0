//! Fusion of the three scorer outputs into one label.
//!
//! Strong pattern evidence wins outright. Otherwise the compound valence
//! and polarity decide between the positive, negative and neutral
//! branches.

use echosphere_core::{Emotion, FusionConfig, LexiconScore, PatternScores, PolaritySubjectivity};

/// Which branch produced the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionPath {
    Pattern,
    PositiveSentiment,
    NegativeSentiment,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub emotion: Emotion,
    /// `[0, 1]`
    pub confidence: f64,
    pub path: DecisionPath,
}

#[derive(Debug, Clone, Default)]
pub struct FusionClassifier {
    config: FusionConfig,
}

impl FusionClassifier {
    pub fn new(config: FusionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FusionConfig {
        &self.config
    }

    pub fn classify(
        &self,
        lexicon: &LexiconScore,
        polarity: &PolaritySubjectivity,
        patterns: &PatternScores,
    ) -> Classification {
        let cfg = &self.config;
        let (category, strongest) = patterns.strongest();

        let (emotion, confidence, path) = if strongest > cfg.pattern_threshold {
            (category, strongest.min(1.0), DecisionPath::Pattern)
        } else {
            let compound = lexicon.compound;
            let pol = polarity.polarity;
            // Compound is preferred; polarity only speaks when compound is exactly 0.
            let magnitude = if compound != 0.0 { compound.abs() } else { pol.abs() };

            if compound >= cfg.positive_compound || pol >= cfg.positive_polarity {
                let emotion = if compound >= cfg.happy_compound || pol >= cfg.happy_polarity {
                    Emotion::Happy
                } else {
                    Emotion::Positive
                };
                (emotion, magnitude, DecisionPath::PositiveSentiment)
            } else if compound <= cfg.negative_compound || pol <= cfg.negative_polarity {
                let emotion = if compound <= cfg.angry_compound || pol <= cfg.angry_polarity {
                    Emotion::Angry
                } else {
                    Emotion::Sad
                };
                (emotion, magnitude, DecisionPath::NegativeSentiment)
            } else {
                (Emotion::Neutral, 1.0 - compound.abs(), DecisionPath::Neutral)
            }
        };

        Classification {
            emotion,
            confidence: clamp_unit(confidence),
            path,
        }
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

//! Score value types passed between the scorers and the fusion step.

use crate::emotion::Emotion;
use serde::{Deserialize, Serialize};

/// Output of the valence-lexicon scorer.
///
/// The three proportions are each in `[0, 1]` but are not forced to sum
/// to exactly 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LexiconScore {
    /// Aggregate valence in `[-1, 1]`.
    pub compound: f64,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

impl LexiconScore {
    /// The value substituted when the scorer fails.
    pub const NEUTRAL: LexiconScore = LexiconScore {
        compound: 0.0,
        positive: 0.0,
        negative: 0.0,
        neutral: 1.0,
    };

    /// Clamp every field into its documented range.
    pub fn clamped(self) -> Self {
        Self {
            compound: self.compound.clamp(-1.0, 1.0),
            positive: self.positive.clamp(0.0, 1.0),
            negative: self.negative.clamp(0.0, 1.0),
            neutral: self.neutral.clamp(0.0, 1.0),
        }
    }
}

impl Default for LexiconScore {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Output of the polarity/subjectivity scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolaritySubjectivity {
    /// `[-1, 1]`
    pub polarity: f64,
    /// `[0, 1]`
    pub subjectivity: f64,
}

impl PolaritySubjectivity {
    pub const ZERO: PolaritySubjectivity = PolaritySubjectivity {
        polarity: 0.0,
        subjectivity: 0.0,
    };

    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }
}

/// Accumulated pattern evidence per category. Built fresh for every message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PatternScores {
    pub happy: f64,
    pub sad: f64,
    pub angry: f64,
    pub surprised: f64,
    pub fearful: f64,
    pub disgusted: f64,
}

impl PatternScores {
    /// Score for a pattern category; fallback labels always read 0.
    pub fn get(&self, category: Emotion) -> f64 {
        match category {
            Emotion::Happy => self.happy,
            Emotion::Sad => self.sad,
            Emotion::Angry => self.angry,
            Emotion::Surprised => self.surprised,
            Emotion::Fearful => self.fearful,
            Emotion::Disgusted => self.disgusted,
            Emotion::Neutral | Emotion::Positive | Emotion::Negative => 0.0,
        }
    }

    fn slot_mut(&mut self, category: Emotion) -> Option<&mut f64> {
        match category {
            Emotion::Happy => Some(&mut self.happy),
            Emotion::Sad => Some(&mut self.sad),
            Emotion::Angry => Some(&mut self.angry),
            Emotion::Surprised => Some(&mut self.surprised),
            Emotion::Fearful => Some(&mut self.fearful),
            Emotion::Disgusted => Some(&mut self.disgusted),
            Emotion::Neutral | Emotion::Positive | Emotion::Negative => None,
        }
    }

    /// Add `amount` to a category. Ignored for non-pattern labels.
    pub fn add(&mut self, category: Emotion, amount: f64) {
        if let Some(slot) = self.slot_mut(category) {
            *slot += amount;
        }
    }

    /// `(category, score)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        Emotion::PATTERN_CATEGORIES
            .iter()
            .map(move |&category| (category, self.get(category)))
    }

    /// The highest-scoring category. Equal scores resolve to the category
    /// declared first.
    pub fn strongest(&self) -> (Emotion, f64) {
        let mut best = (Emotion::PATTERN_CATEGORIES[0], self.get(Emotion::PATTERN_CATEGORIES[0]));
        for (category, score) in self.iter().skip(1) {
            if score > best.1 {
                best = (category, score);
            }
        }
        best
    }

    pub fn is_zero(&self) -> bool {
        self.iter().all(|(_, score)| score == 0.0)
    }
}

/// Final output of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub emotion: Emotion,
    /// `[0, 1]`
    pub confidence: f64,
    pub polarity: f64,
    pub subjectivity: f64,
    pub vader_scores: LexiconScore,
    pub pattern_scores: PatternScores,
}

impl AnalysisResult {
    /// Result for empty or whitespace-only input.
    pub fn empty_input(confidence: f64) -> Self {
        Self {
            emotion: Emotion::Neutral,
            confidence: confidence.clamp(0.0, 1.0),
            polarity: 0.0,
            subjectivity: 0.0,
            vader_scores: LexiconScore::NEUTRAL,
            pattern_scores: PatternScores::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strongest_picks_max() {
        let mut scores = PatternScores::default();
        scores.add(Emotion::Fearful, 0.3);
        scores.add(Emotion::Sad, 0.6);
        assert_eq!(scores.strongest(), (Emotion::Sad, 0.6));
    }

    #[test]
    fn test_strongest_tie_goes_to_first_declared() {
        let mut scores = PatternScores::default();
        scores.add(Emotion::Disgusted, 0.9);
        scores.add(Emotion::Angry, 0.9);
        assert_eq!(scores.strongest().0, Emotion::Angry);

        let all_zero = PatternScores::default();
        assert_eq!(all_zero.strongest(), (Emotion::Happy, 0.0));
    }

    #[test]
    fn test_add_ignores_fallback_labels() {
        let mut scores = PatternScores::default();
        scores.add(Emotion::Neutral, 5.0);
        scores.add(Emotion::Positive, 5.0);
        assert!(scores.is_zero());
        assert_eq!(scores.get(Emotion::Negative), 0.0);
    }

    #[test]
    fn test_add_accumulates() {
        let mut scores = PatternScores::default();
        scores.add(Emotion::Happy, 0.3);
        scores.add(Emotion::Happy, 0.45);
        assert!((scores.happy - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_iter_declaration_order() {
        let order: Vec<Emotion> = PatternScores::default().iter().map(|(e, _)| e).collect();
        assert_eq!(order, Emotion::PATTERN_CATEGORIES.to_vec());
    }

    #[test]
    fn test_polarity_subjectivity_clamps() {
        let ps = PolaritySubjectivity::new(3.0, -1.0);
        assert_eq!(ps.polarity, 1.0);
        assert_eq!(ps.subjectivity, 0.0);
    }

    #[test]
    fn test_lexicon_clamped() {
        let s = LexiconScore {
            compound: -1.5,
            positive: 1.2,
            negative: -0.1,
            neutral: 0.5,
        }
        .clamped();
        assert_eq!(s.compound, -1.0);
        assert_eq!(s.positive, 1.0);
        assert_eq!(s.negative, 0.0);
    }

    #[test]
    fn test_empty_input_result_json_shape() {
        let result = AnalysisResult::empty_input(0.5);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["emotion"], "neutral");
        assert_eq!(json["confidence"], 0.5);
        assert_eq!(json["vader_scores"]["neutral"], 1.0);
        assert_eq!(json["pattern_scores"]["disgusted"], 0.0);
    }
}

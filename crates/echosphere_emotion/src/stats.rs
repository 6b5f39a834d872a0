//! Aggregate view over many analyses: label counts, the dominant label,
//! percentage breakdown and average polarity.

use echosphere_core::{AnalysisResult, Emotion, PatternScores};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmotionDistribution {
    counts: [usize; Emotion::ALL.len()],
    total: usize,
    polarity_sum: f64,
    pattern_sums: PatternScores,
}

impl EmotionDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: &AnalysisResult) {
        self.counts[result.emotion.ordinal()] += 1;
        self.total += 1;
        self.polarity_sum += result.polarity;
        for (category, score) in result.pattern_scores.iter() {
            self.pattern_sums.add(category, score);
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn count(&self, emotion: Emotion) -> usize {
        self.counts[emotion.ordinal()]
    }

    /// Most frequent label; ties go to the label listed first in
    /// [`Emotion::ALL`].
    pub fn most_common(&self) -> Option<(Emotion, usize)> {
        let mut best: Option<(Emotion, usize)> = None;
        for emotion in Emotion::ALL {
            let n = self.count(emotion);
            if n > 0 && best.map_or(true, |(_, b)| n > b) {
                best = Some((emotion, n));
            }
        }
        best
    }

    /// Share of each observed label in percent, rounded to one decimal.
    pub fn percentages(&self) -> BTreeMap<Emotion, f64> {
        if self.total == 0 {
            return BTreeMap::new();
        }
        Emotion::ALL
            .iter()
            .filter(|e| self.count(**e) > 0)
            .map(|&e| {
                let pct = self.count(e) as f64 / self.total as f64 * 100.0;
                (e, (pct * 10.0).round() / 10.0)
            })
            .collect()
    }

    pub fn average_polarity(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.polarity_sum / self.total as f64
        }
    }

    /// Per-category mean of the raw pattern scores.
    pub fn mean_pattern_scores(&self) -> PatternScores {
        let mut means = PatternScores::default();
        if self.total == 0 {
            return means;
        }
        for (category, sum) in self.pattern_sums.iter() {
            means.add(category, sum / self.total as f64);
        }
        means
    }

    pub fn summary(&self) -> DistributionSummary {
        DistributionSummary {
            total_messages: self.total,
            most_common_emotion: self.most_common().map(|(e, _)| e),
            counts: Emotion::ALL
                .iter()
                .filter(|e| self.count(**e) > 0)
                .map(|&e| (e, self.count(e)))
                .collect(),
            percentages: self.percentages(),
            average_polarity: self.average_polarity(),
            mean_pattern_scores: self.mean_pattern_scores(),
        }
    }
}

impl<'a> Extend<&'a AnalysisResult> for EmotionDistribution {
    fn extend<T: IntoIterator<Item = &'a AnalysisResult>>(&mut self, iter: T) {
        for result in iter {
            self.record(result);
        }
    }
}

impl<'a> FromIterator<&'a AnalysisResult> for EmotionDistribution {
    fn from_iter<T: IntoIterator<Item = &'a AnalysisResult>>(iter: T) -> Self {
        let mut dist = Self::new();
        dist.extend(iter);
        dist
    }
}

/// Serializable snapshot of an [`EmotionDistribution`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSummary {
    pub total_messages: usize,
    pub most_common_emotion: Option<Emotion>,
    pub counts: BTreeMap<Emotion, usize>,
    pub percentages: BTreeMap<Emotion, f64>,
    pub average_polarity: f64,
    pub mean_pattern_scores: PatternScores,
}

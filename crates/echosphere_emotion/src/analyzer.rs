use crate::fusion::FusionClassifier;
use crate::lexicon::ValenceLexiconScorer;
use crate::normalize::normalize;
use crate::patterns::PatternScorer;
use crate::polarity::PolarityLexiconScorer;
use echosphere_core::error::ensure_finite;
use echosphere_core::{
    AnalysisResult, EngineConfig, LexiconScore, PolarityScorer, PolaritySubjectivity, ScoreError,
    SentimentScorer,
};
use std::sync::Arc;

/// Message emotion classifier.
///
/// Stateless per call: the pattern table is a shared static and every
/// analysis builds its own scores, so one analyzer can serve any number of
/// threads. Cloning is cheap.
#[derive(Clone)]
pub struct EmotionAnalyzer {
    sentiment: Arc<dyn SentimentScorer>,
    polarity: Arc<dyn PolarityScorer>,
    patterns: PatternScorer,
    fusion: FusionClassifier,
    empty_confidence: f64,
}

impl Default for EmotionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EmotionAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmotionAnalyzer")
            .field("sentiment", &self.sentiment.name())
            .field("polarity", &self.polarity.name())
            .field("patterns", &self.patterns)
            .field("fusion", &self.fusion)
            .finish()
    }
}

impl EmotionAnalyzer {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let empty_confidence = config.fusion.empty_confidence;
        Self {
            sentiment: Arc::new(ValenceLexiconScorer::new()),
            polarity: Arc::new(PolarityLexiconScorer::new()),
            patterns: PatternScorer::new(config.patterns),
            fusion: FusionClassifier::new(config.fusion),
            empty_confidence,
        }
    }

    /// Swap the valence scorer, e.g. for a deterministic stub in tests.
    pub fn with_sentiment_scorer(mut self, scorer: impl SentimentScorer + 'static) -> Self {
        self.sentiment = Arc::new(scorer);
        self
    }

    /// Swap the polarity/subjectivity scorer.
    pub fn with_polarity_scorer(mut self, scorer: impl PolarityScorer + 'static) -> Self {
        self.polarity = Arc::new(scorer);
        self
    }

    /// Classify one message. `None`, empty and whitespace-only input
    /// short-circuit to the neutral default without running any scorer.
    pub fn analyze<'a>(&self, text: impl Into<Option<&'a str>>) -> AnalysisResult {
        let Some(text) = text.into().filter(|t| !t.trim().is_empty()) else {
            return AnalysisResult::empty_input(self.empty_confidence);
        };

        let normalized = normalize(text);
        let vader_scores = self.lexicon_score(&normalized);
        let polarity = self.polarity_score(&normalized);
        let pattern_scores = self.patterns.score(&normalized);

        let decision = self.fusion.classify(&vader_scores, &polarity, &pattern_scores);
        tracing::debug!(
            emotion = %decision.emotion,
            confidence = decision.confidence,
            path = ?decision.path,
            "classified message"
        );

        AnalysisResult {
            emotion: decision.emotion,
            confidence: decision.confidence,
            polarity: polarity.polarity,
            subjectivity: polarity.subjectivity,
            vader_scores,
            pattern_scores,
        }
    }

    fn lexicon_score(&self, text: &str) -> LexiconScore {
        match self.sentiment.score(text).and_then(checked_lexicon) {
            Ok(score) => score,
            Err(e) => {
                tracing::error!(scorer = self.sentiment.name(), "Sentiment analysis error: {}", e);
                LexiconScore::NEUTRAL
            }
        }
    }

    fn polarity_score(&self, text: &str) -> PolaritySubjectivity {
        match self.polarity.score(text).and_then(checked_polarity) {
            Ok(score) => score,
            Err(e) => {
                tracing::error!(scorer = self.polarity.name(), "Polarity analysis error: {}", e);
                PolaritySubjectivity::ZERO
            }
        }
    }
}

/// Injected scorers are not trusted to stay in range.
fn checked_lexicon(score: LexiconScore) -> Result<LexiconScore, ScoreError> {
    const NAME: &str = "sentiment scorer";
    ensure_finite(NAME, "compound", score.compound)?;
    ensure_finite(NAME, "positive", score.positive)?;
    ensure_finite(NAME, "negative", score.negative)?;
    ensure_finite(NAME, "neutral", score.neutral)?;
    Ok(score.clamped())
}

fn checked_polarity(score: PolaritySubjectivity) -> Result<PolaritySubjectivity, ScoreError> {
    const NAME: &str = "polarity scorer";
    let polarity = ensure_finite(NAME, "polarity", score.polarity)?;
    let subjectivity = ensure_finite(NAME, "subjectivity", score.subjectivity)?;
    Ok(PolaritySubjectivity::new(polarity, subjectivity))
}

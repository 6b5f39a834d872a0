//! # Echosphere Core
//!
//! Shared vocabulary for the emotion engine: the label set, the score
//! types that flow from the scorers into fusion, the scorer seams and the
//! engine configuration.

pub mod config;
pub mod emotion;
pub mod error;
pub mod scores;

pub use config::{EngineConfig, FusionConfig, PatternConfig};
pub use emotion::{Emotion, UnknownEmotion};
pub use error::ScoreError;
pub use scores::{AnalysisResult, LexiconScore, PatternScores, PolaritySubjectivity};

/// Lexicon-based valence scoring over normalized text.
///
/// Implementations must be pure: the same text always yields the same score.
pub trait SentimentScorer: Send + Sync {
    fn name(&self) -> &str;
    fn score(&self, text: &str) -> Result<LexiconScore, ScoreError>;
}

/// Averaged polarity and subjectivity over normalized text.
pub trait PolarityScorer: Send + Sync {
    fn name(&self) -> &str;
    fn score(&self, text: &str) -> Result<PolaritySubjectivity, ScoreError>;
}

//! # Echosphere Emotion Engine
//!
//! Classifies a short chat message into one of nine emotion labels with a
//! confidence score.
//!
//! ## Pipeline
//!
//! 1. [`normalize`]: lower-case, trim, collapse punctuation and letter runs
//! 2. Three independent scorers over the normalized text:
//!    - [`ValenceLexiconScorer`]: compound valence plus pos/neg/neutral shares
//!    - [`PolarityLexiconScorer`]: averaged polarity and subjectivity
//!    - [`PatternScorer`]: keyword/emoji/phrase evidence per category
//! 3. [`FusionClassifier`]: strong pattern evidence first, sentiment fallback second
//!
//! [`EmotionAnalyzer`] wires these together. The two sentiment scorers sit
//! behind the [`SentimentScorer`](echosphere_core::SentimentScorer) and
//! [`PolarityScorer`](echosphere_core::PolarityScorer) traits and can be
//! swapped; a failing scorer degrades to its zero-default instead of
//! failing the analysis.
//!
//! The engine performs no I/O and reads no environment.

mod analyzer;
pub mod fusion;
mod glyph;
pub mod lexicon;
pub mod mock;
mod normalize;
pub mod patterns;
pub mod polarity;
mod stats;

pub use analyzer::EmotionAnalyzer;
pub use fusion::{Classification, DecisionPath, FusionClassifier};
pub use glyph::{emoji_for, glyph, NEUTRAL_GLYPH};
pub use lexicon::ValenceLexiconScorer;
pub use normalize::normalize;
pub use patterns::{EmotionPatternTable, GroupKind, PatternScorer};
pub use polarity::PolarityLexiconScorer;
pub use stats::{DistributionSummary, EmotionDistribution};

pub use echosphere_core::{AnalysisResult, Emotion, EngineConfig};

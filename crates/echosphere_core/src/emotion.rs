//! Discrete emotion labels.
//!
//! Six labels are backed by keyword/emoji patterns; the remaining three
//! (`Neutral`, `Positive`, `Negative`) only come out of the sentiment
//! fallback when no pattern is strong enough.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Surprised,
    Fearful,
    Disgusted,
    Neutral,
    Positive,
    Negative,
}

impl Emotion {
    /// Pattern categories in declaration order. The order is load-bearing:
    /// it breaks ties between equal pattern scores.
    pub const PATTERN_CATEGORIES: [Emotion; 6] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Surprised,
        Emotion::Fearful,
        Emotion::Disgusted,
    ];

    /// Every label the classifier can produce.
    pub const ALL: [Emotion; 9] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Surprised,
        Emotion::Fearful,
        Emotion::Disgusted,
        Emotion::Neutral,
        Emotion::Positive,
        Emotion::Negative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Surprised => "surprised",
            Emotion::Fearful => "fearful",
            Emotion::Disgusted => "disgusted",
            Emotion::Neutral => "neutral",
            Emotion::Positive => "positive",
            Emotion::Negative => "negative",
        }
    }

    /// Whether this label has its own pattern group set.
    pub fn is_pattern_category(&self) -> bool {
        Self::PATTERN_CATEGORIES.contains(self)
    }

    /// Index into [`Emotion::ALL`]; variants are declared in that order.
    pub fn ordinal(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEmotion(pub String);

impl fmt::Display for UnknownEmotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown emotion label: '{}'", self.0)
    }
}

impl std::error::Error for UnknownEmotion {}

impl FromStr for Emotion {
    type Err = UnknownEmotion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|e| e.as_str() == label)
            .ok_or_else(|| UnknownEmotion(s.to_string()))
    }
}

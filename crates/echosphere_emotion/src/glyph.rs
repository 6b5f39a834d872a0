//! Display glyph per emotion label.

use echosphere_core::Emotion;

pub const NEUTRAL_GLYPH: &str = "😐";

pub fn glyph(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Happy => "😊",
        Emotion::Sad => "😢",
        Emotion::Angry => "😠",
        Emotion::Surprised => "😲",
        Emotion::Fearful => "😨",
        Emotion::Disgusted => "🤢",
        Emotion::Neutral => NEUTRAL_GLYPH,
        Emotion::Positive => "🙂",
        Emotion::Negative => "😞",
    }
}

/// Glyph for a label string. Only the exact lowercase labels are known;
/// anything else gets the neutral glyph.
pub fn emoji_for(label: &str) -> &'static str {
    Emotion::ALL
        .iter()
        .find(|e| e.as_str() == label)
        .map_or(NEUTRAL_GLYPH, |&e| glyph(e))
}

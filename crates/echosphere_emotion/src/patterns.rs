//! Keyword / emoji / phrase pattern scoring per emotion category.

use echosphere_core::{Emotion, PatternConfig, PatternScores};
use regex::Regex;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Keywords,
    Emoji,
    Phrases,
}

#[derive(Debug)]
pub struct PatternGroup {
    pub kind: GroupKind,
    regex: Regex,
}

impl PatternGroup {
    fn new(kind: GroupKind, pattern: &str) -> Self {
        // Literal patterns below; a compile failure is a bug in this file.
        let regex = Regex::new(&format!("(?i){}", pattern)).unwrap();
        Self { kind, regex }
    }

    /// Non-overlapping matches in `text`.
    pub fn count_matches(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }
}

/// The fixed per-category pattern groups, in category declaration order.
#[derive(Debug)]
pub struct EmotionPatternTable {
    categories: Vec<(Emotion, Vec<PatternGroup>)>,
}

static PATTERN_TABLE: LazyLock<EmotionPatternTable> = LazyLock::new(EmotionPatternTable::build);

impl EmotionPatternTable {
    /// Process-wide table, compiled on first use and never mutated.
    pub fn global() -> &'static EmotionPatternTable {
        &PATTERN_TABLE
    }

    fn build() -> Self {
        use GroupKind::*;

        let raw: [(Emotion, [(GroupKind, &str); 3]); 6] = [
            (
                Emotion::Happy,
                [
                    (Keywords, r"\b(happy|joy|excited|great|awesome|amazing|love|wonderful|fantastic|excellent|brilliant|perfect|good|nice|pleased|delighted|thrilled|ecstatic)\b"),
                    (Emoji, r"[😊😄😃😀🥳🎉😍🤩]"),
                    (Phrases, r"\b(yay|woohoo|hurray|yes!|yess|woo)\b"),
                ],
            ),
            (
                Emotion::Sad,
                [
                    (Keywords, r"\b(sad|depressed|down|low|upset|hurt|disappointed|miserable|unhappy|gloomy|blue|heartbroken|devastated)\b"),
                    (Emoji, r"[😢😭😞😔☹️💔😪😟]"),
                    (Phrases, r"\b(cry|crying|tears|weep|sob)\b"),
                ],
            ),
            (
                Emotion::Angry,
                [
                    (Keywords, r"\b(angry|mad|furious|pissed|annoyed|frustrated|irritated|rage|hate|disgusted|fed up|sick of)\b"),
                    (Emoji, r"[😠😡🤬😤💢]"),
                    (Phrases, r"\b(damn|shit|fuck|hell|stupid|idiot|hate)\b"),
                ],
            ),
            (
                Emotion::Surprised,
                [
                    (Keywords, r"\b(surprised|shocked|amazed|wow|whoa|omg|incredible|unbelievable|astonishing)\b"),
                    (Emoji, r"[😲😱🤯😧😮]"),
                    (Phrases, r"\b(wow!|omg!|no way!|really\?|seriously\?)\b"),
                ],
            ),
            (
                Emotion::Fearful,
                [
                    (Keywords, r"\b(scared|afraid|frightened|terrified|worried|anxious|nervous|panic|fear)\b"),
                    (Emoji, r"[😨😰😱🙈]"),
                    (Phrases, r"\b(help|scared|terrifying|nightmare)\b"),
                ],
            ),
            (
                Emotion::Disgusted,
                [
                    (Keywords, r"\b(disgusted|sick|gross|yuck|eww|nasty|revolting|repulsive)\b"),
                    (Emoji, r"[🤢🤮😷🤧]"),
                    (Phrases, r"\b(yuck|eww|gross|ugh)\b"),
                ],
            ),
        ];

        let categories = raw
            .into_iter()
            .map(|(emotion, groups)| {
                let groups = groups
                    .into_iter()
                    .map(|(kind, pattern)| PatternGroup::new(kind, pattern))
                    .collect();
                (emotion, groups)
            })
            .collect();

        Self { categories }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Emotion, &[PatternGroup])> + '_ {
        self.categories
            .iter()
            .map(|(emotion, groups)| (*emotion, groups.as_slice()))
    }
}

/// Scores normalized text against [`EmotionPatternTable`].
#[derive(Debug, Clone)]
pub struct PatternScorer {
    config: PatternConfig,
    table: &'static EmotionPatternTable,
}

impl Default for PatternScorer {
    fn default() -> Self {
        Self::new(PatternConfig::default())
    }
}

impl PatternScorer {
    pub fn new(config: PatternConfig) -> Self {
        Self {
            config,
            table: EmotionPatternTable::global(),
        }
    }

    pub fn config(&self) -> &PatternConfig {
        &self.config
    }

    /// Message-wide multiplier. Intensifiers win; diminishers only count
    /// when no intensifier is present. Both are plain substring tests.
    pub fn emphasis_factor(&self, text: &str) -> f64 {
        if self.config.intensifiers.iter().any(|w| text.contains(w.as_str())) {
            self.config.intensifier_boost
        } else if self.config.diminishers.iter().any(|w| text.contains(w.as_str())) {
            self.config.diminisher_damping
        } else {
            1.0
        }
    }

    pub fn score(&self, text: &str) -> PatternScores {
        let mut scores = PatternScores::default();
        if text.is_empty() {
            return scores;
        }

        let factor = self.emphasis_factor(text);
        for (category, groups) in self.table.iter() {
            for group in groups {
                let matches = group.count_matches(text);
                if matches == 0 {
                    continue;
                }
                let base = matches as f64 * self.config.match_weight * factor;
                tracing::trace!(
                    category = category.as_str(),
                    kind = ?group.kind,
                    matches,
                    base,
                    "pattern group matched"
                );
                scores.add(category, base);
            }
        }
        scores
    }
}

//! Averaged word-level polarity and subjectivity.
//!
//! Every word found in the adjective lexicon is an assessment. Preceding
//! intensity modifiers scale it, a preceding negation flips and halves its
//! polarity, and a directly following `!` adds a quarter. The result is
//! the mean over all assessments.

use echosphere_core::error::ensure_finite;
use echosphere_core::{PolarityScorer, PolaritySubjectivity, ScoreError};
use std::collections::HashMap;
use std::sync::LazyLock;

const SCORER_NAME: &str = "polarity-lexicon";
const NEGATION_FACTOR: f64 = -0.5;
const EXCLAMATION_FACTOR: f64 = 1.25;

/// `(word, polarity, subjectivity)`
const ADJECTIVES: &[(&str, f64, f64)] = &[
    ("amazed", 0.3, 0.6),
    ("amazing", 0.6, 0.9),
    ("angry", -0.5, 1.0),
    ("annoyed", -0.4, 0.8),
    ("annoying", -0.8, 0.9),
    ("anxious", -0.25, 0.75),
    ("astonishing", 0.5, 0.8),
    ("awesome", 1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.667),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("bored", -0.5, 1.0),
    ("boring", -1.0, 1.0),
    ("brilliant", 0.9, 1.0),
    ("broken", -0.4, 0.4),
    ("calm", 0.3, 0.75),
    ("cheerful", 0.8, 0.9),
    ("cool", 0.35, 0.65),
    ("cute", 0.5, 1.0),
    ("dead", -0.2, 0.4),
    ("delighted", 0.7, 0.8),
    ("depressed", -0.6, 1.0),
    ("devastated", -0.7, 1.0),
    ("disappointed", -0.75, 0.75),
    ("disgusted", -0.8, 1.0),
    ("disgusting", -1.0, 1.0),
    ("down", -0.156, 0.288),
    ("dreadful", -0.9, 1.0),
    ("ecstatic", 0.9, 1.0),
    ("excellent", 1.0, 1.0),
    ("excited", 0.375, 0.75),
    ("exciting", 0.3, 0.8),
    ("fabulous", 0.4, 0.9),
    ("fantastic", 0.4, 0.9),
    ("fine", 0.417, 0.5),
    ("frightened", -0.5, 0.9),
    ("frustrated", -0.7, 0.8),
    ("fun", 0.3, 0.2),
    ("funny", 0.25, 1.0),
    ("furious", -0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("gloomy", -0.6, 0.9),
    ("good", 0.7, 0.6),
    ("gorgeous", 0.7, 1.0),
    ("grateful", 0.6, 0.9),
    ("great", 0.8, 0.75),
    ("gross", -0.6, 0.8),
    ("happy", 0.8, 1.0),
    ("hateful", -0.8, 0.9),
    ("heartbroken", -0.8, 1.0),
    ("horrible", -1.0, 1.0),
    ("hurt", -0.4, 0.7),
    ("important", 0.4, 1.0),
    ("incredible", 0.9, 0.9),
    ("interesting", 0.5, 0.5),
    ("irritated", -0.6, 0.9),
    ("kind", 0.6, 0.9),
    ("lonely", -0.5, 0.9),
    ("lovely", 0.5, 0.75),
    ("lucky", 0.333, 1.0),
    ("mad", -0.625, 1.0),
    ("miserable", -1.0, 1.0),
    ("nasty", -1.0, 1.0),
    ("nervous", -0.3, 0.8),
    ("new", 0.136, 0.455),
    ("nice", 0.6, 1.0),
    ("normal", 0.15, 0.65),
    ("ok", 0.5, 0.5),
    ("okay", 0.5, 0.5),
    ("old", 0.1, 0.2),
    ("perfect", 1.0, 1.0),
    ("pleased", 0.5, 1.0),
    ("poor", -0.4, 0.6),
    ("proud", 0.8, 1.0),
    ("repulsive", -0.9, 1.0),
    ("revolting", -0.9, 1.0),
    ("sad", -0.5, 1.0),
    ("scared", -0.4, 0.8),
    ("scary", -0.5, 1.0),
    ("shocked", -0.7, 0.9),
    ("sick", -0.714, 0.857),
    ("silly", -0.5, 0.5),
    ("special", 0.357, 0.571),
    ("stupid", -0.8, 1.0),
    ("super", 0.333, 0.667),
    ("surprised", 0.1, 0.9),
    ("sweet", 0.35, 0.65),
    ("terrible", -1.0, 1.0),
    ("terrified", -0.9, 1.0),
    ("terrifying", -0.9, 1.0),
    ("thrilled", 0.7, 0.9),
    ("tired", -0.4, 0.7),
    ("ugly", -0.7, 1.0),
    ("unbelievable", 0.4, 0.8),
    ("unhappy", -0.6, 0.9),
    ("upset", -0.5, 0.8),
    ("useless", -0.5, 0.2),
    ("weird", -0.5, 1.0),
    ("wonderful", 1.0, 1.0),
    ("worried", -0.3, 0.7),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.9),
];

/// Adverbs that scale the next assessment instead of being assessed.
const MODIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.5),
    ("extremely", 1.5),
    ("incredibly", 1.4),
    ("most", 1.3),
    ("pretty", 1.1),
    ("quite", 1.1),
    ("really", 1.3),
    ("so", 1.3),
    ("super", 1.3),
    ("too", 1.1),
    ("totally", 1.4),
    ("very", 1.3),
    ("slightly", 0.6),
    ("somewhat", 0.7),
    ("barely", 0.5),
];

static ADJECTIVE_TABLE: LazyLock<HashMap<&'static str, (f64, f64)>> = LazyLock::new(|| {
    ADJECTIVES
        .iter()
        .map(|&(word, polarity, subjectivity)| (word, (polarity, subjectivity)))
        .collect()
});

static MODIFIER_TABLE: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| MODIFIERS.iter().copied().collect());

fn is_negation(word: &str) -> bool {
    matches!(word, "no" | "not" | "never" | "cannot") || word.ends_with("n't")
}

/// Words are runs of alphanumerics and apostrophes; each `!` is a token.
fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        if c.is_alphanumeric() || c == '\'' {
            current.push(c);
            continue;
        }
        if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
        if c == '!' {
            tokens.push("!".to_string());
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PolarityLexiconScorer;

impl PolarityLexiconScorer {
    pub fn new() -> Self {
        Self
    }

    fn assessments(&self, tokens: &[String]) -> Vec<(f64, f64)> {
        let mut out: Vec<(f64, f64)> = Vec::new();
        let mut modifier: Option<f64> = None;
        let mut negated = false;
        let mut just_assessed = false;

        for (idx, token) in tokens.iter().enumerate() {
            let word = token.as_str();

            if word == "!" {
                if just_assessed {
                    if let Some(last) = out.last_mut() {
                        last.0 = (last.0 * EXCLAMATION_FACTOR).clamp(-1.0, 1.0);
                    }
                }
                just_assessed = false;
                continue;
            }
            just_assessed = false;

            if is_negation(word) {
                negated = true;
                modifier = None;
                continue;
            }

            // A modifier applies when an adjective or another modifier follows;
            // chained modifiers multiply and keep a pending negation alive.
            let next_takes_modifier = tokens.get(idx + 1).is_some_and(|next| {
                ADJECTIVE_TABLE.contains_key(next.as_str())
                    || MODIFIER_TABLE.contains_key(next.as_str())
            });
            if let Some(&m) = MODIFIER_TABLE.get(word) {
                if next_takes_modifier {
                    modifier = Some(modifier.unwrap_or(1.0) * m);
                    continue;
                }
            }

            if let Some(&(polarity, subjectivity)) = ADJECTIVE_TABLE.get(word) {
                let m = modifier.take().unwrap_or(1.0);
                let mut p = polarity * m;
                if negated {
                    p *= NEGATION_FACTOR;
                }
                negated = false;
                out.push((p.clamp(-1.0, 1.0), (subjectivity * m).clamp(0.0, 1.0)));
                just_assessed = true;
                continue;
            }

            modifier = None;
            negated = false;
        }
        out
    }
}

impl PolarityScorer for PolarityLexiconScorer {
    fn name(&self) -> &str {
        SCORER_NAME
    }

    fn score(&self, text: &str) -> Result<PolaritySubjectivity, ScoreError> {
        let tokens = tokenize(text);
        let assessments = self.assessments(&tokens);
        if assessments.is_empty() {
            return Ok(PolaritySubjectivity::ZERO);
        }

        let n = assessments.len() as f64;
        let polarity = assessments.iter().map(|a| a.0).sum::<f64>() / n;
        let subjectivity = assessments.iter().map(|a| a.1).sum::<f64>() / n;

        let polarity = ensure_finite(SCORER_NAME, "polarity", polarity)?;
        let subjectivity = ensure_finite(SCORER_NAME, "subjectivity", subjectivity)?;
        Ok(PolaritySubjectivity::new(polarity, subjectivity))
    }
}

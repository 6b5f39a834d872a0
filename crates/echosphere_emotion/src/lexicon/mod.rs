//! Rule-based valence scoring in the VADER style.
//!
//! Per token: lexicon valence, scaled by preceding boosters (with distance
//! decay) and flipped by preceding negations. Then the "but" shift and
//! punctuation emphasis, and finally normalization of the sum into a
//! compound score in `[-1, 1]` plus positive/negative/neutral proportions.

mod words;

use echosphere_core::error::ensure_finite;
use echosphere_core::{LexiconScore, ScoreError, SentimentScorer};
use words::{is_negation, BOOSTER_TABLE, NEGATION_SCALAR, VALENCE_TABLE};

/// Normalization constant for the compound score.
const ALPHA: f64 = 15.0;
const EXCLAMATION_BOOST: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_BOOST: f64 = 0.18;
const QUESTION_CAP: f64 = 0.96;
const BUT_BEFORE: f64 = 0.5;
const BUT_AFTER: f64 = 1.5;
const NEVER_SO_BOOST: f64 = 1.25;

const SCORER_NAME: &str = "valence-lexicon";

#[derive(Debug, Clone, Copy, Default)]
pub struct ValenceLexiconScorer;

impl ValenceLexiconScorer {
    pub fn new() -> Self {
        Self
    }

    fn sentiment_at(&self, tokens: &[String], i: usize) -> f64 {
        let item = tokens[i].as_str();

        if BOOSTER_TABLE.contains_key(item) {
            return 0.0;
        }
        if item == "kind" && tokens.get(i + 1).map(String::as_str) == Some("of") {
            return 0.0;
        }
        let Some(&base) = VALENCE_TABLE.get(item) else {
            return 0.0;
        };
        // "no" in front of a valenced word only negates it
        let next_valenced = tokens
            .get(i + 1)
            .is_some_and(|n| VALENCE_TABLE.contains_key(n.as_str()));
        if item == "no" && next_valenced {
            return 0.0;
        }

        let mut valence = if follows_no(tokens, i) {
            base * NEGATION_SCALAR
        } else {
            base
        };
        for distance in 0..3 {
            if i <= distance {
                break;
            }
            let prev = tokens[i - (distance + 1)].as_str();
            if VALENCE_TABLE.contains_key(prev) {
                continue;
            }
            let mut scalar = booster_scalar(tokens, i - (distance + 1), valence);
            if distance == 1 {
                scalar *= 0.95;
            } else if distance == 2 {
                scalar *= 0.9;
            }
            valence += scalar;
            valence = negation_check(valence, tokens, distance, i);
        }

        least_check(valence, tokens, i)
    }
}

/// Booster value of the word at `at`, signed to push away from zero.
/// "kind of" / "sort of" count as dampeners.
fn booster_scalar(tokens: &[String], at: usize, valence: f64) -> f64 {
    let word = tokens[at].as_str();
    let mut scalar = match BOOSTER_TABLE.get(word) {
        Some(&s) => s,
        None if word == "of"
            && at > 0
            && matches!(tokens[at - 1].as_str(), "kind" | "sort") =>
        {
            words::BOOSTER_DECR
        }
        None => return 0.0,
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    scalar
}

fn negation_check(valence: f64, tokens: &[String], distance: usize, i: usize) -> f64 {
    let is_so_this = |w: &str| w == "so" || w == "this";
    match distance {
        0 => {
            if is_negation(&tokens[i - 1]) {
                return valence * NEGATION_SCALAR;
            }
        }
        1 => {
            if tokens[i - 2] == "never" && is_so_this(&tokens[i - 1]) {
                return valence * NEVER_SO_BOOST;
            }
            if is_negation(&tokens[i - 2]) {
                return valence * NEGATION_SCALAR;
            }
        }
        2 => {
            if tokens[i - 3] == "never" && (is_so_this(&tokens[i - 2]) || is_so_this(&tokens[i - 1]))
            {
                return valence * NEVER_SO_BOOST;
            }
            if is_negation(&tokens[i - 3]) {
                return valence * NEGATION_SCALAR;
            }
        }
        _ => {}
    }
    valence
}

/// "no" one or two tokens back, or three back across "or"/"nor". The
/// window loop never sees it because "no" carries its own valence.
fn follows_no(tokens: &[String], i: usize) -> bool {
    (i > 0 && tokens[i - 1] == "no")
        || (i > 1 && tokens[i - 2] == "no")
        || (i > 2 && tokens[i - 3] == "no" && matches!(tokens[i - 1].as_str(), "or" | "nor"))
}

/// "least X" negates X, except in "at least" / "very least".
fn least_check(valence: f64, tokens: &[String], i: usize) -> f64 {
    if i > 0 && tokens[i - 1] == "least" {
        let guarded = i > 1 && matches!(tokens[i - 2].as_str(), "at" | "very");
        if !guarded {
            return valence * NEGATION_SCALAR;
        }
    }
    valence
}

/// Whitespace split; surrounding ASCII punctuation is stripped unless that
/// leaves two characters or fewer, which keeps emoticons such as ":)".
fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| {
            let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 2 {
                token.to_string()
            } else {
                stripped.to_string()
            }
        })
        .collect()
}

fn but_shift(tokens: &[String], sentiments: &mut [f64]) {
    if let Some(bi) = tokens.iter().position(|t| t == "but") {
        for (idx, s) in sentiments.iter_mut().enumerate() {
            if idx < bi {
                *s *= BUT_BEFORE;
            } else if idx > bi {
                *s *= BUT_AFTER;
            }
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let bangs = text.matches('!').count().min(MAX_EXCLAMATIONS) as f64 * EXCLAMATION_BOOST;
    let questions = text.matches('?').count();
    let qm = match questions {
        0 | 1 => 0.0,
        2..=3 => questions as f64 * QUESTION_BOOST,
        _ => QUESTION_CAP,
    };
    bangs + qm
}

fn normalize_compound(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

impl SentimentScorer for ValenceLexiconScorer {
    fn name(&self) -> &str {
        SCORER_NAME
    }

    fn score(&self, text: &str) -> Result<LexiconScore, ScoreError> {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Ok(LexiconScore {
                compound: 0.0,
                positive: 0.0,
                negative: 0.0,
                neutral: 0.0,
            });
        }

        let mut sentiments: Vec<f64> = (0..tokens.len())
            .map(|i| self.sentiment_at(&tokens, i))
            .collect();
        but_shift(&tokens, &mut sentiments);

        let emphasis = punctuation_emphasis(text);
        let mut sum: f64 = sentiments.iter().sum();
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }
        let compound = ensure_finite(SCORER_NAME, "compound", normalize_compound(sum))?;

        let mut pos_sum = 0.0;
        let mut neg_sum = 0.0;
        let mut neutral_count = 0.0;
        for &s in &sentiments {
            if s > 0.0 {
                pos_sum += s + 1.0;
            } else if s < 0.0 {
                neg_sum += s - 1.0;
            } else {
                neutral_count += 1.0;
            }
        }
        if pos_sum > neg_sum.abs() {
            pos_sum += emphasis;
        } else if pos_sum < neg_sum.abs() {
            neg_sum -= emphasis;
        }

        let total = pos_sum + neg_sum.abs() + neutral_count;
        let total = ensure_finite(SCORER_NAME, "total", total)?;

        Ok(LexiconScore {
            compound: round_to(compound, 4),
            positive: round_to((pos_sum / total).abs(), 3),
            negative: round_to((neg_sum / total).abs(), 3),
            neutral: round_to((neutral_count / total).abs(), 3),
        }
        .clamped())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compound(text: &str) -> f64 {
        ValenceLexiconScorer::new().score(text).unwrap().compound
    }

    #[test]
    fn test_empty_text_is_all_zero() {
        let s = ValenceLexiconScorer::new().score("").unwrap();
        assert_eq!(s.compound, 0.0);
        assert_eq!(s.neutral, 0.0);
    }

    #[test]
    fn test_unknown_words_are_neutral() {
        let s = ValenceLexiconScorer::new().score("the table is wooden").unwrap();
        assert_eq!(s.compound, 0.0);
        assert_eq!(s.neutral, 1.0);
        assert_eq!(s.positive, 0.0);
    }

    #[test]
    fn test_single_positive_word() {
        // 2.7 / sqrt(2.7^2 + 15)
        let c = compound("happy");
        assert!((c - 0.5719).abs() < 1e-4, "got {}", c);
    }

    #[test]
    fn test_polarity_direction() {
        assert!(compound("this is great") > 0.5);
        assert!(compound("this is terrible") < -0.3);
    }

    #[test]
    fn test_negation_flips() {
        assert!(compound("not good") < 0.0);
        assert!(compound("don't love it") < 0.0);
        // "nothing" negates a following positive word
        let c = compound("just a normal day, nothing special.");
        assert!(c < 0.0 && c > -0.5, "got {}", c);
    }

    #[test]
    fn test_no_negates_following_word() {
        // 1.9 * -0.74 = -1.406
        let c = compound("no good");
        assert!((c + 0.3412).abs() < 1e-4, "got {}", c);
        assert!(compound("there is no hope") < 0.0);
        assert!(compound("no really good news") < 0.0);
        assert!(compound("no fun or joy") < 0.0);
    }

    #[test]
    fn test_no_alone_keeps_its_valence() {
        assert!(compound("no") < 0.0);
        assert!(compound("no thanks, not today") < 0.0);
        // "no" before a valenced word contributes nothing itself
        let s = ValenceLexiconScorer::new().score("no good").unwrap();
        assert_eq!(s.positive, 0.0);
    }

    #[test]
    fn test_booster_amplifies_and_dampener_reduces() {
        let plain = compound("good");
        assert!(compound("very good") > plain);
        assert!(compound("slightly good") < plain);
        assert!(compound("kind of good") < plain);
        assert!(compound("extremely bad") < compound("bad"));
    }

    #[test]
    fn test_booster_word_alone_has_no_valence() {
        assert_eq!(compound("very"), 0.0);
    }

    #[test]
    fn test_exclamation_emphasis() {
        assert!(compound("good!!!") > compound("good"));
        // emphasis never creates sentiment on its own
        assert_eq!(compound("table!!!"), 0.0);
    }

    #[test]
    fn test_question_emphasis() {
        assert!(compound("bad??") < compound("bad"));
    }

    #[test]
    fn test_but_shifts_weight() {
        // the clause after "but" dominates
        assert!(compound("the food was good but the service was awful") < 0.0);
        assert!(compound("the food was awful but the service was good") > 0.0);
    }

    #[test]
    fn test_at_least_not_negated() {
        assert!(compound("at least good") > 0.0);
        assert!(compound("least good") < 0.0);
    }

    #[test]
    fn test_emoticon_token_kept() {
        assert!(compound("ok :)") > compound("ok"));
        assert!(compound("😢") < 0.0);
    }

    #[test]
    fn test_proportions_in_range() {
        let s = ValenceLexiconScorer::new()
            .score("i love it but i hate the price!")
            .unwrap();
        for v in [s.positive, s.negative, s.neutral] {
            assert!((0.0..=1.0).contains(&v));
        }
        assert!(s.positive > 0.0 && s.negative > 0.0);
    }

    #[test]
    fn test_tokenize_strips_word_punctuation_only() {
        assert_eq!(tokenize("day, nice! :)"), vec!["day", "nice", ":)"]);
        assert_eq!(tokenize("no!"), vec!["no!"]);
    }
}

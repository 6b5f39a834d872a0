//! Property-based tests for echosphere_core score types.

use echosphere_core::{Emotion, LexiconScore, PatternScores, PolaritySubjectivity};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Scores drawn from a small grid so that ties actually happen.
fn arb_pattern_scores() -> impl Strategy<Value = PatternScores> {
    prop::collection::vec(0u8..6, 6).prop_map(|steps| {
        let mut scores = PatternScores::default();
        for (category, step) in Emotion::PATTERN_CATEGORIES.iter().zip(steps) {
            scores.add(*category, step as f64 * 0.3);
        }
        scores
    })
}

// ============================================================================
// PatternScores Properties
// ============================================================================

proptest! {
    #[test]
    fn strongest_is_a_maximum(scores in arb_pattern_scores()) {
        let (_, best) = scores.strongest();
        for (_, s) in scores.iter() {
            prop_assert!(s <= best);
        }
    }

    /// Ties resolve to the category declared first.
    #[test]
    fn strongest_prefers_earliest_on_tie(scores in arb_pattern_scores()) {
        let (category, best) = scores.strongest();
        let first = scores.iter().find(|(_, s)| *s == best).map(|(c, _)| c);
        prop_assert_eq!(Some(category), first);
    }

    #[test]
    fn fallback_labels_never_hold_scores(
        scores in arb_pattern_scores(),
        amount in 0.0f64..10.0,
    ) {
        let mut s = scores;
        for label in [Emotion::Neutral, Emotion::Positive, Emotion::Negative] {
            s.add(label, amount);
            prop_assert_eq!(s.get(label), 0.0);
        }
        prop_assert_eq!(s, scores);
    }
}

// ============================================================================
// Clamping Properties
// ============================================================================

proptest! {
    #[test]
    fn polarity_constructor_clamps(p in -100.0f64..100.0, s in -100.0f64..100.0) {
        let out = PolaritySubjectivity::new(p, s);
        prop_assert!((-1.0..=1.0).contains(&out.polarity));
        prop_assert!((0.0..=1.0).contains(&out.subjectivity));
    }

    #[test]
    fn lexicon_clamped_stays_in_range(
        compound in -5.0f64..5.0,
        positive in -5.0f64..5.0,
        negative in -5.0f64..5.0,
        neutral in -5.0f64..5.0,
    ) {
        let out = LexiconScore { compound, positive, negative, neutral }.clamped();
        prop_assert!((-1.0..=1.0).contains(&out.compound));
        for p in [out.positive, out.negative, out.neutral] {
            prop_assert!((0.0..=1.0).contains(&p));
        }
    }
}

//! Word lists for the valence scorer.
//!
//! Valences are on the usual -4..+4 human-rated scale. The table covers
//! the vocabulary of short chat messages, not the whole language.

use std::collections::HashMap;
use std::sync::LazyLock;

pub(crate) const BOOSTER_INCR: f64 = 0.293;
pub(crate) const BOOSTER_DECR: f64 = -0.293;
pub(crate) const NEGATION_SCALAR: f64 = -0.74;

const VALENCE: &[(&str, f64)] = &[
    // positive
    ("adore", 2.6),
    ("amazed", 2.2),
    ("amazing", 2.8),
    ("astonishing", 1.5),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("brilliant", 2.8),
    ("calm", 1.3),
    ("celebrate", 2.7),
    ("cheerful", 2.5),
    ("comfortable", 1.5),
    ("cool", 1.3),
    ("cute", 2.0),
    ("delight", 2.9),
    ("delighted", 2.9),
    ("ecstatic", 2.9),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("fabulous", 2.4),
    ("fantastic", 2.6),
    ("fine", 0.8),
    ("fun", 2.3),
    ("funny", 1.9),
    ("glad", 2.0),
    ("good", 1.9),
    ("gorgeous", 3.0),
    ("grateful", 2.0),
    ("great", 3.1),
    ("haha", 2.0),
    ("hahaha", 2.6),
    ("happiness", 2.6),
    ("happy", 2.7),
    ("help", 1.7),
    ("hope", 1.9),
    ("hurray", 2.4),
    ("incredible", 1.1),
    ("joy", 2.8),
    ("kind", 2.4),
    ("lol", 1.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("lucky", 1.7),
    ("nice", 1.8),
    ("ok", 1.2),
    ("okay", 0.9),
    ("peaceful", 2.2),
    ("perfect", 2.7),
    ("pleased", 1.9),
    ("pretty", 2.2),
    ("proud", 2.1),
    ("relaxed", 2.2),
    ("relieved", 1.5),
    ("smile", 1.5),
    ("special", 1.7),
    ("super", 2.9),
    ("surprise", 1.1),
    ("sweet", 2.0),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("thrilled", 2.4),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("woo", 2.1),
    ("woohoo", 2.3),
    ("wow", 2.8),
    ("yay", 2.4),
    ("yes", 1.7),
    // negative
    ("afraid", -2.0),
    ("alone", -1.0),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("annoying", -1.8),
    ("anxious", -1.0),
    ("awful", -2.0),
    ("bad", -2.5),
    ("bored", -1.1),
    ("boring", -1.3),
    ("broken", -1.8),
    ("cry", -2.1),
    ("crying", -2.1),
    ("damn", -1.7),
    ("dead", -3.3),
    ("depressed", -2.3),
    ("devastated", -3.1),
    ("die", -2.9),
    ("disappointed", -1.9),
    ("disgusted", -2.4),
    ("disgusting", -2.4),
    ("dreadful", -1.9),
    ("eww", -1.5),
    ("fail", -2.5),
    ("fear", -2.2),
    ("frightened", -1.9),
    ("frustrated", -1.9),
    ("fuck", -2.5),
    ("furious", -2.7),
    ("gloomy", -2.0),
    ("gross", -2.1),
    ("hate", -2.7),
    ("hated", -3.2),
    ("heartbroken", -2.8),
    ("hell", -3.6),
    ("horrible", -2.5),
    ("hurt", -2.4),
    ("idiot", -2.3),
    ("irritated", -2.0),
    ("lonely", -1.4),
    ("lost", -1.3),
    ("mad", -2.2),
    ("miserable", -2.9),
    ("nasty", -2.6),
    ("nervous", -1.1),
    ("nightmare", -1.9),
    ("no", -1.2),
    ("pain", -2.3),
    ("panic", -2.3),
    ("pissed", -3.2),
    ("problem", -1.7),
    ("rage", -2.6),
    ("repulsive", -2.2),
    ("revolting", -2.2),
    ("sad", -2.1),
    ("scared", -1.9),
    ("scary", -2.2),
    ("shit", -2.6),
    ("shocked", -1.3),
    ("sick", -2.3),
    ("sob", -1.0),
    ("sorry", -0.3),
    ("stupid", -2.4),
    ("tears", -0.9),
    ("terrible", -2.1),
    ("terrified", -3.0),
    ("terrifying", -2.7),
    ("tired", -1.9),
    ("ugh", -1.8),
    ("ugly", -2.3),
    ("unhappy", -1.8),
    ("upset", -1.6),
    ("weep", -2.7),
    ("worried", -1.2),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
    ("yuck", -1.5),
    // emoticons and emoji
    (":)", 2.0),
    (":-)", 1.3),
    (":d", 2.3),
    (";)", 0.9),
    ("<3", 1.9),
    (":(", -1.9),
    (":-(", -1.5),
    (":/", -1.4),
    ("😊", 2.2),
    ("😄", 2.5),
    ("😍", 2.8),
    ("🥳", 2.4),
    ("😢", -2.1),
    ("😭", -2.4),
    ("😠", -2.3),
    ("😡", -2.6),
    ("😨", -2.0),
    ("🤢", -2.2),
    ("🤮", -2.4),
    ("💔", -2.6),
];

const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", BOOSTER_INCR),
    ("amazingly", BOOSTER_INCR),
    ("awfully", BOOSTER_INCR),
    ("completely", BOOSTER_INCR),
    ("deeply", BOOSTER_INCR),
    ("enormously", BOOSTER_INCR),
    ("entirely", BOOSTER_INCR),
    ("especially", BOOSTER_INCR),
    ("exceptionally", BOOSTER_INCR),
    ("extremely", BOOSTER_INCR),
    ("fully", BOOSTER_INCR),
    ("greatly", BOOSTER_INCR),
    ("highly", BOOSTER_INCR),
    ("hugely", BOOSTER_INCR),
    ("incredibly", BOOSTER_INCR),
    ("intensely", BOOSTER_INCR),
    ("majorly", BOOSTER_INCR),
    ("more", BOOSTER_INCR),
    ("most", BOOSTER_INCR),
    ("particularly", BOOSTER_INCR),
    ("purely", BOOSTER_INCR),
    ("quite", BOOSTER_INCR),
    ("really", BOOSTER_INCR),
    ("remarkably", BOOSTER_INCR),
    ("so", BOOSTER_INCR),
    ("substantially", BOOSTER_INCR),
    ("thoroughly", BOOSTER_INCR),
    ("totally", BOOSTER_INCR),
    ("tremendously", BOOSTER_INCR),
    ("uber", BOOSTER_INCR),
    ("unbelievably", BOOSTER_INCR),
    ("unusually", BOOSTER_INCR),
    ("utterly", BOOSTER_INCR),
    ("very", BOOSTER_INCR),
    ("almost", BOOSTER_DECR),
    ("barely", BOOSTER_DECR),
    ("hardly", BOOSTER_DECR),
    ("kinda", BOOSTER_DECR),
    ("less", BOOSTER_DECR),
    ("little", BOOSTER_DECR),
    ("marginally", BOOSTER_DECR),
    ("occasionally", BOOSTER_DECR),
    ("partly", BOOSTER_DECR),
    ("scarcely", BOOSTER_DECR),
    ("slightly", BOOSTER_DECR),
    ("somewhat", BOOSTER_DECR),
    ("sorta", BOOSTER_DECR),
];

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont", "hadnt",
    "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "neednt", "never", "none", "nope",
    "nor", "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent",
    "without", "wont", "wouldnt", "rarely", "seldom", "despite",
];

pub(crate) static VALENCE_TABLE: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    VALENCE.iter().copied().collect()
});

pub(crate) static BOOSTER_TABLE: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| BOOSTERS.iter().copied().collect());

pub(crate) fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.contains("n't")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boosters_are_not_valenced() {
        // A booster in the valence table would never be applied as a booster.
        for (word, _) in BOOSTERS {
            assert!(
                !VALENCE_TABLE.contains_key(word),
                "booster '{}' also carries a valence",
                word
            );
        }
    }

    #[test]
    fn test_negations_are_not_valenced() {
        for word in NEGATIONS {
            assert!(!VALENCE_TABLE.contains_key(word), "negation '{}' has valence", word);
        }
    }

    #[test]
    fn test_is_negation_handles_contractions() {
        assert!(is_negation("don't"));
        assert!(is_negation("never"));
        assert!(!is_negation("know"));
    }
}

//! Classifies the words of a sentence against the session vocabulary.

use iplusone_core::{VocabularySet, WordCounts};
use std::collections::HashSet;

/// Counts the known, new and rogue words of a sentence.
///
/// The sentence is split on whitespace without any cleaning. A word that appears several times
/// is classified once, but every occurrence counts towards the total.
pub fn classify(sentence: &str, known: &VocabularySet, candidate_new: &VocabularySet) -> WordCounts {
    let mut total = 0;
    let mut words = HashSet::new();
    for word in sentence.split_whitespace() {
        total += 1;
        words.insert(word);
    }

    let known_count = words.iter().filter(|w| known.contains(w)).count();
    let new_count = words.iter().filter(|w| candidate_new.contains(w)).count();
    // a word in both sets would be counted twice, the session vocabulary rules that out
    let rogue_count = words.len().saturating_sub(known_count + new_count);

    let counts = WordCounts {
        total,
        known_count,
        new_count,
        rogue_count,
    };
    tracing::trace!("Classified '{sentence}': {counts:?}");
    counts
}

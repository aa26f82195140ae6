//! Generated sentences and their classification.

use crate::AcceptanceRule;
use serde::{Deserialize, Serialize};

/// How the words of a sentence relate to the session vocabulary.
///
/// `total` counts every whitespace separated token while the other counts are taken over
/// the distinct words, so `known_count + new_count + rogue_count <= total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordCounts {
    pub total: usize,
    pub known_count: usize,
    pub new_count: usize,
    /// Words that are in neither vocabulary.
    pub rogue_count: usize,
}

impl WordCounts {
    /// The number of distinct words in the sentence.
    pub fn distinct(&self) -> usize {
        self.known_count + self.new_count + self.rogue_count
    }
}

/// One fully annotated row of a generated batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSentence {
    pub sentence: String,
    pub translation: Option<String>,
    /// The new word the generator claims to have used. Not checked against anything.
    pub new_word: Option<String>,
    /// Any other columns of the payload, in their original order.
    pub extra: Vec<(String, String)>,
    pub counts: WordCounts,
    pub meets_criteria: bool,
    /// The rule that produced `meets_criteria`.
    pub rule: AcceptanceRule,
}

impl CandidateSentence {
    /// Returns a copy of the row judged under another rule.
    pub fn with_rule(&self, rule: AcceptanceRule) -> Self {
        Self {
            meets_criteria: rule.accepts(&self.counts),
            rule,
            ..self.clone()
        }
    }
}

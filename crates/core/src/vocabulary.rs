//! A set of vocabulary tokens.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Unique, non-empty tokens. Tokens compare by exact string equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct VocabularySet {
    tokens: BTreeSet<String>,
}

impl VocabularySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a token, returning whether it was added. Empty tokens are never added.
    pub fn insert(&mut self, token: impl Into<String>) -> bool {
        let token = token.into();
        if token.is_empty() {
            return false;
        }
        self.tokens.insert(token)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Removes every token that is also in `other`.
    pub fn remove_all(&mut self, other: &VocabularySet) {
        self.tokens.retain(|t| !other.contains(t));
    }

    pub fn is_disjoint(&self, other: &VocabularySet) -> bool {
        self.tokens.is_disjoint(&other.tokens)
    }
}

impl<S: Into<String>> FromIterator<S> for VocabularySet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for VocabularySet {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for token in iter {
            self.insert(token);
        }
    }
}

impl From<Vec<String>> for VocabularySet {
    fn from(value: Vec<String>) -> Self {
        value.into_iter().collect()
    }
}

impl From<VocabularySet> for Vec<String> {
    fn from(value: VocabularySet) -> Self {
        value.tokens.into_iter().collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn skips_empty_tokens() {
        let mut set = VocabularySet::new();
        assert!(!set.insert(""));
        assert!(set.insert("घर"));
        assert!(!set.insert("घर"));
        assert_eq!(set.len(), 1);

        let set: VocabularySet = ["", "a", "", "b"].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn is_case_sensitive() {
        let set: VocabularySet = ["Word", "word"].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(!set.contains("WORD"));
    }

    #[test]
    fn removes_shared_tokens() {
        let known: VocabularySet = ["घर", "है"].into_iter().collect();
        let mut new: VocabularySet = ["घर", "बड़ा"].into_iter().collect();
        assert!(!new.is_disjoint(&known));
        new.remove_all(&known);
        assert!(new.is_disjoint(&known));
        assert_eq!(new.iter().collect::<Vec<_>>(), ["बड़ा"]);
    }
}

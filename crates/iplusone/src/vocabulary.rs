//! Builds the vocabulary of a deck and pairs the known and new vocabularies of a session.

use crate::normalize::{normalize, tokenize};
use iplusone_core::{Alphabet, IplusoneError, IplusoneResult, VocabularySet};
use std::collections::{HashMap, HashSet};

/// The fields of a single note, by field name.
pub type NoteFields = HashMap<String, String>;

/// Collects the tokens of the given fields over all the records.
///
/// Fails if no tokens were found at all, which usually means the deck or field names are misconfigured.
pub fn build_vocabulary<'a>(
    deck: &str,
    records: impl IntoIterator<Item = &'a NoteFields>,
    fields_to_scan: &[String],
    alphabet: Alphabet,
) -> IplusoneResult<VocabularySet> {
    let mut vocabulary = VocabularySet::new();
    let mut seen_fields = HashSet::new();
    let mut record_count = 0;
    for record in records {
        record_count += 1;
        for field in fields_to_scan {
            if let Some(text) = record.get(field) {
                seen_fields.insert(field.as_str());
                vocabulary.extend(tokenize(&normalize(text, alphabet)));
            }
        }
    }

    for field in fields_to_scan {
        if !seen_fields.contains(field.as_str()) {
            tracing::warn!(
                "Field '{field}' does not exist on any of the {record_count} notes in deck '{deck}'"
            );
        }
    }

    if vocabulary.is_empty() {
        return Err(IplusoneError::EmptyVocabulary {
            deck: deck.to_string(),
            fields: fields_to_scan.to_vec(),
        });
    }
    tracing::debug!(
        "Built vocabulary of {} tokens from {record_count} notes in deck '{deck}'",
        vocabulary.len()
    );
    Ok(vocabulary)
}

/// The known and new vocabularies of a session. The new vocabulary never shares a token with the known one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionVocabulary {
    known: VocabularySet,
    candidate_new: VocabularySet,
}

impl SessionVocabulary {
    /// Pairs the vocabularies, removing the known tokens from the new ones.
    pub fn new(known: VocabularySet, mut candidate_new: VocabularySet) -> Self {
        let before = candidate_new.len();
        candidate_new.remove_all(&known);
        let removed = before - candidate_new.len();
        if removed > 0 {
            tracing::debug!("Removed {removed} new tokens that were already known");
        }
        Self {
            known,
            candidate_new,
        }
    }

    pub fn known(&self) -> &VocabularySet {
        &self.known
    }

    pub fn candidate_new(&self) -> &VocabularySet {
        &self.candidate_new
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn note(fields: &[(&str, &str)]) -> NoteFields {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn unions_tokens_across_records_and_fields() {
        let notes = [
            note(&[("Front", "घर है"), ("Back", "house is")]),
            note(&[("Front", "<b>बड़ा</b> घर"), ("Back", "big house")]),
            note(&[("Hindi", "जाना"), ("Front", "है!")]),
        ];
        let vocab = build_vocabulary(
            "Learned",
            &notes,
            &fields(&["Front", "Hindi"]),
            Alphabet::Hindi,
        )
        .unwrap();
        let mut tokens = vocab.iter().collect::<Vec<_>>();
        tokens.sort();
        let mut expected = vec!["घर", "है", "बड़ा", "जाना"];
        expected.sort();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn fails_on_empty_deck() {
        let err = build_vocabulary("Empty", [], &fields(&["Front"]), Alphabet::Hindi).unwrap_err();
        assert_eq!(
            err,
            IplusoneError::EmptyVocabulary {
                deck: "Empty".to_string(),
                fields: fields(&["Front"]),
            }
        );
    }

    #[test]
    fn fails_on_missing_fields() {
        let notes = [note(&[("Front", "घर")])];
        let err = build_vocabulary("Deck", &notes, &fields(&["Back"]), Alphabet::Hindi).unwrap_err();
        assert!(matches!(err, IplusoneError::EmptyVocabulary { .. }));
    }

    #[test]
    fn fails_when_nothing_is_in_the_alphabet() {
        let notes = [note(&[("Front", "house")])];
        let err =
            build_vocabulary("Deck", &notes, &fields(&["Front"]), Alphabet::Arabic).unwrap_err();
        assert!(matches!(err, IplusoneError::EmptyVocabulary { .. }));
    }

    #[test]
    fn session_vocabularies_are_disjoint() {
        let cases: [(&[&str], &[&str]); 4] = [
            (&["घर", "है"], &["घर", "बड़ा"]),
            (&["घर"], &["घर"]),
            (&[], &["बड़ा"]),
            (&["a", "b", "c"], &["c", "d", "a", "e"]),
        ];
        for (known, new) in cases {
            let session = SessionVocabulary::new(
                known.iter().copied().collect(),
                new.iter().copied().collect(),
            );
            assert!(session.known().is_disjoint(session.candidate_new()));
            assert_eq!(session.known().len(), known.len());
            for token in new {
                assert!(session.known().contains(token) || session.candidate_new().contains(token));
            }
        }
    }
}

//! Functionality for handling notes fetched from Anki.
//!
//! Notes are looked up with a `findNotes` query per deck and card type and then fetched
//! with `notesInfo`. The requests themselves are made elsewhere, this module only deals
//! with their inputs and outputs.

use crate::vocabulary::{build_vocabulary, NoteFields};
use iplusone_core::{Configuration, IplusoneError, IplusoneResult, VocabularySet};
use serde::Deserialize;
use std::collections::HashMap;

/// A note as returned by `notesInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub note_id: i64,
    /// The card type of the note.
    pub model_name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub fields: HashMap<String, NoteField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NoteField {
    pub value: String,
    pub order: u32,
}

impl Note {
    /// The raw field values by field name.
    pub fn field_values(&self) -> NoteFields {
        self.fields
            .iter()
            .map(|(name, field)| (name.clone(), field.value.clone()))
            .collect()
    }
}

/// The `findNotes` query for the notes of a card type in a deck.
pub fn find_notes_query(deck: &str, card_type: &str) -> String {
    format!(r#""deck:{deck}" "note:{card_type}""#)
}

/// Parses a `notesInfo` result.
pub fn parse_notes_info(json: &str) -> serde_json::Result<Vec<Note>> {
    serde_json::from_str(json)
}

/// Builds the vocabulary of a deck, scanning each card type's notes for that card type's fields.
///
/// Card types without any tokens are skipped. Fails only if the deck as a whole has no tokens.
pub fn load_deck_vocabulary(
    deck: &str,
    notes: &[Note],
    configuration: &Configuration,
) -> IplusoneResult<VocabularySet> {
    let mut vocabulary = VocabularySet::new();
    for (card_type, fields) in &configuration.fields_to_scan {
        let records = notes
            .iter()
            .filter(|n| &n.model_name == card_type)
            .map(Note::field_values)
            .collect::<Vec<_>>();
        tracing::debug!("Found {} '{card_type}' notes in deck '{deck}'", records.len());

        match build_vocabulary(deck, &records, fields, configuration.alphabet) {
            Ok(tokens) => vocabulary.extend(tokens.iter()),
            Err(IplusoneError::EmptyVocabulary { .. }) => {
                tracing::warn!("No vocabulary found in '{card_type}' notes of deck '{deck}'");
            }
            Err(err) => return Err(err),
        }
    }

    if vocabulary.is_empty() {
        return Err(IplusoneError::EmptyVocabulary {
            deck: deck.to_string(),
            fields: configuration.field_names(),
        });
    }
    Ok(vocabulary)
}

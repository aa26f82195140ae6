//! The settings every engine call takes explicitly.

use crate::{AcceptanceRule, Alphabet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The fields that hold vocabulary, by card type.
pub type CardTypeFields = BTreeMap<String, Vec<String>>;

/// Which script to extract, which note fields hold vocabulary and how sentences are judged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub alphabet: Alphabet,
    pub fields_to_scan: CardTypeFields,
    pub rule: AcceptanceRule,
}

impl Configuration {
    /// Every scanned field name once, in card type order.
    pub fn field_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for field in self.fields_to_scan.values().flatten() {
            if !names.contains(field) {
                names.push(field.clone());
            }
        }
        names
    }
}

//! The error type shared by the iplusone crates.

use thiserror::Error;

pub type IplusoneResult<T> = Result<T, IplusoneError>;

/// Every failure the engine can report. All of them are caused by the input and
/// retrying with the same input will fail the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IplusoneError {
    #[error("Unsupported language '{0}', expected one of Hindi, Arabic, Mandarin")]
    UnsupportedLanguage(String),
    #[error("No vocabulary found in deck '{deck}' using the fields {fields:?}")]
    EmptyVocabulary { deck: String, fields: Vec<String> },
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
    #[error("Unknown acceptance rule '{0}'")]
    UnknownRule(String),
}

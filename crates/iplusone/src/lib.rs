//! Provides all of iplusone's core functionality.
//!
//! Raw note text goes through [`normalize`] into a [`vocabulary::SessionVocabulary`],
//! which [`batch::evaluate_batch`] then uses to classify and judge a generated batch.

pub mod anki;
pub mod batch;
pub mod classify;
pub mod normalize;
pub mod prompt;
pub mod vocabulary;

pub use iplusone_core::*;

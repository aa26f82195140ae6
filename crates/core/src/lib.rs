//! iplusone core types.

pub mod alphabet;
pub mod configuration;
pub mod error;
pub mod rule;
pub mod sentence;
pub mod vocabulary;

pub use alphabet::Alphabet;
pub use configuration::{CardTypeFields, Configuration};
pub use error::{IplusoneError, IplusoneResult};
pub use rule::AcceptanceRule;
pub use sentence::{CandidateSentence, WordCounts};
pub use vocabulary::VocabularySet;

//! The instructions given to the language model that generates sentences.

use iplusone_core::{Alphabet, VocabularySet};
use itertools::Itertools;

/// Sent as the system message along with [`GenerationPrompt::render`].
pub const SYSTEM_MESSAGE: &str =
    "You are a helpful assistant. Your response must be in .CSV format.";

/// Asks for sentences that use exactly one new word each, with the remaining words known.
#[derive(Debug, Clone)]
pub struct GenerationPrompt<'a> {
    pub alphabet: Alphabet,
    pub known: &'a VocabularySet,
    pub candidate_new: &'a VocabularySet,
    pub sentences: usize,
    /// Build every sentence around this new word instead of letting the model choose.
    pub focus: Option<&'a str>,
}

impl GenerationPrompt<'_> {
    pub fn render(&self) -> String {
        let language = self.alphabet.name();
        let sentences = self.sentences;
        let known = self.known.iter().join(", ");
        let new_words = match self.focus {
            Some(focus) => focus.to_string(),
            None => self.candidate_new.iter().join(", "),
        };
        let new_word_rule = match self.focus {
            Some(focus) => format!(
                "- Each sentence includes the new word '{focus}', and no other word from the list of 'new words';"
            ),
            None => "- Each sentence includes _exactly one_ of the 'new words', you are NOT ALLOWED to include more than one word from the list of 'new words';".to_string(),
        };

        format!(
            "I need your help to output a .csv file containing new {language} sentences based on a student's existing vocabulary.
Your output must be only a .csv file, with no other content.
Imagine you are a {language} teacher, helping a native English speaker who is learning {language}.
So far the student has learned the following words, which we can call the 'learned words':
{known}
Today the student is trying to learn the following words, which we can call the 'new words':
{new_words}
Please generate {sentences} new {language} sentences. Each sentence must meet all of the following criteria:
{new_word_rule}
- All of the other words in each sentence must already appear in the list of 'learned words';
- Each sentence must include a subject, a verb, and an object.
Please use correct grammar and formal sentence structure when writing the sentences.
Include as many of the 'learned words' as you can in each sentence while still respecting the rules above.
The output must have a column for the {language} sentence called 'sentence', a column for the English translation called 'translation', and a column called 'new_word' specifying which of the new words the sentence includes.
Do NOT say anything else, just output the raw .csv text. Do not wrap it in ```."
        )
    }
}

//! Cleans raw note text down to the words of one alphabet.

use iplusone_core::Alphabet;

/// Deletes every character that is not in the alphabet, a space or a newline.
///
/// Markup is removed character by character, so `<b>घर</b>बड़ा` becomes `घरबड़ा`.
pub fn normalize(text: &str, alphabet: Alphabet) -> String {
    text.chars()
        .filter(|c| *c == ' ' || *c == '\n' || alphabet.contains(*c))
        .collect()
}

/// Splits text on whitespace, skipping empty tokens.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Normalizes the text and returns its tokens.
pub fn normalized_tokens(text: &str, alphabet: Alphabet) -> Vec<String> {
    tokenize(&normalize(text, alphabet))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn strips_punctuation_and_other_scripts() {
        let res = normalize("घर, बड़ा है! (house) 123", Alphabet::Hindi);
        assert_eq!(res, "घर बड़ा है  ");
        assert_eq!(tokenize(&res).collect::<Vec<_>>(), ["घर", "बड़ा", "है"]);
    }

    #[test]
    fn strips_html() {
        let res = normalize("<div>猫</div>\n<br/>犬 と", Alphabet::Mandarin);
        assert_eq!(res, "猫\n犬 ");
    }

    #[test]
    fn merges_words_around_tags_without_whitespace() {
        let res = normalize("<b>घर</b>बड़ा", Alphabet::Hindi);
        assert_eq!(normalized_tokens(&res, Alphabet::Hindi), ["घरबड़ा"]);
    }

    #[test]
    fn keeps_only_spaces_and_newlines() {
        let res = normalize("كتاب\tقلم\r\nبيت", Alphabet::Arabic);
        assert_eq!(res, "كتابقلم\nبيت");
    }

    #[test]
    fn handles_empty() {
        assert_eq!(normalize("", Alphabet::Arabic), "");
        assert!(normalized_tokens("  \n ", Alphabet::Arabic).is_empty());
        assert!(normalized_tokens("hello world", Alphabet::Hindi).is_empty());
    }

    #[test]
    fn is_idempotent() {
        let inputs = [
            "घर, बड़ा है!",
            "<span style=\"x\">كتاب</span> & قلم",
            "我 爱 你。 hello",
            "",
            "   \n\n  ",
            "mixed घर 猫 كتاب",
        ];
        for input in inputs {
            for alphabet in Alphabet::ALL {
                let once = normalize(input, alphabet);
                assert_eq!(normalize(&once, alphabet), once, "{input} {alphabet}");
            }
        }
    }
}

//! The scripts vocabulary can be extracted in.

use crate::IplusoneError;
use serde::{Deserialize, Serialize};
use std::{fmt, ops::RangeInclusive, str::FromStr};

/// A supported script. Each one is a contiguous Unicode block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Alphabet {
    Hindi,
    Arabic,
    Mandarin,
}

impl Alphabet {
    pub const ALL: [Alphabet; 3] = [Alphabet::Hindi, Alphabet::Arabic, Alphabet::Mandarin];

    /// The code points that belong to the alphabet.
    pub const fn range(self) -> RangeInclusive<char> {
        match self {
            // Devanagari
            Self::Hindi => '\u{0900}'..='\u{097F}',
            Self::Arabic => '\u{0600}'..='\u{06FF}',
            // CJK Unified Ideographs
            Self::Mandarin => '\u{4E00}'..='\u{9FFF}',
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.range().contains(&c)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Hindi => "Hindi",
            Self::Arabic => "Arabic",
            Self::Mandarin => "Mandarin",
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Alphabet {
    type Err = IplusoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| IplusoneError::UnsupportedLanguage(s.to_string()))
    }
}

impl TryFrom<String> for Alphabet {
    type Error = IplusoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Alphabet> for String {
    fn from(value: Alphabet) -> Self {
        value.name().to_string()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_supported_languages() {
        assert_eq!("Hindi".parse::<Alphabet>().unwrap(), Alphabet::Hindi);
        assert_eq!("arabic".parse::<Alphabet>().unwrap(), Alphabet::Arabic);
        assert_eq!(" MANDARIN ".parse::<Alphabet>().unwrap(), Alphabet::Mandarin);
    }

    #[test]
    fn rejects_klingon() {
        let err = "Klingon".parse::<Alphabet>().unwrap_err();
        assert_eq!(err, IplusoneError::UnsupportedLanguage("Klingon".to_string()));
    }

    #[test]
    fn recognises_characters() {
        assert!(Alphabet::Hindi.contains('घ'));
        assert!(!Alphabet::Hindi.contains('a'));
        assert!(Alphabet::Arabic.contains('ب'));
        assert!(!Alphabet::Arabic.contains('घ'));
        assert!(Alphabet::Mandarin.contains('猫'));
        assert!(!Alphabet::Mandarin.contains('え'));
    }

    #[test]
    fn deserializes_through_parse() {
        let alphabet: Alphabet = serde_json::from_str(r#""Hindi""#).unwrap();
        assert_eq!(alphabet, Alphabet::Hindi);
        assert!(serde_json::from_str::<Alphabet>(r#""Klingon""#).is_err());
    }
}

//! Acceptance rules for generated sentences.

use crate::{IplusoneError, WordCounts};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Decides whether a sentence introduces an acceptable amount of unfamiliar vocabulary.
///
/// The `WithRogue` variants count a word that is in neither vocabulary the same as a new word,
/// since generated sentences regularly drift outside the given word lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AcceptanceRule {
    NPlusOneNoRogue,
    NPlusOneWithRogue,
    NPlusTwoNoRogue,
    NPlusTwoWithRogue,
    /// Accepts everything.
    None,
}

impl AcceptanceRule {
    pub const ALL: [AcceptanceRule; 5] = [
        AcceptanceRule::NPlusOneNoRogue,
        AcceptanceRule::NPlusOneWithRogue,
        AcceptanceRule::NPlusTwoNoRogue,
        AcceptanceRule::NPlusTwoWithRogue,
        AcceptanceRule::None,
    ];

    pub fn accepts(self, counts: &WordCounts) -> bool {
        let new = counts.new_count;
        let rogue = counts.rogue_count;
        match self {
            Self::NPlusOneNoRogue => new == 1 && rogue == 0,
            Self::NPlusOneWithRogue => new + rogue == 1,
            Self::NPlusTwoNoRogue => (1..=2).contains(&new) && rogue == 0,
            Self::NPlusTwoWithRogue => (1..=2).contains(&(new + rogue)),
            Self::None => true,
        }
    }

    /// The canonical name, as stored next to a verdict.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NPlusOneNoRogue => "n+1_no_rogue",
            Self::NPlusOneWithRogue => "n+1_with_rogue",
            Self::NPlusTwoNoRogue => "n+2_no_rogue",
            Self::NPlusTwoWithRogue => "n+2_with_rogue",
            Self::None => "none",
        }
    }
}

impl fmt::Display for AcceptanceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AcceptanceRule {
    type Err = IplusoneError;

    /// Accepts the canonical names and their space separated spellings, e.g. `n+1 no rogue`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = s.trim().replace(' ', "_");
        Self::ALL
            .into_iter()
            .find(|rule| rule.name() == canonical)
            .ok_or_else(|| IplusoneError::UnknownRule(s.to_string()))
    }
}

impl TryFrom<String> for AcceptanceRule {
    type Error = IplusoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AcceptanceRule> for String {
    fn from(value: AcceptanceRule) -> Self {
        value.name().to_string()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn counts(new_count: usize, rogue_count: usize) -> WordCounts {
        WordCounts {
            total: 10,
            known_count: 10 - new_count - rogue_count,
            new_count,
            rogue_count,
        }
    }

    #[test]
    fn applies_rule_table() {
        use AcceptanceRule as R;
        let cases = [
            // (new, rogue, n+1 no rogue, n+1 with rogue, n+2 no rogue, n+2 with rogue)
            (0, 0, false, false, false, false),
            (1, 0, true, true, true, true),
            (0, 1, false, true, false, true),
            (1, 1, false, false, false, true),
            (2, 0, false, false, true, true),
            (0, 2, false, false, false, true),
            (2, 1, false, false, false, false),
            (3, 0, false, false, false, false),
        ];
        for (new, rogue, n1, n1r, n2, n2r) in cases {
            let c = counts(new, rogue);
            assert_eq!(R::NPlusOneNoRogue.accepts(&c), n1, "{c:?}");
            assert_eq!(R::NPlusOneWithRogue.accepts(&c), n1r, "{c:?}");
            assert_eq!(R::NPlusTwoNoRogue.accepts(&c), n2, "{c:?}");
            assert_eq!(R::NPlusTwoWithRogue.accepts(&c), n2r, "{c:?}");
            assert!(R::None.accepts(&c));
        }
    }

    #[test]
    fn no_rogue_is_stricter_than_with_rogue() {
        use AcceptanceRule as R;
        for new in 0..5 {
            for rogue in 0..5 {
                let c = counts(new, rogue);
                if R::NPlusOneNoRogue.accepts(&c) {
                    assert!(R::NPlusOneWithRogue.accepts(&c), "{c:?}");
                }
                if R::NPlusTwoNoRogue.accepts(&c) {
                    assert!(R::NPlusTwoWithRogue.accepts(&c), "{c:?}");
                }
            }
        }
    }

    #[test]
    fn parses_names() {
        for rule in AcceptanceRule::ALL {
            assert_eq!(rule.name().parse::<AcceptanceRule>().unwrap(), rule);
        }
        assert_eq!(
            "n+1 with rogue".parse::<AcceptanceRule>().unwrap(),
            AcceptanceRule::NPlusOneWithRogue
        );
        assert_eq!(
            "n+2 no rogue".parse::<AcceptanceRule>().unwrap(),
            AcceptanceRule::NPlusTwoNoRogue
        );
    }

    #[test]
    fn rejects_unknown_rule() {
        let err = "n+3_no_rogue".parse::<AcceptanceRule>().unwrap_err();
        assert_eq!(err, IplusoneError::UnknownRule("n+3_no_rogue".to_string()));
        assert!("".parse::<AcceptanceRule>().is_err());
        assert!("permissive".parse::<AcceptanceRule>().is_err());
    }

    #[test]
    fn serializes_canonical_name() {
        let json = serde_json::to_string(&AcceptanceRule::NPlusTwoWithRogue).unwrap();
        assert_eq!(json, r#""n+2_with_rogue""#);
        let rule: AcceptanceRule = serde_json::from_str(r#""n+1 no rogue""#).unwrap();
        assert_eq!(rule, AcceptanceRule::NPlusOneNoRogue);
    }
}

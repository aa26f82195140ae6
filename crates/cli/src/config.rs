//! Language configurations stored in a TOML file.

use eyre::{eyre, WrapErr};
use iplusone::{AcceptanceRule, Alphabet, CardTypeFields, Configuration};
use serde::{Deserialize, Deserializer};
use std::{collections::BTreeMap, path::Path};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(rename = "configuration", default)]
    pub configurations: Vec<LanguageConfiguration>,
}

/// The decks of one language and how to read them.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageConfiguration {
    pub name: String,
    pub language: Alphabet,
    pub learned_deck: String,
    pub new_deck: String,
    #[serde(default = "default_rule")]
    pub rule: AcceptanceRule,
    #[serde(deserialize_with = "deserialize_card_types")]
    pub card_types: CardTypeFields,
}

fn default_rule() -> AcceptanceRule {
    AcceptanceRule::NPlusOneWithRogue
}

/// Either a list of field names or a single comma separated string of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum FieldList {
    List(Vec<String>),
    Joined(String),
}

impl FieldList {
    fn into_fields(self) -> Vec<String> {
        let fields = match self {
            Self::List(fields) => fields,
            Self::Joined(joined) => joined.split(',').map(str::to_string).collect(),
        };
        fields
            .into_iter()
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect()
    }
}

fn deserialize_card_types<'de, D>(deserializer: D) -> Result<CardTypeFields, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, FieldList>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(card_type, fields)| (card_type, fields.into_fields()))
        .collect())
}

impl ConfigFile {
    pub fn load(path: &Path) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file at {}", path.display()))?;
        Self::parse(&contents)
            .wrap_err_with(|| format!("Failed to parse config file at {}", path.display()))
    }

    pub fn parse(contents: &str) -> eyre::Result<Self> {
        let config = toml::from_str::<Self>(contents)?;
        Ok(config)
    }

    /// Finds a configuration by name, or the only configuration if no name is given.
    pub fn find(&self, name: Option<&str>) -> eyre::Result<&LanguageConfiguration> {
        match name {
            Some(name) => self
                .configurations
                .iter()
                .find(|c| c.name == name)
                .ok_or_else(|| eyre!("No configuration named '{name}'")),
            None => match self.configurations.as_slice() {
                [only] => Ok(only),
                [] => Err(eyre!("The config file has no configurations")),
                _ => Err(eyre!(
                    "The config file has several configurations, pick one with --name"
                )),
            },
        }
    }
}

impl LanguageConfiguration {
    /// The engine settings of this language, optionally judging with another rule.
    pub fn configuration(&self, rule: Option<AcceptanceRule>) -> Configuration {
        Configuration {
            alphabet: self.language,
            fields_to_scan: self.card_types.clone(),
            rule: rule.unwrap_or(self.rule),
        }
    }
}

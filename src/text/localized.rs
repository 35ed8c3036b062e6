//! Plain-or-translated display text.

use serde::{Deserialize, Deserializer, Serialize};

use super::language::{document_language, resolve_language};
use super::translations::Translations;
use crate::dom::StyleTree;
use crate::error::Result;

/// A display value that is either a single string or per-language texts.
///
/// Serialized as a JSON string or a JSON object respectively. A JSON
/// `null` reads as empty plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LocalizedText {
    /// Same text for every language.
    Plain(String),
    /// Texts keyed by language code.
    Localized(Translations),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Plain(String),
    Localized(Translations),
}

impl<'de> Deserialize<'de> for LocalizedText {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Repr>::deserialize(deserializer)? {
            Some(Repr::Plain(text)) => LocalizedText::Plain(text),
            Some(Repr::Localized(translations)) => LocalizedText::Localized(translations),
            None => LocalizedText::default(),
        })
    }
}

impl LocalizedText {
    /// Parse a JSON string or object.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid JSON, or is JSON of
    /// another shape (number, array, object with non-string values).
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parse JSON when the input looks like a JSON string, object or
    /// `null`, otherwise take the input verbatim as plain text.
    ///
    /// # Errors
    ///
    /// Returns an error if the input starts like JSON but does not parse.
    pub fn parse_lenient(input: &str) -> Result<Self> {
        let trimmed = input.trim_start();
        if trimmed.starts_with('{') || trimmed.starts_with('"') || trimmed.trim_end() == "null" {
            Self::from_json(input)
        } else {
            Ok(LocalizedText::Plain(input.to_string()))
        }
    }

    /// Check if the value has nothing to show.
    pub fn is_empty(&self) -> bool {
        match self {
            LocalizedText::Plain(text) => text.is_empty(),
            LocalizedText::Localized(translations) => translations.is_empty(),
        }
    }

    /// Resolve to the text for `language`, `en` when unset or empty.
    pub fn resolve(&self, language: Option<&str>) -> &str {
        match self {
            LocalizedText::Plain(text) => text,
            LocalizedText::Localized(translations) => {
                translations.lookup(resolve_language(language))
            }
        }
    }

    /// Resolve using the language declared on the tree's root element.
    pub fn resolve_in<T: StyleTree>(&self, tree: &T) -> String {
        match self {
            LocalizedText::Plain(text) => text.clone(),
            LocalizedText::Localized(translations) => {
                translations.lookup(&document_language(tree)).to_string()
            }
        }
    }
}

impl Default for LocalizedText {
    fn default() -> Self {
        LocalizedText::Plain(String::new())
    }
}

impl From<&str> for LocalizedText {
    fn from(text: &str) -> Self {
        LocalizedText::Plain(text.to_string())
    }
}

impl From<String> for LocalizedText {
    fn from(text: String) -> Self {
        LocalizedText::Plain(text)
    }
}

impl From<Translations> for LocalizedText {
    fn from(translations: Translations) -> Self {
        LocalizedText::Localized(translations)
    }
}

/// Pick the display string for a possibly missing localized value.
///
/// A missing value resolves to `""`, a plain value to itself, and a
/// translated value to the entry for `language` (default `en`), then the
/// `en` entry, then the first entry, then `""`.
pub fn get_localized_string(value: Option<&LocalizedText>, language: Option<&str>) -> String {
    value
        .map(|text| text.resolve(language).to_string())
        .unwrap_or_default()
}

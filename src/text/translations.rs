//! Ordered language-to-string mappings.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Display strings keyed by language code.
///
/// Entries keep insertion order, which decides the last-resort fallback
/// in [`Translations::lookup`]. Re-inserting a language replaces its text
/// but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translations {
    entries: Vec<(String, String)>,
}

impl Translations {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the text for a language.
    pub fn insert(&mut self, language: impl Into<String>, text: impl Into<String>) {
        let language = language.into();
        let text = text.into();
        match self.entries.iter_mut().find(|(lang, _)| *lang == language) {
            Some(entry) => entry.1 = text,
            None => self.entries.push((language, text)),
        }
    }

    /// Builder form of [`Translations::insert`].
    pub fn with(mut self, language: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(language, text);
        self
    }

    /// Get the text stored for a language, empty or not.
    pub fn get(&self, language: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(lang, _)| lang == language)
            .map(|(_, text)| text.as_str())
    }

    /// Get the text of the first entry.
    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(|(_, text)| text.as_str())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(language, text)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(lang, text)| (lang.as_str(), text.as_str()))
    }

    /// Pick the text to show for `language`.
    ///
    /// Preference: the entry for `language`, then the `en` entry, then the
    /// first entry. Empty texts count as missing for the first two steps.
    /// Returns `""` when nothing matches.
    pub fn lookup(&self, language: &str) -> &str {
        self.non_empty(language)
            .or_else(|| self.non_empty(super::DEFAULT_LANGUAGE))
            .or_else(|| self.first())
            .unwrap_or("")
    }

    fn non_empty(&self, language: &str) -> Option<&str> {
        self.get(language).filter(|text| !text.is_empty())
    }
}

impl<K, V> FromIterator<(K, V)> for Translations
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut translations = Translations::new();
        for (language, text) in iter {
            translations.insert(language, text);
        }
        translations
    }
}

impl Serialize for Translations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (language, text) in &self.entries {
            map.serialize_entry(language, text)?;
        }
        map.end()
    }
}

struct TranslationsVisitor;

impl<'de> Visitor<'de> for TranslationsVisitor {
    type Value = Translations;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from language code to string")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut translations = Translations::new();
        // null reads as an empty (missing) text
        while let Some((language, text)) = access.next_entry::<String, Option<String>>()? {
            translations.insert(language, text.unwrap_or_default());
        }
        Ok(translations)
    }
}

impl<'de> Deserialize<'de> for Translations {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TranslationsVisitor)
    }
}

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Locale used when the requested translation is missing.
pub const FALLBACK_LOCALE: &str = "en";

/// Translations of a single display string keyed by locale code.
///
/// Insertion order is preserved so encoded documents stay stable.
/// A bare JSON string decodes as the English translation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LocalizedText(IndexMap<String, String>);

impl LocalizedText {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a text carrying only the fallback-locale translation.
    #[must_use]
    pub fn english(text: impl Into<String>) -> Self {
        Self::new().with(FALLBACK_LOCALE, text)
    }

    #[must_use]
    pub fn with(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.0.insert(locale.into(), text.into());
        self
    }

    #[must_use]
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the translation for `locale`, then English, then `""`.
    #[must_use]
    pub fn resolve(&self, locale: &str) -> &str {
        resolve_localized(&self.0, locale)
    }
}

impl From<IndexMap<String, String>> for LocalizedText {
    fn from(map: IndexMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for LocalizedText
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(locale, text)| (locale.into(), text.into()))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for LocalizedText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LocalizedTextVisitor)
    }
}

struct LocalizedTextVisitor;

impl<'de> Visitor<'de> for LocalizedTextVisitor {
    type Value = LocalizedText;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or a map of locale code to string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<LocalizedText, E> {
        Ok(LocalizedText::english(value))
    }

    /// Null translations read as empty strings.
    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<LocalizedText, A::Error> {
        let mut translations = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((locale, text)) = access.next_entry::<String, Option<String>>()? {
            translations.insert(locale, text.unwrap_or_default());
        }
        Ok(LocalizedText(translations))
    }

    fn visit_unit<E: de::Error>(self) -> Result<LocalizedText, E> {
        Ok(LocalizedText::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<LocalizedText, E> {
        Ok(LocalizedText::default())
    }
}

/// Locale fallback over a raw translation map.
///
/// Exact locale wins, then [`FALLBACK_LOCALE`], then the empty string.
#[must_use]
pub fn resolve_localized<'a>(translations: &'a IndexMap<String, String>, locale: &str) -> &'a str {
    translations
        .get(locale)
        .or_else(|| translations.get(FALLBACK_LOCALE))
        .map_or("", String::as_str)
}

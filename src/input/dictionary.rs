//! Dictionary input definitions

use std::path::Path;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::types::LanguageTag;

/// Dictionary shipped with the crate.
const EMBEDDED_DICTIONARY: &str = include_str!("../../data/translations.json");

/// Errors raised while loading a dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Failed to read dictionary file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse dictionary: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One concept's surface form in every supported language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DictionaryEntry {
    pub en: String,
    pub es: String,
    pub de: String,
}

impl DictionaryEntry {
    /// Surface form for `tag`.
    #[must_use]
    pub fn get(&self, tag: LanguageTag) -> &str {
        match tag {
            LanguageTag::En => &self.en,
            LanguageTag::Es => &self.es,
            LanguageTag::De => &self.de,
        }
    }
}

/// Ordered, read-only list of dictionary entries.
///
/// Order matters: lookups scan from the front and the first match wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    /// Entries in file order.
    entries: Vec<DictionaryEntry>,
}

impl Dictionary {
    #[must_use]
    pub const fn new(entries: Vec<DictionaryEntry>) -> Self {
        Self { entries }
    }

    /// Parse the dictionary bundled at `data/translations.json`.
    ///
    /// # Errors
    /// Returns [`DictionaryError::Parse`] if the bundled data is malformed.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::from_json_str(EMBEDDED_DICTIONARY)
    }

    /// Parse a JSON array of `{ "en": .., "es": .., "de": .. }` records.
    ///
    /// # Errors
    /// Returns [`DictionaryError::Parse`] on invalid JSON or a record missing a language.
    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        let entries: Vec<DictionaryEntry> = serde_json::from_str(json)?;
        tracing::debug!(entries = entries.len(), "Parsed dictionary");
        Ok(Self::new(entries))
    }

    /// Load a dictionary file.
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        tracing::debug!("Loading dictionary from: {:?}", path);

        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// First entry whose `tag` field equals `text` exactly.
    #[must_use]
    pub fn find(&self, tag: LanguageTag, text: &str) -> Option<&DictionaryEntry> {
        self.entries.iter().find(|entry| entry.get(tag) == text)
    }

    #[must_use]
    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    fn entry(en: &str, es: &str, de: &str) -> DictionaryEntry {
        DictionaryEntry { en: en.to_string(), es: es.to_string(), de: de.to_string() }
    }

    #[rstest]
    #[case(LanguageTag::En, "chicken")]
    #[case(LanguageTag::Es, "pollo")]
    #[case(LanguageTag::De, "Hühnchen")]
    fn test_entry_get(#[case] tag: LanguageTag, #[case] expected: &str) {
        let chicken = entry("chicken", "pollo", "Hühnchen");

        assert_that!(chicken.get(tag), eq(expected));
    }

    #[googletest::test]
    fn test_embedded_dictionary_contains_chicken() {
        let dictionary = Dictionary::embedded().unwrap();

        expect_that!(dictionary.is_empty(), eq(false));
        expect_that!(
            dictionary.find(LanguageTag::Es, "pollo"),
            some(eq(&entry("chicken", "pollo", "Hühnchen")))
        );
        expect_that!(dictionary.find(LanguageTag::Es, "agua"), none());
    }

    #[googletest::test]
    fn test_from_json_str_keeps_order() {
        let json = r#"[
            { "en": "bread", "es": "pan", "de": "Brot" },
            { "en": "cheese", "es": "queso", "de": "Käse" }
        ]"#;

        let dictionary = Dictionary::from_json_str(json).unwrap();

        expect_that!(dictionary.len(), eq(2));
        expect_that!(
            dictionary.entries(),
            elements_are![
                field!(DictionaryEntry.en, eq("bread")),
                field!(DictionaryEntry.en, eq("cheese"))
            ]
        );
    }

    #[googletest::test]
    fn test_find_first_match_wins() {
        let dictionary = Dictionary::new(vec![
            entry("bank", "banco", "Bank"),
            entry("bench", "banco", "Sitzbank"),
        ]);

        let found = dictionary.find(LanguageTag::Es, "banco").unwrap();

        expect_that!(found.en.as_str(), eq("bank"));
    }

    #[googletest::test]
    fn test_find_is_exact_match() {
        let dictionary = Dictionary::new(vec![entry("chicken", "pollo", "Hühnchen")]);

        expect_that!(dictionary.find(LanguageTag::Es, "Pollo"), none());
        expect_that!(dictionary.find(LanguageTag::Es, "pollo "), none());
        // Text is matched under the given tag only.
        expect_that!(dictionary.find(LanguageTag::En, "pollo"), none());
    }

    #[googletest::test]
    fn test_from_json_str_rejects_missing_language() {
        let json = r#"[{ "en": "chicken", "es": "pollo" }]"#;

        let result = Dictionary::from_json_str(json);

        assert_that!(result, err(anything()));
    }

    #[googletest::test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dictionary.json");
        fs::write(&path, r#"[{ "en": "water", "es": "agua", "de": "Wasser" }]"#).unwrap();

        let dictionary = Dictionary::load(&path).unwrap();

        expect_that!(dictionary.find(LanguageTag::De, "Wasser"), some(anything()));
    }

    #[googletest::test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = Dictionary::load(&temp_dir.path().join("missing.json"));

        let Err(DictionaryError::Io(_)) = result else {
            panic!("expected an I/O error, got {result:?}");
        };
    }
}

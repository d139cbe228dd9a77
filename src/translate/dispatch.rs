//! Exhaustive per-target translation dispatch.

use super::fallback::fallback_text;
use crate::input::Dictionary;
use crate::types::{
    LanguageTag,
    TaggedWord,
};

/// Re-express `word` in `target`.
///
/// - Same language: `word` is returned unchanged, without consulting the dictionary.
/// - Hit: the first entry whose field for `word.tag()` equals the text supplies
///   the `target` field.
/// - Miss: the text becomes a fallback placeholder (see [`fallback_text`]).
///
/// Never fails.
#[must_use]
pub fn translate(dictionary: &Dictionary, target: LanguageTag, word: TaggedWord) -> TaggedWord {
    if word.tag() == target {
        return word;
    }

    match target {
        LanguageTag::En => to_english(dictionary, &word),
        LanguageTag::Es => to_spanish(dictionary, &word),
        LanguageTag::De => to_german(dictionary, &word),
    }
}

/// Translate a word in another language into English.
fn to_english(dictionary: &Dictionary, word: &TaggedWord) -> TaggedWord {
    let text = dictionary.find(word.tag(), word.text()).map_or_else(
        || fallback_text(LanguageTag::En, word.text()),
        |entry| entry.en.clone(),
    );
    TaggedWord::new(LanguageTag::En, text)
}

/// Translate a word in another language into Spanish.
fn to_spanish(dictionary: &Dictionary, word: &TaggedWord) -> TaggedWord {
    let text = dictionary.find(word.tag(), word.text()).map_or_else(
        || fallback_text(LanguageTag::Es, word.text()),
        |entry| entry.es.clone(),
    );
    TaggedWord::new(LanguageTag::Es, text)
}

/// Translate a word in another language into German.
fn to_german(dictionary: &Dictionary, word: &TaggedWord) -> TaggedWord {
    let text = dictionary.find(word.tag(), word.text()).map_or_else(
        || fallback_text(LanguageTag::De, word.text()),
        |entry| entry.de.clone(),
    );
    TaggedWord::new(LanguageTag::De, text)
}

//! Placeholder text for words the dictionary does not know.

use crate::types::LanguageTag;

/// Visibly fake translation of `text` into `target`.
///
/// Reads naturally in the target language:
/// `(word in english)`, `(word en español)`, `(word auf deutsch)`.
#[must_use]
pub fn fallback_text(target: LanguageTag, text: &str) -> String {
    format!("({text} {} {})", target.connector(), target.name())
}

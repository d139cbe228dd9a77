//! Core types used throughout the project.

use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// A supported language, identified by its short code.
///
/// The set is closed. Every `match` on a `LanguageTag` lists all variants
/// without a wildcard arm (`clippy::wildcard_enum_match_arm` is denied), so a
/// new variant does not build until every dispatch site handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageTag {
    En,
    Es,
    De,
}

impl LanguageTag {
    /// All supported languages, in declaration order.
    pub const ALL: [Self; 3] = [Self::En, Self::Es, Self::De];

    /// Short code (`en`, `es`, `de`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::De => "de",
        }
    }

    /// Lowercase native name of the language, as written in fallback text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::En => "english",
            Self::Es => "español",
            Self::De => "deutsch",
        }
    }

    /// The word for "in" in this language (`in`, `en`, `auf`).
    #[must_use]
    pub const fn connector(self) -> &'static str {
        match self {
            Self::En => "in",
            Self::Es => "en",
            Self::De => "auf",
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A language code outside the supported set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported language: '{code}'")]
pub struct UnsupportedLanguageError {
    /// The rejected input, verbatim.
    pub code: String,
}

impl FromStr for LanguageTag {
    type Err = UnsupportedLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.code() == s)
            .ok_or_else(|| UnsupportedLanguageError { code: s.to_string() })
    }
}

/// Returns true iff `candidate` is exactly one of the supported codes.
///
/// Case-sensitive: `"EN"` and `" en"` are rejected, as is the empty string.
#[must_use]
pub fn is_supported_language(candidate: &str) -> bool {
    candidate.parse::<LanguageTag>().is_ok()
}

/// A word or phrase known to be expressed in `tag`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaggedWord {
    /// Language the text is currently in.
    tag: LanguageTag,
    /// Surface form.
    text: String,
}

impl TaggedWord {
    #[must_use]
    pub fn new(tag: LanguageTag, text: impl Into<String>) -> Self {
        Self { tag, text: text.into() }
    }

    #[must_use]
    pub const fn tag(&self) -> LanguageTag {
        self.tag
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Unwraps the text, dropping the tag.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

//! Batch translation facade standing in for a remote translation API.

use std::sync::Arc;
use std::time::Duration;

use serde::{
    Deserialize,
    Serialize,
};

use super::dispatch::translate;
use crate::input::Dictionary;
use crate::types::{
    LanguageTag,
    TaggedWord,
};

/// Latency used when none is configured.
pub const DEFAULT_SIMULATED_LATENCY: Duration = Duration::from_millis(10);

/// A batch translation request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiParams {
    pub words: Vec<String>,
    pub from_lang: LanguageTag,
    pub to_lang: LanguageTag,
}

/// Translates batches of words against a shared, read-only dictionary.
///
/// Each call waits for a fixed artificial delay before answering, as if the
/// dictionary lived behind a network hop. The delay cannot fail and has no
/// timeout.
#[derive(Debug, Clone)]
pub struct TranslateApi {
    /// Shared dictionary, never mutated after load.
    dictionary: Arc<Dictionary>,
    /// Artificial delay per call.
    latency: Duration,
}

impl TranslateApi {
    #[must_use]
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary, latency: DEFAULT_SIMULATED_LATENCY }
    }

    /// Replace the artificial delay.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    #[must_use]
    pub const fn latency(&self) -> Duration {
        self.latency
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Translate every word from `from_lang` into `to_lang`.
    ///
    /// One output per input, in input order. Words missing from the dictionary
    /// come back as fallback placeholders.
    pub async fn translate_batch(
        &self,
        words: &[String],
        from_lang: LanguageTag,
        to_lang: LanguageTag,
    ) -> Vec<String> {
        tracing::debug!(
            words = words.len(),
            from = %from_lang,
            to = %to_lang,
            "Translating batch"
        );

        tokio::time::sleep(self.latency).await;

        words
            .iter()
            .map(|word| {
                translate(&self.dictionary, to_lang, TaggedWord::new(from_lang, word.as_str()))
                    .into_text()
            })
            .collect()
    }

    /// Handle a request in its structured form.
    pub async fn handle(&self, params: ApiParams) -> Vec<String> {
        self.translate_batch(&params.words, params.from_lang, params.to_lang).await
    }
}

//! One prompt-translate-print round.

use tokio::io::{
    AsyncBufRead,
    AsyncWrite,
};

use super::{
    Console,
    ConsoleError,
};
use crate::translate::TranslateApi;
use crate::types::LanguageTag;

/// Printed when either language code is rejected.
const INVALID_LANGUAGE_MESSAGE: &str = "Invalid language";

/// What a session printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The translated message, words joined by single spaces.
    Translated(String),
    /// A language code was not supported; nothing was translated.
    InvalidLanguage,
}

/// Ask for languages and a message, then print the translation.
///
/// With `default_source` set, the "translate from" question is skipped.
/// Both codes are validated before the API is called; an unsupported code
/// writes a warning to the console's warning stream instead of translating.
///
/// # Errors
/// Returns [`ConsoleError`] if prompting or printing fails.
pub async fn run_session<R, W, E>(
    console: &mut Console<R, W, E>,
    api: &TranslateApi,
    default_source: Option<LanguageTag>,
) -> Result<SessionOutcome, ConsoleError>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
    E: AsyncWrite + Unpin + Send,
{
    let start_lang = match default_source {
        Some(tag) => tag.code().to_string(),
        None => console.question("translate from: ").await?,
    };
    let end_lang = console.question("translate to: ").await?;
    let message = console.question("message: ").await?;

    let (Ok(from_lang), Ok(to_lang)) =
        (start_lang.parse::<LanguageTag>(), end_lang.parse::<LanguageTag>())
    else {
        tracing::warn!(from = %start_lang, to = %end_lang, "Unsupported language requested");
        console.warn_line(INVALID_LANGUAGE_MESSAGE).await?;
        return Ok(SessionOutcome::InvalidLanguage);
    };

    let words: Vec<String> = message.split_whitespace().map(str::to_string).collect();
    let translated = api.translate_batch(&words, from_lang, to_lang).await.join(" ");

    console.print_line(&translated).await?;
    Ok(SessionOutcome::Translated(translated))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::input::{
        Dictionary,
        DictionaryEntry,
    };

    fn create_test_api() -> TranslateApi {
        let dictionary = Dictionary::new(vec![
            DictionaryEntry {
                en: "chicken".to_string(),
                es: "pollo".to_string(),
                de: "Hühnchen".to_string(),
            },
            DictionaryEntry {
                en: "cheese".to_string(),
                es: "queso".to_string(),
                de: "Käse".to_string(),
            },
        ]);
        TranslateApi::new(Arc::new(dictionary)).with_latency(Duration::ZERO)
    }

    /// Outcome, standard output and warnings of one session.
    async fn run(
        input: &str,
        default_source: Option<LanguageTag>,
    ) -> (SessionOutcome, String, String) {
        let mut console = Console::new(input.as_bytes(), Vec::new(), Vec::new());
        let outcome = run_session(&mut console, &create_test_api(), default_source).await.unwrap();
        let (_, output, warnings) = console.close().await.unwrap();
        (outcome, String::from_utf8(output).unwrap(), String::from_utf8(warnings).unwrap())
    }

    #[tokio::test]
    async fn test_session_translates_message() {
        let (outcome, output, warnings) = run("es\nen\npollo agua queso\n", None).await;

        assert_eq!(
            outcome,
            SessionOutcome::Translated("chicken (agua in english) cheese".to_string())
        );
        assert_that!(
            output,
            eq("translate from: translate to: message: chicken (agua in english) cheese\n")
        );
        assert_that!(warnings, eq(""));
    }

    #[tokio::test]
    async fn test_session_collapses_whitespace() {
        let (outcome, _, _) = run("en\nde\n  chicken \t cheese  \n", None).await;

        assert_eq!(outcome, SessionOutcome::Translated("Hühnchen Käse".to_string()));
    }

    #[rstest]
    #[case::unsupported_source("fr\nen\npollo\n")]
    #[case::unsupported_target("es\nEN\npollo\n")]
    #[case::empty_source("\nen\npollo\n")]
    #[tokio::test]
    async fn test_session_rejects_invalid_language(#[case] input: &str) {
        let (outcome, output, warnings) = run(input, None).await;

        assert_eq!(outcome, SessionOutcome::InvalidLanguage);
        assert_that!(output, eq("translate from: translate to: message: "));
        assert_that!(warnings, eq("Invalid language\n"));
    }

    #[tokio::test]
    async fn test_session_with_default_source_skips_question() {
        let (outcome, output, _) = run("de\nchicken\n", Some(LanguageTag::En)).await;

        assert_eq!(outcome, SessionOutcome::Translated("Hühnchen".to_string()));
        assert_that!(output, eq("translate to: message: Hühnchen\n"));
    }

    #[tokio::test]
    async fn test_session_empty_message() {
        let (outcome, output, _) = run("es\nde\n\n", None).await;

        assert_eq!(outcome, SessionOutcome::Translated(String::new()));
        assert_that!(output, ends_with("message: \n"));
    }

    #[tokio::test]
    async fn test_session_input_ends_early() {
        let mut console = Console::new("es\n".as_bytes(), Vec::new(), Vec::new());

        let result = run_session(&mut console, &create_test_api(), None).await;

        assert_that!(result.is_err(), eq(true));
    }
}

//! Entry point for the interactive translator.

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use word_translator::{
    AppError,
    Dictionary,
    TranslateApi,
    config::{
        ConfigManager,
        settings_dir,
    },
    console::{
        Console,
        run_session,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

/// Load settings and the dictionary, then run one console session.
async fn run() -> Result<(), AppError> {
    let mut config_manager = ConfigManager::new();
    config_manager.load_settings(settings_dir(std::env::current_dir()))?;

    let dictionary = match config_manager.dictionary_path() {
        Some(path) => Dictionary::load(&path)?,
        None => Dictionary::embedded()?,
    };
    let api = TranslateApi::new(Arc::new(dictionary))
        .with_latency(config_manager.simulated_latency());

    let mut console = Console::stdio();
    let outcome =
        run_session(&mut console, &api, config_manager.get_settings().default_source_language)
            .await;
    console.close().await?;
    tracing::debug!(?outcome, "Session finished");
    outcome?;

    Ok(())
}

//! Top-level error of the `word-translator` binary.

use thiserror::Error;

use crate::config::ConfigError;
use crate::console::ConsoleError;
use crate::input::DictionaryError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error(transparent)]
    Console(#[from] ConsoleError),
}

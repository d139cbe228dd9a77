//! word-translator
//!
//! 閉じた言語タグ集合と網羅的ディスパッチによる辞書ベースの単語翻訳

pub mod config;
pub mod console;
pub mod error;
pub mod input;
pub mod translate;
pub mod types;

pub use error::AppError;
pub use input::Dictionary;
pub use translate::{
    TranslateApi,
    translate,
};
pub use types::{
    LanguageTag,
    TaggedWord,
    is_supported_language,
};

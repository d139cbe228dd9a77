//! Static data read at startup.

pub mod dictionary;

pub use dictionary::{
    Dictionary,
    DictionaryEntry,
    DictionaryError,
};

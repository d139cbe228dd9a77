//! Translation: per-target dispatch, fallback text and the batch facade.

pub mod api;
pub mod dispatch;
pub mod fallback;

pub use api::{
    ApiParams,
    DEFAULT_SIMULATED_LATENCY,
    TranslateApi,
};
pub use dispatch::translate;
pub use fallback::fallback_text;

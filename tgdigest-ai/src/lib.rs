mod config;
mod error;
pub mod openrouter;

pub use config::Config;
pub use error::*;

/// A single round-trip to a summarization model.
///
/// The prompt arrives fully rendered (placeholders already substituted).
/// One analysis request makes exactly one call; per-participant quality is
/// traded for staying clear of provider rate limits.
pub trait Summarizer {
    fn summarize(&self, prompt: &str, model: &str) -> impl Future<Output = AiResult<String>>;
}

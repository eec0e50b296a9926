//! GenerativeClient trait definition.
//!
//! This is the abstraction over the external generation API. The
//! implementation lives in claimlens-infra (`GeminiClient`). Uses native
//! async fn in traits (RPITIT, Rust 2024 edition).

use claimlens_types::chat::Turn;
use claimlens_types::llm::{GenerateError, GenerationConfig};

/// Client for an ordered-turn generation API.
///
/// One call submits the full replayed transcript plus the new turn and
/// returns the generated text. Errors come back pre-classified so the
/// connector can decide between skipping a candidate and aborting
/// selection entirely.
pub trait GenerativeClient: Send + Sync {
    /// Generate a completion for the given ordered turns with `model`.
    fn generate(
        &self,
        model: &str,
        contents: &[Turn],
        config: &GenerationConfig,
    ) -> impl std::future::Future<Output = Result<String, GenerateError>> + Send;
}

//! Generation request settings and upstream error types.
//!
//! `GenerateError` is the classified failure shape returned by the
//! generative client: the model connector keys its probe decisions off
//! the first two variants (skip vs short-circuit).

use serde::{Deserialize, Serialize};

/// Settings for a single generation call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Sampling temperature. The chat orchestrator pins this low (0.2)
    /// to bias toward deterministic, citation-faithful output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl GenerationConfig {
    /// Config for a chat exchange at the given temperature.
    pub fn chat(temperature: f64) -> Self {
        Self {
            temperature: Some(temperature),
            max_output_tokens: None,
        }
    }
}

/// Errors from generative API operations, classified for the connector.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The requested model identifier does not exist for this credential.
    #[error("model not found")]
    ModelNotFound,

    /// The API credential was rejected. No candidate model can succeed.
    #[error("invalid API credential")]
    InvalidCredential,

    /// Any other upstream rejection (quota, safety block, server error).
    #[error("upstream error: {0}")]
    Upstream(String),

    /// The HTTP exchange itself failed (connect, timeout).
    #[error("http error: {0}")]
    Http(String),

    /// The response arrived but could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),
}

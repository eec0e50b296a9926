//! Application configuration for ClaimLens.
//!
//! `AppConfig` represents the top-level `config.toml` that controls the
//! listen port, the prioritized model-candidate list, generation
//! temperature, and upload limits. All fields have defaults so the
//! server runs with no config file at all.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the ClaimLens backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub upload: UploadConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built browser front end, served as a SPA
    /// fallback when it exists.
    #[serde(default = "default_web_dir")]
    pub web_dir: String,
}

fn default_port() -> u16 {
    3000
}

fn default_web_dir() -> String {
    "frontend/dist".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            web_dir: default_web_dir(),
        }
    }
}

/// Generative model selection and generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Prioritized model candidates; the connector keeps the first one
    /// whose probe succeeds.
    #[serde(default = "default_candidates")]
    pub candidates: Vec<String>,

    /// Sampling temperature for chat and analysis exchanges.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

fn default_candidates() -> Vec<String> {
    [
        "gemini-1.5-flash",
        "gemini-1.5-flash-001",
        "gemini-pro",
        "gemini-1.5-pro",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_temperature() -> f64 {
    0.2
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
            temperature: default_temperature(),
        }
    }
}

/// Upload handling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Maximum accepted request body size for uploads, in megabytes.
    #[serde(default = "default_max_upload_mb")]
    pub max_upload_mb: usize,
}

fn default_max_upload_mb() -> usize {
    20
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_upload_mb: default_max_upload_mb(),
        }
    }
}

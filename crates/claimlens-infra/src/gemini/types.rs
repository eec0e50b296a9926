//! Gemini REST wire types.
//!
//! These are the request/response structures for HTTP communication with
//! the Generative Language API. They are NOT the domain types from
//! claimlens-types -- those stay provider-agnostic; conversion happens
//! here at the wire boundary.

use serde::{Deserialize, Serialize};

use claimlens_types::chat::{Part, Turn};
use claimlens_types::llm::GenerationConfig;

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<WireGenerationConfig>,
}

impl GenerateContentRequest {
    pub fn new(turns: &[Turn], config: &GenerationConfig) -> Self {
        let generation_config =
            (config.temperature.is_some() || config.max_output_tokens.is_some())
                .then(|| WireGenerationConfig::from(config));
        Self {
            contents: turns.iter().map(Content::from).collect(),
            generation_config,
        }
    }
}

/// One role-tagged content entry (request or response side).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<WirePart>,
}

impl From<&Turn> for Content {
    fn from(turn: &Turn) -> Self {
        Self {
            role: Some(turn.role.to_string()),
            parts: turn.parts.iter().map(WirePart::from).collect(),
        }
    }
}

/// A part within a content entry: text or a stored-file reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WirePart {
    Text {
        text: String,
    },
    FileData {
        #[serde(rename = "fileData")]
        file_data: FileData,
    },
}

impl From<&Part> for WirePart {
    fn from(part: &Part) -> Self {
        match part {
            Part::Text(text) => WirePart::Text { text: text.clone() },
            Part::FileRef(file_ref) => WirePart::FileData {
                file_data: FileData {
                    mime_type: file_ref.mime_type.clone(),
                    file_uri: file_ref.uri.clone(),
                },
            },
        }
    }
}

/// Reference to a file previously registered with the file API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    #[serde(rename = "fileUri")]
    pub file_uri: String,
}

/// Generation settings on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct WireGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl From<&GenerationConfig> for WireGenerationConfig {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        }
    }
}

/// Response body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    pub fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| match part {
                WirePart::Text { text } => Some(text.as_str()),
                WirePart::FileData { .. } => None,
            })
            .collect();
        (!text.is_empty()).then_some(text)
    }
}

/// One generated candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

/// Error envelope returned by the API on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiError,
}

/// The error detail inside [`ApiErrorBody`].
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub code: Option<u32>,
    pub message: String,
    pub status: Option<String>,
}

/// Metadata body for the resumable-upload start request.
#[derive(Debug, Clone, Serialize)]
pub struct StartUploadRequest {
    pub file: UploadFileMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadFileMetadata {
    pub display_name: String,
}

/// Response body after the upload is finalized.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadFileResponse {
    pub file: StoredFile,
}

/// File record as the API returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredFile {
    /// Internal resource name, e.g. `files/abc-123`.
    pub name: String,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub uri: String,
}

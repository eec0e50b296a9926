//! GeminiClient -- concrete client for the Generative Language API.
//!
//! Implements [`GenerativeClient`] against `models/{model}:generateContent`
//! and [`FileStore`] against the resumable media-upload endpoint
//! (`/upload/v1beta/files`, start then upload+finalize).
//!
//! The API key is wrapped in [`secrecy::SecretString`] and only exposed
//! when constructing the `x-goog-api-key` header; it never appears in
//! Debug output or logs.

use std::path::Path;
use std::time::Duration;

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use claimlens_core::llm::client::GenerativeClient;
use claimlens_core::relay::FileStore;
use claimlens_types::chat::{FileHandle, Turn};
use claimlens_types::error::RelayError;
use claimlens_types::llm::{GenerateError, GenerationConfig};

use super::types::{
    ApiErrorBody, GenerateContentRequest, GenerateContentResponse, StartUploadRequest,
    UploadFileMetadata, UploadFileResponse,
};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Client for the Gemini generation and file APIs.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: SecretString) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(300)) // 5 min timeout for long generations
            .build()
            .expect("failed to create reqwest client");

        Self {
            http,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Classify an upstream failure by status code and message pattern.
///
/// Invalid-credential rejections can arrive as 401/403 or as a 400
/// INVALID_ARGUMENT whose message names the API key; unknown model
/// identifiers come back 404 or with "not found" in the message.
fn classify_failure(status: StatusCode, body: &str) -> GenerateError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.to_string());

    match status.as_u16() {
        401 | 403 => GenerateError::InvalidCredential,
        400 if message.contains("API key not valid") => GenerateError::InvalidCredential,
        404 => GenerateError::ModelNotFound,
        _ if message.to_lowercase().contains("not found") => GenerateError::ModelNotFound,
        _ => GenerateError::Upstream(format!("HTTP {status}: {message}")),
    }
}

impl GenerativeClient for GeminiClient {
    async fn generate(
        &self,
        model: &str,
        contents: &[Turn],
        config: &GenerationConfig,
    ) -> Result<String, GenerateError> {
        let body = GenerateContentRequest::new(contents, config);
        let url = self.url(&format!("/v1beta/models/{model}:generateContent"));
        debug!(model, turns = contents.len(), "sending generateContent");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerateError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(classify_failure(status, &error_body));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerateError::Decode(e.to_string()))?;

        parsed
            .first_text()
            .ok_or_else(|| GenerateError::Decode("response held no text candidate".to_string()))
    }
}

impl FileStore for GeminiClient {
    async fn store_file(
        &self,
        path: &Path,
        mime_type: &str,
        display_name: &str,
    ) -> Result<FileHandle, RelayError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| RelayError::LocalIo(e.to_string()))?;

        // Start the resumable upload; the target URL comes back in a header.
        let start = self
            .http
            .post(self.url("/upload/v1beta/files"))
            .header("x-goog-api-key", self.api_key.expose_secret())
            .header("X-Goog-Upload-Protocol", "resumable")
            .header("X-Goog-Upload-Command", "start")
            .header("X-Goog-Upload-Header-Content-Length", bytes.len())
            .header("X-Goog-Upload-Header-Content-Type", mime_type)
            .json(&StartUploadRequest {
                file: UploadFileMetadata {
                    display_name: display_name.to_string(),
                },
            })
            .send()
            .await
            .map_err(|e| RelayError::Upstream(e.to_string()))?;

        let status = start.status();
        if !status.is_success() {
            let error_body = start.text().await.unwrap_or_default();
            return Err(RelayError::Upstream(format!(
                "upload start failed: HTTP {status}: {error_body}"
            )));
        }

        let upload_url = start
            .headers()
            .get("x-goog-upload-url")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| {
                RelayError::Upstream("upload start returned no upload URL".to_string())
            })?;

        // Send the bytes and finalize in one request.
        let finalize = self
            .http
            .post(&upload_url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .header("X-Goog-Upload-Command", "upload, finalize")
            .header("X-Goog-Upload-Offset", "0")
            .body(bytes)
            .send()
            .await
            .map_err(|e| RelayError::Upstream(e.to_string()))?;

        let status = finalize.status();
        if !status.is_success() {
            let error_body = finalize.text().await.unwrap_or_default();
            return Err(RelayError::Upstream(format!(
                "upload finalize failed: HTTP {status}: {error_body}"
            )));
        }

        let uploaded: UploadFileResponse = finalize
            .json()
            .await
            .map_err(|e| RelayError::Upstream(format!("decode upload response: {e}")))?;

        debug!(
            name = %uploaded.file.name,
            display_name,
            "file registered with Gemini"
        );

        // The caller-visible name stays the original filename; the URI is
        // the durable handle into the external store.
        Ok(FileHandle {
            name: display_name.to_string(),
            uri: uploaded.file.uri,
            mime_type: uploaded.file.mime_type,
        })
    }
}

//! One-shot document analysis endpoint.
//!
//! POST /api/analyze -- summarize a previously uploaded document. No
//! session interaction.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use claimlens_types::chat::FileRef;

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for the analyze endpoint.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default, rename = "fileUri")]
    pub file_uri: String,
    #[serde(default, rename = "mimeType")]
    pub mime_type: Option<String>,
}

/// Response body: the model's summary of the document.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
}

/// POST /api/analyze -- summarize one stored document.
pub async fn analyze(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if body.file_uri.trim().is_empty() {
        return Err(AppError::Validation("File URI required".to_string()));
    }

    let file = FileRef {
        uri: body.file_uri,
        mime_type: body
            .mime_type
            .unwrap_or_else(|| "application/pdf".to_string()),
    };
    let analysis = state.analyzer.analyze(&file).await?;

    Ok(Json(AnalyzeResponse { analysis }))
}

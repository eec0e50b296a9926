//! Document upload endpoint.
//!
//! POST /api/upload -- multipart form with one or more `files` fields.
//! Each file is staged to a local temp path, relayed to the external
//! store, and the temp copy is deleted whichever way the relay goes.
//! Per-file relays are independent: the response carries every handle
//! that succeeded, and only an across-the-board failure is an error.

use axum::Json;
use axum::extract::{Multipart, State};
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::warn;

use claimlens_core::relay::StagedUpload;
use claimlens_types::chat::FileHandle;
use claimlens_types::error::RelayError;

use crate::http::error::AppError;
use crate::state::AppState;

/// Response body: one handle per successfully relayed file.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub files: Vec<FileHandle>,
}

/// POST /api/upload -- relay uploaded documents to the external store.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut staged = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("files") {
            continue;
        }

        let original_name = field
            .file_name()
            .map(str::to_string)
            .unwrap_or_else(|| "upload".to_string());
        let mime_type = field
            .content_type()
            .map(str::to_string)
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;

        let temp = NamedTempFile::new()
            .map_err(|e| AppError::Relay(RelayError::LocalIo(e.to_string())))?
            .into_temp_path();
        tokio::fs::write(&temp, &data)
            .await
            .map_err(|e| AppError::Relay(RelayError::LocalIo(e.to_string())))?;

        staged.push(StagedUpload {
            temp,
            mime_type,
            original_name,
        });
    }

    if staged.is_empty() {
        return Err(AppError::Validation("No files uploaded.".to_string()));
    }

    let total = staged.len();
    let results = state.relay.relay_all(staged).await;

    let mut files = Vec::new();
    let mut first_error = None;
    for result in results {
        match result {
            Ok(handle) => files.push(handle),
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }
    }

    if files.is_empty() {
        // Every file failed; surface the first cause.
        return Err(AppError::Relay(first_error.unwrap_or_else(|| {
            RelayError::Upstream("upload failed".to_string())
        })));
    }
    if files.len() < total {
        warn!(relayed = files.len(), total, "some files failed to relay");
    }

    Ok(Json(UploadResponse { files }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_wire_shape() {
        let json = serde_json::to_value(UploadResponse {
            files: vec![FileHandle {
                name: "policy.pdf".into(),
                uri: "files/abc".into(),
                mime_type: "application/pdf".into(),
            }],
        })
        .unwrap();
        assert_eq!(json["files"][0]["name"], "policy.pdf");
        assert_eq!(json["files"][0]["mimeType"], "application/pdf");
    }
}

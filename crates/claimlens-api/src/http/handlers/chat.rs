//! Chat endpoint.
//!
//! POST /api/chat -- one exchange against the caller's session. The
//! request carries the claim context and any file references for this
//! turn; field names are the browser client's camelCase.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::Instrument;
use uuid::Uuid;

use claimlens_types::chat::{ClaimContext, FileRef};

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub context: ClaimContext,
    #[serde(default)]
    pub files: Vec<FileRef>,
    #[serde(default, rename = "sessionId")]
    pub session_id: String,
}

/// Response body: the model's text, citations included.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// POST /api/chat -- run one chat exchange.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if body.session_id.trim().is_empty() {
        return Err(AppError::Validation("Session ID required".to_string()));
    }

    let request_id = Uuid::now_v7();
    let span = tracing::info_span!("chat", %request_id, session_id = %body.session_id);
    let response = state
        .orchestrator
        .respond(&body.session_id, &body.message, &body.context, &body.files)
        .instrument(span)
        .await?;

    Ok(Json(ChatResponse { response }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape_matches_browser_client() {
        let json = r#"{
            "message": "Is a rental car covered?",
            "context": {"claimType": "Auto", "location": "CA", "policyId": "P-1"},
            "files": [{"uri": "files/abc", "mimeType": "application/pdf"}],
            "sessionId": "session-17"
        }"#;
        let request: ChatRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.message, "Is a rental car covered?");
        assert_eq!(request.context.claim_type.as_deref(), Some("Auto"));
        assert_eq!(request.files.len(), 1);
        assert_eq!(request.session_id, "session-17");
    }

    #[test]
    fn test_missing_fields_default() {
        let request: ChatRequest = serde_json::from_str(r#"{"message": "hi"}"#).unwrap();
        assert!(request.session_id.is_empty());
        assert!(request.files.is_empty());
        assert_eq!(request.context, ClaimContext::default());
    }

    #[test]
    fn test_response_wire_shape() {
        let json = serde_json::to_value(ChatResponse {
            response: "Yes. [Source: policy.pdf, Page: 4]".into(),
        })
        .unwrap();
        assert_eq!(json["response"], "Yes. [Source: policy.pdf, Page: 4]");
    }
}

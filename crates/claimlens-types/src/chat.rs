//! Chat transcript types for ClaimLens.
//!
//! These types model the conversation state the backend keeps per session:
//! role-tagged turns made of text and file-reference parts, plus the
//! caller-supplied claim context that is re-sent with every message.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Role of a turn in a chat transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Model => write!(f, "model"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "model" => Ok(Role::Model),
            other => Err(format!("invalid turn role: '{other}'")),
        }
    }
}

/// Reference to a document previously registered with the external store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub uri: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

/// An atomic content unit within a turn: a text fragment or a file reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text(String),
    FileRef(FileRef),
}

impl Part {
    /// Returns the text content if this is a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text(text) => Some(text),
            Part::FileRef(_) => None,
        }
    }
}

/// One role-tagged message unit in a chat transcript.
///
/// The role is fixed at creation; parts are immutable once the turn is
/// appended to a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Turn {
    /// Build a user turn from pre-assembled parts.
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: Role::User,
            parts,
        }
    }

    /// Build a model turn holding a single text part.
    pub fn model_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            parts: vec![Part::Text(text.into())],
        }
    }
}

/// The ordered sequence of turns for one session.
///
/// Created on first reference to a session identifier; lives for the
/// process lifetime. Grows only by appending one user turn followed by
/// one model turn per successful exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub turns: Vec<Turn>,
    pub created_at: DateTime<Utc>,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            turns: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Record one completed exchange: the submitted user turn and the
    /// model turn built from the returned text.
    pub fn push_exchange(&mut self, user_turn: Turn, model_turn: Turn) {
        self.turns.push(user_turn);
        self.turns.push(model_turn);
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

/// Caller-supplied claim context, re-sent with every message.
///
/// Never persisted server-side; rendered into the context preamble of
/// each outgoing user turn. Field names follow the browser client's
/// camelCase JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimContext {
    #[serde(rename = "claimType")]
    pub claim_type: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "policyId")]
    pub policy_id: Option<String>,
}

/// Handle returned by the upload relay: the caller-visible original
/// filename plus the opaque URI into the external store. The backend
/// holds no bytes after relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    pub name: String,
    pub uri: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        for role in [Role::User, Role::Model] {
            let s = role.to_string();
            let parsed: Role = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_role_serde() {
        let json = serde_json::to_string(&Role::Model).unwrap();
        assert_eq!(json, "\"model\"");
        let parsed: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Role::Model);
    }

    #[test]
    fn test_turn_constructors() {
        let user = Turn::user(vec![Part::Text("hello".into())]);
        assert_eq!(user.role, Role::User);
        assert_eq!(user.parts.len(), 1);

        let model = Turn::model_text("hi there");
        assert_eq!(model.role, Role::Model);
        assert_eq!(model.parts[0].as_text(), Some("hi there"));
    }

    #[test]
    fn test_transcript_push_exchange() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());

        transcript.push_exchange(
            Turn::user(vec![Part::Text("q1".into())]),
            Turn::model_text("a1"),
        );
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.turns[0].role, Role::User);
        assert_eq!(transcript.turns[1].role, Role::Model);
    }

    #[test]
    fn test_file_handle_wire_shape() {
        let handle = FileHandle {
            name: "policy.pdf".into(),
            uri: "https://generativelanguage.googleapis.com/v1beta/files/abc".into(),
            mime_type: "application/pdf".into(),
        };
        let json = serde_json::to_value(&handle).unwrap();
        assert_eq!(json["name"], "policy.pdf");
        assert_eq!(json["mimeType"], "application/pdf");
        assert!(json.get("mime_type").is_none());
    }

    #[test]
    fn test_claim_context_camel_case() {
        let json = r#"{"claimType": "Auto", "location": "CA", "policyId": "P-123"}"#;
        let context: ClaimContext = serde_json::from_str(json).unwrap();
        assert_eq!(context.claim_type.as_deref(), Some("Auto"));
        assert_eq!(context.location.as_deref(), Some("CA"));
        assert_eq!(context.policy_id.as_deref(), Some("P-123"));
    }

    #[test]
    fn test_claim_context_default_empty() {
        let context: ClaimContext = serde_json::from_str("{}").unwrap();
        assert_eq!(context, ClaimContext::default());
    }

    #[test]
    fn test_file_ref_deserialization() {
        let json = r#"{"uri": "files/xyz", "mimeType": "application/pdf"}"#;
        let file_ref: FileRef = serde_json::from_str(json).unwrap();
        assert_eq!(file_ref.uri, "files/xyz");
        assert_eq!(file_ref.mime_type, "application/pdf");
    }
}

//! Context preamble rendering.
//!
//! Every outgoing user turn starts with a rendered preamble carrying the
//! claim context and the citation contract. The contract is
//! instructional only: the backend transmits it verbatim and never
//! validates the model's compliance.

use claimlens_types::chat::{ClaimContext, FileRef, Part, Turn};

/// Citation instruction sent verbatim with every message.
pub const CITATION_RULES: &str = "Citation Rules:\n\
- You MUST cite the source for every claim.\n\
- Format: [Source: <filename>, Page: <number>]\n\
- If the info is not in the docs, state \"Information not found in policy documents.\"";

/// Literal fallback sentence the model is instructed to produce when the
/// documents hold no supporting evidence.
pub const NOT_FOUND_FALLBACK: &str = "Information not found in policy documents.";

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("N/A")
}

/// Render the context preamble for one exchange.
pub fn render_preamble(context: &ClaimContext) -> String {
    format!(
        "Context:\n\
         Claim Type: {}\n\
         Location: {}\n\
         Policy ID: {}\n\
         Role: Claims Assistant\n\
         \n\
         Task: Answer the user query based strictly on the uploaded policy documents.\n\
         \n\
         {}",
        field(&context.claim_type),
        field(&context.location),
        field(&context.policy_id),
        CITATION_RULES,
    )
}

/// Build the single outgoing user turn for an exchange: preamble + query
/// as one text part, then one file-reference part per attached document.
pub fn build_user_turn(message: &str, context: &ClaimContext, file_refs: &[FileRef]) -> Turn {
    let mut parts = Vec::with_capacity(1 + file_refs.len());
    parts.push(Part::Text(format!(
        "{}\n\nUser Query: {}",
        render_preamble(context),
        message
    )));
    parts.extend(file_refs.iter().cloned().map(Part::FileRef));
    Turn::user(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auto_ca() -> ClaimContext {
        ClaimContext {
            claim_type: Some("Auto".into()),
            location: Some("CA".into()),
            policy_id: None,
        }
    }

    #[test]
    fn test_preamble_carries_citation_rules_verbatim() {
        let preamble = render_preamble(&auto_ca());
        assert!(preamble.contains(CITATION_RULES));
        assert!(preamble.contains("[Source: <filename>, Page: <number>]"));
        assert!(preamble.contains(NOT_FOUND_FALLBACK));
    }

    #[test]
    fn test_preamble_renders_context_fields() {
        let preamble = render_preamble(&auto_ca());
        assert!(preamble.contains("Claim Type: Auto"));
        assert!(preamble.contains("Location: CA"));
        assert!(preamble.contains("Policy ID: N/A"));
    }

    #[test]
    fn test_missing_context_renders_na() {
        let preamble = render_preamble(&ClaimContext::default());
        assert!(preamble.contains("Claim Type: N/A"));
        assert!(preamble.contains("Location: N/A"));
    }

    #[test]
    fn test_user_turn_layout() {
        let files = vec![
            FileRef {
                uri: "files/a".into(),
                mime_type: "application/pdf".into(),
            },
            FileRef {
                uri: "files/b".into(),
                mime_type: "application/pdf".into(),
            },
        ];
        let turn = build_user_turn("Is a rental car covered?", &auto_ca(), &files);

        assert_eq!(turn.parts.len(), 3);
        let text = turn.parts[0].as_text().unwrap();
        assert!(text.ends_with("User Query: Is a rental car covered?"));
        assert!(matches!(&turn.parts[1], Part::FileRef(f) if f.uri == "files/a"));
        assert!(matches!(&turn.parts[2], Part::FileRef(f) if f.uri == "files/b"));
    }
}

//! One-shot document analysis.
//!
//! A history-free generation call: a fixed summarization prompt plus the
//! file reference, with no session interaction.

use std::sync::Arc;

use tracing::debug;

use claimlens_types::chat::{FileRef, Part, Turn};
use claimlens_types::error::ChatError;
use claimlens_types::llm::GenerationConfig;

use crate::llm::client::GenerativeClient;
use crate::llm::connector::ModelConnector;

/// Fixed prompt for the analyze endpoint.
const ANALYSIS_PROMPT: &str = "Summarize this insurance policy document for a claims reviewer. \
List the coverage types, limits, deductibles, and notable exclusions. \
Cite pages using the form [Source: <filename>, Page: <number>].";

/// Runs one-shot summarization of a stored document.
pub struct DocumentAnalyzer<C> {
    connector: Arc<ModelConnector<C>>,
    temperature: f64,
}

impl<C: GenerativeClient> DocumentAnalyzer<C> {
    pub fn new(connector: Arc<ModelConnector<C>>, temperature: f64) -> Self {
        Self {
            connector,
            temperature,
        }
    }

    /// Summarize the document behind `file`.
    pub async fn analyze(&self, file: &FileRef) -> Result<String, ChatError> {
        let turn = Turn::user(vec![
            Part::Text(ANALYSIS_PROMPT.to_string()),
            Part::FileRef(file.clone()),
        ]);
        let text = self
            .connector
            .generate(&[turn], &GenerationConfig::chat(self.temperature))
            .await?;
        debug!(uri = %file.uri, "document analysis complete");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::VecDeque;
    use std::sync::Mutex as StdMutex;

    use claimlens_types::llm::GenerateError;

    struct ScriptedClient {
        outcomes: StdMutex<VecDeque<Result<String, GenerateError>>>,
        calls: StdMutex<Vec<Vec<Turn>>>,
    }

    impl GenerativeClient for ScriptedClient {
        async fn generate(
            &self,
            _model: &str,
            contents: &[Turn],
            _config: &GenerationConfig,
        ) -> Result<String, GenerateError> {
            self.calls.lock().unwrap().push(contents.to_vec());
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok("ok".to_string()))
        }
    }

    fn analyzer(
        outcomes: Vec<Result<String, GenerateError>>,
    ) -> DocumentAnalyzer<ScriptedClient> {
        let client = ScriptedClient {
            outcomes: StdMutex::new(outcomes.into()),
            calls: StdMutex::new(Vec::new()),
        };
        let connector = Arc::new(ModelConnector::new(client, vec!["gemini-1.5-flash".into()]));
        DocumentAnalyzer::new(connector, 0.2)
    }

    fn policy_file() -> FileRef {
        FileRef {
            uri: "files/policy-abc".into(),
            mime_type: "application/pdf".into(),
        }
    }

    #[tokio::test]
    async fn test_analyze_sends_prompt_and_file() {
        let analyzer = analyzer(vec![Ok("pong".into()), Ok("Coverage summary.".into())]);

        let text = analyzer.analyze(&policy_file()).await.unwrap();
        assert_eq!(text, "Coverage summary.");

        let calls = analyzer.connector.client.calls.lock().unwrap();
        let contents = calls.last().unwrap();
        // A single user turn: prompt text plus the file reference.
        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0].parts.len(), 2);
        assert!(
            contents[0].parts[0]
                .as_text()
                .unwrap()
                .contains("[Source: <filename>, Page: <number>]")
        );
        assert!(matches!(
            &contents[0].parts[1],
            Part::FileRef(f) if f.uri == "files/policy-abc"
        ));
    }

    #[tokio::test]
    async fn test_analyze_surfaces_upstream_failure() {
        let analyzer = analyzer(vec![
            Ok("pong".into()),
            Err(GenerateError::Upstream("blocked".into())),
        ]);

        let result = analyzer.analyze(&policy_file()).await;
        assert!(matches!(result, Err(ChatError::Upstream(_))));
    }
}

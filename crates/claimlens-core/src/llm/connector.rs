//! Model connector: probes a prioritized candidate list and caches the
//! first model that answers.
//!
//! Selection runs once at startup and lazily again whenever a dependent
//! operation finds no active model. Candidates that failed with
//! not-found are remembered and skipped on re-attempts; an
//! invalid-credential failure aborts the whole scan since no candidate
//! can succeed with a bad key.

use std::collections::HashSet;

use tokio::sync::Mutex;
use tracing::{error, info, warn};

use claimlens_types::chat::{Part, Turn};
use claimlens_types::error::{ChatError, ConnectorError};
use claimlens_types::llm::{GenerateError, GenerationConfig};

use super::client::GenerativeClient;

/// Trivial prompt used only to test model availability.
const PROBE_PROMPT: &str = "Test connection";

#[derive(Default)]
struct ConnectorState {
    /// Model identifier serving requests, once a probe has succeeded.
    active: Option<String>,
    /// Candidates that probed not-found; skipped on re-attempts.
    rejected: HashSet<String>,
}

/// Probes candidate models in priority order and routes generation
/// through the first one that responds.
pub struct ModelConnector<C> {
    pub(crate) client: C,
    candidates: Vec<String>,
    state: Mutex<ConnectorState>,
}

impl<C: GenerativeClient> ModelConnector<C> {
    pub fn new(client: C, candidates: Vec<String>) -> Self {
        Self {
            client,
            candidates,
            state: Mutex::new(ConnectorState::default()),
        }
    }

    fn probe_turn() -> Vec<Turn> {
        vec![Turn::user(vec![Part::Text(PROBE_PROMPT.to_string())])]
    }

    /// The currently selected model, if any probe has succeeded.
    pub async fn active_model(&self) -> Option<String> {
        self.state.lock().await.active.clone()
    }

    /// Return the active model, running candidate selection if none is
    /// cached. Holding the state lock across the scan serializes
    /// concurrent selection attempts.
    pub async fn ensure_model(&self) -> Result<String, ConnectorError> {
        let mut state = self.state.lock().await;
        if let Some(model) = &state.active {
            return Ok(model.clone());
        }

        for candidate in &self.candidates {
            if state.rejected.contains(candidate) {
                continue;
            }
            info!(model = %candidate, "probing candidate model");
            match self
                .client
                .generate(candidate, &Self::probe_turn(), &GenerationConfig::default())
                .await
            {
                Ok(_) => {
                    info!(model = %candidate, "connected to model");
                    state.active = Some(candidate.clone());
                    return Ok(candidate.clone());
                }
                Err(GenerateError::InvalidCredential) => {
                    error!(model = %candidate, "API credential rejected; aborting candidate scan");
                    return Err(ConnectorError::Unavailable);
                }
                Err(GenerateError::ModelNotFound) => {
                    warn!(model = %candidate, "model not found; skipping on future attempts");
                    state.rejected.insert(candidate.clone());
                }
                Err(e) => {
                    warn!(model = %candidate, error = %e, "probe failed");
                }
            }
        }

        warn!("no candidate model connected");
        Err(ConnectorError::Unavailable)
    }

    /// Generate with the active model, selecting one first if needed.
    pub async fn generate(
        &self,
        contents: &[Turn],
        config: &GenerationConfig,
    ) -> Result<String, ChatError> {
        let model = self.ensure_model().await?;
        self.client
            .generate(&model, contents, config)
            .await
            .map_err(|e| {
                warn!(model = %model, error = %e, "generation failed");
                ChatError::Upstream(e.to_string())
            })
    }

    /// Probe every candidate and report each outcome, stopping early on
    /// an invalid credential. Diagnostic path for the `probe` command;
    /// does not touch the cached selection.
    pub async fn probe_report(&self) -> Vec<(String, Result<(), GenerateError>)> {
        let mut report = Vec::new();
        for candidate in &self.candidates {
            let outcome = self
                .client
                .generate(candidate, &Self::probe_turn(), &GenerationConfig::default())
                .await
                .map(|_| ());
            let fatal = matches!(outcome, Err(GenerateError::InvalidCredential));
            report.push((candidate.clone(), outcome));
            if fatal {
                break;
            }
        }
        report
    }
}

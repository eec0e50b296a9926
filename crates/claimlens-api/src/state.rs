//! Application state wiring all services together.
//!
//! The core services are generic over client/store traits; AppState pins
//! them to the concrete infra implementations (GeminiClient backing both
//! generation and file storage, dashmap-backed sessions).

use std::sync::Arc;

use secrecy::SecretString;

use claimlens_core::chat::analyze::DocumentAnalyzer;
use claimlens_core::chat::orchestrator::ChatOrchestrator;
use claimlens_core::llm::connector::ModelConnector;
use claimlens_core::relay::UploadRelay;
use claimlens_infra::gemini::GeminiClient;
use claimlens_infra::session::InMemorySessionStore;
use claimlens_types::config::AppConfig;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteConnector = ModelConnector<GeminiClient>;
pub type ConcreteOrchestrator = ChatOrchestrator<GeminiClient, InMemorySessionStore>;
pub type ConcreteAnalyzer = DocumentAnalyzer<GeminiClient>;
pub type ConcreteRelay = UploadRelay<GeminiClient>;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub connector: Arc<ConcreteConnector>,
    pub orchestrator: Arc<ConcreteOrchestrator>,
    pub analyzer: Arc<ConcreteAnalyzer>,
    pub relay: Arc<ConcreteRelay>,
    pub config: AppConfig,
}

impl AppState {
    /// Wire the services from configuration and the environment.
    ///
    /// The API credential comes from `GEMINI_API_KEY` (falling back to
    /// `GOOGLE_API_KEY`). A missing credential is not fatal: the server
    /// starts, probes fail as invalid-credential, and chat requests
    /// surface 503 until a key is supplied.
    pub fn init(config: AppConfig) -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .unwrap_or_default();
        if api_key.is_empty() {
            tracing::error!("GEMINI_API_KEY / GOOGLE_API_KEY not set; upstream calls will fail");
        }

        let client = GeminiClient::new(SecretString::from(api_key));
        let connector = Arc::new(ModelConnector::new(
            client.clone(),
            config.model.candidates.clone(),
        ));
        let orchestrator = Arc::new(ChatOrchestrator::new(
            connector.clone(),
            InMemorySessionStore::new(),
            config.model.temperature,
        ));
        let analyzer = Arc::new(DocumentAnalyzer::new(
            connector.clone(),
            config.model.temperature,
        ));
        let relay = Arc::new(UploadRelay::new(client));

        Self {
            connector,
            orchestrator,
            analyzer,
            relay,
            config,
        }
    }
}

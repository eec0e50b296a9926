use thiserror::Error;

/// Errors from model connector selection.
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("no generative model available")]
    Unavailable,
}

/// Errors from a chat or analysis exchange.
#[derive(Debug, Error)]
pub enum ChatError {
    /// No candidate model connected, even after a lazy re-attempt.
    #[error("no generative model available")]
    ModelUnavailable,

    /// The selected model rejected or failed the generation call.
    #[error("upstream generation failed: {0}")]
    Upstream(String),
}

impl From<ConnectorError> for ChatError {
    fn from(e: ConnectorError) -> Self {
        match e {
            ConnectorError::Unavailable => ChatError::ModelUnavailable,
        }
    }
}

/// Errors from relaying an uploaded file to the external store.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("local file error: {0}")]
    LocalIo(String),

    #[error("upstream storage failed: {0}")]
    Upstream(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_display() {
        let err = ChatError::Upstream("503 backend overloaded".into());
        assert_eq!(
            err.to_string(),
            "upstream generation failed: 503 backend overloaded"
        );
    }

    #[test]
    fn test_connector_error_converts_to_chat_error() {
        let err: ChatError = ConnectorError::Unavailable.into();
        assert!(matches!(err, ChatError::ModelUnavailable));
    }

    #[test]
    fn test_relay_error_display() {
        let err = RelayError::LocalIo("permission denied".into());
        assert_eq!(err.to_string(), "local file error: permission denied");
    }
}

//! Upload relay: forwards staged files to the external store.
//!
//! Each staged upload is relayed concurrently and independently -- a
//! failure in one neither blocks nor rolls back the others. The local
//! temporary copy rides in a [`tempfile::TempPath`], so it is deleted on
//! every exit path, success or failure, as soon as the relay of that
//! file completes.

use std::path::Path;

use futures_util::future::join_all;
use tempfile::TempPath;
use tracing::{info, warn};

use claimlens_types::chat::FileHandle;
use claimlens_types::error::RelayError;

/// Store for relayed documents (the external file-storage API).
///
/// The implementation lives in claimlens-infra (`GeminiClient`). The
/// returned handle must carry `display_name` as its caller-visible name.
pub trait FileStore: Send + Sync {
    fn store_file(
        &self,
        path: &Path,
        mime_type: &str,
        display_name: &str,
    ) -> impl std::future::Future<Output = Result<FileHandle, RelayError>> + Send;
}

/// One uploaded file staged to a local temporary path, awaiting relay.
pub struct StagedUpload {
    /// Temporary copy; deleted when this value drops.
    pub temp: TempPath,
    pub mime_type: String,
    pub original_name: String,
}

/// Relays staged uploads to the external store.
pub struct UploadRelay<F> {
    store: F,
}

impl<F: FileStore> UploadRelay<F> {
    pub fn new(store: F) -> Self {
        Self { store }
    }

    /// Relay every staged upload concurrently.
    ///
    /// Returns one result per input, in input order. Each temp file is
    /// removed when its relay finishes, regardless of outcome.
    pub async fn relay_all(
        &self,
        staged: Vec<StagedUpload>,
    ) -> Vec<Result<FileHandle, RelayError>> {
        join_all(staged.into_iter().map(|upload| async move {
            let result = self
                .store
                .store_file(&upload.temp, &upload.mime_type, &upload.original_name)
                .await;
            match &result {
                Ok(handle) => info!(name = %handle.name, uri = %handle.uri, "file relayed"),
                Err(e) => warn!(name = %upload.original_name, error = %e, "file relay failed"),
            }
            // `upload` drops here, deleting the temporary copy.
            result
        }))
        .await
    }
}

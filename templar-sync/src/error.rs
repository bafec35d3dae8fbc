//! Error types for templar-sync.

use thiserror::Error;

use templar_client::ClientError;
use templar_core::error::ManifestError;
use templar_core::types::TemplateName;

/// All errors that can arise from reconciliation operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An error from the remote directory client.
    #[error("remote directory error: {0}")]
    Client(#[from] ClientError),

    /// An error from the manifest layer.
    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// JSON serialization error (diff rendering).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A requested template name is not declared in the manifest.
    #[error("template '{name}' is not declared in the manifest")]
    UnknownTemplate { name: TemplateName },
}

impl SyncError {
    /// Whether this failure happened before any write could be attempted.
    pub fn is_listing_failure(&self) -> bool {
        matches!(
            self,
            SyncError::Client(ClientError::RemoteUnavailable { .. })
                | SyncError::Client(ClientError::MalformedResponse { .. })
        )
    }
}

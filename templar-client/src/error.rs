//! Error types for templar-client.

use thiserror::Error;

/// All errors that can arise from remote directory operations.
///
/// None of these are retried here — whether to retry a whole run is an
/// orchestration concern.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The listing request failed: transport error, timeout, or non-200 status.
    #[error("template listing from {url} failed: {reason}")]
    RemoteUnavailable { url: String, reason: String },

    /// A template write failed: transport error, timeout, or non-2xx status.
    #[error("template write to {url} failed: {reason}")]
    RemoteWriteFailed { url: String, reason: String },

    /// The listing response body was not valid JSON, or not a JSON object at
    /// the top level.
    #[error("malformed listing response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },
}

/// Convenience constructors, mirrored across the request paths.
impl ClientError {
    pub(crate) fn unavailable(url: impl Into<String>, reason: impl Into<String>) -> Self {
        ClientError::RemoteUnavailable {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn write_failed(url: impl Into<String>, reason: impl Into<String>) -> Self {
        ClientError::RemoteWriteFailed {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(url: impl Into<String>, reason: impl Into<String>) -> Self {
        ClientError::MalformedResponse {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

//! Error types for the Graph client.

use std::path::Path;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for authentication, storage, and resource requests.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No persisted credential bundle exists at the given path.
    ///
    /// Recoverable: fall into the interactive authorization flow.
    #[error("No credential bundle found at {0}")]
    StateNotFound(String),

    /// The credential file exists but cannot be decoded.
    ///
    /// Recoverable: fall into the interactive authorization flow.
    #[error("Malformed credential bundle: {0}")]
    MalformedState(String),

    /// Network or connection failure during an HTTP call.
    ///
    /// Never retried internally; propagated to the caller.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The token endpoint rejected the grant (expired/revoked refresh
    /// token, revoked consent, bad client secret).
    ///
    /// Fatal for the current session: delete the persisted credential
    /// file and re-run the interactive flow.
    #[error("Provider rejected the token grant ({error}): {description}")]
    ProviderRejection { error: String, description: String },

    /// Non-2xx response from a Graph resource endpoint.
    #[error("Graph API error {status} for {method} {url}")]
    Api {
        status: u16,
        method: String,
        url: String,
        /// Parsed error body, or the raw text wrapped in a JSON string
        /// when the body is not valid JSON.
        body: serde_json::Value,
    },

    /// A 2xx resource response carried a body that is not valid JSON.
    ///
    /// Unlike [`Error::MalformedState`] this says nothing about the
    /// persisted credentials; re-running the interactive flow will not
    /// help.
    #[error("Malformed response body from {url}: {message}")]
    MalformedResponse { url: String, message: String },

    /// No credentials available and no interactive flow completed.
    #[error("Not authenticated - call login() first")]
    NotAuthenticated,

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem failure while reading or writing the credential file.
    #[error("Storage I/O error at {path}: {message}")]
    StorageIo { path: String, message: String },

    /// Credential bundle could not be serialized or deserialized.
    #[error("Storage serialization error: {0}")]
    StorageSerialization(String),
}

impl Error {
    /// Helper for storage I/O errors.
    pub fn storage_io(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::StorageIo {
            path: path.as_ref().display().to_string(),
            message: message.into(),
        }
    }

    /// Whether this error leaves the interactive flow as a recovery path.
    #[must_use]
    pub fn is_recoverable_state(&self) -> bool {
        matches!(self, Self::StateNotFound(_) | Self::MalformedState(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_errors_are_recoverable() {
        assert!(Error::StateNotFound("/tmp/creds.json".into()).is_recoverable_state());
        assert!(Error::MalformedState("missing access_token".into()).is_recoverable_state());
        assert!(!Error::NotAuthenticated.is_recoverable_state());
        assert!(!Error::MalformedResponse {
            url: "https://graph.microsoft.com/v1.0/me".into(),
            message: "expected value at line 1".into(),
        }
        .is_recoverable_state());
    }

    #[test]
    fn test_api_error_display() {
        let err = Error::Api {
            status: 404,
            method: "GET".into(),
            url: "https://graph.microsoft.com/v1.0/me".into(),
            body: serde_json::json!({"error": {"code": "itemNotFound"}}),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("GET"));
    }
}

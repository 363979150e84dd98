//! On-disk persistence for the credential bundle.
//!
//! [`TokenStore`] is a stateless codec between [`TokenBundle`] and a
//! single JSON file. It never deletes the file; removing a stale file
//! after a fatal refresh failure is the caller's documented recovery
//! path.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::TokenBundle;

/// JSON file codec for the persisted [`TokenBundle`].
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the default path:
    /// `~/.config/msgraph-client/credentials.json`
    pub fn default_path() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Cannot determine config directory".into()))?;
        Ok(Self::new(
            config_dir.join("msgraph-client").join("credentials.json"),
        ))
    }

    /// The file path backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted bundle.
    ///
    /// Fails with [`Error::StateNotFound`] when the file does not exist
    /// and [`Error::MalformedState`] when it cannot be decoded or the
    /// required token fields are missing. Pure read, no side effects.
    pub fn load(&self) -> Result<TokenBundle> {
        if !self.path.exists() {
            return Err(Error::StateNotFound(self.path.display().to_string()));
        }
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| Error::storage_io(&self.path, e.to_string()))?;
        let bundle: TokenBundle = serde_json::from_str(&content)
            .map_err(|e| Error::MalformedState(e.to_string()))?;
        if bundle.access_token.is_empty() || bundle.refresh_token.is_empty() {
            return Err(Error::MalformedState(
                "credential file is missing access_token or refresh_token".into(),
            ));
        }
        debug!(path = %self.path.display(), "Credential bundle loaded");
        Ok(bundle)
    }

    /// Overwrite the persisted bundle wholesale.
    ///
    /// Truncate-write; no partial-merge and no partial-write recovery,
    /// since this is local trusted state. Sets 0600 permissions on Unix.
    pub fn save(&self, bundle: &TokenBundle) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| Error::storage_io(parent, e.to_string()))?;
            }
        }

        let content = serde_json::to_string_pretty(bundle)
            .map_err(|e| Error::StorageSerialization(e.to_string()))?;
        std::fs::write(&self.path, &content)
            .map_err(|e| Error::storage_io(&self.path, e.to_string()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&self.path, perms)
                .map_err(|e| Error::storage_io(&self.path, format!("chmod: {}", e)))?;
        }

        debug!(path = %self.path.display(), "Credential bundle saved");
        Ok(())
    }
}

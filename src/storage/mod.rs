//! Local key/value persistence.
//!
//! Values are plain strings keyed by name, stored together as one JSON
//! object on disk. The drawer reads the signed-in user record from here.

use crate::error::{Error, Result};
use crate::state::SignedUser;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Key under which the signed-in user record is stored.
pub const SIGNED_USER_KEY: &str = "SignedUserData";

/// String key/value store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value. `Ok(None)` when the key is absent.
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// [`KeyValueStore`] backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                Error::storage(format!("{} is not a string map: {e}", self.path.display()))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all().await?.remove(key))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_all().await?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(&entries)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

/// Read the signed-in user.
///
/// Never fails: a missing key means signed out, and read or parse failures
/// are logged and treated the same way.
#[tracing::instrument(skip(store))]
pub async fn load_signed_user(store: &dyn KeyValueStore) -> Option<SignedUser> {
    let raw = match store.get_item(SIGNED_USER_KEY).await {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!("No signed-in user stored");
            return None;
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read user data from the local store");
            return None;
        }
    };

    match serde_json::from_str::<SignedUser>(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to parse stored user data");
            None
        }
    }
}

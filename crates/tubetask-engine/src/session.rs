use crate::selection::SelectionSet;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;
use tubetask_adapter::Video;

/// Credential document persisted by the file store
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CredentialDocument {
    api_key: String,
}

/// Storage interface for the session API credential.
///
/// At most one value lives at a time; `set` replaces any previous value.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn get(&self) -> Result<Option<String>>;
    async fn set(&self, value: &str) -> Result<()>;
}

/// JSON-file-backed credential store with atomic writes
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location under the user data directory
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow!("Could not determine data directory"))?
            .join("tubetask");
        Ok(data_dir.join("credentials.json"))
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn get(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("read credential file {}", self.path.display()))?;
        let document: CredentialDocument = serde_json::from_str(&content)
            .with_context(|| format!("parse credential file {}", self.path.display()))?;
        Ok(Some(document.api_key))
    }

    async fn set(&self, value: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(&CredentialDocument {
            api_key: value.to_string(),
        })?;

        // Atomic write: write to temp file then rename
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, content).await?;
        fs::rename(&temp_path, &self.path).await?;
        debug!(path = %self.path.display(), "credential stored");
        Ok(())
    }
}

/// In-memory credential store for tests and demos
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    value: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get(&self) -> Result<Option<String>> {
        Ok(self.value.lock().await.clone())
    }

    async fn set(&self, value: &str) -> Result<()> {
        *self.value.lock().await = Some(value.to_string());
        Ok(())
    }
}

/// Per-session context: credential access, selection, current search results
pub struct Session {
    store: Arc<dyn CredentialStore>,
    selection: SelectionSet,
    videos: Vec<Video>,
}

impl Session {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self {
            store,
            selection: SelectionSet::new(),
            videos: Vec::new(),
        }
    }

    /// Session backed by an in-memory store (nothing outlives the process)
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryCredentialStore::new()))
    }

    /// Stored API credential, if any
    pub async fn credential(&self) -> Result<Option<String>> {
        self.store.get().await
    }

    /// Replace the stored API credential
    pub async fn set_credential(&self, value: &str) -> Result<()> {
        self.store.set(value).await
    }

    /// Check whether a credential is available; search stays disabled without one
    pub async fn is_configured(&self) -> Result<bool> {
        Ok(self.credential().await?.is_some())
    }

    /// Current search result list
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// Replace the result list wholesale; the latest search wins
    pub fn replace_videos(&mut self, videos: Vec<Video>) {
        debug!(count = videos.len(), "search results replaced");
        self.videos = videos;
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection
    }
}

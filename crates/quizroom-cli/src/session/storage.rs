//! Session storage for persisting login state.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use quizroom::{AccessToken, BaseUrl, RefreshToken, Session, TokenStore};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored session data.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredSession {
    base: String,
    access_token: Option<String>,
    refresh_token: Option<String>,
}

/// A [`TokenStore`] backed by a JSON file.
///
/// Every token write goes straight to disk so a later invocation picks up
/// tokens refreshed during this one. The file is written with 0600
/// permissions on Unix.
pub struct FileTokenStore {
    path: PathBuf,
    state: RwLock<StoredSession>,
}

impl FileTokenStore {
    /// Create a fresh store for `base` at `path`, with no tokens yet.
    pub fn create(path: impl Into<PathBuf>, base: &BaseUrl) -> Self {
        Self {
            path: path.into(),
            state: RwLock::new(StoredSession {
                base: base.to_string(),
                access_token: None,
                refresh_token: None,
            }),
        }
    }

    /// Load a store from `path`. Returns `None` if no session file exists.
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(path).context("Failed to read session file")?;
        let stored: StoredSession = serde_json::from_str(&json).context("Invalid session file")?;

        Ok(Some(Self {
            path: path.to_path_buf(),
            state: RwLock::new(stored),
        }))
    }

    /// Returns the backend base URL recorded in this store.
    pub fn base_url(&self) -> Result<BaseUrl> {
        let base = self.state.read().expect("session state lock poisoned").base.clone();
        BaseUrl::new(&base).context("Invalid base URL in session file")
    }

    fn persist(&self, state: &StoredSession) {
        if let Err(e) = self.write_file(state) {
            tracing::warn!(error = %e, path = %self.path.display(), "Failed to persist session file");
        }
    }

    fn write_file(&self, state: &StoredSession) -> Result<()> {
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, &json).context("Failed to write session file")?;

        // Set restrictive permissions (Unix only)
        #[cfg(unix)]
        {
            let mut perms = fs::metadata(&self.path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.path, perms)?;
        }

        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn access_token(&self) -> Option<AccessToken> {
        self.state
            .read()
            .expect("session state lock poisoned")
            .access_token
            .clone()
            .map(AccessToken::new)
    }

    fn set_access_token(&self, token: AccessToken) {
        let mut state = self.state.write().expect("session state lock poisoned");
        state.access_token = Some(token.as_str().to_string());
        let snapshot = state.clone();
        drop(state);
        self.persist(&snapshot);
    }

    fn refresh_token(&self) -> Option<RefreshToken> {
        self.state
            .read()
            .expect("session state lock poisoned")
            .refresh_token
            .clone()
            .map(RefreshToken::new)
    }

    fn set_tokens(&self, access: AccessToken, refresh: Option<RefreshToken>) {
        let mut state = self.state.write().expect("session state lock poisoned");
        state.access_token = Some(access.as_str().to_string());
        state.refresh_token = refresh.map(|t| t.as_str().to_string());
        let snapshot = state.clone();
        drop(state);
        self.persist(&snapshot);
    }

    fn clear(&self) {
        let mut state = self.state.write().expect("session state lock poisoned");
        state.access_token = None;
        state.refresh_token = None;
        let snapshot = state.clone();
        drop(state);
        self.persist(&snapshot);
    }
}

/// Get the session file path.
pub fn session_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "quizroom").context("Could not determine config directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("session.json"))
}

/// Restore a session from the stored session file, if one exists.
pub fn load_session() -> Result<Option<Session>> {
    let path = session_path()?;

    let Some(store) = FileTokenStore::load(&path)? else {
        return Ok(None);
    };

    let base = store.base_url()?;
    Ok(Some(Session::from_store(base, Arc::new(store))))
}

/// Clear the stored session.
pub fn clear_session() -> Result<()> {
    let path = session_path()?;

    if path.exists() {
        fs::remove_file(&path).context("Failed to remove session file")?;
    }

    Ok(())
}

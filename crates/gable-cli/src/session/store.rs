//! File-backed token store.

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

use gable_core::{AccessToken, RefreshToken, Session, TokenStore};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored session data, camelCase to match the panel's own key names.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSession {
    access_token: Option<String>,
    refresh_token: Option<String>,
    saved_at: DateTime<Utc>,
}

impl StoredSession {
    fn from_session(session: &Session) -> Self {
        Self {
            access_token: session
                .access_token
                .as_ref()
                .map(|t| t.as_str().to_string()),
            refresh_token: session
                .refresh_token
                .as_ref()
                .map(|t| t.as_str().to_string()),
            saved_at: Utc::now(),
        }
    }

    fn into_session(self) -> Session {
        Session {
            access_token: self.access_token.map(AccessToken::new),
            refresh_token: self.refresh_token.map(RefreshToken::new),
        }
    }
}

/// Token store persisting the session pair to a JSON file.
///
/// Mirrors browser storage semantics: reads of a missing or corrupt file
/// yield an empty session, and write or clear failures are logged and
/// swallowed rather than surfaced. A failed write costs the user a
/// re-login, never a crashed command.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store at the platform data directory, e.g.
    /// `~/.local/share/gable/session.json` on Linux.
    pub fn new() -> Result<Self> {
        let dirs =
            ProjectDirs::from("", "", "gable").context("Could not determine data directory")?;
        Ok(Self {
            path: dirs.data_dir().join("session.json"),
        })
    }

    /// Store at an explicit path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn persist(&self, session: &Session) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let stored = StoredSession::from_session(session);
        let json = serde_json::to_string_pretty(&stored)?;
        fs::write(&self.path, &json)?;

        // Tokens are credentials; keep the file owner-only (Unix only)
        #[cfg(unix)]
        {
            let mut perms = fs::metadata(&self.path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.path, perms)?;
        }

        Ok(())
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn read(&self) -> Session {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Session::empty(),
            Err(err) => {
                warn!(error = %err, path = %self.path.display(), "failed to read session file");
                return Session::empty();
            }
        };

        match serde_json::from_str::<StoredSession>(&json) {
            Ok(stored) => stored.into_session(),
            Err(err) => {
                warn!(error = %err, "session file corrupt, treating as logged out");
                Session::empty()
            }
        }
    }

    async fn write(&self, session: &Session) {
        if let Err(err) = self.persist(session) {
            warn!(error = %err, path = %self.path.display(), "failed to persist session");
        }
    }

    async fn clear(&self) {
        if let Err(err) = fs::remove_file(&self.path)
            && err.kind() != io::ErrorKind::NotFound
        {
            warn!(error = %err, path = %self.path.display(), "failed to remove session file");
        }
    }
}

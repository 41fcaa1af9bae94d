//! Durable session storage
//!
//! The authenticated principal (bearer token + profile) lives in a single
//! `session.json` under the config directory. It is written on login, read
//! synchronously before every protected command, and deleted on logout. No
//! expiry is inspected here; a stale token surfaces as a failed API call.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::api::models::LoginResponse;
use crate::config;

const SESSION_FILE: &str = "session.json";

/// The authenticated principal as persisted between invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
    pub username: String,
    pub email: String,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Self {
            token: response.token,
            user_id: response.id,
            username: response.username,
            email: response.email,
        }
    }
}

/// Reads and writes the session file.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn open() -> Result<Self> {
        Ok(Self {
            path: config::config_dir()?.join(SESSION_FILE),
        })
    }

    /// Store bound to an explicit path, for tests.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Current session, or None when logged out. An unreadable or corrupt
    /// file counts as logged out rather than an error.
    pub fn load(&self) -> Option<Session> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                log::warn!("Ignoring corrupt session file {:?}: {}", self.path, err);
                None
            }
        }
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        let raw = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write session file: {:?}", self.path))?;
        log::debug!("Saved session for {}", session.username);
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove session file: {:?}", self.path))?;
        }
        Ok(())
    }

    /// Gate for protected commands: presence of a session is the only check.
    pub fn require(&self) -> Result<Session> {
        self.load().ok_or_else(|| {
            anyhow::anyhow!("Not logged in. Run 'surveyx-cli auth login' first.")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> Session {
        Session {
            token: "jwt-token".to_string(),
            user_id: 7,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
        }
    }

    #[test]
    fn round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.json"));

        assert!(store.load().is_none());
        store.save(&sample_session()).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.username, "alice");
        assert_eq!(loaded.token, "jwt-token");

        store.clear().unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn require_fails_when_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.json"));

        let err = store.require().unwrap_err();
        assert!(err.to_string().contains("Not logged in"));
    }

    #[test]
    fn corrupt_file_counts_as_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = SessionStore::at(path);
        assert!(store.load().is_none());
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.json"));
        store.clear().unwrap();
        store.clear().unwrap();
    }
}

/**
 * Session State
 *
 * The client-local state that outlives a single run: the auth token and
 * the selected owner id, persisted as JSON under the platform data
 * directory. Note-compose state is deliberately absent - it is ephemeral
 * and lives with whatever UI drives this client.
 */
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Durable session state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Auth token from the last register/login, if any
    pub token: Option<String>,
    /// The user currently selected as note owner, if any
    pub selected_user_id: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// File-backed session storage.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store under the platform data directory.
    ///
    /// Returns `None` when the platform exposes no data directory.
    pub fn new() -> Option<Self> {
        dirs::data_dir().map(|dir| Self {
            path: dir.join("collab-notes").join("session.json"),
        })
    }

    /// Store at an explicit path.
    pub fn at_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the persisted session.
    ///
    /// A missing or unreadable file yields the default (logged-out)
    /// session rather than an error.
    pub fn load(&self) -> Session {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("discarding corrupt session file: {}", e);
                Session::default()
            }),
            Err(_) => Session::default(),
        }
    }

    /// Persist the session.
    pub fn save(&self, session: &Session) -> Result<(), std::io::Error> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(session)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(&self.path, contents)
    }

    /// Remove the persisted session (logout).
    pub fn clear(&self) -> Result<(), std::io::Error> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at_path(dir.path().join("session.json"));

        let session = Session {
            token: Some("tok".to_string()),
            selected_user_id: Some("u1".to_string()),
        };
        store.save(&session).unwrap();

        assert_eq!(store.load(), session);
    }

    #[test]
    fn test_missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at_path(dir.path().join("absent.json"));
        assert_eq!(store.load(), Session::default());
    }

    #[test]
    fn test_corrupt_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = SessionStore::at_path(&path);
        assert_eq!(store.load(), Session::default());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at_path(dir.path().join("session.json"));

        store.save(&Session::default()).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.load(), Session::default());
    }
}

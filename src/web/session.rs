// src/web/session.rs
//! Per-browser profile: an encrypted session id cookie naming a profile file on the server

use rocket::http::{Cookie, CookieJar};
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

use crate::core::{FileProfileStore, ProfileStore};
use crate::error::StoreError;

pub const SESSION_COOKIE: &str = "career_session";

/// Only well-formed ids are accepted, so a cookie value never reaches the filesystem as-is
pub fn parse_session_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

pub fn session_path(sessions_dir: &Path, id: Uuid) -> PathBuf {
    sessions_dir.join(format!("{}.json", id.hyphenated()))
}

#[derive(Debug, Clone)]
pub struct SessionProfileStore {
    id: Uuid,
    file: FileProfileStore,
}

impl SessionProfileStore {
    /// Reuse the session named by the request cookie, or start a new one and set the cookie
    pub fn open(jar: &CookieJar<'_>, sessions_dir: &Path) -> Self {
        let existing = jar
            .get_private(SESSION_COOKIE)
            .and_then(|cookie| parse_session_id(cookie.value()));

        let id = match existing {
            Some(id) => id,
            None => {
                let id = Uuid::new_v4();
                let mut cookie = Cookie::new(SESSION_COOKIE, id.to_string());
                cookie.set_path("/");
                cookie.make_permanent();
                jar.add_private(cookie);
                debug!("Started session {}", id);
                id
            }
        };

        Self::with_id(sessions_dir, id)
    }

    pub fn with_id(sessions_dir: &Path, id: Uuid) -> Self {
        Self {
            id,
            file: FileProfileStore::new(session_path(sessions_dir, id)),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl ProfileStore for SessionProfileStore {
    fn read_raw(&self) -> Result<Option<String>, StoreError> {
        self.file.read_raw()
    }

    fn write_raw(&self, contents: &str) -> Result<(), StoreError> {
        self.file.write_raw(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_uuid_cookies_name_a_session() {
        let id = Uuid::new_v4();
        assert_eq!(parse_session_id(&id.to_string()), Some(id));
        assert_eq!(parse_session_id("../../etc/passwd"), None);
        assert_eq!(parse_session_id(""), None);
    }

    #[test]
    fn test_session_file_stays_inside_sessions_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionProfileStore::with_id(dir.path(), Uuid::new_v4());

        assert_eq!(store.path().parent(), Some(dir.path()));
        assert!(store
            .path()
            .to_string_lossy()
            .ends_with(&format!("{}.json", store.id())));
    }

    #[test]
    fn test_large_skill_list_survives_a_new_request() {
        let dir = tempfile::tempdir().unwrap();
        let id = Uuid::new_v4();
        let skills: Vec<String> = (0..500).map(|i| format!("Skill number {:03}", i)).collect();

        SessionProfileStore::with_id(dir.path(), id)
            .save_skills(&skills)
            .unwrap();

        let reopened = SessionProfileStore::with_id(dir.path(), id);
        assert_eq!(reopened.skills().unwrap(), skills);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let dir = tempfile::tempdir().unwrap();
        SessionProfileStore::with_id(dir.path(), Uuid::new_v4())
            .save_skills(&["Rust".to_string()])
            .unwrap();

        let other = SessionProfileStore::with_id(dir.path(), Uuid::new_v4());
        assert!(other.skills().unwrap().is_empty());
    }
}

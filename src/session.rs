// SPDX-License-Identifier: MPL-2.0
//! Signed-in session persistence using CBOR format.
//!
//! A single entry on disk decides whether the app starts on the feed shell
//! or the authentication placeholder. The entry is read once at startup and
//! the UI only ever sees a snapshot; sign-out removes the file explicitly.
//!
//! Loading fails open: a missing, unreadable, or malformed entry is treated
//! as "signed out" and never aborts startup.
//!
//! # Path Resolution
//!
//! The session file location can be customized for testing or portable
//! deployments:
//! 1. Explicit directory override passed to `load_from()`/`save_to()`
//! 2. `ICED_REELS_DATA_DIR` environment variable
//! 3. Platform-specific data directory

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Session file name within the app data directory.
const SESSION_FILE: &str = "session.cbor";

/// Application name used for directory naming.
const APP_NAME: &str = "IcedReels";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "ICED_REELS_DATA_DIR";

/// The signed-in user identity.
///
/// Round-tripped through CBOR as an opaque object; nothing in the app
/// validates it beyond successful deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub username: String,
    #[serde(default)]
    pub display_name: String,
}

impl UserSession {
    #[must_use]
    pub fn new(username: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            display_name: display_name.into(),
        }
    }
}

/// Loads the session from the default location.
///
/// Returns `(session, warning)`. The session is `None` when signed out;
/// the warning carries a human-readable message when an entry existed but
/// could not be used.
pub fn load() -> (Option<UserSession>, Option<String>) {
    load_from(None)
}

/// Loads the session from a custom base directory.
pub fn load_from(base_dir: Option<PathBuf>) -> (Option<UserSession>, Option<String>) {
    let Some(path) = session_file_path(base_dir) else {
        return (None, None);
    };

    if !path.exists() {
        return (None, None);
    }

    match fs::File::open(&path) {
        Ok(file) => {
            let reader = BufReader::new(file);
            match ciborium::from_reader(reader) {
                Ok(session) => (Some(session), None),
                // Malformed entry: fail open to the signed-out state.
                Err(_) => (
                    None,
                    Some("Stored session was unreadable; signed out".to_string()),
                ),
            }
        }
        Err(_) => (
            None,
            Some("Stored session could not be opened; signed out".to_string()),
        ),
    }
}

/// Saves the session to the default location.
///
/// Returns a warning message if the save failed; persistence is best-effort
/// and never blocks sign-in.
pub fn save(session: &UserSession) -> Option<String> {
    save_to(session, None)
}

/// Saves the session to a custom base directory.
pub fn save_to(session: &UserSession, base_dir: Option<PathBuf>) -> Option<String> {
    let Some(path) = session_file_path(base_dir) else {
        return Some("No data directory available for session".to_string());
    };

    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return Some("Could not create session directory".to_string());
        }
    }

    match fs::File::create(&path) {
        Ok(file) => {
            let writer = BufWriter::new(file);
            if ciborium::into_writer(session, writer).is_err() {
                return Some("Could not write session entry".to_string());
            }
            None
        }
        Err(_) => Some("Could not create session file".to_string()),
    }
}

/// Removes the persisted session from the default location.
pub fn clear() {
    clear_from(None);
}

/// Removes the persisted session from a custom base directory.
pub fn clear_from(base_dir: Option<PathBuf>) {
    if let Some(path) = session_file_path(base_dir) {
        // A missing file already means signed out.
        let _ = fs::remove_file(path);
    }
}

/// Returns the full path to the session file with optional override.
fn session_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    app_data_dir(base_dir).map(|mut path| {
        path.push(SESSION_FILE);
        path
    })
}

/// Resolves the app data directory: explicit override, then the
/// `ICED_REELS_DATA_DIR` environment variable, then the platform default.
fn app_data_dir(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }

    if let Ok(env_dir) = std::env::var(ENV_DATA_DIR) {
        if !env_dir.is_empty() {
            return Some(PathBuf::from(env_dir));
        }
    }

    dirs::data_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_from_missing_file_is_signed_out() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (session, warning) = load_from(Some(temp_dir.path().to_path_buf()));
        assert!(session.is_none());
        assert!(warning.is_none());
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = Some(temp_dir.path().to_path_buf());
        let session = UserSession::new("johndoe", "John Doe");

        assert!(save_to(&session, base.clone()).is_none());
        let (loaded, warning) = load_from(base);

        assert_eq!(loaded, Some(session));
        assert!(warning.is_none());
    }

    #[test]
    fn malformed_entry_fails_open_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(SESSION_FILE);
        fs::write(&path, b"definitely not cbor").expect("failed to write garbage");

        let (session, warning) = load_from(Some(temp_dir.path().to_path_buf()));
        assert!(session.is_none());
        assert!(warning.is_some());
    }

    #[test]
    fn clear_removes_entry() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = Some(temp_dir.path().to_path_buf());
        let session = UserSession::new("johndoe", "John Doe");

        assert!(save_to(&session, base.clone()).is_none());
        clear_from(base.clone());

        let (loaded, _) = load_from(base);
        assert!(loaded.is_none());
    }

    #[test]
    fn clear_on_missing_entry_is_a_no_op() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        clear_from(Some(temp_dir.path().to_path_buf()));
    }
}

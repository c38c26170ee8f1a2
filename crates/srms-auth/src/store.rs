//! Session Store implementations.
//!
//! The session is a single bearer token. It is absent at first start, set by
//! a successful login, read by every API call and removed by logout or by
//! the next login attempt. Nothing else writes it.
//!
//! [`FileSessionStore`] persists the token as JSON keyed by backend origin,
//! so sessions for different servers never leak into each other:
//!
//! ```text
//! {
//!   "http://127.0.0.1:8000": { "token": "eyJhbGciOi..." }
//! }
//! ```
//!
//! Tokens are never logged or included in `Debug` output.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use srms_core::SessionError;
use tracing::{debug, warn};

/// Shared handle to the session, injected into every component that needs it.
pub type SharedSession = Arc<dyn SessionStore>;

/// Holds the session token.
///
/// Implementations are synchronous and have no network side effects.
pub trait SessionStore: fmt::Debug + Send + Sync {
    /// The current token, if any.
    fn token(&self) -> Option<String>;

    /// Replaces the current token and persists it.
    fn set_token(&self, token: &str) -> Result<(), SessionError>;

    /// Removes the token. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), SessionError>;

    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

/// Session that lives only as long as the process.
#[derive(Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    pub fn shared(self) -> SharedSession {
        Arc::new(self)
    }
}

impl fmt::Debug for MemorySessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemorySessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_token(&self, token: &str) -> Result<(), SessionError> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(flatten)]
    origins: BTreeMap<String, StoredSession>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredSession {
    token: String,
}

/// Session persisted to a JSON file, scoped to one backend origin.
pub struct FileSessionStore {
    path: PathBuf,
    origin: String,
    token: RwLock<Option<String>>,
}

impl FileSessionStore {
    /// Opens the store and loads any token previously saved for `origin`.
    ///
    /// A missing file is an empty session. So is a file that is not valid
    /// session JSON; the next `set_token` or `clear` overwrites it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>, origin: impl Into<String>) -> Result<Self, SessionError> {
        let path = path.into();
        let origin = origin.into();
        let token = load_or_reset(&path)?
            .origins
            .remove(&origin)
            .map(|stored| stored.token);

        debug!(
            path = %path.display(),
            origin = %origin,
            authenticated = token.is_some(),
            "Opened session store"
        );

        Ok(Self {
            path,
            origin,
            token: RwLock::new(token),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn shared(self) -> SharedSession {
        Arc::new(self)
    }

    fn update(&self, apply: impl FnOnce(&mut SessionFile)) -> Result<(), SessionError> {
        let mut file = load_or_reset(&self.path)?;
        apply(&mut file);
        save(&self.path, &file)
    }
}

impl fmt::Debug for FileSessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSessionStore")
            .field("path", &self.path)
            .field("origin", &self.origin)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_token(&self, token: &str) -> Result<(), SessionError> {
        self.update(|file| {
            file.origins.insert(
                self.origin.clone(),
                StoredSession {
                    token: token.to_string(),
                },
            );
        })?;
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.update(|file| {
            file.origins.remove(&self.origin);
        })?;
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

fn load(path: &Path) -> Result<SessionFile, SessionError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(SessionFile::default()),
        Err(err) => return Err(SessionError::io(path, err)),
    };

    if contents.trim().is_empty() {
        return Ok(SessionFile::default());
    }

    serde_json::from_str(&contents).map_err(|err| SessionError::format(path, err))
}

/// Like [`load`], but an unparseable file reads as an empty session.
fn load_or_reset(path: &Path) -> Result<SessionFile, SessionError> {
    match load(path) {
        Err(SessionError::Format { path, source }) => {
            warn!(
                path = %path.display(),
                error = %source,
                "Session file is corrupt, starting with an empty session"
            );
            Ok(SessionFile::default())
        }
        other => other,
    }
}

fn save(path: &Path, file: &SessionFile) -> Result<(), SessionError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| SessionError::io(parent, err))?;
    }

    let contents = serde_json::to_string_pretty(file).map_err(|err| SessionError::format(path, err))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        let mut handle = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)
            .map_err(|err| SessionError::io(path, err))?;
        handle
            .write_all(contents.as_bytes())
            .map_err(|err| SessionError::io(path, err))?;
    }

    #[cfg(not(unix))]
    {
        fs::write(path, contents).map_err(|err| SessionError::io(path, err))?;
    }

    Ok(())
}

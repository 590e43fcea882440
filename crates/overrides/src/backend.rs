use crate::error::{OverrideError, Result};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Storage seam for the override store.
///
/// The store itself only ever sees one serialized payload; where it
/// lives is the backend's business. Callers inject a backend instead
/// of reaching for a global, and tests use [`MemoryBackend`].
pub trait OverrideBackend {
    /// Read the persisted payload, `None` when nothing was saved yet
    fn load(&self) -> Result<Option<String>>;

    /// Replace the persisted payload
    fn persist(&self, payload: &str) -> Result<()>;
}

/// JSON-file backend, the durable default
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl OverrideBackend for FileBackend {
    fn load(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn persist(&self, payload: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, payload)?;
        Ok(())
    }
}

/// In-memory backend for tests and ephemeral runs
#[derive(Default)]
pub struct MemoryBackend {
    payload: Mutex<Option<String>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl OverrideBackend for MemoryBackend {
    fn load(&self) -> Result<Option<String>> {
        let guard = self
            .payload
            .lock()
            .map_err(|_| OverrideError::storage("memory backend poisoned"))?;
        Ok(guard.clone())
    }

    fn persist(&self, payload: &str) -> Result<()> {
        let mut guard = self
            .payload
            .lock()
            .map_err(|_| OverrideError::storage("memory backend poisoned"))?;
        *guard = Some(payload.to_string());
        Ok(())
    }
}

/// Backend that fails every persist, for degradation tests
#[cfg(test)]
pub struct FailingBackend;

#[cfg(test)]
impl OverrideBackend for FailingBackend {
    fn load(&self) -> Result<Option<String>> {
        Err(OverrideError::storage("unavailable"))
    }

    fn persist(&self, _payload: &str) -> Result<()> {
        Err(OverrideError::storage("quota exceeded"))
    }
}

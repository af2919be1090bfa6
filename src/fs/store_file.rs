//! The on-disk mementos file.
//!
//! The file holds a single JSON array and is the only source of truth. Every
//! load reads it whole and every persist rewrites it whole.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::fs::locking::{locked_read, locked_write};
use crate::models::Memento;
use crate::store::Mementos;

#[derive(Debug, Clone)]
pub struct StoreFile {
    path: PathBuf,
}

impl StoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file empty, along with any missing parent directories,
    /// if it does not exist yet. Returns `true` when the file was created.
    pub fn ensure_exists(&self) -> StoreResult<bool> {
        match fs::metadata(&self.path) {
            Ok(_) => return Ok(false),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(StoreError::io(&self.path, e)),
        }

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            create_private_dir(dir)?;
        }
        locked_write(&self.path, b"")?;
        debug!(path = %self.path.display(), "created data file");
        Ok(true)
    }

    /// Read and parse the file. Empty content is an empty store.
    pub fn load(&self) -> StoreResult<Mementos> {
        debug!(path = %self.path.display(), "opening");
        let content = locked_read(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Mementos::default());
        }
        let records: Vec<Memento> =
            serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        Ok(Mementos::from_records(records))
    }

    /// Overwrite the file with `mementos`, returning the number of bytes written.
    pub fn persist(&self, mementos: &Mementos) -> StoreResult<usize> {
        let json = serde_json::to_vec(mementos).map_err(|source| StoreError::Serialize {
            path: self.path.clone(),
            source,
        })?;
        let written = locked_write(&self.path, &json)?;
        debug!(path = %self.path.display(), bytes = written, "bytes written");
        Ok(written)
    }
}

/// Create `dir` and its parents, readable only by the owner.
fn create_private_dir(dir: &Path) -> StoreResult<()> {
    if dir.exists() {
        return Ok(());
    }
    debug!(dir = %dir.display(), "creating directory");

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder.create(dir).map_err(|e| StoreError::io(dir, e))
}

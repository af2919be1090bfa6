//! Scoped, advisory-locked reads and writes of the data file.
//!
//! Each call opens the file, locks it, does one read or one full rewrite and
//! closes it again, so no handle outlives a single operation. The locks only
//! stop a reader from seeing a half-written file; two processes doing
//! read-modify-write cycles concurrently can still overwrite each other.

use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{StoreError, StoreResult};

/// Read the whole file under a shared lock.
pub fn locked_read(path: &Path) -> StoreResult<String> {
    let file = File::open(path).map_err(|e| StoreError::io(path, e))?;
    file.lock_shared().map_err(|e| StoreError::io(path, e))?;
    let mut content = String::new();
    BufReader::new(&file)
        .read_to_string(&mut content)
        .map_err(|e| StoreError::io(path, e))?;
    Ok(content)
}

/// Replace the file's contents under an exclusive lock, returning the number
/// of bytes written.
///
/// The file is truncated only once the lock is held: open, lock, truncate,
/// write, flush.
pub fn locked_write(path: &Path, content: &[u8]) -> StoreResult<usize> {
    #[allow(clippy::suspicious_open_options)]
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .open(path)
        .map_err(|e| StoreError::io(path, e))?;
    file.lock_exclusive().map_err(|e| StoreError::io(path, e))?;
    file.set_len(0).map_err(|e| StoreError::io(path, e))?;
    let mut writer = BufWriter::new(&file);
    writer
        .write_all(content)
        .map_err(|e| StoreError::io(path, e))?;
    writer.flush().map_err(|e| StoreError::io(path, e))?;
    Ok(content.len())
}

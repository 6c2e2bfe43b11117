//! Locked, atomically replaced JSON documents.
//!
//! Shared by the progress file and the saved-workout library. Readers take a
//! shared lock; writers go through a temp file in the same directory and an
//! atomic rename.

use crate::{Error, Result};
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Load a JSON document with shared locking
///
/// Returns `T::default()` if the file doesn't exist. If the file can't be
/// read or parsed, logs a warning and returns the default as well.
pub(crate) fn load_or_default<T>(path: &Path, what: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        tracing::info!("No {} file found at {:?}, using defaults", what, path);
        return Ok(T::default());
    }

    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            tracing::warn!("Unable to open {} file {:?}: {}. Using defaults.", what, path, e);
            return Ok(T::default());
        }
    };

    if let Err(e) = file.lock_shared() {
        tracing::warn!("Unable to lock {} file {:?}: {}. Using defaults.", what, path, e);
        return Ok(T::default());
    }

    let mut contents = String::new();
    let mut reader = std::io::BufReader::new(&file);
    if let Err(e) = reader.read_to_string(&mut contents) {
        let _ = file.unlock();
        tracing::warn!("Failed to read {} file {:?}: {}. Using defaults.", what, path, e);
        return Ok(T::default());
    }

    file.unlock()?;

    match serde_json::from_str::<T>(&contents) {
        Ok(value) => {
            tracing::debug!("Loaded {} from {:?}", what, path);
            Ok(value)
        }
        Err(e) => {
            tracing::warn!("Failed to parse {} file {:?}: {}. Using defaults.", what, path, e);
            Ok(T::default())
        }
    }
}

/// Save a JSON document with exclusive locking
///
/// Atomically writes by:
/// 1. Writing to a temp file
/// 2. Syncing to disk
/// 3. Renaming over the original
pub(crate) fn save_atomic<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let parent = path.parent().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::Other, "store path missing parent")
    })?;
    std::fs::create_dir_all(parent)?;

    // Unique temp file in the same directory so the rename stays atomic
    let temp = NamedTempFile::new_in(parent)?;
    temp.as_file().lock_exclusive()?;

    {
        let mut writer = std::io::BufWriter::new(temp.as_file());
        let contents = serde_json::to_string(value)?;
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
    }

    temp.as_file().sync_all()?;
    temp.as_file().unlock()?;

    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::debug!("Saved {:?}", path);
    Ok(())
}

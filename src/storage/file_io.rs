//! JSON file helpers
//!
//! Reads are lenient (a missing file is an empty store); writes go to a
//! sibling temp file that is synced and renamed over the target.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{SpendableError, SpendableResult};

/// Read JSON from `path`, or `T::default()` if the file doesn't exist
pub fn read_json<T, P>(path: P) -> SpendableResult<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path).map_err(|e| {
        SpendableError::Storage(format!("Failed to open {}: {}", path.display(), e))
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        SpendableError::Storage(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Write JSON to `path` atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> SpendableResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            SpendableError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| SpendableError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| SpendableError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .and_then(|_| writer.get_ref().sync_all())
        .map_err(|e| SpendableError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        SpendableError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    tracing::debug!(path = %path.display(), "wrote data file");
    Ok(())
}

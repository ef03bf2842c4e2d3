//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::BudgetError;

/// Read JSON from a file, returning a default value if the file doesn't exist
///
/// A file that exists but does not decode as `T` yields `BudgetError::Parse`;
/// any other read failure yields `BudgetError::Storage`.
pub fn read_json<T, P>(path: P) -> Result<T, BudgetError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => {
            return Err(BudgetError::Storage(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            BudgetError::Storage(format!("Failed to read {}: {}", path.display(), e))
        } else {
            BudgetError::Parse(format!("Failed to parse {}: {}", path.display(), e))
        }
    })
}

/// Replace `path` with the pretty-printed JSON of `data`
///
/// The bytes go to `<name>.json.tmp` next to the target, are synced, and
/// then renamed over it. Readers see either the old file or the new one.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), BudgetError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let bytes = serde_json::to_vec_pretty(data).map_err(|e| storage_error("Cannot encode", path, e))?;

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| storage_error("Cannot create directory for", path, e))?;
    }

    let staging = path.with_extension("json.tmp");
    if let Err(e) = write_synced(&staging, &bytes) {
        let _ = fs::remove_file(&staging);
        return Err(storage_error("Cannot stage", path, e));
    }

    if let Err(e) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(storage_error("Cannot replace", path, e));
    }

    Ok(())
}

fn storage_error(action: &str, path: &Path, e: impl fmt::Display) -> BudgetError {
    BudgetError::Storage(format!("{action} {}: {e}", path.display()))
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// Move an unreadable file aside to `<name>.corrupt`
///
/// Returns the new location. An older quarantined copy is replaced.
pub fn quarantine<P: AsRef<Path>>(path: P) -> Result<PathBuf, BudgetError> {
    let path = path.as_ref();
    let mut target = path.as_os_str().to_owned();
    target.push(".corrupt");
    let target = PathBuf::from(target);

    fs::rename(path, &target).map_err(|e| {
        BudgetError::Storage(format!(
            "Failed to move {} aside: {}",
            path.display(),
            e
        ))
    })?;

    Ok(target)
}

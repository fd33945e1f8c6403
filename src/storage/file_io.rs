//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::TallyError;

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, TallyError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| TallyError::Load(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| TallyError::Load(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Sibling temp file used while writing `path`
pub fn temp_path_for(path: &Path) -> PathBuf {
    with_suffix(path, ".tmp")
}

/// Where an unreadable document at `path` is moved before it is replaced
pub fn corrupt_path_for(path: &Path) -> PathBuf {
    with_suffix(path, ".corrupt")
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Move the file at `path` to its `.corrupt` sibling
///
/// Returns the new location, or `None` when there is nothing at `path`.
/// An earlier `.corrupt` file is replaced.
pub fn set_aside(path: &Path) -> Result<Option<PathBuf>, TallyError> {
    if !path.exists() {
        return Ok(None);
    }

    let target = corrupt_path_for(path);
    fs::rename(path, &target).map_err(|e| {
        TallyError::Persistence(format!(
            "Failed to move {} aside: {}",
            path.display(),
            e
        ))
    })?;
    Ok(Some(target))
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The target is either completely replaced or left untouched. Output is
/// pretty-printed UTF-8 with non-ASCII text written as-is.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), TallyError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            TallyError::Persistence(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target, so the rename stays on one filesystem
    let temp_path = temp_path_for(path);

    let result = write_temp(&temp_path, data).and_then(|()| {
        fs::rename(&temp_path, path)
            .map_err(|e| TallyError::Persistence(format!("Failed to rename temp file: {}", e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn write_temp<T: Serialize + ?Sized>(temp_path: &Path, data: &T) -> Result<(), TallyError> {
    let file = File::create(temp_path)
        .map_err(|e| TallyError::Persistence(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| TallyError::Persistence(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| TallyError::Persistence(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| TallyError::Persistence(format!("Failed to sync data: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_set_aside_moves_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        fs::write(&path, "not json").unwrap();

        let moved = set_aside(&path).unwrap().unwrap();
        assert_eq!(moved, temp_dir.path().join("ledger.json.corrupt"));
        assert!(!path.exists());
        assert_eq!(fs::read_to_string(moved).unwrap(), "not json");

        assert_eq!(set_aside(&path).unwrap(), None);
    }

    #[test]
    fn test_read_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let data: TestData = read_json(&path).unwrap();
        assert_eq!(data, TestData::default());
    }

    #[test]
    fn test_read_invalid_is_load_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_json::<TestData, _>(&path).unwrap_err();
        assert!(matches!(err, TallyError::Load(_)));
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        let data = TestData {
            name: "Salário".to_string(),
            value: 42,
        };

        write_json_atomic(&path, &data).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("Salário"));

        let loaded: TestData = read_json(&path).unwrap();
        assert_eq!(data, loaded);
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json_atomic(&path, &TestData::default()).unwrap();

        assert!(path.exists());
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        write_json_atomic(&path, &TestData::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_failed_write_keeps_previous_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");
        let original = TestData {
            name: "kept".to_string(),
            value: 1,
        };
        write_json_atomic(&path, &original).unwrap();

        // A directory squatting on the temp path makes the write fail
        fs::create_dir(temp_path_for(&path)).unwrap();
        let err = write_json_atomic(&path, &TestData::default()).unwrap_err();
        assert!(matches!(err, TallyError::Persistence(_)));

        let loaded: TestData = read_json(&path).unwrap();
        assert_eq!(loaded, original);
    }
}

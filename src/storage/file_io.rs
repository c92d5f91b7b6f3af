//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::SpendVistaError;

/// Result of a lenient read
#[derive(Debug)]
pub struct Loaded<T> {
    pub value: T,
    /// True when the file existed but could not be parsed
    pub malformed: bool,
}

/// Read JSON from a file, falling back to the default on malformed content
///
/// Only I/O failures other than a missing file are returned as errors.
pub fn read_json_or_default<T, P>(path: P) -> Result<Loaded<T>, SpendVistaError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Loaded {
            value: T::default(),
            malformed: false,
        });
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        SpendVistaError::Storage(format!("Failed to read {}: {}", path.display(), e))
    })?;

    Ok(match serde_json::from_str(&contents) {
        Ok(value) => Loaded {
            value,
            malformed: false,
        },
        Err(_) => Loaded {
            value: T::default(),
            malformed: true,
        },
    })
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), SpendVistaError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            SpendVistaError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| SpendVistaError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| SpendVistaError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| SpendVistaError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| SpendVistaError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        SpendVistaError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Sample {
        name: String,
        value: i32,
    }

    fn sample() -> Sample {
        Sample {
            name: "test".to_string(),
            value: 42,
        }
    }

    #[test]
    fn test_read_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let loaded: Loaded<Sample> = read_json_or_default(&path).unwrap();
        assert_eq!(loaded.value, Sample::default());
        assert!(!loaded.malformed);
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json_atomic(&path, &sample()).unwrap();

        let loaded: Loaded<Sample> = read_json_or_default(&path).unwrap();
        assert_eq!(loaded.value, sample());
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json_atomic(&path, &sample()).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("test.json.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        write_json_atomic(&path, &sample()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_lenient_read_falls_back_on_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let loaded: Loaded<Sample> = read_json_or_default(&path).unwrap();
        assert!(loaded.malformed);
        assert_eq!(loaded.value, Sample::default());

        write_json_atomic(&path, &sample()).unwrap();
        let loaded: Loaded<Sample> = read_json_or_default(&path).unwrap();
        assert!(!loaded.malformed);
        assert_eq!(loaded.value, sample());
    }

    #[test]
    fn test_lenient_read_missing_is_not_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let loaded: Loaded<Sample> =
            read_json_or_default(temp_dir.path().join("absent.json")).unwrap();
        assert!(!loaded.malformed);
    }
}

//! # Local Filesystem Backend

use std::fs;
use std::path::{Path, PathBuf};

use super::backend::FileStore;
use super::errors::{StoreError, StoreResult};

/// Local filesystem storage backend
///
/// Writes land in a sibling temp file first and are renamed over the
/// target, so a crash mid-write never leaves a half-written collection.
#[derive(Debug, Default)]
pub struct LocalFileStore;

impl LocalFileStore {
    /// Create a new local backend
    pub fn new() -> Self {
        Self
    }
}

impl FileStore for LocalFileStore {
    fn read(&self, path: &Path) -> StoreResult<Vec<u8>> {
        fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StoreError::NotFound(path.to_path_buf())
            } else {
                StoreError::ReadFailed(e.to_string())
            }
        })
    }

    fn write(&self, path: &Path, data: &[u8]) -> StoreResult<()> {
        // Create parent directories
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::WriteFailed(e.to_string()))?;
            }
        }

        let tmp = tmp_path(path);
        fs::write(&tmp, data).map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        fs::rename(&tmp, path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            StoreError::WriteFailed(e.to_string())
        })
    }

    fn check_liveness(&self, path: &Path) -> StoreResult<()> {
        fs::File::open(path).map(|_| ()).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StoreError::NotFound(path.to_path_buf())
            } else {
                StoreError::ReadFailed(e.to_string())
            }
        })
    }
}

/// Sibling path used for the write-then-rename step
fn tmp_path(path: &Path) -> PathBuf {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => path.with_extension(format!("{}.tmp", ext)),
        None => path.with_extension("tmp"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_read() {
        let temp = TempDir::new().unwrap();
        let backend = LocalFileStore::new();
        let path = temp.path().join("data.json");

        backend.write(&path, b"[]").unwrap();
        let data = backend.read(&path).unwrap();
        assert_eq!(data, b"[]");
    }

    #[test]
    fn test_nested_path() {
        let temp = TempDir::new().unwrap();
        let backend = LocalFileStore::new();
        let path = temp.path().join("a/b/data.json");

        backend.write(&path, b"nested").unwrap();
        let data = backend.read(&path).unwrap();
        assert_eq!(data, b"nested");
    }

    #[test]
    fn test_not_found() {
        let temp = TempDir::new().unwrap();
        let backend = LocalFileStore::new();

        let result = backend.read(&temp.path().join("nonexistent.json"));
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_write_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let backend = LocalFileStore::new();
        let path = temp.path().join("data.json");

        backend.write(&path, b"[]").unwrap();
        backend.write(&path, b"[1]").unwrap();

        let entries: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["data.json"]);
    }

    #[test]
    fn test_liveness() {
        let temp = TempDir::new().unwrap();
        let backend = LocalFileStore::new();
        let path = temp.path().join("data.json");

        assert!(matches!(
            backend.check_liveness(&path),
            Err(StoreError::NotFound(_))
        ));

        backend.write(&path, b"[]").unwrap();
        assert!(backend.check_liveness(&path).is_ok());
    }

    #[test]
    fn test_tmp_path_keeps_sibling_directory() {
        let path = Path::new("/var/lib/catalogd/data.json");
        assert_eq!(
            tmp_path(path),
            PathBuf::from("/var/lib/catalogd/data.json.tmp")
        );
        assert_eq!(tmp_path(Path::new("data")), PathBuf::from("data.tmp"));
    }
}

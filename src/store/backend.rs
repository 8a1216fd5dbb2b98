//! # File Store Trait

use std::path::Path;

use super::errors::StoreResult;

/// Backend trait for flat-file storage
///
/// The production backend is `LocalFileStore`; tests substitute failing
/// implementations to exercise the error paths.
pub trait FileStore: Send + Sync + std::fmt::Debug {
    /// Read the full contents of path
    fn read(&self, path: &Path) -> StoreResult<Vec<u8>>;

    /// Replace the contents of path
    fn write(&self, path: &Path, data: &[u8]) -> StoreResult<()>;

    /// Check that path is currently readable
    fn check_liveness(&self, path: &Path) -> StoreResult<()>;
}

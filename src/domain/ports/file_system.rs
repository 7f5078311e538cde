//! FileSystem port - abstraction over file I/O operations
//!
//! This trait allows the application layer to reconcile artifacts
//! without depending on concrete implementations (local disk, in-memory mock).

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::value_objects::ContentHash;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FsError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Attach a path to an I/O error, keeping the common kinds distinguishable
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound(path) | FsError::PermissionDenied(path) => path,
            FsError::Io { path, .. } => path,
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic copies
/// - in-memory mocks in tests
pub trait FileSystem {
    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if the path is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Read a (small) text file
    fn read_to_string(&self, path: &Path) -> FsResult<String>;

    /// Compute content hash (SHA-256) of a file
    fn hash(&self, path: &Path) -> FsResult<ContentHash>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Copy `from` over `to` as a whole file; never leaves a partial `to`
    fn copy_file(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// Write content to a file atomically
    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        (**self).read_to_string(path)
    }

    fn hash(&self, path: &Path) -> FsResult<ContentHash> {
        (**self).hash(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        (**self).create_dir_all(path)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> FsResult<()> {
        (**self).copy_file(from, to)
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        (**self).write(path, content)
    }
}

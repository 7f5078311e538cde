//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use crate::domain::value_objects::ContentHash;

/// Local file system implementation
///
/// Copies and writes go through a temporary file in the target directory
/// that is persisted over the target, so readers never see a partial file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }

    fn temp_beside(path: &Path) -> FsResult<NamedTempFile> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        NamedTempFile::new_in(dir).map_err(|e| FsError::from_io(dir, e))
    }

    fn persist(temp: NamedTempFile, path: &Path) -> FsResult<()> {
        temp.persist(path)
            .map_err(|e| FsError::from_io(path, e.error))?;
        Ok(())
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))
    }

    fn hash(&self, path: &Path) -> FsResult<ContentHash> {
        let file = File::open(path).map_err(|e| FsError::from_io(path, e))?;
        ContentHash::from_reader(BufReader::new(file)).map_err(|e| FsError::from_io(path, e))
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::from_io(path, e))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> FsResult<()> {
        let mut source = File::open(from).map_err(|e| FsError::from_io(from, e))?;
        let mut temp = Self::temp_beside(to)?;
        std::io::copy(&mut source, temp.as_file_mut()).map_err(|e| FsError::from_io(to, e))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| FsError::from_io(to, e))?;

        // Keep executables executable
        let permissions = source
            .metadata()
            .map_err(|e| FsError::from_io(from, e))?
            .permissions();
        std::fs::set_permissions(temp.path(), permissions).map_err(|e| FsError::from_io(to, e))?;

        Self::persist(temp, to)
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let mut temp = Self::temp_beside(path)?;
        temp.write_all(content)
            .map_err(|e| FsError::from_io(path, e))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| FsError::from_io(path, e))?;
        Self::persist(temp, path)
    }
}

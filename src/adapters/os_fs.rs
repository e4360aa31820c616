use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::core::ports::{FileStat, FileSystem, FileSystemError};

/// Filesystem adapter backed by the host operating system.
///
/// Direct delegation to `std::fs` with no caching or retries. The only
/// added logic is mapping `ErrorKind::NotFound` to
/// [`FileSystemError::NotFound`] so callers can classify absence.
#[derive(Debug)]
pub struct OsFs;

impl OsFs {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OsFs {
    fn default() -> Self {
        Self::new()
    }
}

fn map_io_error(err: std::io::Error, path: &Path) -> FileSystemError {
    if err.kind() == std::io::ErrorKind::NotFound {
        FileSystemError::NotFound(path.to_path_buf())
    } else {
        FileSystemError::Io(err)
    }
}

impl FileSystem for OsFs {
    fn open(&self, path: &Path) -> Result<Box<dyn Read>, FileSystemError> {
        let file = fs::File::open(path).map_err(|e| map_io_error(e, path))?;
        Ok(Box::new(file))
    }

    fn stat(&self, path: &Path) -> Result<FileStat, FileSystemError> {
        let metadata = fs::metadata(path).map_err(|e| map_io_error(e, path))?;
        Ok(FileStat {
            is_dir: metadata.is_dir(),
            len: metadata.len(),
        })
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>, FileSystemError> {
        fs::read(path).map_err(|e| map_io_error(e, path))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, FileSystemError> {
        let entries = fs::read_dir(path).map_err(|e| map_io_error(e, path))?;
        let mut paths = Vec::new();

        for entry in entries {
            let entry = entry.map_err(FileSystemError::Io)?;
            paths.push(entry.path());
        }

        Ok(paths)
    }

    fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>, FileSystemError> {
        let matches = glob::glob(pattern)
            .map_err(|e| FileSystemError::PathError(e.to_string()))?
            .filter_map(Result::ok)
            .collect();
        Ok(matches)
    }
}
